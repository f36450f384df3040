//! HTTP client wrapper - executes request definitions and captures outcomes

use std::time::{Duration, Instant};

use futures_util::StreamExt;
use indexmap::IndexMap;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Url};

use crate::constants::REQUEST_TIMEOUT;
use crate::error::RequestError;
use crate::models::{RequestDefinition, ResponseMeta, ResponseOutcome};

/// Build a transport request from a definition
fn build_request(
    client: &reqwest::Client,
    request: &RequestDefinition,
    timeout: Duration,
) -> Result<reqwest::Request, RequestError> {
    let method = Method::from_bytes(request.method.as_bytes())
        .map_err(|_| RequestError::Build(format!("unsupported method {:?}", request.method)))?;

    let url = Url::parse(&request.url)
        .map_err(|e| RequestError::Build(format!("invalid URL {:?}: {}", request.url, e)))?;

    // Insert rather than append so each header replaces any client default
    let mut headers = HeaderMap::new();
    for (key, value) in &request.headers {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|_| RequestError::Build(format!("invalid header name {:?}", key)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| RequestError::Build(format!("invalid value for header {}", key)))?;
        headers.insert(name, value);
    }

    let mut req_builder = client.request(method, url).headers(headers).timeout(timeout);

    if !request.body.is_empty() {
        req_builder = req_builder.body(request.body.clone());
    }

    req_builder
        .build()
        .map_err(|e| RequestError::Build(e.to_string()))
}

/// Execute a request definition and return its outcome.
///
/// `timeout` bounds the whole attempt, body included, and is the limit a
/// `RequestError::Timeout` reports. Never fails: every error becomes a
/// `ResponseOutcome::Failure` carrying the time spent up to that point.
pub async fn execute_request(
    client: &reqwest::Client,
    request: &RequestDefinition,
    timeout: Duration,
) -> ResponseOutcome {
    let start = Instant::now();

    let outbound = match build_request(client, request, timeout) {
        Ok(outbound) => outbound,
        Err(error) => {
            return ResponseOutcome::Failure {
                error,
                meta: None,
                duration: start.elapsed(),
            }
        }
    };

    let resp = match client.execute(outbound).await {
        Ok(resp) => resp,
        Err(e) => {
            let error = if e.is_timeout() {
                RequestError::Timeout(timeout)
            } else if e.is_connect() {
                RequestError::Transport(format!("connection failed: {}", error_chain(&e)))
            } else {
                RequestError::Transport(error_chain(&e))
            };
            return ResponseOutcome::Failure {
                error,
                meta: None,
                duration: start.elapsed(),
            };
        }
    };

    let meta = response_meta(&resp);
    let mut stream = resp.bytes_stream();
    let mut body = Vec::new();

    while let Some(chunk) = stream.next().await {
        match chunk {
            Ok(bytes) => body.extend_from_slice(&bytes),
            Err(e) => {
                let error = if e.is_timeout() {
                    RequestError::Timeout(timeout)
                } else {
                    RequestError::BodyRead(error_chain(&e))
                };
                return ResponseOutcome::Failure {
                    error,
                    meta: Some(meta),
                    duration: start.elapsed(),
                };
            }
        }
    }

    ResponseOutcome::Success {
        meta,
        body: String::from_utf8_lossy(&body).into_owned(),
        duration: start.elapsed(),
    }
}

fn response_meta(resp: &reqwest::Response) -> ResponseMeta {
    let status = resp.status();
    let status_text = match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    };

    let mut headers: IndexMap<String, Vec<String>> = IndexMap::new();
    for (name, value) in resp.headers() {
        headers
            .entry(canonical_header_name(name.as_str()))
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }

    ResponseMeta {
        status: status.as_u16(),
        status_text,
        headers,
    }
}

/// `content-type` -> `Content-Type`
pub fn canonical_header_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// reqwest's top-level message is terse ("error sending request"); append the causes
fn error_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to default HTTP client");
            reqwest::Client::new()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_header_name() {
        assert_eq!(canonical_header_name("content-type"), "Content-Type");
        assert_eq!(canonical_header_name("x-request-id"), "X-Request-Id");
        assert_eq!(canonical_header_name("ETAG"), "Etag");
    }

    #[test]
    fn test_build_rejects_bad_url() {
        let client = create_client();
        let req = RequestDefinition::new("bad", "GET", "not a url");
        assert!(matches!(build_request(&client, &req, REQUEST_TIMEOUT), Err(RequestError::Build(_))));
    }

    #[test]
    fn test_build_rejects_bad_method() {
        let client = create_client();
        let req = RequestDefinition::new("bad", "GE T", "http://localhost/");
        assert!(matches!(build_request(&client, &req, REQUEST_TIMEOUT), Err(RequestError::Build(_))));
    }

    #[test]
    fn test_build_sets_headers_and_body() {
        let client = create_client();
        let req = RequestDefinition::new("post", "POST", "http://localhost/items")
            .with_header("X-Token", "abc")
            .with_body("{}");
        let built = build_request(&client, &req, REQUEST_TIMEOUT).unwrap();
        assert_eq!(built.method(), Method::POST);
        assert_eq!(built.headers()["x-token"], "abc");
        assert_eq!(built.body().and_then(|b| b.as_bytes()), Some(&b"{}"[..]));
    }

    #[test]
    fn test_build_without_body_when_empty() {
        let client = create_client();
        let req = RequestDefinition::new("get", "GET", "http://localhost/");
        let built = build_request(&client, &req, REQUEST_TIMEOUT).unwrap();
        assert!(built.body().is_none());
    }

    #[tokio::test]
    async fn test_build_failure_becomes_outcome() {
        let client = create_client();
        let req = RequestDefinition::new("bad", "GET", "::nope::");
        let outcome = execute_request(&client, &req, REQUEST_TIMEOUT).await;
        assert!(matches!(
            outcome,
            ResponseOutcome::Failure { error: RequestError::Build(_), meta: None, .. }
        ));
    }
}
