use std::time::Duration;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::error::RequestError;

/// A single request definition from a collection file
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RequestDefinition {
    pub name: String,
    pub method: String,
    pub url: String,
    #[serde(default, deserialize_with = "scalar_map")]
    pub headers: IndexMap<String, String>,
    #[serde(default)]
    pub body: String,
}

impl RequestDefinition {
    pub fn new(name: impl Into<String>, method: impl Into<String>, url: impl Into<String>) -> Self {
        RequestDefinition {
            name: name.into(),
            method: method.into(),
            url: url.into(),
            headers: IndexMap::new(),
            body: String::new(),
        }
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

/// A loaded collection of requests, in file order
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Collection {
    #[serde(default)]
    pub requests: Vec<RequestDefinition>,
}

impl Collection {
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RequestDefinition> {
        self.requests.get(index)
    }
}

/// Status line and headers of a response
#[derive(Clone, Debug, PartialEq)]
pub struct ResponseMeta {
    pub status: u16,
    /// Code plus reason phrase, e.g. "404 Not Found"
    pub status_text: String,
    pub headers: IndexMap<String, Vec<String>>,
}

/// Result of one execution attempt
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseOutcome {
    Success {
        meta: ResponseMeta,
        body: String,
        duration: Duration,
    },
    /// `meta` is only present when the body failed after headers arrived
    Failure {
        error: RequestError,
        meta: Option<ResponseMeta>,
        duration: Duration,
    },
}

impl ResponseOutcome {
    pub fn duration(&self) -> Duration {
        match self {
            ResponseOutcome::Success { duration, .. } => *duration,
            ResponseOutcome::Failure { duration, .. } => *duration,
        }
    }

    pub fn meta(&self) -> Option<&ResponseMeta> {
        match self {
            ResponseOutcome::Success { meta, .. } => Some(meta),
            ResponseOutcome::Failure { meta, .. } => meta.as_ref(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.meta().map(|m| m.status)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResponseOutcome::Success { .. })
    }
}

/// Accepts YAML scalars of any kind as header values (`X-Retries: 3`)
fn scalar_map<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_yaml::Value;

    let raw = Option::<IndexMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default();
    raw.into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => String::new(),
                other => {
                    return Err(D::Error::custom(format!(
                        "header `{}` must be a scalar, got {:?}",
                        key, other
                    )))
                }
            };
            Ok((key, value))
        })
        .collect()
}
