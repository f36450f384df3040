//! Network actor - runs request executions in the Tokio runtime

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::constants::REQUEST_TIMEOUT;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, execute_request};

/// Network actor that executes requests off the app loop
pub struct NetworkActor {
    client: reqwest::Client,
    /// Limit applied to, and reported by, every execution
    timeout: Duration,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        Self::with_client(create_client(), REQUEST_TIMEOUT, response_tx)
    }

    pub fn with_client(
        client: reqwest::Client,
        timeout: Duration,
        response_tx: mpsc::UnboundedSender<NetworkResponse>,
    ) -> Self {
        NetworkActor {
            client,
            timeout,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Execute { id, request }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let timeout = self.timeout;

                            self.active_requests.spawn(async move {
                                tracing::info!(id, method = %request.method, url = %request.url, "Executing request");
                                let outcome = execute_request(&client, &request, timeout).await;
                                let elapsed_ms = outcome.duration().as_millis() as u64;
                                match outcome.status() {
                                    Some(status) if outcome.is_success() => {
                                        tracing::info!(id, status, elapsed_ms, "Request completed");
                                    }
                                    status => {
                                        tracing::warn!(id, ?status, elapsed_ms, "Request failed");
                                    }
                                }
                                let _ = response_tx.send(NetworkResponse::Completed { id, outcome });
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            // In-flight requests are abandoned, their results dropped
                            if !self.active_requests.is_empty() {
                                tracing::info!(count = self.active_requests.len(), "Abandoning in-flight requests");
                            }
                            self.active_requests.abort_all();
                            break;
                        }
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RequestError;
    use crate::models::{RequestDefinition, ResponseOutcome};

    #[tokio::test]
    async fn test_execute_delivers_one_completion() {
        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(NetworkActor::new(resp_tx).run(cmd_rx));

        let request = RequestDefinition::new("bad", "GET", "not a url");
        cmd_tx.send(NetworkCommand::Execute { id: 7, request }).unwrap();

        let NetworkResponse::Completed { id, outcome } = resp_rx.recv().await.unwrap();
        assert_eq!(id, 7);
        assert!(!outcome.is_success());

        cmd_tx.send(NetworkCommand::Shutdown).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_timeout_reports_actor_limit() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        // Accept and hold the connection without ever answering
        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(socket);
        });

        let limit = Duration::from_millis(150);
        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let actor = NetworkActor::with_client(reqwest::Client::new(), limit, resp_tx);
        let handle = tokio::spawn(actor.run(cmd_rx));

        let request = RequestDefinition::new("silent", "GET", format!("http://{}/", addr));
        cmd_tx.send(NetworkCommand::Execute { id: 1, request }).unwrap();

        let NetworkResponse::Completed { outcome, .. } = resp_rx.recv().await.unwrap();
        match outcome {
            ResponseOutcome::Failure { error, meta: None, .. } => {
                assert_eq!(error, RequestError::Timeout(limit));
            }
            other => panic!("expected timeout, got {:?}", other),
        }

        cmd_tx.send(NetworkCommand::Shutdown).unwrap();
        handle.await.unwrap();
        server.abort();
    }

    #[tokio::test]
    async fn test_closed_command_channel_stops_actor() {
        let (resp_tx, _resp_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
        let handle = tokio::spawn(NetworkActor::new(resp_tx).run(cmd_rx));
        drop(cmd_tx);
        handle.await.unwrap();
    }
}
