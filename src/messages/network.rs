//! Network messages - communication between App and Network layers

use crate::models::{RequestDefinition, ResponseOutcome};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Execute a request definition
    Execute {
        id: u64,
        request: RequestDefinition,
    },
    /// Shutdown the network actor, abandoning in-flight requests
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// An execution finished, successfully or not
    Completed {
        id: u64,
        outcome: ResponseOutcome,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Completed { id, .. } => *id,
        }
    }
}
