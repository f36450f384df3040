//! # Thunder TUI
//!
//! A terminal HTTP client that runs requests from a YAML collection.
//!
//! ## Features
//! - Browse a collection of named requests
//! - Send the selected request, any method, custom headers and body
//! - Status, timing, every response header and the raw body
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - draws render snapshots, maps keys to events
//! - App Layer (State machine) - sole owner of session state
//! - Network Layer (Tokio runtime) - executes requests off the app loop

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod models;
pub mod storage;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use models::{Collection, RequestDefinition, ResponseMeta, ResponseOutcome};
pub use error::{CollectionError, RequestError};
pub use format::format_outcome;
pub use storage::load_collection;
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor};
pub use network::{execute_request, create_client, NetworkActor};
