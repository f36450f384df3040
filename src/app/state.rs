//! App state - pure data structure with no I/O logic beyond the initial load

use std::path::Path;
use std::sync::Arc;

use crate::constants::IDLE_PLACEHOLDER;
use crate::error::CollectionError;
use crate::messages::{RenderState, Viewport};
use crate::models::{Collection, RequestDefinition};
use crate::storage::load_collection;

/// Main session state - owned by the app actor alone
pub struct AppState {
    // Collection
    pub source: String,
    pub collection: Arc<Collection>,
    /// Set when the collection failed to load; the session only accepts quit
    pub load_error: Option<CollectionError>,
    pub selected_index: usize,

    // Response panel
    pub response_text: String,
    /// Status of the last completed attempt; `None` unless it succeeded
    pub response_status: Option<u16>,
    pub response_failed: bool,
    pub response_scroll: u16,

    // In-flight request
    pub is_loading: bool,
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,

    pub viewport: Viewport,
}

impl AppState {
    /// Load the collection at `path`, starting in the error state if that fails
    pub fn load(path: &Path) -> Self {
        let result = load_collection(path);
        match &result {
            Ok(collection) => {
                tracing::info!(path = %path.display(), requests = collection.len(), "Loaded collection");
            }
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "Failed to load collection"),
        }
        Self::from_result(path.display().to_string(), result)
    }

    pub fn from_result(source: impl Into<String>, result: Result<Collection, CollectionError>) -> Self {
        let (collection, load_error) = match result {
            Ok(collection) if collection.is_empty() => (Collection::default(), Some(CollectionError::Empty)),
            Ok(collection) => (collection, None),
            Err(e) => (Collection::default(), Some(e)),
        };

        AppState {
            source: source.into(),
            collection: Arc::new(collection),
            load_error,
            selected_index: 0,
            response_text: String::from(IDLE_PLACEHOLDER),
            response_status: None,
            response_failed: false,
            response_scroll: 0,
            is_loading: false,
            next_request_id: 1,
            pending_request_id: None,
            viewport: Viewport::default(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.load_error.is_some()
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    pub fn selected_request(&self) -> Option<&RequestDefinition> {
        self.collection.get(self.selected_index)
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            source: self.source.clone(),
            collection: Arc::clone(&self.collection),
            load_error: self.load_error.as_ref().map(|e| e.to_string()),
            selected_index: self.selected_index,
            response_text: self.response_text.clone(),
            response_status: self.response_status,
            response_failed: self.response_failed,
            response_scroll: self.response_scroll,
            is_loading: self.is_loading,
            viewport: self.viewport,
        }
    }
}
