//! Render state - data structure sent from App layer to UI for rendering

use std::sync::Arc;

use crate::constants::IDLE_PLACEHOLDER;
use crate::models::Collection;

/// Terminal size known to the app layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    /// Where the collection came from, shown in the status line
    pub source: String,
    pub collection: Arc<Collection>,
    pub load_error: Option<String>,
    pub selected_index: usize,

    // Response panel
    pub response_text: String,
    pub response_status: Option<u16>,
    /// Last attempt ended in a failure, partial or not
    pub response_failed: bool,
    pub response_scroll: u16,
    pub is_loading: bool,

    pub viewport: Viewport,
}

impl RenderState {
    pub fn is_error(&self) -> bool {
        self.load_error.is_some()
    }
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            source: String::new(),
            collection: Arc::new(Collection::default()),
            load_error: None,
            selected_index: 0,
            response_text: String::from(IDLE_PLACEHOLDER),
            response_status: None,
            response_failed: false,
            response_scroll: 0,
            is_loading: false,
            viewport: Viewport::default(),
        }
    }
}
