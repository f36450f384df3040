//! Command handlers - state transitions for UI events and network responses

use crate::app::AppState;
use crate::constants::SENDING_PLACEHOLDER;
use crate::format::format_outcome;
use crate::messages::{NetworkCommand, NetworkResponse};

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn navigate_up(&mut self) {
        if self.is_error() {
            return;
        }
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.response_scroll = 0;
        }
    }

    pub fn navigate_down(&mut self) {
        if self.is_error() {
            return;
        }
        if self.selected_index + 1 < self.collection.len() {
            self.selected_index += 1;
            self.response_scroll = 0;
        }
    }

    // ========================
    // Response scrolling
    // ========================

    pub fn scroll_up(&mut self) {
        if !self.is_error() {
            self.response_scroll = self.response_scroll.saturating_sub(1);
        }
    }

    /// Stops with the last line of the response at the top
    pub fn scroll_down(&mut self) {
        if self.is_error() {
            return;
        }
        let last_line = self.response_text.lines().count().saturating_sub(1);
        let max_scroll = u16::try_from(last_line).unwrap_or(u16::MAX);
        if self.response_scroll < max_scroll {
            self.response_scroll += 1;
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport.width = width;
        self.viewport.height = height;
    }

    // ========================
    // Request sending
    // ========================

    /// Start executing the selected request. `None` while one is in flight.
    pub fn prepare_request(&mut self) -> Option<NetworkCommand> {
        if self.is_loading || self.is_error() {
            return None;
        }

        let request = self.selected_request()?.clone();

        self.is_loading = true;
        self.response_text = String::from(SENDING_PLACEHOLDER);
        self.response_status = None;
        self.response_failed = false;
        self.response_scroll = 0;

        let id = self.next_id();
        self.pending_request_id = Some(id);

        Some(NetworkCommand::Execute { id, request })
    }

    // ========================
    // Response handling
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        // Only process if it matches the pending request
        if self.pending_request_id != Some(response.id()) {
            tracing::debug!(id = response.id(), "Dropping stale response");
            return;
        }

        match response {
            NetworkResponse::Completed { outcome, .. } => {
                self.response_text = format_outcome(&outcome);
                // A partial failure still has a status, but it is not shown as one
                self.response_failed = !outcome.is_success();
                self.response_status = if outcome.is_success() { outcome.status() } else { None };
                self.response_scroll = 0;
                self.is_loading = false;
                self.pending_request_id = None;
            }
        }
    }
}
