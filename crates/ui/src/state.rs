//! Application State Management for Catalog Admin
//!
//! The console's controllers live in one global Dioxus signal. Components
//! read a snapshot, drop the guard, and render; actions write to it between
//! awaits (see [`crate::actions`]).

use catalog_console::{ConfirmTarget, ConsoleState};
use catalog_core::ConsoleConfig;
use dioxus::prelude::*;
use std::sync::OnceLock;
use std::time::Duration;

/// Configuration the window was launched with
static CONFIG: OnceLock<ConsoleConfig> = OnceLock::new();

/// Record the launch configuration. Only the first call has an effect.
pub fn set_config(config: ConsoleConfig) {
    if CONFIG.set(config).is_err() {
        tracing::debug!("Console configuration already set");
    }
}

/// The launch configuration, or defaults when launched without one
pub fn config() -> ConsoleConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

// ============================================================================
// Dialogs
// ============================================================================

/// Which modal is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    Product,
    Webhook,
    Confirm(ConfirmTarget),
}

// ============================================================================
// UI State
// ============================================================================

/// Presentation-only state that the controllers do not own
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// A file is being dragged over the drop zone
    pub drag_over: bool,
}

// ============================================================================
// Main Application State
// ============================================================================

#[derive(Debug, Clone)]
pub struct AppState {
    pub console: ConsoleState,
    pub ui: UiState,
    /// How long success and info toasts stay up
    pub notification_ttl: Duration,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&ConsoleConfig::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::from_config(&config())
    }

    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self {
            console: ConsoleState::from_config(config),
            ui: UiState::default(),
            notification_ttl: config.notification_ttl(),
        }
    }

    /// The modal to render. A pending confirmation sits above the editors.
    pub fn active_dialog(&self) -> Option<Dialog> {
        if let Some(pending) = self.console.confirm.pending() {
            Some(Dialog::Confirm(pending.target))
        } else if self.console.products.editor.is_open() {
            Some(Dialog::Product)
        } else if self.console.webhooks.editor.is_open() {
            Some(Dialog::Webhook)
        } else {
            None
        }
    }

    /// Close the top-most modal without side effects
    pub fn close_dialog(&mut self) {
        match self.active_dialog() {
            Some(Dialog::Confirm(_)) => self.console.confirm.cancel(),
            Some(Dialog::Product) => self.console.products.editor.close(),
            Some(Dialog::Webhook) => self.console.webhooks.editor.close(),
            None => {}
        }
    }
}

// ============================================================================
// Global State Context
// ============================================================================

/// Global application state signal
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_dialog_initially() {
        let state = AppState::default();
        assert_eq!(state.active_dialog(), None);
    }

    #[test]
    fn test_confirmation_sits_above_editor() {
        let mut state = AppState::default();
        state.console.products.open_create();
        assert_eq!(state.active_dialog(), Some(Dialog::Product));

        state
            .console
            .confirm
            .request(ConfirmTarget::DeleteAllProducts)
            .unwrap();
        assert_eq!(
            state.active_dialog(),
            Some(Dialog::Confirm(ConfirmTarget::DeleteAllProducts))
        );

        state.close_dialog();
        assert_eq!(state.active_dialog(), Some(Dialog::Product));
        state.close_dialog();
        assert_eq!(state.active_dialog(), None);
        assert_eq!(state.console.products.editor.editing_id(), None);
    }

    #[test]
    fn test_from_config() {
        let mut config = ConsoleConfig::default();
        config.notification_ttl_ms = 1000;
        let state = AppState::from_config(&config);
        assert_eq!(state.notification_ttl, Duration::from_millis(1000));
    }
}
