//! Aggregate console state

use crate::confirm::ConfirmGate;
use crate::debounce::Debouncer;
use crate::notify::NotificationQueue;
use crate::products::ProductListController;
use crate::upload::UploadFlow;
use crate::webhooks::WebhookListController;
use catalog_core::ConsoleConfig;

/// Every controller the console needs, plus the shared gate and queue.
/// Multi-step operations on it live in [`crate::session`].
#[derive(Debug, Clone)]
pub struct ConsoleState {
    pub products: ProductListController,
    pub webhooks: WebhookListController,
    pub upload: UploadFlow,
    pub confirm: ConfirmGate,
    pub notifications: NotificationQueue,
    /// Shared by every keystroke in the search box
    pub search_debounce: Debouncer,
}

impl ConsoleState {
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self {
            products: ProductListController::new(config.page_size),
            webhooks: WebhookListController::new(),
            upload: UploadFlow::new(config.upload_success_dwell(), config.upload_failure_dwell()),
            confirm: ConfirmGate::new(),
            notifications: NotificationQueue::new(config.notification_limit),
            search_debounce: Debouncer::new(config.search_debounce()),
        }
    }
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::from_config(&ConsoleConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_from_config() {
        let mut config = ConsoleConfig::default();
        config.page_size = 20;
        config.notification_limit = 2;
        config.search_debounce_ms = 250;
        let state = ConsoleState::from_config(&config);
        assert_eq!(state.products.pagination().page_size(), 20);
        assert_eq!(state.search_debounce.delay(), Duration::from_millis(250));
        assert!(!state.upload.is_busy());
    }
}
