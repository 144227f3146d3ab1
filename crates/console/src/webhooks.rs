//! Webhook list controller

use crate::confirm::{ConfirmGate, ConfirmTarget};
use crate::notify::NotificationQueue;
use crate::sequence::{RequestSequence, RequestToken};
use crate::webhook_editor::{WebhookEditor, WebhookSubmission};
use catalog_core::{CatalogApi, ConsoleResult, Webhook, WebhookId, WebhookTestResult};

pub const LOAD_FAILED: &str = "Failed to load webhooks";

/// One rendered webhook card
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookRow {
    pub id: WebhookId,
    pub url: String,
    pub event_type: String,
    pub enabled: bool,
    pub status_label: &'static str,
}

impl From<&Webhook> for WebhookRow {
    fn from(webhook: &Webhook) -> Self {
        Self {
            id: webhook.id,
            url: webhook.url.clone(),
            event_type: webhook.event_type.as_str().to_string(),
            enabled: webhook.enabled,
            status_label: if webhook.enabled { "Enabled" } else { "Disabled" },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WebhookListView {
    pub rows: Vec<WebhookRow>,
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Clone, Default)]
pub struct WebhookListController {
    webhooks: Vec<Webhook>,
    sequence: RequestSequence,
    pub editor: WebhookEditor,
}

impl WebhookListController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn webhooks(&self) -> &[Webhook] {
        &self.webhooks
    }

    pub fn begin_load(&mut self) -> RequestToken {
        self.sequence.next()
    }

    /// Returns whether the response was applied
    pub fn finish_load(
        &mut self,
        token: RequestToken,
        result: ConsoleResult<Vec<Webhook>>,
        notes: &mut NotificationQueue,
    ) -> bool {
        if !self.sequence.is_latest(token) {
            tracing::debug!("Dropping stale webhook list");
            return false;
        }
        match result {
            Ok(webhooks) => {
                self.webhooks = webhooks;
                true
            }
            Err(e) => {
                tracing::warn!("Webhook load failed: {}", e);
                notes.error(LOAD_FAILED);
                false
            }
        }
    }

    pub async fn load<A>(&mut self, api: &A, notes: &mut NotificationQueue) -> bool
    where
        A: CatalogApi + ?Sized,
    {
        let token = self.begin_load();
        let result = api.list_webhooks().await;
        self.finish_load(token, result, notes)
    }

    pub fn view(&self) -> WebhookListView {
        WebhookListView {
            rows: self.webhooks.iter().map(WebhookRow::from).collect(),
            empty_message: self.webhooks.is_empty().then_some("No webhooks configured"),
        }
    }

    // ------------------------------------------------------------------------
    // Editor
    // ------------------------------------------------------------------------

    pub fn open_create(&mut self) {
        self.editor.open_create();
    }

    pub fn finish_open_edit(
        &mut self,
        id: WebhookId,
        result: ConsoleResult<Webhook>,
        notes: &mut NotificationQueue,
    ) -> bool {
        match result {
            Ok(webhook) => {
                self.editor.open_edit(id, &webhook);
                true
            }
            Err(e) => {
                tracing::warn!("Fetching webhook {} failed: {}", id, e);
                notes.error("Failed to load webhook");
                false
            }
        }
    }

    pub async fn open_edit<A>(&mut self, api: &A, id: WebhookId, notes: &mut NotificationQueue) -> bool
    where
        A: CatalogApi + ?Sized,
    {
        let result = api.get_webhook(id).await;
        self.finish_open_edit(id, result, notes)
    }

    pub fn finish_submit(
        &mut self,
        submission: &WebhookSubmission,
        result: ConsoleResult<Webhook>,
        notes: &mut NotificationQueue,
    ) -> bool {
        match result {
            Ok(_) => {
                notes.success(submission.success_message());
                self.editor.close();
                true
            }
            Err(e) => {
                tracing::warn!("Saving webhook failed: {}", e);
                notes.error("Operation failed");
                false
            }
        }
    }

    pub async fn submit<A>(&mut self, api: &A, notes: &mut NotificationQueue) -> bool
    where
        A: CatalogApi + ?Sized,
    {
        let submission = match self.editor.submission() {
            Ok(submission) => submission,
            Err(e) => {
                notes.error(e.user_message("Operation failed"));
                return false;
            }
        };
        let result = submission.send(api).await;
        if self.finish_submit(&submission, result, notes) {
            self.load(api, notes).await;
            true
        } else {
            false
        }
    }

    // ------------------------------------------------------------------------
    // Deletion and test-fire
    // ------------------------------------------------------------------------

    pub fn request_delete(&self, id: WebhookId, gate: &mut ConfirmGate) -> ConsoleResult<()> {
        gate.request(ConfirmTarget::DeleteWebhook(id))
    }

    pub fn finish_delete(&mut self, result: ConsoleResult<()>, notes: &mut NotificationQueue) -> bool {
        match result {
            Ok(()) => {
                notes.success("Webhook deleted!");
                true
            }
            Err(e) => {
                tracing::warn!("Deleting webhook failed: {}", e);
                notes.error("Delete failed");
                false
            }
        }
    }

    pub async fn delete<A>(&mut self, api: &A, id: WebhookId, notes: &mut NotificationQueue) -> bool
    where
        A: CatalogApi + ?Sized,
    {
        let result = api.delete_webhook(id).await;
        let reload = self.finish_delete(result, notes);
        if reload {
            self.load(api, notes).await;
        }
        reload
    }

    /// Announce the test before the request goes out
    pub fn begin_test(&self, notes: &mut NotificationQueue) {
        notes.info("Testing webhook...");
    }

    /// Returns the server's verdict, `None` if the request itself failed
    pub fn finish_test(
        &self,
        result: ConsoleResult<WebhookTestResult>,
        notes: &mut NotificationQueue,
    ) -> Option<bool> {
        match result {
            Ok(outcome) => {
                if outcome.success {
                    notes.success(outcome.summary());
                } else {
                    notes.error(outcome.summary());
                }
                Some(outcome.success)
            }
            Err(e) => {
                tracing::warn!("Webhook test request failed: {}", e);
                notes.error("Webhook test failed");
                None
            }
        }
    }

    pub async fn test<A>(&self, api: &A, id: WebhookId, notes: &mut NotificationQueue) -> Option<bool>
    where
        A: CatalogApi + ?Sized,
    {
        self.begin_test(notes);
        let result = api.test_webhook(id).await;
        self.finish_test(result, notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Severity;
    use crate::testing::{Call, Endpoint, FakeApi, Failure};
    use catalog_core::EventType;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_empty_list() {
        let api = FakeApi::new();
        let mut notes = NotificationQueue::default();
        let mut hooks = WebhookListController::new();

        assert!(hooks.load(&api, &mut notes).await);
        assert_eq!(hooks.view().empty_message, Some("No webhooks configured"));
    }

    #[tokio::test]
    async fn test_rows_show_raw_event_name() {
        let api = FakeApi::new();
        api.seed_webhook("https://a.example.com", EventType::ProductsBulkDeleted);
        let mut notes = NotificationQueue::default();
        let mut hooks = WebhookListController::new();
        hooks.load(&api, &mut notes).await;

        let view = hooks.view();
        assert_eq!(view.rows[0].event_type, "products_bulk_deleted");
        assert_eq!(view.rows[0].status_label, "Enabled");
    }

    #[tokio::test]
    async fn test_load_failure() {
        let api = FakeApi::new();
        api.fail(Endpoint::ListWebhooks, Failure::Transport);
        let mut notes = NotificationQueue::default();
        let mut hooks = WebhookListController::new();

        assert!(!hooks.load(&api, &mut notes).await);
        assert_eq!(notes.latest().unwrap().message, "Failed to load webhooks");
    }

    #[tokio::test]
    async fn test_create_and_reload() {
        let api = FakeApi::new();
        let mut notes = NotificationQueue::default();
        let mut hooks = WebhookListController::new();

        hooks.open_create();
        hooks.editor.form.url = "https://hooks.example.com/x".into();
        hooks.editor.form.event_type = EventType::UploadComplete;

        assert!(hooks.submit(&api, &mut notes).await);
        assert!(!hooks.editor.is_open());
        assert_eq!(notes.latest().unwrap().message, "Webhook created!");
        assert_eq!(hooks.webhooks().len(), 1);
        assert_eq!(hooks.webhooks()[0].event_type, EventType::UploadComplete);
    }

    #[tokio::test]
    async fn test_server_rejection_keeps_modal_with_generic_message() {
        let api = FakeApi::new();
        api.fail(
            Endpoint::CreateWebhook,
            Failure::detail(400, "Invalid event type"),
        );
        let mut notes = NotificationQueue::default();
        let mut hooks = WebhookListController::new();

        hooks.open_create();
        hooks.editor.form.url = "https://hooks.example.com/x".into();
        assert!(!hooks.submit(&api, &mut notes).await);
        assert!(hooks.editor.is_open());
        // The detail is logged; the toast stays generic
        assert_eq!(notes.latest().unwrap().message, "Operation failed");
    }

    #[tokio::test]
    async fn test_edit_and_delete() {
        let api = FakeApi::new();
        let id = api.seed_webhook("https://a.example.com", EventType::ProductCreated);
        let mut notes = NotificationQueue::default();
        let mut gate = ConfirmGate::new();
        let mut hooks = WebhookListController::new();

        assert!(hooks.open_edit(&api, id, &mut notes).await);
        hooks.editor.form.enabled = false;
        assert!(hooks.submit(&api, &mut notes).await);
        assert_eq!(notes.latest().unwrap().message, "Webhook updated!");
        assert_eq!(hooks.view().rows[0].status_label, "Disabled");

        hooks.request_delete(id, &mut gate).unwrap();
        assert_eq!(
            gate.pending().unwrap().message,
            "Are you sure you want to delete this webhook?"
        );
        assert_eq!(gate.confirm(), Some(ConfirmTarget::DeleteWebhook(id)));
        assert!(hooks.delete(&api, id, &mut notes).await);
        assert_eq!(api.webhook_count(), 0);
        assert_eq!(notes.latest().unwrap().message, "Webhook deleted!");
    }

    #[tokio::test]
    async fn test_fire_success() {
        let api = FakeApi::new();
        let id = api.seed_webhook("https://a.example.com", EventType::ProductCreated);
        let mut notes = NotificationQueue::default();
        let hooks = WebhookListController::new();

        assert_eq!(hooks.test(&api, id, &mut notes).await, Some(true));

        let messages: Vec<_> = notes.iter().map(|n| (n.message.clone(), n.severity)).collect();
        assert_eq!(
            messages,
            vec![
                ("Testing webhook...".to_string(), Severity::Info),
                (
                    "Webhook test successful! (200, 0.45s)".to_string(),
                    Severity::Success
                ),
            ]
        );
        assert_eq!(api.calls(), vec![Call::TestWebhook(id)]);
    }

    #[tokio::test]
    async fn test_fire_reports_remote_failure() {
        let api = FakeApi::new();
        let id = api.seed_webhook("https://a.example.com", EventType::ProductCreated);
        api.set_test_result(WebhookTestResult {
            success: false,
            status_code: None,
            response_time: None,
            error: Some("Connection timed out".into()),
        });
        let mut notes = NotificationQueue::default();
        let hooks = WebhookListController::new();

        assert_eq!(hooks.test(&api, id, &mut notes).await, Some(false));
        let last = notes.latest().unwrap();
        assert_eq!(last.message, "Webhook test failed: Connection timed out");
        assert_eq!(last.severity, Severity::Error);
    }

    #[tokio::test]
    async fn test_fire_request_failure() {
        let api = FakeApi::new();
        let mut notes = NotificationQueue::default();
        let hooks = WebhookListController::new();

        assert_eq!(hooks.test(&api, 5, &mut notes).await, None);
        assert_eq!(notes.latest().unwrap().message, "Webhook test failed");
    }
}
