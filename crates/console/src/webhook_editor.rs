//! Webhook create/edit modal state

use catalog_core::{
    CatalogApi, ConsoleError, ConsoleResult, EventType, Webhook, WebhookId, WebhookPayload,
};

#[derive(Debug, Clone, PartialEq)]
pub struct WebhookForm {
    pub url: String,
    pub event_type: EventType,
    pub enabled: bool,
}

impl Default for WebhookForm {
    fn default() -> Self {
        Self {
            url: String::new(),
            event_type: EventType::default(),
            enabled: true,
        }
    }
}

impl WebhookForm {
    pub fn from_webhook(webhook: &Webhook) -> Self {
        Self {
            url: webhook.url.clone(),
            event_type: webhook.event_type.clone(),
            enabled: webhook.enabled,
        }
    }

    /// URL format is left to the server; only presence is checked here
    pub fn to_payload(&self) -> ConsoleResult<WebhookPayload> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(ConsoleError::validation("URL is required"));
        }
        Ok(WebhookPayload {
            url: url.to_string(),
            event_type: self.event_type.clone(),
            enabled: self.enabled,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WebhookSubmission {
    pub editing_id: Option<WebhookId>,
    pub payload: WebhookPayload,
}

impl WebhookSubmission {
    pub fn is_update(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn success_message(&self) -> &'static str {
        if self.is_update() {
            "Webhook updated!"
        } else {
            "Webhook created!"
        }
    }

    pub async fn send<A>(&self, api: &A) -> ConsoleResult<Webhook>
    where
        A: CatalogApi + ?Sized,
    {
        match self.editing_id {
            Some(id) => api.update_webhook(id, &self.payload).await,
            None => api.create_webhook(&self.payload).await,
        }
    }
}

/// The webhook modal; mirrors the product editor
#[derive(Debug, Clone, Default)]
pub struct WebhookEditor {
    open: bool,
    editing_id: Option<WebhookId>,
    /// A save request is in flight
    saving: bool,
    pub form: WebhookForm,
}

impl WebhookEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_create(&mut self) {
        self.editing_id = None;
        self.form = WebhookForm::default();
        self.saving = false;
        self.open = true;
    }

    pub fn open_edit(&mut self, id: WebhookId, webhook: &Webhook) {
        self.editing_id = Some(id);
        self.form = WebhookForm::from_webhook(webhook);
        self.saving = false;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.editing_id = None;
        self.saving = false;
    }

    pub fn set_saving(&mut self, saving: bool) {
        self.saving = saving;
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn editing_id(&self) -> Option<WebhookId> {
        self.editing_id
    }

    pub fn title(&self) -> &'static str {
        if self.editing_id.is_some() {
            "Edit Webhook"
        } else {
            "Add Webhook"
        }
    }

    pub fn submission(&self) -> ConsoleResult<WebhookSubmission> {
        Ok(WebhookSubmission {
            editing_id: self.editing_id,
            payload: self.form.to_payload()?,
        })
    }
}
