//! Single-slot confirmation gate for destructive actions

use catalog_core::{ConsoleError, ConsoleResult, ProductId, WebhookId};

/// Prompt shown before deleting a single product
pub const DELETE_PRODUCT_PROMPT: &str = "Are you sure you want to delete this product?";

/// Prompt shown before emptying the catalog
pub const DELETE_ALL_PROMPT: &str =
    "⚠️ Are you sure you want to delete ALL products? This action cannot be undone!";

/// Prompt shown before deleting a webhook
pub const DELETE_WEBHOOK_PROMPT: &str = "Are you sure you want to delete this webhook?";

/// The action that runs once the user confirms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmTarget {
    DeleteProduct(ProductId),
    DeleteAllProducts,
    DeleteWebhook(WebhookId),
}

impl ConfirmTarget {
    pub fn prompt(&self) -> &'static str {
        match self {
            ConfirmTarget::DeleteProduct(_) => DELETE_PRODUCT_PROMPT,
            ConfirmTarget::DeleteAllProducts => DELETE_ALL_PROMPT,
            ConfirmTarget::DeleteWebhook(_) => DELETE_WEBHOOK_PROMPT,
        }
    }

    /// Title for the dialog header
    pub fn title(&self) -> &'static str {
        match self {
            ConfirmTarget::DeleteProduct(_) => "Delete Product",
            ConfirmTarget::DeleteAllProducts => "Delete All Products",
            ConfirmTarget::DeleteWebhook(_) => "Delete Webhook",
        }
    }
}

/// A confirmation waiting for an answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirmation {
    pub message: String,
    pub target: ConfirmTarget,
}

/// Holds at most one pending confirmation.
///
/// Confirming hands the stored target back exactly once; cancelling (button,
/// close icon, backdrop) discards it without side effects.
#[derive(Debug, Clone, Default)]
pub struct ConfirmGate {
    pending: Option<PendingConfirmation>,
}

impl ConfirmGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for confirmation. Fails while another request is still open.
    pub fn request(&mut self, target: ConfirmTarget) -> ConsoleResult<()> {
        if let Some(existing) = &self.pending {
            tracing::warn!(
                "Ignoring confirmation for {:?}; {:?} is still pending",
                target,
                existing.target
            );
            return Err(ConsoleError::ConfirmationPending);
        }
        self.pending = Some(PendingConfirmation {
            message: target.prompt().to_string(),
            target,
        });
        Ok(())
    }

    pub fn pending(&self) -> Option<&PendingConfirmation> {
        self.pending.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Close the dialog and return the action to run
    pub fn confirm(&mut self) -> Option<ConfirmTarget> {
        self.pending.take().map(|p| p.target)
    }

    /// Close the dialog without running anything
    pub fn cancel(&mut self) {
        if let Some(p) = self.pending.take() {
            tracing::debug!("Confirmation for {:?} cancelled", p.target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_returns_target_once() {
        let mut gate = ConfirmGate::new();
        gate.request(ConfirmTarget::DeleteProduct(4)).unwrap();
        assert!(gate.is_pending());
        assert_eq!(
            gate.pending().unwrap().message,
            "Are you sure you want to delete this product?"
        );

        assert_eq!(gate.confirm(), Some(ConfirmTarget::DeleteProduct(4)));
        assert_eq!(gate.confirm(), None);
        assert!(!gate.is_pending());
    }

    #[test]
    fn test_cancel_discards() {
        let mut gate = ConfirmGate::new();
        gate.request(ConfirmTarget::DeleteAllProducts).unwrap();
        gate.cancel();
        assert_eq!(gate.confirm(), None);
    }

    #[test]
    fn test_overlapping_request_rejected() {
        let mut gate = ConfirmGate::new();
        gate.request(ConfirmTarget::DeleteWebhook(1)).unwrap();

        let err = gate.request(ConfirmTarget::DeleteAllProducts).unwrap_err();
        assert!(matches!(err, ConsoleError::ConfirmationPending));
        // The first request is untouched
        assert_eq!(gate.confirm(), Some(ConfirmTarget::DeleteWebhook(1)));
    }

    #[test]
    fn test_bulk_prompt_warns() {
        assert!(ConfirmTarget::DeleteAllProducts.prompt().contains("cannot be undone"));
    }
}
