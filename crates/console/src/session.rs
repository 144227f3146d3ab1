//! Multi-step console operations
//!
//! A [`Session`] runs the sequences that span several awaits: confirm then
//! delete then reload, save then reload, upload then dwell then reload. The
//! state is reached only through [`ConsoleHost::update`], one short borrow
//! per step, so a host can keep [`ConsoleState`] inside a UI signal and
//! still render while a request is in flight.

use crate::confirm::ConfirmTarget;
use crate::products::{ActiveFilter, LoadOutcome};
use crate::state::ConsoleState;
use crate::upload::UploadOutcome;
use catalog_core::{CatalogApi, ConsoleResult, ProductId, WebhookId};
use std::future::Future;
use std::sync::{Mutex, PoisonError};

/// Owner of a [`ConsoleState`]
pub trait ConsoleHost {
    /// Run `f` with exclusive access. Implementations must not be re-entered
    /// from inside `f`.
    fn update<R>(&self, f: impl FnOnce(&mut ConsoleState) -> R) -> R;
}

impl ConsoleHost for Mutex<ConsoleState> {
    fn update<R>(&self, f: impl FnOnce(&mut ConsoleState) -> R) -> R {
        let mut state = self.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *state)
    }
}

/// A host paired with the API it talks to
pub struct Session<'a, H, A: ?Sized> {
    host: &'a H,
    api: &'a A,
}

impl<'a, H, A> Session<'a, H, A>
where
    H: ConsoleHost,
    A: CatalogApi + ?Sized,
{
    pub fn new(host: &'a H, api: &'a A) -> Self {
        Self { host, api }
    }

    // ------------------------------------------------------------------------
    // Lists
    // ------------------------------------------------------------------------

    /// Load both lists
    pub async fn refresh(&self) {
        self.load_products().await;
        self.load_webhooks().await;
    }

    pub async fn load_products(&self) -> LoadOutcome {
        let ticket = self.host.update(|s| s.products.begin_load());
        let result = self.api.list_products(&ticket.query).await;
        self.host
            .update(|s| s.products.finish_load(&ticket, result, &mut s.notifications))
    }

    pub async fn load_webhooks(&self) -> bool {
        let token = self.host.update(|s| s.webhooks.begin_load());
        let result = self.api.list_webhooks().await;
        self.host
            .update(|s| s.webhooks.finish_load(token, result, &mut s.notifications))
    }

    /// Store the typed text, then reload once typing pauses. Returns whether
    /// this keystroke was the one that reloaded.
    pub async fn search(&self, text: String) -> bool {
        let debounce = self.host.update(|s| {
            s.products.set_search(text);
            s.search_debounce.clone()
        });
        if !debounce.settle().await {
            return false;
        }
        self.host.update(|s| s.products.commit_search());
        self.load_products().await;
        true
    }

    pub async fn set_active_filter(&self, filter: ActiveFilter) {
        self.host.update(|s| s.products.set_active_filter(filter));
        self.load_products().await;
    }

    pub async fn previous_page(&self) {
        if self.host.update(|s| s.products.previous_page()) {
            self.load_products().await;
        }
    }

    pub async fn next_page(&self) {
        if self.host.update(|s| s.products.next_page()) {
            self.load_products().await;
        }
    }

    // ------------------------------------------------------------------------
    // Editors
    // ------------------------------------------------------------------------

    pub async fn open_edit_product(&self, id: ProductId) -> bool {
        let result = self.api.get_product(id).await;
        self.host
            .update(|s| s.products.finish_open_edit(id, result, &mut s.notifications))
    }

    /// Save the product form. A successful save closes the modal and reloads
    /// the list.
    pub async fn submit_product(&self) -> bool {
        let submission = self.host.update(|s| match s.products.editor.submission() {
            Ok(submission) => {
                s.products.editor.set_saving(true);
                Some(submission)
            }
            Err(e) => {
                s.notifications.error(e.user_message("Operation failed"));
                None
            }
        });
        let Some(submission) = submission else {
            return false;
        };

        let result = submission.send(self.api).await;

        let saved = self.host.update(|s| {
            s.products.editor.set_saving(false);
            s.products
                .finish_submit(&submission, result, &mut s.notifications)
        });
        if saved {
            self.load_products().await;
        }
        saved
    }

    pub async fn open_edit_webhook(&self, id: WebhookId) -> bool {
        let result = self.api.get_webhook(id).await;
        self.host
            .update(|s| s.webhooks.finish_open_edit(id, result, &mut s.notifications))
    }

    pub async fn submit_webhook(&self) -> bool {
        let submission = self.host.update(|s| match s.webhooks.editor.submission() {
            Ok(submission) => {
                s.webhooks.editor.set_saving(true);
                Some(submission)
            }
            Err(e) => {
                s.notifications.error(e.user_message("Operation failed"));
                None
            }
        });
        let Some(submission) = submission else {
            return false;
        };

        let result = submission.send(self.api).await;

        let saved = self.host.update(|s| {
            s.webhooks.editor.set_saving(false);
            s.webhooks
                .finish_submit(&submission, result, &mut s.notifications)
        });
        if saved {
            self.load_webhooks().await;
        }
        saved
    }

    // ------------------------------------------------------------------------
    // Confirmation, deletion, test-fire
    // ------------------------------------------------------------------------

    /// Run whatever the pending confirmation guards, then reload the list it
    /// touched. `None` when nothing was pending.
    pub async fn confirm(&self) -> Option<ConfirmTarget> {
        let target = self.host.update(|s| s.confirm.confirm())?;
        tracing::debug!("Confirmed {:?}", target);

        let reload = match target {
            ConfirmTarget::DeleteProduct(id) => {
                let result = self.api.delete_product(id).await;
                self.host
                    .update(|s| s.products.finish_delete(result, &mut s.notifications))
            }
            ConfirmTarget::DeleteAllProducts => {
                let result = self.api.delete_all_products().await;
                self.host
                    .update(|s| s.products.finish_delete_all(result, &mut s.notifications))
            }
            ConfirmTarget::DeleteWebhook(id) => {
                let result = self.api.delete_webhook(id).await;
                self.host
                    .update(|s| s.webhooks.finish_delete(result, &mut s.notifications))
            }
        };

        if reload {
            match target {
                ConfirmTarget::DeleteWebhook(_) => {
                    self.load_webhooks().await;
                }
                ConfirmTarget::DeleteProduct(_) | ConfirmTarget::DeleteAllProducts => {
                    self.load_products().await;
                }
            }
        }
        Some(target)
    }

    pub async fn test_webhook(&self, id: WebhookId) -> Option<bool> {
        self.host.update(|s| s.webhooks.begin_test(&mut s.notifications));
        let result = self.api.test_webhook(id).await;
        self.host
            .update(|s| s.webhooks.finish_test(result, &mut s.notifications))
    }

    // ------------------------------------------------------------------------
    // Upload
    // ------------------------------------------------------------------------

    /// Check the name, read and send the file, hold the result on screen for
    /// the dwell, then show the drop zone again. A successful import reloads
    /// the product list after the dwell.
    ///
    /// `read` is only awaited once the name has passed the extension check.
    /// Returns `None` when the file was rejected before anything was sent.
    pub async fn upload<F>(&self, file_name: &str, read: F) -> Option<UploadOutcome>
    where
        F: Future<Output = ConsoleResult<Vec<u8>>>,
    {
        let began = self
            .host
            .update(|s| s.upload.begin(file_name, &mut s.notifications));
        if began.is_err() {
            return None;
        }

        let result = match read.await {
            Ok(contents) => self.api.upload_csv(file_name, contents).await,
            Err(e) => Err(e),
        };
        let outcome = self
            .host
            .update(|s| s.upload.finish(result, &mut s.notifications));

        tokio::time::sleep(outcome.dwell).await;
        self.host.update(|s| s.upload.reset());

        if outcome.reload_products() {
            self.load_products().await;
        }
        Some(outcome)
    }
}
