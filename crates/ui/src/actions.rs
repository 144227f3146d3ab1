//! Async glue between components and the console controllers
//!
//! Every multi-step action runs through a [`Session`] over [`AppConsole`],
//! which writes [`APP_STATE`] in short steps between awaits. No signal guard
//! is ever held across an await.
//!
//! Components start actions with [`detach`], never with a scope-bound
//! `spawn`: confirming or saving closes the dialog that started the action,
//! and a task owned by that dialog would be dropped at its first await.

use catalog_client::ApiClient;
use catalog_console::{ActiveFilter, ConsoleHost, ConsoleState, Session};
use catalog_core::{ConsoleError, ConsoleResult, ProductId, WebhookId};
use dioxus::core::spawn_forever;
use std::future::Future;
use std::sync::OnceLock;

use crate::file_ops;
use crate::state::{APP_STATE, config};

static CLIENT: OnceLock<ApiClient> = OnceLock::new();

/// The console half of [`APP_STATE`]
#[derive(Debug, Clone, Copy)]
pub struct AppConsole;

impl ConsoleHost for AppConsole {
    fn update<R>(&self, f: impl FnOnce(&mut ConsoleState) -> R) -> R {
        f(&mut APP_STATE.write().console)
    }
}

/// Run an action on the root scope so it outlives the component that
/// started it
pub fn detach(action: impl Future<Output = ()> + 'static) {
    spawn_forever(action);
}

/// Install the client used by every action
pub fn install_client(client: ApiClient) {
    if CLIENT.set(client).is_err() {
        tracing::debug!("API client already installed");
    }
}

/// The shared client, built from the launch configuration on first use
fn api() -> ConsoleResult<ApiClient> {
    if let Some(client) = CLIENT.get() {
        return Ok(client.clone());
    }
    let client = ApiClient::from_config(&config())?;
    install_client(client.clone());
    Ok(client)
}

/// Like [`api`], but reports a failure as a notification
fn api_or_notify() -> Option<ApiClient> {
    match api() {
        Ok(client) => Some(client),
        Err(e) => {
            APP_STATE
                .write()
                .console
                .notifications
                .error(e.user_message("API client unavailable"));
            None
        }
    }
}

// ============================================================================
// Startup
// ============================================================================

/// Populate both lists
pub async fn refresh_all() {
    let Some(api) = api_or_notify() else { return };
    Session::new(&AppConsole, &api).refresh().await;
}

// ============================================================================
// Products
// ============================================================================

pub async fn load_products() {
    let Some(api) = api_or_notify() else { return };
    Session::new(&AppConsole, &api).load_products().await;
}

/// Store the text now, reload once typing pauses
pub async fn search_changed(text: String) {
    let Some(api) = api_or_notify() else { return };
    Session::new(&AppConsole, &api).search(text).await;
}

pub async fn active_filter_changed(value: String) {
    let Some(api) = api_or_notify() else { return };
    Session::new(&AppConsole, &api)
        .set_active_filter(ActiveFilter::from_value(&value))
        .await;
}

pub async fn previous_page() {
    let Some(api) = api_or_notify() else { return };
    Session::new(&AppConsole, &api).previous_page().await;
}

pub async fn next_page() {
    let Some(api) = api_or_notify() else { return };
    Session::new(&AppConsole, &api).next_page().await;
}

pub fn open_create_product() {
    APP_STATE.write().console.products.open_create();
}

pub async fn open_edit_product(id: ProductId) {
    let Some(api) = api_or_notify() else { return };
    Session::new(&AppConsole, &api).open_edit_product(id).await;
}

/// The dialog sets the saving flag before detaching this
pub async fn submit_product() {
    let Some(api) = api_or_notify() else {
        APP_STATE.write().console.products.editor.set_saving(false);
        return;
    };
    Session::new(&AppConsole, &api).submit_product().await;
}

pub fn request_delete_product(id: ProductId) {
    let mut state = APP_STATE.write();
    let console = &mut state.console;
    if let Err(e) = console.products.request_delete(id, &mut console.confirm) {
        tracing::debug!("Delete request for product {} ignored: {}", id, e);
    }
}

pub fn request_delete_all_products() {
    let mut state = APP_STATE.write();
    let console = &mut state.console;
    if let Err(e) = console.products.request_delete_all(&mut console.confirm) {
        tracing::debug!("Bulk delete request ignored: {}", e);
    }
}

// ============================================================================
// Confirmation
// ============================================================================

/// Run the action the open confirmation guards
pub async fn confirm() {
    let Some(api) = api_or_notify() else { return };
    Session::new(&AppConsole, &api).confirm().await;
}

pub fn cancel_confirm() {
    APP_STATE.write().console.confirm.cancel();
}

// ============================================================================
// Webhooks
// ============================================================================

pub async fn load_webhooks() {
    let Some(api) = api_or_notify() else { return };
    Session::new(&AppConsole, &api).load_webhooks().await;
}

pub fn open_create_webhook() {
    APP_STATE.write().console.webhooks.open_create();
}

pub async fn open_edit_webhook(id: WebhookId) {
    let Some(api) = api_or_notify() else { return };
    Session::new(&AppConsole, &api).open_edit_webhook(id).await;
}

/// The dialog sets the saving flag before detaching this
pub async fn submit_webhook() {
    let Some(api) = api_or_notify() else {
        APP_STATE.write().console.webhooks.editor.set_saving(false);
        return;
    };
    Session::new(&AppConsole, &api).submit_webhook().await;
}

pub fn request_delete_webhook(id: WebhookId) {
    let mut state = APP_STATE.write();
    let console = &mut state.console;
    if let Err(e) = console.webhooks.request_delete(id, &mut console.confirm) {
        tracing::debug!("Delete request for webhook {} ignored: {}", id, e);
    }
}

pub async fn test_webhook(id: WebhookId) {
    let Some(api) = api_or_notify() else { return };
    Session::new(&AppConsole, &api).test_webhook(id).await;
}

// ============================================================================
// Upload
// ============================================================================

/// Validate the name, then read and send the file.
///
/// `read` is only awaited once the name has passed the extension check.
pub async fn upload_file<F>(file_name: String, read: F)
where
    F: Future<Output = ConsoleResult<Vec<u8>>>,
{
    let Some(api) = api_or_notify() else { return };
    Session::new(&AppConsole, &api).upload(&file_name, read).await;
}

/// Drop zone clicked: pick a file natively and upload it
pub async fn pick_and_upload() {
    let Some(path) = file_ops::show_import_dialog().await else {
        tracing::debug!("Import cancelled by user");
        return;
    };
    let file_name = file_ops::display_name(&path);
    upload_file(file_name, async move { file_ops::read_file(&path).await }).await;
}

/// Wrap a read failure from a dropped file
pub fn read_error(detail: impl std::fmt::Debug) -> ConsoleError {
    tracing::error!("Failed to read dropped file: {:?}", detail);
    ConsoleError::Io(std::io::Error::other(format!("{:?}", detail)))
}

// ============================================================================
// Notifications
// ============================================================================

pub fn dismiss_notification(id: u64) {
    APP_STATE.write().console.notifications.dismiss(id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::prelude::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    static DIALOG_OPEN: GlobalSignal<bool> = Signal::global(|| true);
    static FINISHED: GlobalSignal<bool> = Signal::global(|| false);
    static REACHED_END: AtomicBool = AtomicBool::new(false);

    #[component]
    fn Root() -> Element {
        rsx! {
            if DIALOG_OPEN() {
                ClosingDialog {}
            }
            if FINISHED() {
                p { "done" }
            }
        }
    }

    /// Starts an action whose first write unmounts this dialog, the way
    /// confirming clears the gate before the delete goes out
    #[component]
    fn ClosingDialog() -> Element {
        use_hook(|| {
            detach(async {
                *DIALOG_OPEN.write() = false;
                tokio::time::sleep(Duration::from_millis(10)).await;
                REACHED_END.store(true, Ordering::SeqCst);
                *FINISHED.write() = true;
            })
        });
        rsx! {
            p { "Are you sure?" }
        }
    }

    #[tokio::test]
    async fn test_detached_action_outlives_its_dialog() {
        let mut dom = VirtualDom::new(Root);
        dom.rebuild_in_place();

        let settled = tokio::time::timeout(Duration::from_secs(2), async {
            while !REACHED_END.load(Ordering::SeqCst) {
                dom.wait_for_work().await;
                dom.render_immediate_to_vec();
            }
        })
        .await;
        assert!(settled.is_ok(), "action was dropped with its dialog");
    }

    #[test]
    fn test_read_error_is_io() {
        let err = read_error("permission denied");
        assert!(matches!(err, ConsoleError::Io(_)));
    }
}
