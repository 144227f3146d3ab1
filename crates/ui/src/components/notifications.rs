//! # Notification Stack
//!
//! Non-blocking toasts. Success and info toasts remove themselves after the
//! configured TTL; errors stay until closed.

use catalog_console::{Notification, Severity};
use dioxus::prelude::*;
use std::time::Duration;

use crate::actions;
use crate::state::APP_STATE;

#[component]
pub fn NotificationStack() -> Element {
    let state = APP_STATE.read();
    let items: Vec<Notification> = state.console.notifications.iter().cloned().collect();
    let ttl = state.notification_ttl;
    drop(state);

    rsx! {
        div {
            class: "notification-stack",
            for notification in items {
                Toast { key: "{notification.id}", notification: notification.clone(), ttl: ttl }
            }
        }
    }
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "toast toast-info",
        Severity::Success => "toast toast-success",
        Severity::Error => "toast toast-error",
    }
}

#[component]
fn Toast(notification: Notification, ttl: Duration) -> Element {
    let id = notification.id;
    let auto_dismiss = notification.severity.auto_dismiss();

    use_future(move || async move {
        if auto_dismiss {
            tokio::time::sleep(ttl).await;
            actions::dismiss_notification(id);
        }
    });

    rsx! {
        div {
            class: severity_class(notification.severity),
            span { class: "toast-message", "{notification.message}" }
            button {
                class: "toast-close",
                onclick: move |_| actions::dismiss_notification(id),
                "×"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_class() {
        assert!(severity_class(Severity::Error).contains("toast-error"));
        assert!(severity_class(Severity::Success).contains("toast-success"));
    }
}
