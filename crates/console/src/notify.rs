//! Notification queue
//!
//! Replaces blocking alert boxes: every notification is logged and queued,
//! the host renders the queue as a toast stack. Success and info toasts are
//! dismissed by the host after a TTL; errors stay until dismissed.

use std::collections::VecDeque;
use std::fmt;

/// How a notification is styled and logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    /// Upper-case tag used in log lines
    pub fn tag(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Success => "SUCCESS",
            Severity::Error => "ERROR",
        }
    }

    /// Whether the host should remove it on a timer
    pub fn auto_dismiss(&self) -> bool {
        !matches!(self, Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One queued message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Bounded FIFO of notifications. When full, the oldest entry is dropped.
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    limit: usize,
    next_id: u64,
}

impl NotificationQueue {
    pub fn new(limit: usize) -> Self {
        Self {
            items: VecDeque::new(),
            limit: limit.max(1),
            next_id: 1,
        }
    }

    /// Log and enqueue a message, returning its id
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        let message = message.into();
        match severity {
            Severity::Error => tracing::error!("[{}] {}", severity, message),
            _ => tracing::info!("[{}] {}", severity, message),
        }

        let id = self.next_id;
        self.next_id += 1;
        self.items.push_back(Notification {
            id,
            message,
            severity,
        });
        while self.items.len() > self.limit {
            self.items.pop_front();
        }
        id
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.notify(message, Severity::Info)
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.notify(message, Severity::Success)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.notify(message, Severity::Error)
    }

    /// Remove a notification; returns false if it was already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    /// Most recently queued notification
    pub fn latest(&self) -> Option<&Notification> {
        self.items.back()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_notify_assigns_increasing_ids() {
        let mut queue = NotificationQueue::new(5);
        let a = queue.success("Product created!");
        let b = queue.error("Operation failed");
        assert!(b > a);
        assert_eq!(queue.len(), 2);

        let latest = queue.latest().unwrap();
        assert_eq!(latest.message, "Operation failed");
        assert_eq!(latest.severity, Severity::Error);
    }

    #[test]
    fn test_oldest_dropped_when_full() {
        let mut queue = NotificationQueue::new(2);
        queue.info("one");
        queue.info("two");
        queue.info("three");

        let messages: Vec<_> = queue.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[test]
    fn test_dismiss() {
        let mut queue = NotificationQueue::default();
        let id = queue.info("Testing webhook...");
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_errors_are_sticky() {
        assert!(Severity::Info.auto_dismiss());
        assert!(Severity::Success.auto_dismiss());
        assert!(!Severity::Error.auto_dismiss());
        assert_eq!(Severity::Success.to_string(), "SUCCESS");
    }
}
