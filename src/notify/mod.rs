//! User-facing notification channel, the terminal stand-in for toast
//! popups. Store actions report every outcome here.

#[cfg(test)]
use std::sync::{Arc, Mutex};

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Error,
}

/// A single user-visible notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotifyKind,
    pub text: String,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NotifyKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NotifyKind::Error,
            text: text.into(),
        }
    }
}

/// Sink for user-visible notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to stderr, keeping stdout free for command
/// output.
pub struct TermNotifier;

impl Notifier for TermNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotifyKind::Success => eprintln!("✅ {}", notification.text),
            NotifyKind::Error => eprintln!("❌ {}", notification.text),
        }
    }
}

/// Collects notifications in memory. Clones share the same buffer, so a
/// test can keep a handle while a store owns the boxed sink.
#[cfg(test)]
#[derive(Default, Clone)]
pub struct MemoryNotifier {
    entries: Arc<Mutex<Vec<Notification>>>,
}

#[cfg(test)]
impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications recorded so far, oldest first.
    pub fn entries(&self) -> Vec<Notification> {
        self.entries.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        self.entries.lock().unwrap().push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_the_kind() {
        assert_eq!(Notification::success("ok").kind, NotifyKind::Success);
        assert_eq!(Notification::error("bad").kind, NotifyKind::Error);
    }

    #[test]
    fn test_memory_notifier_clones_share_entries() {
        let notifier = MemoryNotifier::new();
        let handle = notifier.clone();

        notifier.notify(Notification::success("first"));
        handle.notify(Notification::error("second"));

        let entries = notifier.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "first");
        assert_eq!(entries[1].kind, NotifyKind::Error);
    }
}
