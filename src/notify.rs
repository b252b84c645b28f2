//! Notification port
//!
//! The engine announces rewards, level-ups and new books through a
//! [`Notifier`] supplied by the host. Calls are fire-and-forget: the
//! engine never looks at what the display layer does with them.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Visual category of an announcement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Reward,
    Achievement,
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Reward => "reward",
            NotificationKind::Achievement => "achievement",
            NotificationKind::Info => "info",
        }
    }
}

/// A single announcement as delivered to the display layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub kind: NotificationKind,
}

/// Sink for human-readable engine events
pub trait Notifier {
    /// Announce a reward, achievement or info event
    fn notify(&mut self, title: &str, description: &str, kind: NotificationKind);

    /// Surface a guard failure (insufficient funds, locked gift)
    fn error(&mut self, message: &str);
}

/// Notifier that writes everything to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, title: &str, description: &str, kind: NotificationKind) {
        log::info!("[{}] {}: {}", kind.as_str(), title, description);
    }

    fn error(&mut self, message: &str) {
        log::warn!("{}", message);
    }
}

/// Everything a [`RecordingNotifier`] has received
#[derive(Debug, Default, Clone)]
pub struct NotificationLog {
    pub notifications: Vec<Notification>,
    pub errors: Vec<String>,
}

/// Notifier that keeps every event in memory
///
/// Clones share the same log, so a host can hand one clone to the engine
/// and keep another to drain into its toast queue.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    log: Rc<RefCell<NotificationLog>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.log.borrow().notifications.clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.log.borrow().errors.clone()
    }

    /// Take everything recorded so far, leaving the log empty
    pub fn drain(&self) -> NotificationLog {
        std::mem::take(&mut *self.log.borrow_mut())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, title: &str, description: &str, kind: NotificationKind) {
        self.log.borrow_mut().notifications.push(Notification {
            title: title.to_string(),
            description: description.to_string(),
            kind,
        });
    }

    fn error(&mut self, message: &str) {
        self.log.borrow_mut().errors.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_clones_share_log() {
        let host = RecordingNotifier::new();
        let mut engine_side = host.clone();

        engine_side.notify("Book Archived", "A new tome", NotificationKind::Info);
        engine_side.error("GIFT_LOCKED: COME_BACK_LATER");

        assert_eq!(host.notifications().len(), 1);
        assert_eq!(host.notifications()[0].kind, NotificationKind::Info);
        assert_eq!(host.errors(), vec!["GIFT_LOCKED: COME_BACK_LATER".to_string()]);
    }

    #[test]
    fn test_drain_empties_log() {
        let mut notifier = RecordingNotifier::new();
        notifier.notify("a", "b", NotificationKind::Reward);

        let drained = notifier.drain();
        assert_eq!(drained.notifications.len(), 1);
        assert!(notifier.notifications().is_empty());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&NotificationKind::Achievement).unwrap();
        assert_eq!(json, "\"achievement\"");
    }
}
