use chrono::Local;

use crate::models::{Notification, NotificationKind};

/// Append-only message log drained by the display layer. Never persisted.
#[derive(Debug, Default)]
pub struct NotificationLog {
    messages: Vec<Notification>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: NotificationKind, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!(kind = kind.label(), %text, "notification");
        self.messages.push(Notification {
            at: Local::now().naive_local(),
            kind,
            text,
        });
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(NotificationKind::Info, text);
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.push(NotificationKind::Warning, text);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(NotificationKind::Success, text);
    }

    pub fn suggestion(&mut self, text: impl Into<String>) {
        self.push(NotificationKind::Suggestion, text);
    }

    #[allow(dead_code)]
    pub fn messages(&self) -> &[Notification] {
        &self.messages
    }

    #[allow(dead_code)]
    pub fn of_kind(&self, kind: NotificationKind) -> impl Iterator<Item = &Notification> {
        self.messages.iter().filter(move |n| n.kind == kind)
    }

    #[allow(dead_code)]
    pub fn warnings(&self) -> impl Iterator<Item = &Notification> {
        self.of_kind(NotificationKind::Warning)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[allow(dead_code)]
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Hand the accumulated messages to the caller, leaving the log empty.
    pub fn take(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.messages)
    }
}
