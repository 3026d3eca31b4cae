use std::time::Duration;

/// Identifier handed out by [`crate::AlertState`]; strictly increasing and
/// never reused within one state instance.
pub type NotificationId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Milestone,
    Success,
    Info,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn label(self) -> &'static str {
        match self {
            NotificationKind::Milestone => "milestone",
            NotificationKind::Success => "success",
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A notification the differ wants to raise, before the state assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDraft {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub priority: Priority,
    pub auto_close: Option<Duration>,
    pub persistent: bool,
}

impl NotificationDraft {
    pub fn new(
        kind: NotificationKind,
        priority: Priority,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            priority,
            auto_close: None,
            persistent: false,
        }
    }

    pub fn auto_close_after(mut self, millis: u64) -> Self {
        self.auto_close = Some(Duration::from_millis(millis));
        self
    }

    pub fn persistent(mut self) -> Self {
        self.persistent = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRecord {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub priority: Priority,
    pub auto_close: Option<Duration>,
    pub persistent: bool,
}

impl NotificationRecord {
    pub(crate) fn from_draft(id: NotificationId, draft: NotificationDraft) -> Self {
        Self {
            id,
            kind: draft.kind,
            title: draft.title,
            message: draft.message,
            priority: draft.priority,
            auto_close: draft.auto_close,
            persistent: draft.persistent,
        }
    }

    /// Delay after which the record should be dismissed automatically.
    /// Persistent records never get one, whatever `auto_close` says.
    pub fn auto_close_timer(&self) -> Option<Duration> {
        if self.persistent {
            None
        } else {
            self.auto_close
        }
    }
}
