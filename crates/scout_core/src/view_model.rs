use crate::{NotificationId, NotificationKind, Priority};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlertViewModel {
    /// Most recent first.
    pub notifications: Vec<NotificationView>,
    pub count: usize,
    pub high_priority_count: usize,
    pub sound_enabled: bool,
    pub has_baseline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub priority: Priority,
    pub persistent: bool,
}
