use std::collections::VecDeque;
use std::time::Duration;

use crate::view_model::{AlertViewModel, NotificationView};
use crate::{AlertConfig, NotificationDraft, NotificationId, NotificationRecord, Priority, ProgressSnapshot};

/// Notification engine state for one mounted dashboard.
///
/// Starts with no baseline and an empty list; ids begin at 1.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertState {
    config: AlertConfig,
    /// Most recent first.
    notifications: VecDeque<NotificationRecord>,
    baseline: Option<ProgressSnapshot>,
    running: bool,
    completion_notified: bool,
    sound_enabled: bool,
    next_id: NotificationId,
    dirty: bool,
}

/// Timer bookkeeping produced by inserting a batch.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct BatchOutcome {
    pub(crate) schedule: Vec<(NotificationId, Duration)>,
    pub(crate) cancel: Vec<NotificationId>,
}

impl Default for AlertState {
    fn default() -> Self {
        Self::new(AlertConfig::default())
    }
}

impl AlertState {
    pub fn new(config: AlertConfig) -> Self {
        Self {
            config: config.normalized(),
            notifications: VecDeque::new(),
            baseline: None,
            running: false,
            completion_notified: false,
            sound_enabled: true,
            next_id: 1,
            dirty: false,
        }
    }

    pub fn view(&self) -> AlertViewModel {
        let notifications: Vec<NotificationView> = self
            .notifications
            .iter()
            .map(|record| NotificationView {
                id: record.id,
                kind: record.kind,
                title: record.title.clone(),
                message: record.message.clone(),
                priority: record.priority,
                persistent: record.persistent,
            })
            .collect();
        let high_priority_count = notifications
            .iter()
            .filter(|view| view.priority == Priority::High)
            .count();
        AlertViewModel {
            count: notifications.len(),
            notifications,
            high_priority_count,
            sound_enabled: self.sound_enabled,
            has_baseline: self.baseline.is_some(),
        }
    }

    /// Returns whether anything visible changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn config(&self) -> &AlertConfig {
        &self.config
    }

    pub fn notifications(&self) -> impl Iterator<Item = &NotificationRecord> {
        self.notifications.iter()
    }

    pub fn baseline(&self) -> Option<&ProgressSnapshot> {
        self.baseline.as_ref()
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Records the host's running flag; a fresh run drops the old baseline.
    pub(crate) fn observe_running(&mut self, is_running: bool) {
        if is_running && !self.running {
            self.baseline = None;
        }
        self.running = is_running;
    }

    pub(crate) fn set_baseline(&mut self, snapshot: ProgressSnapshot) {
        self.baseline = Some(snapshot);
    }

    /// Returns true exactly once per `completed` false-to-true transition,
    /// and only once a baseline exists.
    pub(crate) fn observe_completed(&mut self, completed: bool) -> bool {
        if !completed {
            self.completion_notified = false;
            return false;
        }
        if self.completion_notified || self.baseline.is_none() {
            return false;
        }
        self.completion_notified = true;
        true
    }

    pub(crate) fn set_sound_enabled(&mut self, enabled: bool) {
        if self.sound_enabled != enabled {
            self.sound_enabled = enabled;
            self.dirty = true;
        }
    }

    /// Prepends `drafts` in order, then evicts the oldest records beyond the
    /// retention limit.
    pub(crate) fn push_batch(&mut self, drafts: Vec<NotificationDraft>) -> BatchOutcome {
        if drafts.is_empty() {
            return BatchOutcome::default();
        }

        let first_new_id = self.next_id;
        let records: Vec<NotificationRecord> = drafts
            .into_iter()
            .map(|draft| {
                let id = self.next_id;
                self.next_id += 1;
                NotificationRecord::from_draft(id, draft)
            })
            .collect();
        for record in records.into_iter().rev() {
            self.notifications.push_front(record);
        }

        let mut outcome = BatchOutcome::default();
        while self.notifications.len() > self.config.retention_limit {
            let Some(evicted) = self.notifications.pop_back() else {
                break;
            };
            // Records from this batch never had a timer scheduled.
            if evicted.id < first_new_id && evicted.auto_close_timer().is_some() {
                outcome.cancel.push(evicted.id);
            }
        }
        outcome.schedule = self
            .notifications
            .iter()
            .filter(|record| record.id >= first_new_id)
            .filter_map(|record| record.auto_close_timer().map(|after| (record.id, after)))
            .collect();
        self.dirty = true;
        outcome
    }

    pub(crate) fn remove(&mut self, id: NotificationId) -> Option<NotificationRecord> {
        let index = self.notifications.iter().position(|record| record.id == id)?;
        self.dirty = true;
        self.notifications.remove(index)
    }

    pub(crate) fn clear(&mut self) -> Vec<NotificationRecord> {
        if !self.notifications.is_empty() {
            self.dirty = true;
        }
        self.notifications.drain(..).collect()
    }

    /// Back to the freshly constructed shape, keeping config, sound
    /// preference and the id counter.
    pub(crate) fn reset(&mut self) -> Vec<NotificationRecord> {
        self.baseline = None;
        self.running = false;
        self.completion_notified = false;
        self.clear()
    }
}
