use std::time::Duration;

use crate::NotificationId;

/// Side effects requested by [`crate::update`]; the host executes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    PlaySound(SoundCue),
    ScheduleAutoClose { id: NotificationId, after: Duration },
    CancelAutoClose { id: NotificationId },
    CancelAllTimers,
    PersistSoundEnabled(bool),
    /// Ask for an OS-level notification. The host decides whether the page is
    /// hidden and permission is granted; failures are dropped.
    NotifySystem { title: String, body: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Short chime for a batch that holds a high-priority notification.
    Chime,
    /// Louder cue for a finished search.
    Completion,
}
