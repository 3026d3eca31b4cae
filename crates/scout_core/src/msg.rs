use crate::{HostUpdate, NotificationId};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Host re-rendered with fresh search status (usually a new poll).
    HostUpdated(HostUpdate),
    /// User closed one notification.
    Dismiss(NotificationId),
    /// User cleared the whole list.
    DismissAll,
    /// An auto-dismiss timer expired.
    AutoCloseElapsed(NotificationId),
    /// User clicked the sound toggle.
    ToggleSound,
    /// Restore the stored sound preference without writing it back.
    RestoreSoundPreference(bool),
    /// The host is going away; drop everything and cancel timers.
    Teardown,
    /// Fallback for placeholder wiring.
    NoOp,
}
