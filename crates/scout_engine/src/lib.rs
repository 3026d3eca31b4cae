//! Scout engine: host bindings that execute the core's effects.
mod capabilities;
mod error;
mod host;
mod persist;
mod prefs;
mod timers;

pub use capabilities::{
    FixedVisibility, LogNotifier, Permission, SilentPlayer, SoundPlayer, SystemNotifier,
    TerminalBell, VisibilityProbe,
};
pub use error::{HostError, PersistError};
pub use host::{AlertHost, HostCapabilities, NOTIFICATION_ICON, SOUND_PREFERENCE_KEY};
pub use persist::{ensure_dir, AtomicFileWriter};
pub use prefs::{MemoryPreferenceStore, PreferenceStore, RonPreferenceStore};
pub use timers::TimerService;
