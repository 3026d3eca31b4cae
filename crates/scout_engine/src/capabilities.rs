//! Best-effort platform capabilities the host calls into.
//!
//! Every call may fail; the host swallows failures so the in-page list keeps
//! working without sound or system notifications.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use scout_core::SoundCue;
use scout_logging::scout_info;

use crate::HostError;

pub trait SoundPlayer: Send + Sync {
    fn play(&self, cue: SoundCue) -> Result<(), HostError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
    /// The user has not been asked yet.
    Undecided,
}

/// OS-level notification capability.
pub trait SystemNotifier: Send + Sync {
    fn permission(&self) -> Permission;
    fn request_permission(&self) -> Result<Permission, HostError>;
    fn show(&self, title: &str, body: &str, icon: &str) -> Result<(), HostError>;
}

/// Whether the dashboard is currently on screen.
pub trait VisibilityProbe: Send + Sync {
    fn is_visible(&self) -> bool;
}

/// Rings the terminal bell: once for a chime, twice for completion.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl SoundPlayer for TerminalBell {
    fn play(&self, cue: SoundCue) -> Result<(), HostError> {
        let bells: &[u8] = match cue {
            SoundCue::Chime => b"\x07",
            SoundCue::Completion => b"\x07\x07",
        };
        let mut stdout = io::stdout().lock();
        stdout.write_all(bells).map_err(HostError::Sound)?;
        stdout.flush().map_err(HostError::Sound)
    }
}

#[derive(Debug, Default)]
pub struct SilentPlayer;

impl SoundPlayer for SilentPlayer {
    fn play(&self, _cue: SoundCue) -> Result<(), HostError> {
        Ok(())
    }
}

/// Stands in for a desktop notification daemon by writing to the log.
#[derive(Debug)]
pub struct LogNotifier {
    permission: Mutex<Permission>,
    grant_on_request: bool,
}

impl LogNotifier {
    pub fn new(permission: Permission, grant_on_request: bool) -> Self {
        Self {
            permission: Mutex::new(permission),
            grant_on_request,
        }
    }
}

impl SystemNotifier for LogNotifier {
    fn permission(&self) -> Permission {
        *self.permission.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn request_permission(&self) -> Result<Permission, HostError> {
        let mut permission = self.permission.lock().unwrap_or_else(PoisonError::into_inner);
        if *permission == Permission::Undecided {
            *permission = if self.grant_on_request {
                Permission::Granted
            } else {
                Permission::Denied
            };
        }
        Ok(*permission)
    }

    fn show(&self, title: &str, body: &str, icon: &str) -> Result<(), HostError> {
        if self.permission() != Permission::Granted {
            return Err(HostError::Notifier("permission not granted".into()));
        }
        scout_info!("System notification [{}] {}: {}", icon, title, body);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedVisibility(pub bool);

impl VisibilityProbe for FixedVisibility {
    fn is_visible(&self) -> bool {
        self.0
    }
}
