use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("preference directory missing or not writable: {0}")]
    Directory(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Failures of host-side capabilities. None of these reach the user; the
/// host logs them and carries on.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("timer runtime unavailable: {0}")]
    Runtime(#[source] io::Error),
    #[error("sound playback failed: {0}")]
    Sound(#[source] io::Error),
    #[error("system notification unavailable: {0}")]
    Notifier(String),
    #[error("malformed preference file: {0}")]
    PreferenceFormat(String),
    #[error(transparent)]
    Persist(#[from] PersistError),
}
