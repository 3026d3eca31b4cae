//! Scout core: pure notification state machine and view-model helpers.
mod config;
pub mod diff;
mod effect;
mod msg;
mod notification;
mod snapshot;
mod state;
mod update;
mod view_model;

pub use config::AlertConfig;
pub use diff::{completion_draft, diff_snapshots, first_snapshot_drafts};
pub use effect::{Effect, SoundCue};
pub use msg::Msg;
pub use notification::{
    NotificationDraft, NotificationId, NotificationKind, NotificationRecord, Priority,
};
pub use snapshot::{HostUpdate, ProgressSnapshot, SearchStatus};
pub use state::AlertState;
pub use update::update;
pub use view_model::{AlertViewModel, NotificationView};
