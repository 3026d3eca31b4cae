use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(name = "scout")]
#[command(about = "Replay job-search progress and show the notifications it raises")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::File, global = true)]
    pub log: LogDestination,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replay a recorded stream of host updates (JSON lines, `-` for stdin).
    Replay(ReplayArgs),
    /// Flip the stored notification-sound preference.
    ToggleSound {
        #[arg(long, default_value = ".scout_prefs.ron")]
        prefs: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct ReplayArgs {
    pub input: PathBuf,

    /// Delay between polls.
    #[arg(long, default_value_t = 500)]
    pub interval_ms: u64,

    /// Keep running after the last update so auto-close timers can fire.
    #[arg(long, default_value_t = 0)]
    pub linger_ms: u64,

    /// RON file overriding the default alert configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = ".scout_prefs.ron")]
    pub prefs: PathBuf,

    /// Never ring the terminal bell, whatever the stored preference says.
    #[arg(long)]
    pub mute: bool,

    /// Pretend the dashboard is in a background tab.
    #[arg(long)]
    pub hidden: bool,

    /// Answer "deny" when asked for system notification permission.
    #[arg(long)]
    pub deny_notifications: bool,
}
