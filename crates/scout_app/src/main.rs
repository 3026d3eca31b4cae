mod cli;
mod config;
mod logging;
mod render;
mod replay;

use anyhow::Context;
use clap::Parser;
use scout_engine::{PreferenceStore, RonPreferenceStore, SOUND_PREFERENCE_KEY};

use cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::initialize(cli.log, cli.verbose);

    match cli.command {
        Command::Replay(args) => replay::run(args),
        Command::ToggleSound { prefs } => {
            let store = RonPreferenceStore::at_path(&prefs);
            let enabled = store
                .get_bool(SOUND_PREFERENCE_KEY)
                .with_context(|| format!("reading {}", prefs.display()))?
                .unwrap_or(true);
            store
                .set_bool(SOUND_PREFERENCE_KEY, !enabled)
                .with_context(|| format!("writing {}", prefs.display()))?;
            println!(
                "Notification sound {}",
                if enabled { "muted" } else { "enabled" }
            );
            Ok(())
        }
    }
}
