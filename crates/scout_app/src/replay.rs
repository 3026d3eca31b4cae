use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use chrono::Local;
use scout_core::{AlertViewModel, HostUpdate, NotificationId, NotificationView};
use scout_engine::{
    AlertHost, FixedVisibility, HostCapabilities, LogNotifier, Permission, RonPreferenceStore,
    SilentPlayer, SoundPlayer, TerminalBell,
};
use scout_logging::{scout_info, scout_warn};

use crate::cli::ReplayArgs;
use crate::{config, render};

pub fn run(args: ReplayArgs) -> anyhow::Result<()> {
    let alert_config = config::load(args.config.as_deref())?;
    let host = AlertHost::start(alert_config, capabilities(&args))
        .context("starting notification host")?;

    let reader: Box<dyn BufRead> = if args.input.as_os_str() == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(&args.input)
            .with_context(|| format!("opening {}", args.input.display()))?;
        Box::new(BufReader::new(file))
    };

    let mut session = ReplaySession::new(host);
    let interval = Duration::from_millis(args.interval_ms);
    for (index, line) in reader.lines().enumerate() {
        let line = line.context("reading host updates")?;
        let Some(update) = parse_line(index + 1, &line) else {
            continue;
        };
        session.feed(update);
        thread::sleep(interval);
    }

    if args.linger_ms > 0 {
        thread::sleep(Duration::from_millis(args.linger_ms));
        session.drain_timers();
    }

    let host = session.finish();
    print!("{}", render::summary(&host.view()));
    host.shutdown();
    Ok(())
}

fn capabilities(args: &ReplayArgs) -> HostCapabilities {
    let sound: Box<dyn SoundPlayer> = if args.mute {
        Box::new(SilentPlayer)
    } else {
        Box::new(TerminalBell)
    };
    HostCapabilities {
        preferences: Box::new(RonPreferenceStore::at_path(&args.prefs)),
        sound,
        notifier: Box::new(LogNotifier::new(
            Permission::Undecided,
            !args.deny_notifications,
        )),
        visibility: Box::new(FixedVisibility(!args.hidden)),
    }
}

/// Decodes one JSON line; blank lines and malformed updates are skipped.
fn parse_line(line_no: usize, line: &str) -> Option<HostUpdate> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with("//") {
        return None;
    }
    match serde_json::from_str(trimmed) {
        Ok(update) => Some(update),
        Err(err) => {
            scout_warn!("Skipping malformed update on line {}: {}", line_no, err);
            None
        }
    }
}

/// Prints each notification the first time it shows up.
struct ReplaySession {
    host: AlertHost,
    last_printed: NotificationId,
}

impl ReplaySession {
    fn new(host: AlertHost) -> Self {
        Self {
            host,
            last_printed: 0,
        }
    }

    /// Feeds one update and prints what it raised. Returns the printed ids.
    fn feed(&mut self, update: HostUpdate) -> Vec<NotificationId> {
        if !self.host.receive(update) {
            return Vec::new();
        }
        let view = self.host.view();
        let fresh = self.take_unprinted(&view);
        let stamp = Local::now().format("%H:%M:%S");
        for notification in &fresh {
            println!("[{stamp}] {}", render::notification_line(notification));
        }
        fresh.iter().map(|n| n.id).collect()
    }

    fn drain_timers(&mut self) {
        if self.host.pump() {
            scout_info!("{} notification(s) left after auto-close", self.host.view().count);
        }
    }

    /// Records not shown yet, oldest first. Ids only grow, so the largest id
    /// seen so far marks everything already printed.
    fn take_unprinted<'a>(&mut self, view: &'a AlertViewModel) -> Vec<&'a NotificationView> {
        let mut fresh: Vec<&NotificationView> = view
            .notifications
            .iter()
            .filter(|n| n.id > self.last_printed)
            .collect();
        fresh.sort_by_key(|n| n.id);
        if let Some(newest) = fresh.last() {
            self.last_printed = newest.id;
        }
        fresh
    }

    fn finish(self) -> AlertHost {
        self.host
    }
}
