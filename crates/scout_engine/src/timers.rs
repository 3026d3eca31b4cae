use std::collections::HashMap;
use std::sync::{mpsc, Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use scout_core::NotificationId;
use scout_logging::scout_trace;
use tokio_util::sync::CancellationToken;

use crate::HostError;

enum TimerCommand {
    Schedule { id: NotificationId, after: Duration },
    Cancel { id: NotificationId },
    CancelAll,
}

type PendingTimers = Arc<Mutex<HashMap<NotificationId, CancellationToken>>>;

/// Auto-dismiss timers, one tokio task per notification.
///
/// Timers are addressed by notification id. Expired ids are queued for the
/// host thread to pick up with [`TimerService::try_recv_expired`]. Dropping
/// the service cancels everything still pending.
pub struct TimerService {
    cmd_tx: mpsc::Sender<TimerCommand>,
    expired_rx: mpsc::Receiver<NotificationId>,
    pending: PendingTimers,
    root: CancellationToken,
}

impl TimerService {
    pub fn new() -> Result<Self, HostError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("scout-timers")
            .enable_time()
            .build()
            .map_err(HostError::Runtime)?;

        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (expired_tx, expired_rx) = mpsc::channel();
        let pending: PendingTimers = Arc::default();
        let root = CancellationToken::new();

        let loop_pending = pending.clone();
        let loop_root = root.clone();
        thread::Builder::new()
            .name("scout-timer-commands".into())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    handle_command(&runtime, command, &loop_pending, &loop_root, &expired_tx);
                }
                // Handle dropped: nothing may fire after this point.
                loop_root.cancel();
            })
            .map_err(HostError::Runtime)?;

        Ok(Self {
            cmd_tx,
            expired_rx,
            pending,
            root,
        })
    }

    pub fn schedule(&self, id: NotificationId, after: Duration) {
        let _ = self.cmd_tx.send(TimerCommand::Schedule { id, after });
    }

    pub fn cancel(&self, id: NotificationId) {
        let _ = self.cmd_tx.send(TimerCommand::Cancel { id });
    }

    pub fn cancel_all(&self) {
        let _ = self.cmd_tx.send(TimerCommand::CancelAll);
    }

    pub fn try_recv_expired(&self) -> Option<NotificationId> {
        self.expired_rx.try_recv().ok()
    }

    /// Number of timers scheduled and not yet expired or cancelled.
    pub fn pending(&self) -> usize {
        lock(&self.pending).len()
    }
}

impl Drop for TimerService {
    fn drop(&mut self) {
        self.root.cancel();
    }
}

fn handle_command(
    runtime: &tokio::runtime::Runtime,
    command: TimerCommand,
    pending: &PendingTimers,
    root: &CancellationToken,
    expired_tx: &mpsc::Sender<NotificationId>,
) {
    match command {
        TimerCommand::Schedule { id, after } => {
            let token = root.child_token();
            if let Some(replaced) = lock(pending).insert(id, token.clone()) {
                replaced.cancel();
            }
            scout_trace!("Scheduled auto-close for {} in {:?}", id, after);

            let pending = pending.clone();
            let expired_tx = expired_tx.clone();
            runtime.spawn(async move {
                tokio::select! {
                    _ = token.cancelled() => {}
                    _ = tokio::time::sleep(after) => {
                        lock(&pending).remove(&id);
                        let _ = expired_tx.send(id);
                    }
                }
            });
        }
        TimerCommand::Cancel { id } => {
            if let Some(token) = lock(pending).remove(&id) {
                token.cancel();
                scout_trace!("Cancelled auto-close for {}", id);
            }
        }
        TimerCommand::CancelAll => {
            let mut pending = lock(pending);
            scout_trace!("Cancelling {} auto-close timers", pending.len());
            for (_, token) in pending.drain() {
                token.cancel();
            }
        }
    }
}

fn lock(
    pending: &PendingTimers,
) -> std::sync::MutexGuard<'_, HashMap<NotificationId, CancellationToken>> {
    pending.lock().unwrap_or_else(PoisonError::into_inner)
}
