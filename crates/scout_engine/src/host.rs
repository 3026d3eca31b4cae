use scout_core::{update, AlertConfig, AlertState, AlertViewModel, Effect, HostUpdate, Msg};
use scout_logging::{scout_debug, scout_info, scout_warn, set_poll_tick};

use crate::capabilities::{
    FixedVisibility, LogNotifier, Permission, SilentPlayer, SoundPlayer, SystemNotifier,
    VisibilityProbe,
};
use crate::prefs::{MemoryPreferenceStore, PreferenceStore};
use crate::timers::TimerService;
use crate::HostError;

/// Preference key holding the sound toggle.
pub const SOUND_PREFERENCE_KEY: &str = "notificationSoundEnabled";
/// Icon name passed along with system notifications.
pub const NOTIFICATION_ICON: &str = "job-scout";

/// The platform services an [`AlertHost`] drives.
pub struct HostCapabilities {
    pub preferences: Box<dyn PreferenceStore>,
    pub sound: Box<dyn SoundPlayer>,
    pub notifier: Box<dyn SystemNotifier>,
    pub visibility: Box<dyn VisibilityProbe>,
}

impl HostCapabilities {
    /// In-memory preferences, no sound, no system notifications.
    pub fn silent() -> Self {
        Self {
            preferences: Box::new(MemoryPreferenceStore::new()),
            sound: Box::new(SilentPlayer),
            notifier: Box::new(LogNotifier::new(Permission::Denied, false)),
            visibility: Box::new(FixedVisibility(true)),
        }
    }
}

/// Runs the pure notification state machine against real timers and
/// platform capabilities.
///
/// One host corresponds to one mounted dashboard: it starts with no baseline
/// and an empty list, and tearing it down cancels every pending timer.
pub struct AlertHost {
    state: AlertState,
    timers: TimerService,
    caps: HostCapabilities,
    tick: u64,
}

impl AlertHost {
    /// Builds the host, restores the sound preference and asks for system
    /// notification permission if the user has not decided yet.
    pub fn start(config: AlertConfig, caps: HostCapabilities) -> Result<Self, HostError> {
        let mut host = Self {
            state: AlertState::new(config),
            timers: TimerService::new()?,
            caps,
            tick: 0,
        };

        match host.caps.preferences.get_bool(SOUND_PREFERENCE_KEY) {
            Ok(Some(enabled)) => {
                host.dispatch(Msg::RestoreSoundPreference(enabled));
            }
            Ok(None) => {}
            Err(err) => scout_warn!("Could not read sound preference: {}", err),
        }

        if host.caps.notifier.permission() == Permission::Undecided {
            match host.caps.notifier.request_permission() {
                Ok(permission) => scout_debug!("Notification permission: {:?}", permission),
                Err(err) => scout_debug!("Notification permission request failed: {}", err),
            }
        }

        Ok(host)
    }

    /// Feeds one host render (typically a new poll) through the engine.
    /// Returns whether the view changed.
    pub fn receive(&mut self, host_update: HostUpdate) -> bool {
        self.tick += 1;
        set_poll_tick(self.tick);
        let expired = self.pump();
        self.dispatch(Msg::HostUpdated(host_update)) || expired
    }

    /// Applies a message and executes its effects. Returns whether the view
    /// changed.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        for effect in effects {
            self.run_effect(effect);
        }
        self.state.consume_dirty()
    }

    /// Removes notifications whose auto-close timer has fired.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Some(id) = self.timers.try_recv_expired() {
            changed |= self.dispatch(Msg::AutoCloseElapsed(id));
        }
        changed
    }

    pub fn view(&self) -> AlertViewModel {
        self.state.view()
    }

    pub fn state(&self) -> &AlertState {
        &self.state
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// Tears the dashboard down: clears the list and cancels all timers.
    pub fn shutdown(mut self) {
        self.dispatch(Msg::Teardown);
        scout_info!("Notification host shut down after {} polls", self.tick);
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::PlaySound(cue) => {
                if let Err(err) = self.caps.sound.play(cue) {
                    scout_debug!("Dropped {:?} sound: {}", cue, err);
                }
            }
            Effect::ScheduleAutoClose { id, after } => self.timers.schedule(id, after),
            Effect::CancelAutoClose { id } => self.timers.cancel(id),
            Effect::CancelAllTimers => self.timers.cancel_all(),
            Effect::PersistSoundEnabled(enabled) => {
                if let Err(err) = self.caps.preferences.set_bool(SOUND_PREFERENCE_KEY, enabled) {
                    scout_warn!("Could not store sound preference: {}", err);
                }
            }
            Effect::NotifySystem { title, body } => self.notify_system(&title, &body),
        }
    }

    fn notify_system(&self, title: &str, body: &str) {
        if self.caps.visibility.is_visible() {
            scout_debug!("Dashboard visible; skipping system notification");
            return;
        }
        if self.caps.notifier.permission() != Permission::Granted {
            scout_debug!("System notification permission not granted");
            return;
        }
        if let Err(err) = self.caps.notifier.show(title, body, NOTIFICATION_ICON) {
            scout_debug!("System notification failed: {}", err);
        }
    }
}

impl Drop for AlertHost {
    fn drop(&mut self) {
        self.timers.cancel_all();
    }
}
