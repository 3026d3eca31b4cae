use crate::diff::{completion_draft, diff_snapshots, first_snapshot_drafts};
use crate::state::BatchOutcome;
use crate::{AlertState, Effect, HostUpdate, Msg, NotificationRecord, Priority, SoundCue};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AlertState, msg: Msg) -> (AlertState, Vec<Effect>) {
    let effects = match msg {
        Msg::HostUpdated(host) => apply_host_update(&mut state, host),
        Msg::Dismiss(id) => state
            .remove(id)
            .into_iter()
            .filter_map(cancel_timer)
            .collect(),
        Msg::DismissAll => state.clear().into_iter().filter_map(cancel_timer).collect(),
        Msg::AutoCloseElapsed(id) => {
            // The record may already be gone through a manual dismiss.
            let _ = state.remove(id);
            Vec::new()
        }
        Msg::ToggleSound => {
            let enabled = !state.sound_enabled();
            state.set_sound_enabled(enabled);
            vec![Effect::PersistSoundEnabled(enabled)]
        }
        Msg::RestoreSoundPreference(enabled) => {
            state.set_sound_enabled(enabled);
            Vec::new()
        }
        Msg::Teardown => {
            let _ = state.reset();
            vec![Effect::CancelAllTimers]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn apply_host_update(state: &mut AlertState, host: HostUpdate) -> Vec<Effect> {
    let HostUpdate {
        search_status,
        is_running,
    } = host;
    state.observe_running(is_running);

    let mut effects = Vec::new();

    // Snapshots only count while a run is active.
    if let (true, Some(current)) = (is_running, search_status.live_stats.as_ref()) {
        let drafts = match state.baseline() {
            Some(previous) => diff_snapshots(
                previous,
                current,
                search_status.expanded_nationwide,
                state.config(),
            ),
            None => first_snapshot_drafts(current),
        };
        state.set_baseline(current.clone());

        let has_high_priority = drafts.iter().any(|draft| draft.priority == Priority::High);
        if has_high_priority && state.sound_enabled() {
            effects.push(Effect::PlaySound(SoundCue::Chime));
        }
        let outcome = state.push_batch(drafts);
        effects.extend(timer_effects(outcome));
    }

    if state.observe_completed(search_status.completed) {
        let last_known = search_status
            .live_stats
            .as_ref()
            .or(state.baseline())
            .cloned()
            .unwrap_or_default();
        let draft = completion_draft(&last_known);
        let (title, body) = (draft.title.clone(), draft.message.clone());
        let outcome = state.push_batch(vec![draft]);
        effects.extend(timer_effects(outcome));
        if state.sound_enabled() {
            effects.push(Effect::PlaySound(SoundCue::Completion));
        }
        effects.push(Effect::NotifySystem { title, body });
    }

    effects
}

fn timer_effects(outcome: BatchOutcome) -> impl Iterator<Item = Effect> {
    let cancels = outcome
        .cancel
        .into_iter()
        .map(|id| Effect::CancelAutoClose { id });
    let schedules = outcome
        .schedule
        .into_iter()
        .map(|(id, after)| Effect::ScheduleAutoClose { id, after });
    cancels.chain(schedules)
}

fn cancel_timer(record: NotificationRecord) -> Option<Effect> {
    record
        .auto_close_timer()
        .map(|_| Effect::CancelAutoClose { id: record.id })
}
