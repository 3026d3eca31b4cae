//! Snapshot differ: turns two consecutive progress readings into
//! notification drafts.
//!
//! Every rule looks at the pair, never at the current reading alone, so a
//! poll that repeats the previous numbers raises nothing.

use crate::{AlertConfig, NotificationDraft, NotificationKind, Priority, ProgressSnapshot};

/// Derives the notifications raised by moving from `previous` to `current`.
///
/// Rules are independent; the output keeps this order: search started,
/// processed milestones (ascending), high matches, excellent work-life
/// balance, contact milestones (ascending), nationwide expansion, slowdown,
/// error burst.
pub fn diff_snapshots(
    previous: &ProgressSnapshot,
    current: &ProgressSnapshot,
    expanded_nationwide: bool,
    config: &AlertConfig,
) -> Vec<NotificationDraft> {
    let mut drafts = Vec::new();

    if let Some(draft) = search_started(previous, current) {
        drafts.push(draft);
    }

    for threshold in crossed(
        &config.processed_milestones,
        previous.companies_processed,
        current.companies_processed,
    ) {
        drafts.push(NotificationDraft::new(
            NotificationKind::Milestone,
            Priority::High,
            "Milestone Reached!",
            format!(
                "{threshold} companies analyzed, {} HR contacts found so far",
                current.total_hr_contacts
            ),
        ));
    }

    if current.high_matches > previous.high_matches {
        let delta = current.high_matches - previous.high_matches;
        let (title, message) = if delta == 1 {
            (
                "New High Match!",
                "Found 1 new company with a match score of 80% or more".to_string(),
            )
        } else {
            (
                "New High Matches!",
                format!("Found {delta} new high matches with a match score of 80% or more"),
            )
        };
        drafts.push(
            NotificationDraft::new(NotificationKind::Success, Priority::High, title, message)
                .auto_close_after(config.high_match_close_ms),
        );
    }

    if current.excellent_wlb > previous.excellent_wlb {
        let delta = current.excellent_wlb - previous.excellent_wlb;
        let noun = if delta == 1 { "company" } else { "companies" };
        drafts.push(
            NotificationDraft::new(
                NotificationKind::Success,
                Priority::Medium,
                "Great Work-Life Balance",
                format!("Found {delta} {noun} with excellent work-life balance (8+)"),
            )
            .auto_close_after(config.excellent_wlb_close_ms),
        );
    }

    for threshold in crossed(
        &config.contact_milestones,
        previous.total_hr_contacts,
        current.total_hr_contacts,
    ) {
        drafts.push(NotificationDraft::new(
            NotificationKind::Info,
            Priority::Medium,
            "Contact Milestone",
            format!(
                "{threshold} HR contacts found, {} of them verified",
                current.verified_contacts
            ),
        ));
    }

    if expanded_nationwide
        && current.nationwide_companies > 0
        && previous.nationwide_companies == 0
    {
        drafts.push(
            NotificationDraft::new(
                NotificationKind::Info,
                Priority::Medium,
                "Expanding Nationwide",
                "Local results were thin, so the search now covers companies nationwide",
            )
            .auto_close_after(config.nationwide_close_ms),
        );
    }

    if is_slowing_down(previous, current, config) {
        drafts.push(
            NotificationDraft::new(
                NotificationKind::Warning,
                Priority::Low,
                "Search Slowing Down",
                format!(
                    "Processing rate dropped to {:.1} companies per minute",
                    current.companies_per_minute
                ),
            )
            .auto_close_after(config.slowdown_close_ms),
        );
    }

    let new_errors = current
        .processing_errors
        .saturating_sub(previous.processing_errors);
    if new_errors >= config.error_burst_min {
        drafts.push(NotificationDraft::new(
            NotificationKind::Error,
            Priority::Medium,
            "Processing Errors",
            format!("{new_errors} companies failed to process since the last update"),
        ));
    }

    drafts
}

/// Drafts for the first snapshot of a run, which only becomes the baseline.
///
/// Before any snapshot the processed count is taken as zero, so the only rule
/// that can fire is "search started".
pub fn first_snapshot_drafts(current: &ProgressSnapshot) -> Vec<NotificationDraft> {
    search_started(&ProgressSnapshot::default(), current)
        .into_iter()
        .collect()
}

/// The persistent summary raised once a run completes.
pub fn completion_draft(last_known: &ProgressSnapshot) -> NotificationDraft {
    NotificationDraft::new(
        NotificationKind::Success,
        Priority::High,
        "Search Complete!",
        format!(
            "Saved {} companies with {} HR contacts",
            last_known.companies_saved, last_known.total_hr_contacts
        ),
    )
    .persistent()
}

fn search_started(
    previous: &ProgressSnapshot,
    current: &ProgressSnapshot,
) -> Option<NotificationDraft> {
    (previous.companies_processed == 0 && current.companies_processed > 0).then(|| {
        NotificationDraft::new(
            NotificationKind::Milestone,
            Priority::Medium,
            "Search Started!",
            "AI is analyzing companies and looking for HR contacts",
        )
    })
}

// Not a one-shot threshold: this refires on every tick the rate keeps sinking.
fn is_slowing_down(
    previous: &ProgressSnapshot,
    current: &ProgressSnapshot,
    config: &AlertConfig,
) -> bool {
    let rate = current.companies_per_minute;
    rate < config.slow_rate_ceiling
        && current.companies_processed > config.slow_min_processed
        && rate < config.slow_drop_ratio * previous.companies_per_minute
}

/// Thresholds with `previous < threshold <= current`, in list order.
fn crossed(thresholds: &[u64], previous: u64, current: u64) -> impl Iterator<Item = u64> + '_ {
    thresholds
        .iter()
        .copied()
        .filter(move |&threshold| previous < threshold && threshold <= current)
}
