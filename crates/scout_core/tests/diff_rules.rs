use pretty_assertions::assert_eq;
use scout_core::{diff_snapshots, AlertConfig, NotificationKind, Priority, ProgressSnapshot};

fn snapshot(processed: u64) -> ProgressSnapshot {
    ProgressSnapshot {
        companies_processed: processed,
        ..ProgressSnapshot::default()
    }
}

fn titles(previous: &ProgressSnapshot, current: &ProgressSnapshot) -> Vec<String> {
    diff_snapshots(previous, current, false, &AlertConfig::default())
        .into_iter()
        .map(|draft| draft.title)
        .collect()
}

#[test]
fn first_processed_companies_start_search_and_hit_first_milestone() {
    let previous = ProgressSnapshot::default();
    let current = ProgressSnapshot {
        companies_processed: 10,
        total_hr_contacts: 12,
        companies_per_minute: 20.0,
        ..ProgressSnapshot::default()
    };

    let drafts = diff_snapshots(&previous, &current, false, &AlertConfig::default());

    assert_eq!(drafts.len(), 2);
    assert_eq!(drafts[0].title, "Search Started!");
    assert_eq!(drafts[0].kind, NotificationKind::Milestone);
    assert_eq!(drafts[0].priority, Priority::Medium);
    assert_eq!(drafts[0].auto_close, None);
    assert!(!drafts[0].persistent);
    assert_eq!(drafts[1].title, "Milestone Reached!");
    assert_eq!(drafts[1].priority, Priority::High);
    assert!(drafts[1].message.starts_with("10 companies analyzed"));
    assert!(drafts[1].message.contains("12 HR contacts"));
}

#[test]
fn each_processed_milestone_fires_only_when_crossed() {
    for (previous, current, expected) in [
        (9, 10, Some("10 companies")),
        (24, 25, Some("25 companies")),
        (40, 55, Some("50 companies")),
        (99, 150, Some("100 companies")),
        (10, 24, None),
        (100, 400, None),
    ] {
        let drafts = diff_snapshots(
            &snapshot(previous),
            &snapshot(current),
            false,
            &AlertConfig::default(),
        );
        let milestones: Vec<_> = drafts
            .iter()
            .filter(|draft| draft.title == "Milestone Reached!")
            .collect();
        match expected {
            Some(prefix) => {
                assert_eq!(milestones.len(), 1, "{previous} -> {current}");
                assert!(milestones[0].message.starts_with(prefix));
            }
            None => assert!(milestones.is_empty(), "{previous} -> {current}"),
        }
    }
}

#[test]
fn crossing_two_milestones_reports_both_in_ascending_order() {
    let drafts = diff_snapshots(&snapshot(5), &snapshot(30), false, &AlertConfig::default());
    let messages: Vec<_> = drafts
        .iter()
        .filter(|draft| draft.title == "Milestone Reached!")
        .map(|draft| draft.message.split(' ').next().unwrap_or_default())
        .collect();
    assert_eq!(messages, vec!["10", "25"]);
}

#[test]
fn repeated_snapshot_raises_nothing() {
    let current = ProgressSnapshot {
        companies_processed: 60,
        total_hr_contacts: 120,
        verified_contacts: 30,
        high_matches: 4,
        excellent_wlb: 2,
        nationwide_companies: 3,
        processing_errors: 9,
        companies_per_minute: 12.0,
        companies_saved: 0,
    };
    assert!(diff_snapshots(&current, &current, true, &AlertConfig::default()).is_empty());
}

#[test]
fn high_match_wording_follows_delta() {
    let previous = ProgressSnapshot {
        companies_processed: 12,
        high_matches: 3,
        ..ProgressSnapshot::default()
    };
    let one_more = ProgressSnapshot {
        high_matches: 4,
        ..previous.clone()
    };
    let two_more = ProgressSnapshot {
        high_matches: 5,
        ..previous.clone()
    };

    let single = diff_snapshots(&previous, &one_more, false, &AlertConfig::default());
    assert_eq!(single.len(), 1);
    assert_eq!(single[0].title, "New High Match!");
    assert!(single[0].message.contains("1 new company"));
    assert!(!single[0].message.contains("matches"));
    assert_eq!(single[0].kind, NotificationKind::Success);
    assert_eq!(single[0].priority, Priority::High);
    assert_eq!(single[0].auto_close.map(|d| d.as_millis()), Some(8_000));

    let plural = diff_snapshots(&previous, &two_more, false, &AlertConfig::default());
    assert_eq!(plural[0].title, "New High Matches!");
    assert!(plural[0].message.contains("2 new high matches"));
}

#[test]
fn excellent_wlb_wording_follows_delta() {
    let previous = snapshot(20);
    let one = ProgressSnapshot {
        excellent_wlb: 1,
        ..previous.clone()
    };
    let three = ProgressSnapshot {
        excellent_wlb: 3,
        ..previous.clone()
    };

    let single = diff_snapshots(&previous, &one, false, &AlertConfig::default());
    assert!(single[0].message.contains("1 company "));
    assert_eq!(single[0].priority, Priority::Medium);
    assert_eq!(single[0].auto_close.map(|d| d.as_millis()), Some(6_000));

    let plural = diff_snapshots(&previous, &three, false, &AlertConfig::default());
    assert!(plural[0].message.contains("3 companies"));
}

#[test]
fn contact_milestones_report_verified_count() {
    let previous = ProgressSnapshot {
        companies_processed: 30,
        total_hr_contacts: 45,
        ..ProgressSnapshot::default()
    };
    let current = ProgressSnapshot {
        total_hr_contacts: 105,
        verified_contacts: 61,
        ..previous.clone()
    };

    let drafts = diff_snapshots(&previous, &current, false, &AlertConfig::default());
    assert_eq!(drafts.len(), 2);
    assert!(drafts.iter().all(|d| d.kind == NotificationKind::Info));
    assert!(drafts[0].message.starts_with("50 HR contacts"));
    assert!(drafts[1].message.starts_with("100 HR contacts"));
    assert!(drafts[1].message.contains("61 of them verified"));
}

#[test]
fn nationwide_expansion_needs_flag_and_first_nationwide_company() {
    let previous = snapshot(30);
    let current = ProgressSnapshot {
        nationwide_companies: 2,
        ..previous.clone()
    };

    assert!(diff_snapshots(&previous, &current, false, &AlertConfig::default()).is_empty());

    let drafts = diff_snapshots(&previous, &current, true, &AlertConfig::default());
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].title, "Expanding Nationwide");
    assert_eq!(drafts[0].auto_close.map(|d| d.as_millis()), Some(5_000));

    let later = ProgressSnapshot {
        nationwide_companies: 5,
        ..current.clone()
    };
    assert!(diff_snapshots(&current, &later, true, &AlertConfig::default()).is_empty());
}

#[test]
fn slowdown_fires_on_sharp_drop_and_refires_while_sinking() {
    let fast = ProgressSnapshot {
        companies_processed: 40,
        companies_per_minute: 9.0,
        ..ProgressSnapshot::default()
    };
    let slow = ProgressSnapshot {
        companies_processed: 41,
        companies_per_minute: 6.0,
        ..ProgressSnapshot::default()
    };
    let slower = ProgressSnapshot {
        companies_processed: 42,
        companies_per_minute: 4.0,
        ..ProgressSnapshot::default()
    };

    let drafts = diff_snapshots(&fast, &slow, false, &AlertConfig::default());
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].kind, NotificationKind::Warning);
    assert_eq!(drafts[0].priority, Priority::Low);
    assert!(drafts[0].message.contains("6.0 companies per minute"));

    assert_eq!(titles(&slow, &slower), vec!["Search Slowing Down"]);
}

#[test]
fn slowdown_ignores_missing_previous_rate_and_small_runs() {
    let no_rate = snapshot(40);
    let slow = ProgressSnapshot {
        companies_processed: 41,
        companies_per_minute: 2.0,
        ..ProgressSnapshot::default()
    };
    assert!(titles(&no_rate, &slow).is_empty());

    let early_previous = ProgressSnapshot {
        companies_processed: 9,
        companies_per_minute: 9.0,
        ..ProgressSnapshot::default()
    };
    let early = ProgressSnapshot {
        companies_processed: 10,
        companies_per_minute: 2.0,
        ..ProgressSnapshot::default()
    };
    // 10 is not "more than 10" processed, but it is the first milestone.
    assert_eq!(titles(&early_previous, &early), vec!["Milestone Reached!"]);
}

#[test]
fn slowdown_constants_are_configurable() {
    let config = AlertConfig {
        slow_drop_ratio: 0.5,
        ..AlertConfig::default()
    };
    let previous = ProgressSnapshot {
        companies_processed: 40,
        companies_per_minute: 9.0,
        ..ProgressSnapshot::default()
    };
    let current = ProgressSnapshot {
        companies_processed: 41,
        companies_per_minute: 6.0,
        ..ProgressSnapshot::default()
    };
    assert!(diff_snapshots(&previous, &current, false, &config).is_empty());
}

#[test]
fn error_burst_needs_three_new_errors() {
    let previous = ProgressSnapshot {
        companies_processed: 30,
        processing_errors: 2,
        ..ProgressSnapshot::default()
    };
    let burst = ProgressSnapshot {
        processing_errors: 6,
        ..previous.clone()
    };
    let trickle = ProgressSnapshot {
        processing_errors: 4,
        ..previous.clone()
    };

    let drafts = diff_snapshots(&previous, &burst, false, &AlertConfig::default());
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].kind, NotificationKind::Error);
    assert_eq!(drafts[0].priority, Priority::Medium);
    assert!(drafts[0].message.starts_with("4 companies failed"));

    assert!(diff_snapshots(&previous, &trickle, false, &AlertConfig::default()).is_empty());
}

#[test]
fn all_rules_fire_in_documented_order() {
    let previous = ProgressSnapshot {
        companies_processed: 0,
        total_hr_contacts: 40,
        companies_per_minute: 50.0,
        ..ProgressSnapshot::default()
    };
    let current = ProgressSnapshot {
        companies_processed: 12,
        total_hr_contacts: 60,
        verified_contacts: 20,
        high_matches: 2,
        excellent_wlb: 1,
        nationwide_companies: 1,
        processing_errors: 3,
        companies_per_minute: 5.0,
        companies_saved: 0,
    };

    let drafts = diff_snapshots(&previous, &current, true, &AlertConfig::default());
    let titles: Vec<_> = drafts.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Search Started!",
            "Milestone Reached!",
            "New High Matches!",
            "Great Work-Life Balance",
            "Contact Milestone",
            "Expanding Nationwide",
            "Search Slowing Down",
            "Processing Errors",
        ]
    );
}
