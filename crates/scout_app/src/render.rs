use scout_core::{AlertViewModel, NotificationView, Priority};

pub fn notification_line(view: &NotificationView) -> String {
    let priority = match view.priority {
        Priority::High => "HIGH",
        Priority::Medium => "MED ",
        Priority::Low => "LOW ",
    };
    let pin = if view.persistent { " (pinned)" } else { "" };
    format!(
        "#{:<3} {} {:<9} {}: {}{}",
        view.id,
        priority,
        view.kind.label(),
        view.title,
        view.message,
        pin
    )
}

pub fn summary(view: &AlertViewModel) -> String {
    let mut out = format!(
        "{} notification(s), {} high priority, sound {}\n",
        view.count,
        view.high_priority_count,
        if view.sound_enabled { "on" } else { "off" }
    );
    for notification in &view.notifications {
        out.push_str("  ");
        out.push_str(&notification_line(notification));
        out.push('\n');
    }
    out
}
