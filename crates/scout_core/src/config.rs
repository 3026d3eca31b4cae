use serde::{Deserialize, Serialize};

/// Tunables for notification derivation and retention.
///
/// `Default` reproduces the dashboard's stock behaviour. Every field is
/// optional when loaded from a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Maximum number of retained notifications.
    pub retention_limit: usize,
    /// Processed-company counts that raise a one-off milestone.
    pub processed_milestones: Vec<u64>,
    /// HR-contact counts that raise a one-off milestone.
    pub contact_milestones: Vec<u64>,
    pub high_match_close_ms: u64,
    pub excellent_wlb_close_ms: u64,
    pub nationwide_close_ms: u64,
    pub slowdown_close_ms: u64,
    /// Slowdown only considered below this rate (companies per minute).
    pub slow_rate_ceiling: f64,
    /// Slowdown only considered once more than this many companies are done.
    pub slow_min_processed: u64,
    /// Slowdown fires when the rate falls under this fraction of the previous rate.
    pub slow_drop_ratio: f64,
    /// Smallest per-tick increase in processing errors that raises an alert.
    pub error_burst_min: u64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            retention_limit: 20,
            processed_milestones: vec![10, 25, 50, 100],
            contact_milestones: vec![50, 100, 200, 500],
            high_match_close_ms: 8_000,
            excellent_wlb_close_ms: 6_000,
            nationwide_close_ms: 5_000,
            slowdown_close_ms: 10_000,
            slow_rate_ceiling: 10.0,
            slow_min_processed: 10,
            slow_drop_ratio: 0.7,
            error_burst_min: 3,
        }
    }
}

impl AlertConfig {
    /// Sorts and dedupes milestone lists so crossings are reported in
    /// ascending order, and keeps at least one retained record.
    pub fn normalized(mut self) -> Self {
        self.processed_milestones.sort_unstable();
        self.processed_milestones.dedup();
        self.contact_milestones.sort_unstable();
        self.contact_milestones.dedup();
        self.retention_limit = self.retention_limit.max(1);
        self.error_burst_min = self.error_burst_min.max(1);
        self
    }
}
