use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};

/// One polled reading of the backend's search-progress counters.
///
/// Decoding is lenient: absent, `null`, negative or non-numeric fields read as
/// zero so a partial payload never stops the notification pipeline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressSnapshot {
    #[serde(rename = "companiesProcessed", deserialize_with = "lenient_count")]
    pub companies_processed: u64,
    #[serde(rename = "totalHRContacts", deserialize_with = "lenient_count")]
    pub total_hr_contacts: u64,
    #[serde(rename = "verifiedContacts", deserialize_with = "lenient_count")]
    pub verified_contacts: u64,
    /// Companies with an AI match score of 80 or more.
    #[serde(rename = "highMatches", deserialize_with = "lenient_count")]
    pub high_matches: u64,
    /// Companies with a work-life-balance score of 8 or more.
    #[serde(rename = "excellentWLB", deserialize_with = "lenient_count")]
    pub excellent_wlb: u64,
    #[serde(rename = "nationwideCompanies", deserialize_with = "lenient_count")]
    pub nationwide_companies: u64,
    #[serde(rename = "processingErrors", deserialize_with = "lenient_count")]
    pub processing_errors: u64,
    #[serde(rename = "companiesPerMinute", deserialize_with = "lenient_rate")]
    pub companies_per_minute: f64,
    /// Final saved count; only meaningful once the run has completed.
    #[serde(rename = "companiesSaved", deserialize_with = "lenient_count")]
    pub companies_saved: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchStatus {
    #[serde(rename = "liveStats")]
    pub live_stats: Option<ProgressSnapshot>,
    #[serde(deserialize_with = "lenient_flag")]
    pub completed: bool,
    #[serde(rename = "expandedNationwide", deserialize_with = "lenient_flag")]
    pub expanded_nationwide: bool,
}

/// Everything the host hands over on one render.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HostUpdate {
    #[serde(rename = "searchStatus")]
    pub search_status: SearchStatus,
    #[serde(rename = "isRunning", deserialize_with = "lenient_flag")]
    pub is_running: bool,
}

impl HostUpdate {
    pub fn running(live_stats: ProgressSnapshot) -> Self {
        Self {
            search_status: SearchStatus {
                live_stats: Some(live_stats),
                ..SearchStatus::default()
            },
            is_running: true,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientNumber {
    // Tried first so large integer counts stay exact.
    Count(u64),
    Number(f64),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientBool {
    Flag(bool),
    Other(IgnoredAny),
}

fn lenient_rate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LenientNumber::deserialize(deserializer)? {
        LenientNumber::Count(count) => count as f64,
        LenientNumber::Number(value) if value.is_finite() && value > 0.0 => value,
        LenientNumber::Number(_) | LenientNumber::Other(_) => 0.0,
    })
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LenientNumber::deserialize(deserializer)? {
        LenientNumber::Count(count) => count,
        // `as` saturates and truncates toward zero.
        LenientNumber::Number(value) if value.is_finite() && value > 0.0 => value as u64,
        LenientNumber::Number(_) | LenientNumber::Other(_) => 0,
    })
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LenientBool::deserialize(deserializer)? {
        LenientBool::Flag(flag) => flag,
        LenientBool::Other(_) => false,
    })
}
