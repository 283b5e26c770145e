//! Configuration for the date-overlap validator

use serde::Deserialize;

/// Tuning knobs for [`DateOverlapValidator`](crate::DateOverlapValidator).
///
/// All fields have serde defaults so host applications can embed this
/// struct in their own layered configuration files and override only
/// what they need. Day semantics are not configurable: every date in
/// the engine is a timezone-free calendar day.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidatorConfig {
    /// How far (in days) the alternative-date search walks away from the
    /// candidate start before giving up
    #[serde(default = "default_search_horizon_days")]
    pub search_horizon_days: u32,
    /// Distance between consecutive candidate starts during the search
    #[serde(default = "default_search_step_days")]
    pub search_step_days: u32,
    /// Default cap on returned alternative ranges
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

fn default_search_horizon_days() -> u32 {
    365
}

fn default_search_step_days() -> u32 {
    1
}

fn default_max_suggestions() -> usize {
    3
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            search_horizon_days: default_search_horizon_days(),
            search_step_days: default_search_step_days(),
            max_suggestions: default_max_suggestions(),
        }
    }
}
