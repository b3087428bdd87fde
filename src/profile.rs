//! Baby profile input and age derivation.
//!
//! Every age-gated rule in the engine keys off a single integer age in
//! months computed here. The caller guarantees `birth_date` is a valid
//! instant not in the future; the engine does not validate dates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Average month length used across all age-gated rules: 30.44 days.
/// Calendar-month arithmetic would shift band boundaries between scorers,
/// so this convention must stay consistent everywhere.
const AVG_MONTH_MS: f64 = 1000.0 * 60.0 * 60.0 * 24.0 * 30.44;

/// The baby a product is being evaluated for.
///
/// All list fields are normalized lowercase-ish tags from the profile form
/// ("reflux", "brain_development", "organic_only", ...); matching is
/// case-insensitive on this side regardless.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BabyProfile {
    pub birth_date: DateTime<Utc>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub health_conditions: Vec<String>,
    #[serde(default)]
    pub feeding_goals: Vec<String>,
    #[serde(default)]
    pub dietary_preferences: Vec<String>,
}

impl BabyProfile {
    /// Age in whole months at the given evaluation instant.
    pub fn age_in_months_at(&self, now: DateTime<Utc>) -> i32 {
        age_in_months(self.birth_date, now)
    }
}

/// Elapsed whole months between `birth_date` and `now`, floored, using the
/// average-month convention.
pub fn age_in_months(birth_date: DateTime<Utc>, now: DateTime<Utc>) -> i32 {
    let elapsed_ms = (now - birth_date).num_milliseconds() as f64;
    (elapsed_ms / AVG_MONTH_MS).floor() as i32
}

/// Convenience wrapper reading the wall clock once, for callers outside the
/// pure evaluation path.
pub fn age_in_months_now(birth_date: DateTime<Utc>) -> i32 {
    age_in_months(birth_date, Utc::now())
}
