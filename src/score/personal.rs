//! Fit with the baby's health conditions, feeding goals, and dietary
//! preferences. Every adjustment is an independent bonus or penalty gated
//! by tag membership; the two preference rules are two-way (reward when
//! satisfied, penalize when violated).

use super::{clamp_score, NEUTRAL_BASELINE};
use crate::product::ProductRecord;
use crate::profile::BabyProfile;

const REFLUX_FAT_LIMIT_G: f64 = 3.0;
const REFLUX_BONUS: i32 = 10;
const CONSTIPATION_FIBER_MIN_G: f64 = 3.0;
const CONSTIPATION_BONUS: i32 = 25;
const ECZEMA_BONUS: i32 = 15;

const BRAIN_IRON_MIN_MG: f64 = 2.0;
const BRAIN_BONUS: i32 = 15;
const WEIGHT_GAIN_KCAL_MIN: f64 = 100.0;
const WEIGHT_GAIN_BONUS: i32 = 20;
const DIGESTIVE_FIBER_MIN_G: f64 = 2.0;
const DIGESTIVE_BONUS: i32 = 20;

const ORGANIC_BONUS: i32 = 15;
const ORGANIC_PENALTY: i32 = 30;
const NO_ARTIFICIAL_BONUS: i32 = 20;
const NO_ARTIFICIAL_PENALTY: i32 = 25;

/// Allergen tags that commonly aggravate eczema.
const ECZEMA_TRIGGERS: [&str; 3] = ["dairy", "eggs", "nuts"];

/// Score how well the product matches this particular baby.
pub fn score(product: &ProductRecord, profile: &BabyProfile) -> i32 {
    let n = product.nutrients_or_default();
    let mut score = NEUTRAL_BASELINE;

    if has_tag(&profile.health_conditions, "reflux") && n.fat < REFLUX_FAT_LIMIT_G {
        score += REFLUX_BONUS;
    }
    if has_tag(&profile.health_conditions, "constipation") && n.fiber >= CONSTIPATION_FIBER_MIN_G {
        score += CONSTIPATION_BONUS;
    }
    if has_tag(&profile.health_conditions, "eczema") && !has_eczema_trigger(&product.allergens) {
        score += ECZEMA_BONUS;
    }

    if has_tag(&profile.feeding_goals, "brain_development")
        && n.iron.is_some_and(|v| v >= BRAIN_IRON_MIN_MG)
    {
        score += BRAIN_BONUS;
    }
    if has_tag(&profile.feeding_goals, "weight_gain") && n.energy_kcal >= WEIGHT_GAIN_KCAL_MIN {
        score += WEIGHT_GAIN_BONUS;
    }
    if has_tag(&profile.feeding_goals, "digestive_health") && n.fiber >= DIGESTIVE_FIBER_MIN_G {
        score += DIGESTIVE_BONUS;
    }

    if has_tag(&profile.dietary_preferences, "organic_only") {
        if product.ingredient_mentions("organic") {
            score += ORGANIC_BONUS;
        } else {
            score -= ORGANIC_PENALTY;
        }
    }
    if has_tag(&profile.dietary_preferences, "no_artificial_additives") {
        if has_artificial_additive(&product.additives) {
            score -= NO_ARTIFICIAL_PENALTY;
        } else {
            score += NO_ARTIFICIAL_BONUS;
        }
    }

    clamp_score(score)
}

fn has_tag(tags: &[String], wanted: &str) -> bool {
    tags.iter().any(|t| t.trim().eq_ignore_ascii_case(wanted))
}

fn has_eczema_trigger(allergens: &[String]) -> bool {
    allergens.iter().any(|tag| {
        let tag = tag.trim().to_lowercase();
        ECZEMA_TRIGGERS.contains(&tag.as_str())
    })
}

/// "Artificial" in the name, or anything that looks like an E-number.
fn has_artificial_additive(additives: &[String]) -> bool {
    additives.iter().any(|a| {
        let a = a.trim().to_lowercase();
        a.contains("artificial") || a.starts_with('e')
    })
}
