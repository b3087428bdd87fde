//! Processing level, additive load, and the allergen hard stop.
//!
//! The allergen rule is the one non-degradable invariant in the engine:
//! any overlap between product allergen tags and the baby's allergy list
//! forces this sub-score to exactly 0 before anything else is computed.

use super::clamp_score;
use crate::additives;
use crate::product::ProductRecord;
use crate::profile::BabyProfile;

/// Missing NOVA group is scored as the documented default group 2.
const NOVA_DEFAULT_GROUP: u8 = 2;
/// An explicit group value outside 1..=4 gets the harsher unknown fallback.
const NOVA_UNMAPPED_PENALTY: i32 = -20;

/// Additive penalties below this mark compound risk.
const HIGH_RISK_CUTOFF: i32 = -30;
const COMPOUNDING_SURCHARGE: i32 = -5;
/// The additive subtotal can never drag the score down by more than this.
const ADDITIVE_SUBTOTAL_FLOOR: i32 = -60;

const NEWBORN_ARTIFICIAL_PENALTY: i32 = 30;
const INFANT_ADDITIVE_LOAD_THRESHOLD: i32 = -20;
const INFANT_ADDITIVE_LOAD_PENALTY: i32 = 10;

/// Score processing and additive safety for this baby.
pub fn score(product: &ProductRecord, profile: &BabyProfile, age_months: i32) -> i32 {
    // Known allergen: nothing below may soften this.
    if allergen_conflict(&product.allergens, &profile.allergies) {
        return 0;
    }

    let mut score = 100;
    score += nova_penalty(product.nova_group);

    let mut subtotal = 0;
    let mut any_artificial = false;
    for additive in &product.additives {
        let p = additives::penalty(additive, age_months);
        subtotal += p;
        if p <= HIGH_RISK_CUTOFF {
            subtotal += COMPOUNDING_SURCHARGE;
        }
        if additive.to_lowercase().contains("artificial") {
            any_artificial = true;
        }
    }
    let subtotal = subtotal.max(ADDITIVE_SUBTOTAL_FLOOR);
    score += subtotal;

    if age_months < 6 && any_artificial {
        score -= NEWBORN_ARTIFICIAL_PENALTY;
    }
    if (6..12).contains(&age_months) && subtotal < INFANT_ADDITIVE_LOAD_THRESHOLD {
        score -= INFANT_ADDITIVE_LOAD_PENALTY;
    }

    clamp_score(score)
}

/// Case-insensitive intersection of normalized tag lists.
fn allergen_conflict(allergens: &[String], allergies: &[String]) -> bool {
    allergens.iter().any(|tag| {
        let tag = tag.trim().to_lowercase();
        allergies
            .iter()
            .any(|known| known.trim().to_lowercase() == tag)
    })
}

fn nova_penalty(group: Option<u8>) -> i32 {
    match group.unwrap_or(NOVA_DEFAULT_GROUP) {
        1 => 0,
        2 => -10,
        3 => -25,
        4 => -40,
        _ => NOVA_UNMAPPED_PENALTY,
    }
}
