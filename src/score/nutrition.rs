//! Nutritional quality against age-bucketed reference targets.
//!
//! Targets follow WHO/AAP-style daily recommendations, bucketed at 12, 24
//! and 36 months. Bonuses and penalties are independent and additive around
//! a neutral baseline of 50; a product with no nutrient data stays at the
//! baseline instead of being punished for missing numbers.

use super::{clamp_score, NEUTRAL_BASELINE};
use crate::product::Nutrients;

/// Reference thresholds for one age bucket.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NutrientTargets {
    /// g/kg/day
    pub protein_g: f64,
    /// mg/day
    pub iron_mg: f64,
    /// mg/day
    pub calcium_mg: f64,
    /// g/day
    pub fiber_g: f64,
    /// mg, upper limit
    pub sodium_max_mg: f64,
    /// g, upper limit
    pub sugar_max_g: f64,
}

const TARGETS_UNDER_12: NutrientTargets = NutrientTargets {
    protein_g: 1.2,
    iron_mg: 11.0,
    calcium_mg: 260.0,
    fiber_g: 5.0,
    sodium_max_mg: 370.0,
    sugar_max_g: 0.0,
};

const TARGETS_UNDER_24: NutrientTargets = NutrientTargets {
    protein_g: 1.05,
    iron_mg: 7.0,
    calcium_mg: 700.0,
    fiber_g: 19.0,
    sodium_max_mg: 800.0,
    sugar_max_g: 25.0,
};

const TARGETS_24_PLUS: NutrientTargets = NutrientTargets {
    protein_g: 1.05,
    iron_mg: 7.0,
    calcium_mg: 700.0,
    fiber_g: 19.0,
    sodium_max_mg: 1000.0,
    sugar_max_g: 25.0,
};

const PROTEIN_BONUS: i32 = 20;
const IRON_BONUS: i32 = 15;
const CALCIUM_BONUS: i32 = 10;
const FIBER_BONUS: i32 = 10;

const SATURATED_FAT_LIMIT_G: f64 = 3.0;
const SATURATED_FAT_PENALTY: i32 = 15;
const SODIUM_PENALTY: i32 = 20;
const SUGAR_PENALTY: i32 = 25;

pub(crate) fn targets_for(age_months: i32) -> NutrientTargets {
    if age_months < 12 {
        TARGETS_UNDER_12
    } else if age_months < 24 {
        TARGETS_UNDER_24
    } else {
        TARGETS_24_PLUS
    }
}

/// Score nutrient density for the baby's age bucket.
pub fn score(nutrients: Option<&Nutrients>, age_months: i32) -> i32 {
    let Some(n) = nutrients else {
        return NEUTRAL_BASELINE;
    };
    let targets = targets_for(age_months);
    let mut score = NEUTRAL_BASELINE;

    if n.proteins >= targets.protein_g {
        score += PROTEIN_BONUS;
    }
    if n.iron.is_some_and(|v| v >= targets.iron_mg) {
        score += IRON_BONUS;
    }
    if n.calcium.is_some_and(|v| v >= targets.calcium_mg) {
        score += CALCIUM_BONUS;
    }
    if n.fiber >= targets.fiber_g {
        score += FIBER_BONUS;
    }

    if n.saturated_fat > SATURATED_FAT_LIMIT_G {
        score -= SATURATED_FAT_PENALTY;
    }
    if n.sodium > targets.sodium_max_mg {
        score -= SODIUM_PENALTY;
    }
    if n.sugars > targets.sugar_max_g {
        score -= SUGAR_PENALTY;
    }

    clamp_score(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_nutrients_stay_neutral() {
        assert_eq!(score(None, 8), 50);
        assert_eq!(score(None, 30), 50);
    }

    #[test]
    fn empty_nutrients_object_is_also_neutral() {
        // All zeros: no bonus reaches its threshold, no penalty trips
        // (sugar max 0 needs sugars strictly above zero).
        assert_eq!(score(Some(&Nutrients::default()), 8), 50);
    }

    #[test]
    fn all_bonuses_stack_and_clamp() {
        let n = Nutrients {
            proteins: 2.0,
            iron: Some(12.0),
            calcium: Some(300.0),
            fiber: 6.0,
            ..Default::default()
        };
        // 50 + 20 + 15 + 10 + 10 = 105 clamps to 100.
        assert_eq!(score(Some(&n), 8), 100);
    }

    #[test]
    fn unreported_iron_and_calcium_earn_no_bonus() {
        let n = Nutrients {
            proteins: 2.0,
            iron: None,
            calcium: None,
            ..Default::default()
        };
        assert_eq!(score(Some(&n), 8), 70);
    }

    #[test]
    fn penalties_are_independent() {
        let n = Nutrients {
            saturated_fat: 4.0,
            sodium: 500.0,
            sugars: 2.0,
            ..Default::default()
        };
        // Under 12 months: 50 - 15 - 20 - 25 = -10 clamps to 0.
        assert_eq!(score(Some(&n), 8), 0);
        // 12-24 months: sodium and sugars are within limits, only the
        // saturated fat penalty remains.
        assert_eq!(score(Some(&n), 15), 35);
    }

    #[test]
    fn buckets_shift_iron_and_calcium_thresholds() {
        let n = Nutrients {
            iron: Some(8.0),
            calcium: Some(400.0),
            ..Default::default()
        };
        // Under 12: iron 8 < 11 and calcium 400 >= 260.
        assert_eq!(score(Some(&n), 10), 60);
        // Over 12: iron 8 >= 7 but calcium 400 < 700.
        assert_eq!(score(Some(&n), 15), 65);
    }

    #[test]
    fn sodium_limit_loosens_at_24_months() {
        let n = Nutrients {
            sodium: 900.0,
            ..Default::default()
        };
        assert_eq!(score(Some(&n), 18), 30);
        assert_eq!(score(Some(&n), 30), 50);
    }
}
