//! # Scoring engine
//! Pure, testable logic that maps `(product, profile, instant)` to a
//! `ScoreResult`. No I/O and no shared state; concurrent evaluations are
//! trivially safe and identical inputs at the same instant produce
//! identical results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::explain;
use crate::product::ProductRecord;
use crate::profile::{age_in_months, BabyProfile};
use crate::score::{age_fit, external, nutrition, personal, safety, ScoreBreakdown};

/// Blend weights for the composite score. They sum to 1.0.
const W_AGE: f64 = 0.30;
const W_NUTRITION: f64 = 0.25;
const W_SAFETY: f64 = 0.20;
const W_PERSONALIZATION: f64 = 0.15;
const W_EXTERNAL: f64 = 0.10;

/// The complete evaluation output, immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub final_score: i32,
    pub interpretation: String,
    pub emoji: String,
    pub color_tag: String,
    pub primary_message: String,
    pub explanations: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

/// Evaluate a product for a baby at an explicit instant.
///
/// The instant only feeds the age calculation; passing it in keeps the
/// whole pipeline a pure function, which the replay tests rely on.
pub fn evaluate_at(
    product: &ProductRecord,
    profile: &BabyProfile,
    now: DateTime<Utc>,
) -> ScoreResult {
    let age_months = age_in_months(profile.birth_date, now);

    let breakdown = ScoreBreakdown {
        age_appropriateness: age_fit::score(age_months, product),
        nutritional_quality: nutrition::score(product.nutrients_per_100g.as_ref(), age_months),
        safety_processing: safety::score(product, profile, age_months),
        personalization: personal::score(product, profile),
        external_scores: external::score(product),
    };

    let final_score = blend(&breakdown);
    let ex = explain::explain(final_score, &breakdown, age_months, profile, product);

    ScoreResult {
        final_score,
        interpretation: ex.interpretation,
        emoji: ex.emoji,
        color_tag: ex.color_tag,
        primary_message: ex.primary_message,
        explanations: ex.explanations,
        breakdown,
    }
}

/// Evaluate against the wall clock, for live requests.
pub fn evaluate(product: &ProductRecord, profile: &BabyProfile) -> ScoreResult {
    evaluate_at(product, profile, Utc::now())
}

fn blend(b: &ScoreBreakdown) -> i32 {
    let weighted = f64::from(b.age_appropriateness) * W_AGE
        + f64::from(b.nutritional_quality) * W_NUTRITION
        + f64::from(b.safety_processing) * W_SAFETY
        + f64::from(b.personalization) * W_PERSONALIZATION
        + f64::from(b.external_scores) * W_EXTERNAL;
    (weighted.round() as i32).clamp(0, 100)
}
