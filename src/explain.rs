//! Interpretation tiers and ordered explanation bullets.
//!
//! The tier vocabulary is fixed: label, emoji, color tag, and primary
//! message all come from the final score alone. Bullets are generated in a
//! fixed order and only when their trigger condition holds, so the output
//! is deterministic and directly renderable by the mobile UI.

use serde::{Deserialize, Serialize};

use crate::additives;
use crate::product::ProductRecord;
use crate::profile::BabyProfile;
use crate::score::ScoreBreakdown;

/// Interpretation tiers from best to worst, by inclusive lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Excellent,
    Good,
    Acceptable,
    OccasionalUse,
    NotRecommended,
}

impl Tier {
    pub fn for_score(final_score: i32) -> Self {
        match final_score {
            s if s >= 90 => Tier::Excellent,
            s if s >= 70 => Tier::Good,
            s if s >= 50 => Tier::Acceptable,
            s if s >= 30 => Tier::OccasionalUse,
            _ => Tier::NotRecommended,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::Acceptable => "acceptable",
            Tier::OccasionalUse => "occasional_use",
            Tier::NotRecommended => "not_recommended",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Tier::Excellent => "🌟",
            Tier::Good => "😊",
            Tier::Acceptable => "😐",
            Tier::OccasionalUse => "⚠️",
            Tier::NotRecommended => "❌",
        }
    }

    pub fn color_tag(self) -> &'static str {
        match self {
            Tier::Excellent => "green",
            Tier::Good => "light-green",
            Tier::Acceptable => "yellow",
            Tier::OccasionalUse => "orange",
            Tier::NotRecommended => "red",
        }
    }

    pub fn primary_message(self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent choice for your baby!",
            Tier::Good => "A good option for your little one.",
            Tier::Acceptable => "Fine in moderation.",
            Tier::OccasionalUse => "Best kept for occasional use.",
            Tier::NotRecommended => "Not recommended for your baby.",
        }
    }
}

/// Human-readable interpretation of a final score and its breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub interpretation: String,
    pub emoji: String,
    pub color_tag: String,
    pub primary_message: String,
    pub explanations: Vec<String>,
}

// Bullet trigger thresholds.
const AGE_BULLET_BELOW: i32 = 50;
const SAFETY_BULLET_BELOW: i32 = 60;
const PERSONAL_BULLET_ABOVE: i32 = 80;
const NUTRITION_PRAISE_ABOVE: i32 = 75;
const NUTRITION_WARN_BELOW: i32 = 40;

/// Build the interpretation plus ordered bullets for one evaluation.
///
/// `age_months` is the same value the scorers ran with, supplied by the
/// orchestrator so the cited age can never drift from the scored age.
pub fn explain(
    final_score: i32,
    breakdown: &ScoreBreakdown,
    age_months: i32,
    profile: &BabyProfile,
    product: &ProductRecord,
) -> Explanation {
    let tier = Tier::for_score(final_score);
    let mut bullets = Vec::new();

    if breakdown.age_appropriateness < AGE_BULLET_BELOW {
        bullets.push(format!(
            "Not age-appropriate for a {age_months}-month-old baby"
        ));
    }

    if breakdown.safety_processing < SAFETY_BULLET_BELOW {
        let risky = additives::top_high_risk(&product.additives);
        if risky.is_empty() {
            bullets.push("Contains multiple additives - check the label carefully".to_string());
        } else {
            bullets.push(format!("Contains high-risk additives: {}", risky.join(", ")));
        }
    }

    if breakdown.personalization > PERSONAL_BULLET_ABOVE {
        let goal = profile
            .feeding_goals
            .first()
            .map(|g| g.replace('_', " "))
            .unwrap_or_else(|| "health".to_string());
        bullets.push(format!("Great match for your baby's {goal} goals"));
    }

    if breakdown.nutritional_quality > NUTRITION_PRAISE_ABOVE {
        bullets.push("Excellent nutritional profile for this age".to_string());
    } else if breakdown.nutritional_quality < NUTRITION_WARN_BELOW {
        bullets.push("Falls short of the nutritional needs for this age".to_string());
    }

    Explanation {
        interpretation: tier.label().to_string(),
        emoji: tier.emoji().to_string(),
        color_tag: tier.color_tag().to_string(),
        primary_message: tier.primary_message().to_string(),
        explanations: bullets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(age: i32, nutrition: i32, safety: i32, personal: i32, external: i32) -> ScoreBreakdown {
        ScoreBreakdown {
            age_appropriateness: age,
            nutritional_quality: nutrition,
            safety_processing: safety,
            personalization: personal,
            external_scores: external,
        }
    }

    #[test]
    fn tier_bounds_are_inclusive() {
        assert_eq!(Tier::for_score(100), Tier::Excellent);
        assert_eq!(Tier::for_score(90), Tier::Excellent);
        assert_eq!(Tier::for_score(89), Tier::Good);
        assert_eq!(Tier::for_score(70), Tier::Good);
        assert_eq!(Tier::for_score(69), Tier::Acceptable);
        assert_eq!(Tier::for_score(50), Tier::Acceptable);
        assert_eq!(Tier::for_score(49), Tier::OccasionalUse);
        assert_eq!(Tier::for_score(30), Tier::OccasionalUse);
        assert_eq!(Tier::for_score(29), Tier::NotRecommended);
        assert_eq!(Tier::for_score(0), Tier::NotRecommended);
    }

    #[test]
    fn every_tier_has_fixed_vocabulary() {
        for tier in [
            Tier::Excellent,
            Tier::Good,
            Tier::Acceptable,
            Tier::OccasionalUse,
            Tier::NotRecommended,
        ] {
            assert!(!tier.label().is_empty());
            assert!(!tier.emoji().is_empty());
            assert!(!tier.color_tag().is_empty());
            assert!(!tier.primary_message().is_empty());
        }
    }

    #[test]
    fn quiet_breakdown_emits_no_bullets() {
        let ex = explain(
            70,
            &breakdown(80, 60, 80, 60, 50),
            14,
            &BabyProfile::default(),
            &ProductRecord::default(),
        );
        assert!(ex.explanations.is_empty());
        assert_eq!(ex.interpretation, "good");
    }

    #[test]
    fn age_bullet_cites_the_age_in_months() {
        let ex = explain(
            40,
            &breakdown(0, 60, 80, 60, 50),
            4,
            &BabyProfile::default(),
            &ProductRecord::default(),
        );
        assert_eq!(
            ex.explanations,
            vec!["Not age-appropriate for a 4-month-old baby".to_string()]
        );
    }

    #[test]
    fn safety_bullet_names_high_risk_additives_when_known() {
        let product = ProductRecord {
            additives: vec!["aspartame".to_string(), "pectin".to_string()],
            ..Default::default()
        };
        let ex = explain(
            50,
            &breakdown(80, 60, 40, 60, 50),
            14,
            &BabyProfile::default(),
            &product,
        );
        assert_eq!(
            ex.explanations,
            vec!["Contains high-risk additives: Aspartame".to_string()]
        );
    }

    #[test]
    fn safety_bullet_falls_back_to_generic_warning() {
        let product = ProductRecord {
            additives: vec!["pectin".to_string(), "guar gum".to_string()],
            ..Default::default()
        };
        let ex = explain(
            50,
            &breakdown(80, 60, 40, 60, 50),
            14,
            &BabyProfile::default(),
            &product,
        );
        assert_eq!(
            ex.explanations,
            vec!["Contains multiple additives - check the label carefully".to_string()]
        );
    }

    #[test]
    fn personalization_bullet_cites_first_goal_or_health() {
        let profile = BabyProfile {
            feeding_goals: vec!["brain_development".to_string(), "weight_gain".to_string()],
            ..Default::default()
        };
        let ex = explain(
            80,
            &breakdown(80, 60, 80, 90, 50),
            14,
            &profile,
            &ProductRecord::default(),
        );
        assert_eq!(
            ex.explanations,
            vec!["Great match for your baby's brain development goals".to_string()]
        );

        let ex = explain(
            80,
            &breakdown(80, 60, 80, 90, 50),
            14,
            &BabyProfile::default(),
            &ProductRecord::default(),
        );
        assert_eq!(
            ex.explanations,
            vec!["Great match for your baby's health goals".to_string()]
        );
    }

    #[test]
    fn nutrition_bullets_are_mutually_exclusive() {
        let praise = explain(
            80,
            &breakdown(80, 80, 80, 60, 50),
            14,
            &BabyProfile::default(),
            &ProductRecord::default(),
        );
        assert_eq!(
            praise.explanations,
            vec!["Excellent nutritional profile for this age".to_string()]
        );

        let warn = explain(
            40,
            &breakdown(80, 30, 80, 60, 50),
            14,
            &BabyProfile::default(),
            &ProductRecord::default(),
        );
        assert_eq!(
            warn.explanations,
            vec!["Falls short of the nutritional needs for this age".to_string()]
        );

        let neither = explain(
            60,
            &breakdown(80, 60, 80, 60, 50),
            14,
            &BabyProfile::default(),
            &ProductRecord::default(),
        );
        assert!(neither.explanations.is_empty());
    }

    #[test]
    fn bullets_keep_their_fixed_order() {
        let product = ProductRecord {
            additives: vec!["e250".to_string()],
            ..Default::default()
        };
        let ex = explain(
            35,
            &breakdown(20, 30, 40, 90, 50),
            8,
            &BabyProfile::default(),
            &product,
        );
        assert_eq!(ex.explanations.len(), 4);
        assert!(ex.explanations[0].starts_with("Not age-appropriate"));
        assert!(ex.explanations[1].starts_with("Contains high-risk additives"));
        assert!(ex.explanations[2].starts_with("Great match"));
        assert!(ex.explanations[3].starts_with("Falls short"));
    }
}
