//! Blend of third-party labels: Nutri-Score, NOVA group, Eco-Score.
//!
//! Each label is mapped onto a 0-100 component, with any missing or
//! unrecognized value degrading to the neutral midpoint rather than
//! erroring, then blended 60/30/10.

use super::{clamp_score, NEUTRAL_BASELINE};
use crate::product::ProductRecord;

const NUTRI_WEIGHT: f64 = 0.6;
const NOVA_WEIGHT: f64 = 0.3;
const ECO_WEIGHT: f64 = 0.1;

/// Blend the external labels into one 0-100 score.
pub fn score(product: &ProductRecord) -> i32 {
    let nutri = grade_points(product.nutri_score_grade.as_deref());
    let nova = nova_points(product.nova_group);
    let eco = grade_points(product.eco_score_grade.as_deref());

    let blended =
        f64::from(nutri) * NUTRI_WEIGHT + f64::from(nova) * NOVA_WEIGHT + f64::from(eco) * ECO_WEIGHT;
    clamp_score(blended.round() as i32)
}

/// Letter grades A-E on the shared 90..10 ladder. Used for both Nutri-Score
/// and Eco-Score.
fn grade_points(grade: Option<&str>) -> i32 {
    let Some(grade) = grade else {
        return NEUTRAL_BASELINE;
    };
    match grade.trim().to_lowercase().as_str() {
        "a" => 90,
        "b" => 70,
        "c" => 50,
        "d" => 30,
        "e" => 10,
        _ => NEUTRAL_BASELINE,
    }
}

fn nova_points(group: Option<u8>) -> i32 {
    match group {
        Some(1) => 90,
        Some(2) => 70,
        Some(3) => 40,
        Some(4) => 10,
        _ => NEUTRAL_BASELINE,
    }
}
