//! Additive risk analysis backed by the embedded penalty tables.
//!
//! `additive_penalties.json` holds ordered category tables (colors,
//! preservatives, sweeteners, emulsifiers, flavor enhancers, thickeners,
//! then near-zero "natural" entries). Lookup walks the categories in
//! declaration order and the first substring match wins; a single additive
//! never accumulates penalties across categories.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct PenaltyTable {
    categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
struct Category {
    #[allow(dead_code)] // table documentation, useful in diagnostics
    name: String,
    entries: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    pattern: String,
    penalty: i32,
}

static PENALTY_TABLE: Lazy<PenaltyTable> = Lazy::new(|| {
    let raw = include_str!("../additive_penalties.json");
    serde_json::from_str::<PenaltyTable>(raw).expect("valid additive penalty table")
});

/// Anything not in the tables still gets a moderate caution penalty.
const UNKNOWN_ADDITIVE_PENALTY: i32 = -8;

/// Penalties more severe than this get an extra deduction for infants.
const INFANT_SURCHARGE_THRESHOLD: i32 = -20;
const INFANT_SURCHARGE: i32 = -10;
const INFANT_AGE_LIMIT_MONTHS: i32 = 12;

/// "High risk" cutoff used when listing additives for display.
const HIGH_RISK_CUTOFF: i32 = -30;
/// Display extraction scores at a fixed reference age so the listed set
/// does not shift with the baby's birthday.
const HIGH_RISK_REFERENCE_AGE_MONTHS: i32 = 12;
const MAX_HIGH_RISK_LISTED: usize = 3;

/// Penalty (zero or negative) for one additive tag or name at the given age.
pub fn penalty(additive: &str, age_months: i32) -> i32 {
    let needle = additive.trim().to_lowercase();
    for category in &PENALTY_TABLE.categories {
        for entry in &category.entries {
            if needle.contains(&entry.pattern) {
                let mut p = entry.penalty;
                if p < INFANT_SURCHARGE_THRESHOLD && age_months < INFANT_AGE_LIMIT_MONTHS {
                    p += INFANT_SURCHARGE;
                }
                return p;
            }
        }
    }
    UNKNOWN_ADDITIVE_PENALTY
}

/// Up to three display-formatted additives whose reference-age penalty is
/// at or below the high-risk cutoff, in input order.
pub fn top_high_risk(additives: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    for additive in additives {
        if out.len() == MAX_HIGH_RISK_LISTED {
            break;
        }
        if penalty(additive, HIGH_RISK_REFERENCE_AGE_MONTHS) <= HIGH_RISK_CUTOFF {
            out.push(display_name(additive));
        }
    }
    out
}

/// Number of concrete match rules across all categories.
pub fn rule_count() -> usize {
    PENALTY_TABLE
        .categories
        .iter()
        .map(|c| c.entries.len())
        .sum()
}

/// Capitalize the tag and space out an inline E-number: "(e" becomes " (E".
fn display_name(additive: &str) -> String {
    let trimmed = additive.trim();
    let mut chars = trimmed.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    capitalized.replace("(e", " (E")
}
