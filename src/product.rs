//! Normalized product record as supplied by the food-database layer.
//!
//! The fetching/normalizing application is responsible for mapping raw
//! database fields and units into this shape; the engine never talks to the
//! network and never validates provenance. Absent numeric values mean
//! "unknown" and are scored conservatively, not rejected.

use serde::{Deserialize, Serialize};

/// Nutrient content per 100 g of product.
///
/// Most fields default to 0 when the database omits them. `iron` and
/// `calcium` stay `None` when absent so threshold bonuses can distinguish
/// "not reported" from "reported as zero". Sodium, iron and calcium are in
/// mg; the remaining masses are grams; energy is kcal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    #[serde(default)]
    pub energy_kcal: f64,
    #[serde(default)]
    pub proteins: f64,
    #[serde(default)]
    pub carbohydrates: f64,
    #[serde(default)]
    pub sugars: f64,
    #[serde(default)]
    pub fiber: f64,
    #[serde(default)]
    pub fat: f64,
    #[serde(default)]
    pub saturated_fat: f64,
    #[serde(default)]
    pub sodium: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iron: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calcium: Option<f64>,
    #[serde(default)]
    pub vitamin_c: f64,
    #[serde(default)]
    pub vitamin_d: f64,
}

/// One scanned product, normalized.
///
/// Letter grades arrive as free strings and are parsed leniently at scoring
/// time; an unrecognized grade degrades to a neutral component instead of
/// failing the evaluation. Allergen and additive tags are expected
/// pre-normalized (lowercase-insensitive matching is still applied).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_name: String,
    #[serde(default)]
    pub nutri_score_grade: Option<String>,
    #[serde(default)]
    pub nova_group: Option<u8>,
    #[serde(default)]
    pub eco_score_grade: Option<String>,
    #[serde(default)]
    pub nutrients_per_100g: Option<Nutrients>,
    #[serde(default)]
    pub ingredients_text: String,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub additives: Vec<String>,
}

impl ProductRecord {
    /// Case-insensitive keyword scan over the free ingredients text.
    ///
    /// Plain substring matching, as fragile as that is ("peanuts" also hits
    /// "no peanuts"); the keyword heuristic is a documented limitation of
    /// the scoring rules, not a parser.
    pub fn ingredient_mentions(&self, keyword: &str) -> bool {
        self.ingredients_text
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }

    /// Nutrients with unknowns collapsed to zero, for rules that treat
    /// "missing" as "none present".
    pub fn nutrients_or_default(&self) -> Nutrients {
        self.nutrients_per_100g.unwrap_or_default()
    }
}
