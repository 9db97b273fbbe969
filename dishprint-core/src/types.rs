use serde::{Deserialize, Serialize};

use crate::equivalents::Equivalents;
use crate::suggest::ImpactLevel;

/// One ingredient's contribution to a footprint calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownLine {
    pub ingredient: String,
    pub portion_kg: f64,
    pub co2_per_kg: f64,
    /// Always `portion_kg * co2_per_kg`.
    pub total_co2: f64,
}

/// Total footprint of a set of ingredients, with lines in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FootprintResult {
    pub total_co2: f64,
    pub breakdown: Vec<BreakdownLine>,
}

/// What the captioner said about a dish photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishDescription {
    /// Short caption of the whole image.
    pub caption: String,
    /// Answer to "what ingredients are in this dish?".
    pub details: String,
}

impl DishDescription {
    /// Both strings, in the order they are scanned for ingredients.
    pub fn texts(&self) -> Vec<String> {
        vec![self.caption.clone(), self.details.clone()]
    }
}

/// Full result of analyzing one dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Ingredients found in the descriptions.
    pub detected: Vec<String>,
    /// Ingredients the footprint was computed for (detected, or corrected by the user).
    pub selected: Vec<String>,
    pub footprint: FootprintResult,
    /// `None` when no selected ingredient is in the emissions table.
    pub impact: Option<ImpactLevel>,
    /// Empty when no selected ingredient is in the emissions table.
    pub suggestions: Vec<String>,
    /// `None` when no selected ingredient is in the emissions table.
    pub equivalents: Option<Equivalents>,
}
