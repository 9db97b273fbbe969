//! Carbon footprint calculation.
//!
//! Each recognized ingredient contributes `portion_kg * co2_per_kg`. The
//! portion is resolved in three tiers:
//!
//! 1. An explicit override supplied by the caller
//! 2. The ingredient's entry in the [`PortionTable`]
//! 3. The global default portion
//!
//! Names missing from the [`EmissionsTable`] are skipped silently, so callers
//! can pass free text or user edits straight through.

use std::collections::HashMap;

use emission_factors::{EmissionsTable, PortionTable, DEFAULT_PORTION_KG};
use thiserror::Error;

use crate::types::{BreakdownLine, FootprintResult};

#[derive(Error, Debug, PartialEq)]
pub enum PortionError {
    #[error("Expected NAME=KG, got {0:?}")]
    Malformed(String),

    #[error("Invalid portion for {name:?}: {value:?} (must be a positive number of kg)")]
    InvalidValue { name: String, value: String },
}

/// Caller-supplied portion sizes (kg) that take precedence over the tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortionOverrides(HashMap<String, f64>);

impl PortionOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the portion for an ingredient. The name is lowercased to match
    /// table keys.
    pub fn insert(&mut self, ingredient: &str, portion_kg: f64) {
        self.0.insert(ingredient.trim().to_lowercase(), portion_kg);
    }

    pub fn get(&self, ingredient: &str) -> Option<f64> {
        self.0.get(ingredient).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse a `name=kg` assignment, e.g. `beef=0.2` or `olive oil=0.01`.
    pub fn parse_assignment(s: &str) -> Result<(String, f64), PortionError> {
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| PortionError::Malformed(s.to_string()))?;

        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return Err(PortionError::Malformed(s.to_string()));
        }

        let value = value.trim();
        match value.parse::<f64>() {
            Ok(kg) if kg.is_finite() && kg > 0.0 => Ok((name, kg)),
            _ => Err(PortionError::InvalidValue {
                name,
                value: value.to_string(),
            }),
        }
    }

    /// Build overrides from a list of `name=kg` assignments. Later
    /// assignments win.
    pub fn from_assignments<S: AsRef<str>>(assignments: &[S]) -> Result<Self, PortionError> {
        let mut overrides = Self::new();
        for assignment in assignments {
            let (name, kg) = Self::parse_assignment(assignment.as_ref())?;
            overrides.0.insert(name, kg);
        }
        Ok(overrides)
    }
}

impl FromIterator<(String, f64)> for PortionOverrides {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut overrides = Self::new();
        for (name, kg) in iter {
            overrides.insert(&name, kg);
        }
        overrides
    }
}

/// Compute the footprint of `ingredients`.
///
/// Breakdown lines follow input order with unknown names removed, and the
/// total is the running sum of the line totals in that order.
pub fn calculate_footprint<S: AsRef<str>>(
    ingredients: &[S],
    overrides: Option<&PortionOverrides>,
    emissions: &EmissionsTable,
    portions: &PortionTable,
    global_default_portion: f64,
) -> FootprintResult {
    let mut result = FootprintResult::default();

    for ingredient in ingredients {
        let ingredient = ingredient.as_ref();
        let Some(co2_per_kg) = emissions.get(ingredient) else {
            tracing::debug!(ingredient, "Skipping unknown ingredient");
            continue;
        };

        let portion_kg = overrides
            .and_then(|o| o.get(ingredient))
            .unwrap_or_else(|| portions.portion_for(ingredient, global_default_portion));

        let total_co2 = portion_kg * co2_per_kg;
        result.total_co2 += total_co2;
        result.breakdown.push(BreakdownLine {
            ingredient: ingredient.to_string(),
            portion_kg,
            co2_per_kg,
            total_co2,
        });
    }

    result
}

/// The emissions and portion tables plus the global default portion,
/// loaded once and passed around together.
#[derive(Debug, Clone)]
pub struct Tables {
    pub emissions: EmissionsTable,
    pub portions: PortionTable,
    pub default_portion_kg: f64,
}

impl Default for Tables {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Tables {
    pub fn builtin() -> Self {
        Self {
            emissions: EmissionsTable::builtin(),
            portions: PortionTable::builtin(),
            default_portion_kg: DEFAULT_PORTION_KG,
        }
    }

    pub fn calculate<S: AsRef<str>>(
        &self,
        ingredients: &[S],
        overrides: Option<&PortionOverrides>,
    ) -> FootprintResult {
        calculate_footprint(
            ingredients,
            overrides,
            &self.emissions,
            &self.portions,
            self.default_portion_kg,
        )
    }
}
