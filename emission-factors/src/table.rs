//! Table loading and lookup.
//!
//! Both tables share one on-disk format: a JSON document holding an ordered
//! array of `{"name", "value"}` records. The array order is significant, since
//! ingredient extraction reports matches in table order.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Portion assumed for an ingredient with no entry in the [`PortionTable`].
pub const DEFAULT_PORTION_KG: f64 = 0.1;

// =============================================================================
// Errors
// =============================================================================

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid table JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Entry {index} has an empty name")]
    EmptyName { index: usize },

    #[error("Entry {index} name {name:?} must be trimmed lowercase")]
    NotCanonical { index: usize, name: String },

    #[error("Entry {name:?} has invalid value {value} (must be finite and positive)")]
    InvalidValue { name: String, value: f64 },

    #[error("Duplicate entry {name:?}")]
    Duplicate { name: String },
}

// =============================================================================
// Data structures
// =============================================================================

/// On-disk table format.
#[derive(Deserialize)]
struct TableFile {
    entries: Vec<TableEntry>,
}

#[derive(Deserialize)]
struct TableEntry {
    name: String,
    value: f64,
}

/// Validated name -> value table that remembers declaration order.
#[derive(Debug, Clone)]
struct OrderedTable {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl OrderedTable {
    fn from_json_str(json: &str) -> Result<Self, TableError> {
        let file: TableFile = serde_json::from_str(json)?;

        let mut entries = Vec::with_capacity(file.entries.len());
        let mut index = HashMap::with_capacity(file.entries.len());

        for (i, entry) in file.entries.into_iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(TableError::EmptyName { index: i });
            }
            if entry.name != entry.name.trim().to_lowercase() {
                return Err(TableError::NotCanonical {
                    index: i,
                    name: entry.name,
                });
            }
            if !entry.value.is_finite() || entry.value <= 0.0 {
                return Err(TableError::InvalidValue {
                    name: entry.name,
                    value: entry.value,
                });
            }
            if index.contains_key(&entry.name) {
                return Err(TableError::Duplicate { name: entry.name });
            }

            index.insert(entry.name.clone(), entries.len());
            entries.push((entry.name, entry.value));
        }

        Ok(Self { entries, index })
    }

    fn from_path(path: &Path) -> Result<Self, TableError> {
        let json = fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json_str(&json)?;
        tracing::debug!(
            path = %path.display(),
            entries = table.entries.len(),
            "Loaded table"
        );
        Ok(table)
    }

    fn get(&self, name: &str) -> Option<f64> {
        self.index.get(name).map(|&i| self.entries[i].1)
    }
}

// =============================================================================
// Embedded data
// =============================================================================

static EMISSIONS_JSON: &str = include_str!("data/emissions.json");
static PORTIONS_JSON: &str = include_str!("data/portions.json");

// =============================================================================
// Emissions
// =============================================================================

/// Emission factors in kg CO2e per kg of ingredient, keyed by canonical
/// lowercase ingredient name.
#[derive(Debug, Clone)]
pub struct EmissionsTable(OrderedTable);

impl EmissionsTable {
    /// The built-in emission factors.
    pub fn builtin() -> Self {
        Self(OrderedTable::from_json_str(EMISSIONS_JSON).expect("emissions.json should be valid"))
    }

    /// Parse a table from JSON, rejecting it entirely if any entry is invalid.
    pub fn from_json_str(json: &str) -> Result<Self, TableError> {
        OrderedTable::from_json_str(json).map(Self)
    }

    /// Load a table from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        OrderedTable::from_path(path.as_ref()).map(Self)
    }

    /// Emission factor for an ingredient, if known.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.index.contains_key(name)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.entries.iter().map(|(name, v)| (name.as_str(), *v))
    }

    /// Ingredient names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.entries.is_empty()
    }

    /// Entries sorted by factor, highest first. The sort is stable, so equal
    /// factors keep declaration order.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

// =============================================================================
// Portions
// =============================================================================

/// Standard portion sizes in kg. Entries are optional per ingredient.
#[derive(Debug, Clone)]
pub struct PortionTable(OrderedTable);

impl PortionTable {
    /// The built-in portion sizes.
    pub fn builtin() -> Self {
        Self(OrderedTable::from_json_str(PORTIONS_JSON).expect("portions.json should be valid"))
    }

    pub fn from_json_str(json: &str) -> Result<Self, TableError> {
        OrderedTable::from_json_str(json).map(Self)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        OrderedTable::from_path(path.as_ref()).map(Self)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name)
    }

    /// Portion for an ingredient, falling back to `global_default` when the
    /// table has no entry for it.
    pub fn portion_for(&self, name: &str, global_default: f64) -> f64 {
        self.get(name).unwrap_or(global_default)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.entries.iter().map(|(name, v)| (name.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.entries.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
