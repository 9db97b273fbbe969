//! Food emission factors and standard portion sizes.
//!
//! This crate provides the two lookup tables used to estimate the carbon
//! footprint of a dish:
//!
//! - [`EmissionsTable`]: kg CO2e released per kg of an ingredient
//! - [`PortionTable`]: the assumed mass (kg) of an ingredient in one serving
//!
//! Both ship with built-in data and can be replaced by JSON files so the
//! numbers can be updated without a rebuild. Loading is all-or-nothing: a
//! single malformed entry rejects the whole file.
//!
//! # Example
//!
//! ```
//! use emission_factors::{EmissionsTable, PortionTable, DEFAULT_PORTION_KG};
//!
//! let emissions = EmissionsTable::builtin();
//! let portions = PortionTable::builtin();
//!
//! let factor = emissions.get("beef").unwrap();
//! let portion = portions.portion_for("beef", DEFAULT_PORTION_KG);
//! println!("one serving of beef = {:.2} kg CO2e", factor * portion);
//! ```

mod table;

pub use table::{EmissionsTable, PortionTable, TableError, DEFAULT_PORTION_KG};
