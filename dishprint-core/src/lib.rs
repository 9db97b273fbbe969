//! Carbon footprint estimation for dishes.
//!
//! A photo is described by a vision model ([`ai`]), ingredient names are
//! pulled out of the description ([`extract`]), and their emissions are
//! totalled ([`footprint`]) and turned into advice ([`suggest`]).

pub mod ai;
pub mod analysis;
pub mod compare;
pub mod equivalents;
pub mod error;
pub mod extract;
pub mod footprint;
pub mod image;
pub mod suggest;
pub mod types;

pub use analysis::analyze;
pub use compare::{rank_meals, Meal, MealRanking, RankedMeal};
pub use emission_factors::{EmissionsTable, PortionTable, DEFAULT_PORTION_KG};
pub use equivalents::Equivalents;
pub use error::{ImageError, TableError};
pub use extract::{extract_from_descriptions, extract_ingredients};
pub use footprint::{calculate_footprint, PortionError, PortionOverrides, Tables};
pub use self::image::{load_image, validate_image, ValidatedImage, MAX_FILE_SIZE};
pub use suggest::{suggest, suggestions_for, ImpactLevel, Suggestion};
pub use types::{Analysis, BreakdownLine, DishDescription, FootprintResult};
