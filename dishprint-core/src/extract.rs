//! Ingredient extraction from dish descriptions.
//!
//! Matching is a plain case-insensitive substring scan over every name in the
//! emissions table. There is no tokenization or word-boundary check, so short
//! names can match inside longer words ("rice" inside "price").

use emission_factors::EmissionsTable;

/// Find every table ingredient that occurs in `text`.
///
/// Results follow table order and each ingredient appears at most once, no
/// matter how often it occurs in the text.
pub fn extract_ingredients(text: &str, table: &EmissionsTable) -> Vec<String> {
    let lower = text.to_lowercase();

    table
        .names()
        .filter(|name| lower.contains(name))
        .map(str::to_string)
        .collect()
}

/// Extract ingredients from several descriptions of the same dish.
///
/// Descriptions are joined with a single space and scanned together, so a
/// multi-word name split across two descriptions can still match.
pub fn extract_from_descriptions(descriptions: &[String], table: &EmissionsTable) -> Vec<String> {
    extract_ingredients(&descriptions.join(" "), table)
}
