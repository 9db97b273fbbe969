//! End-to-end analysis of a described dish.
//!
//! descriptions -> detected ingredients -> (optional user correction)
//! -> footprint -> impact level, suggestions and equivalents
//!
//! A dish with no recognized ingredient gets a zero footprint and nothing
//! else: no impact level, no suggestions, no equivalents.

use crate::equivalents::Equivalents;
use crate::extract::extract_from_descriptions;
use crate::footprint::{PortionOverrides, Tables};
use crate::suggest::{suggest, ImpactLevel};
use crate::types::Analysis;

/// Analyze a dish from its text descriptions.
///
/// `selection` replaces the detected ingredient list when given, e.g. after
/// the user has confirmed or edited it. Names it contains that are not in the
/// emissions table contribute nothing.
pub fn analyze(
    descriptions: &[String],
    tables: &Tables,
    selection: Option<&[String]>,
    overrides: Option<&PortionOverrides>,
) -> Analysis {
    let detected = extract_from_descriptions(descriptions, &tables.emissions);

    let selected = match selection {
        Some(selection) => selection.to_vec(),
        None => detected.clone(),
    };

    let footprint = tables.calculate(&selected, overrides);
    let recognized = !footprint.breakdown.is_empty();

    let suggestions = if recognized {
        suggest(footprint.total_co2, &selected)
            .into_iter()
            .map(str::to_string)
            .collect()
    } else {
        Vec::new()
    };

    tracing::debug!(
        detected = detected.len(),
        selected = selected.len(),
        total_co2 = footprint.total_co2,
        "Analyzed dish"
    );

    Analysis {
        impact: recognized.then(|| ImpactLevel::classify(footprint.total_co2)),
        equivalents: recognized.then(|| Equivalents::for_total(footprint.total_co2)),
        detected,
        selected,
        footprint,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggest::Suggestion;

    fn descriptions(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_analyze_detected() {
        let analysis = analyze(
            &descriptions(&["a plate of beef steak", "beef, potatoes and broccoli"]),
            &Tables::builtin(),
            None,
            None,
        );

        assert_eq!(analysis.detected, ["beef", "potatoes", "broccoli"]);
        assert_eq!(analysis.selected, analysis.detected);
        assert!((analysis.footprint.total_co2 - 4.3).abs() < 1e-9);
        assert_eq!(analysis.impact, Some(ImpactLevel::Medium));
        assert_eq!(
            analysis.suggestions,
            [
                Suggestion::ReplaceHighImpactProtein.message(),
                Suggestion::PlantBasedAlternatives.message()
            ]
        );
    }

    #[test]
    fn test_analyze_with_user_selection() {
        let selection = descriptions(&["tofu", "rice", "dragonfruit"]);
        let analysis = analyze(
            &descriptions(&["a beef burger"]),
            &Tables::builtin(),
            Some(&selection),
            None,
        );

        assert_eq!(analysis.detected, ["beef"]);
        assert_eq!(analysis.selected, selection);
        assert_eq!(analysis.footprint.breakdown.len(), 2);
        assert_eq!(analysis.impact, Some(ImpactLevel::Low));
        assert_eq!(
            analysis.suggestions,
            [
                Suggestion::LowFootprint.message(),
                Suggestion::SustainableRice.message()
            ]
        );
    }

    #[test]
    fn test_analyze_with_overrides() {
        let overrides = PortionOverrides::from_assignments(&["beef=0.3"]).unwrap();
        let analysis = analyze(
            &descriptions(&["beef"]),
            &Tables::builtin(),
            None,
            Some(&overrides),
        );
        assert!((analysis.footprint.total_co2 - 8.1).abs() < 1e-9);
        assert_eq!(analysis.impact, Some(ImpactLevel::High));
        assert!(analysis
            .suggestions
            .contains(&Suggestion::HighFootprint.message().to_string()));
    }

    #[test]
    fn test_analyze_nothing_found() {
        let analysis = analyze(&descriptions(&["a blurry photo"]), &Tables::builtin(), None, None);
        assert!(analysis.detected.is_empty());
        assert_eq!(analysis.footprint.total_co2, 0.0);
        assert!(analysis.footprint.breakdown.is_empty());
        assert!(analysis.suggestions.is_empty());
        assert_eq!(analysis.impact, None);
        assert_eq!(analysis.equivalents, None);
    }

    #[test]
    fn test_analyze_selection_of_unknown_names() {
        let selection = descriptions(&["dragonfruit", "vegetables"]);
        let analysis = analyze(
            &descriptions(&["a beef burger"]),
            &Tables::builtin(),
            Some(&selection),
            None,
        );
        assert_eq!(analysis.detected, ["beef"]);
        assert_eq!(analysis.footprint.total_co2, 0.0);
        // No praise for a meal we could not price
        assert!(analysis.suggestions.is_empty());
        assert_eq!(analysis.impact, None);
        assert_eq!(analysis.equivalents, None);
    }

    #[test]
    fn test_analyze_recognized_meal_has_equivalents() {
        let analysis = analyze(&descriptions(&["lentils"]), &Tables::builtin(), None, None);
        assert_eq!(analysis.impact, Some(ImpactLevel::Low));
        assert_eq!(analysis.suggestions, [Suggestion::LowFootprint.message()]);
        assert!(analysis.equivalents.is_some());
    }
}
