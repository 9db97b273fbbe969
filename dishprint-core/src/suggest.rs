//! Reduction suggestions for a computed footprint.
//!
//! Rules are evaluated in a fixed order and are not exclusive, so a single
//! ingredient such as cheese can trigger more than one message.

use serde::{Deserialize, Serialize};

/// Footprint above which a meal counts as high impact (kg CO2e).
pub const HIGH_FOOTPRINT_KG: f64 = 5.0;

/// Footprint below which a meal counts as low impact (kg CO2e).
pub const LOW_FOOTPRINT_KG: f64 = 2.0;

/// Ingredients that trigger the high-impact protein message.
pub const HIGH_IMPACT_INGREDIENTS: &[&str] = &["beef", "lamb", "shrimp", "cheese", "chocolate"];

/// A canned suggestion. Variants are declared in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suggestion {
    ReplaceHighImpactProtein,
    PlantBasedAlternatives,
    ReduceCheese,
    HighFootprint,
    LowFootprint,
    SustainableRice,
}

impl Suggestion {
    pub fn message(self) -> &'static str {
        match self {
            Self::ReplaceHighImpactProtein => "🔄 Replace red meat with chicken, fish, or plant-based proteins to reduce emissions by up to 70%",
            Self::PlantBasedAlternatives => "🌱 Try plant-based alternatives like lentils, beans, or tofu",
            Self::ReduceCheese => "🧀 Reduce cheese portions or try plant-based cheese alternatives",
            Self::HighFootprint => "📊 Your meal has a high carbon footprint. Consider smaller portions or ingredient substitutions",
            Self::LowFootprint => "✅ Great choice! This is a low-carbon meal",
            Self::SustainableRice => "🌾 Consider local, sustainably grown rice or alternatives like quinoa",
        }
    }
}

/// Select the suggestions that apply to a meal, in display order.
pub fn suggestions_for<S: AsRef<str>>(total_co2: f64, ingredients: &[S]) -> Vec<Suggestion> {
    let has = |name: &str| ingredients.iter().any(|i| i.as_ref() == name);

    let mut suggestions = Vec::new();

    if HIGH_IMPACT_INGREDIENTS.iter().any(|&name| has(name)) {
        suggestions.push(Suggestion::ReplaceHighImpactProtein);
    }

    if has("beef") || has("lamb") {
        suggestions.push(Suggestion::PlantBasedAlternatives);
    }

    if has("cheese") {
        suggestions.push(Suggestion::ReduceCheese);
    }

    if total_co2 > HIGH_FOOTPRINT_KG {
        suggestions.push(Suggestion::HighFootprint);
    } else if total_co2 < LOW_FOOTPRINT_KG {
        suggestions.push(Suggestion::LowFootprint);
    }

    if has("rice") {
        suggestions.push(Suggestion::SustainableRice);
    }

    suggestions
}

/// Suggestion messages for a meal, in display order.
pub fn suggest<S: AsRef<str>>(total_co2: f64, ingredients: &[S]) -> Vec<&'static str> {
    suggestions_for(total_co2, ingredients)
        .into_iter()
        .map(Suggestion::message)
        .collect()
}

/// Where a footprint sits on the low / medium / high scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

impl ImpactLevel {
    /// Classify a total using the same thresholds as the footprint messages.
    pub fn classify(total_co2: f64) -> Self {
        if total_co2 > HIGH_FOOTPRINT_KG {
            Self::High
        } else if total_co2 < LOW_FOOTPRINT_KG {
            Self::Low
        } else {
            Self::Medium
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Impact (< 2 kg CO₂e)",
            Self::Medium => "Medium Impact (2-5 kg CO₂e)",
            Self::High => "High Impact (> 5 kg CO₂e)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Suggestion::*;

    #[test]
    fn test_beef_meal() {
        assert_eq!(
            suggestions_for(4.3, &["beef", "potatoes", "broccoli"]),
            [ReplaceHighImpactProtein, PlantBasedAlternatives]
        );
    }

    #[test]
    fn test_chicken_pasta_with_cheese() {
        // Cheese is in the high-impact set as well as having its own rule
        assert_eq!(
            suggestions_for(1.8, &["chicken", "pasta", "tomatoes", "cheese"]),
            [ReplaceHighImpactProtein, ReduceCheese, LowFootprint]
        );
    }

    #[test]
    fn test_every_rule_in_order() {
        assert_eq!(
            suggestions_for(12.0, &["rice", "cheese", "lamb"]),
            [
                ReplaceHighImpactProtein,
                PlantBasedAlternatives,
                ReduceCheese,
                HighFootprint,
                SustainableRice
            ]
        );
    }

    #[test]
    fn test_footprint_band_boundaries() {
        let none: [&str; 0] = [];
        assert!(suggestions_for(5.0, &none).is_empty());
        assert!(suggestions_for(2.0, &none).is_empty());
        assert_eq!(suggestions_for(5.0001, &none), [HighFootprint]);
        assert_eq!(suggestions_for(1.9999, &none), [LowFootprint]);
        assert_eq!(suggestions_for(0.0, &none), [LowFootprint]);
    }

    #[test]
    fn test_high_impact_without_red_meat() {
        assert_eq!(
            suggestions_for(3.0, &["shrimp"]),
            [ReplaceHighImpactProtein]
        );
        assert_eq!(
            suggestions_for(3.0, &["chocolate"]),
            [ReplaceHighImpactProtein]
        );
    }

    #[test]
    fn test_matching_is_exact() {
        // Ingredients are canonical names, not free text
        assert!(suggestions_for(3.0, &["beef stew", "brown rice"]).is_empty());
    }

    #[test]
    fn test_suggest_messages() {
        let messages = suggest(0.5, &["lentils", "rice"]);
        assert_eq!(
            messages,
            [
                "✅ Great choice! This is a low-carbon meal",
                "🌾 Consider local, sustainably grown rice or alternatives like quinoa"
            ]
        );
    }

    #[test]
    fn test_impact_level() {
        assert_eq!(ImpactLevel::classify(1.8), ImpactLevel::Low);
        assert_eq!(ImpactLevel::classify(2.0), ImpactLevel::Medium);
        assert_eq!(ImpactLevel::classify(4.3), ImpactLevel::Medium);
        assert_eq!(ImpactLevel::classify(5.0), ImpactLevel::Medium);
        assert_eq!(ImpactLevel::classify(5.1), ImpactLevel::High);
    }
}
