//! Ranking meals by footprint.

use serde::{Deserialize, Serialize};

use crate::footprint::Tables;

/// A named list of ingredients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub ingredients: Vec<String>,
}

impl Meal {
    pub fn new(name: impl Into<String>, ingredients: &[&str]) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Parse `Name=ingredient,ingredient,...`.
    pub fn parse(s: &str) -> Option<Self> {
        let (name, ingredients) = s.split_once('=')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let ingredients = ingredients
            .split(',')
            .map(|i| i.trim().to_lowercase())
            .filter(|i| !i.is_empty())
            .collect();
        Some(Self {
            name: name.to_string(),
            ingredients,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMeal {
    pub name: String,
    pub total_co2: f64,
}

/// Meals ordered from lowest to highest footprint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealRanking {
    pub meals: Vec<RankedMeal>,
}

impl MealRanking {
    pub fn lowest(&self) -> Option<&RankedMeal> {
        self.meals.first()
    }

    pub fn highest(&self) -> Option<&RankedMeal> {
        self.meals.last()
    }

    /// CO2e saved per meal by switching from the highest to the lowest.
    pub fn savings(&self) -> Option<f64> {
        match (self.highest(), self.lowest()) {
            (Some(high), Some(low)) => Some(high.total_co2 - low.total_co2),
            _ => None,
        }
    }
}

/// Rank meals by footprint using default portions. The sort is stable, so
/// meals with equal totals keep their input order.
pub fn rank_meals(meals: &[Meal], tables: &Tables) -> MealRanking {
    let mut ranked: Vec<RankedMeal> = meals
        .iter()
        .map(|meal| RankedMeal {
            name: meal.name.clone(),
            total_co2: tables.calculate(&meal.ingredients, None).total_co2,
        })
        .collect();

    ranked.sort_by(|a, b| a.total_co2.total_cmp(&b.total_co2));

    MealRanking { meals: ranked }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn burgers() -> Vec<Meal> {
        vec![
            Meal::new("Beef Burger", &["beef", "cheese", "bread"]),
            Meal::new("Chicken Sandwich", &["chicken", "bread", "lettuce", "tomatoes"]),
            Meal::new("Veggie Burger", &["lentils", "bread", "lettuce", "tomatoes"]),
        ]
    }

    #[test]
    fn test_rank_meals() {
        let ranking = rank_meals(&burgers(), &Tables::builtin());
        let names: Vec<&str> = ranking.meals.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Veggie Burger", "Chicken Sandwich", "Beef Burger"]);

        let savings = ranking.savings().unwrap();
        assert!((savings - 4.025).abs() < 1e-9, "savings was {savings}");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let meals = vec![
            Meal::new("Second", &["tofu"]),
            Meal::new("First", &["pasta", "unknown"]),
            Meal::new("Third", &["beans"]),
        ];
        let ranking = rank_meals(&meals, &Tables::builtin());
        let names: Vec<&str> = ranking.meals.iter().map(|m| m.name.as_str()).collect();
        // pasta 2.0 * 0.075 ranks first; tofu and beans tie at 0.2
        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[test]
    fn test_reproducible() {
        let tables = Tables::builtin();
        assert_eq!(rank_meals(&burgers(), &tables), rank_meals(&burgers(), &tables));
    }

    #[test]
    fn test_empty() {
        let ranking = rank_meals(&[], &Tables::builtin());
        assert!(ranking.lowest().is_none());
        assert!(ranking.savings().is_none());
    }

    #[test]
    fn test_parse_meal() {
        assert_eq!(
            Meal::parse("Veggie Burger=lentils, Bread ,lettuce,"),
            Some(Meal::new("Veggie Burger", &["lentils", "bread", "lettuce"]))
        );
        assert_eq!(Meal::parse("no ingredients here"), None);
        assert_eq!(Meal::parse("=beef"), None);
    }
}
