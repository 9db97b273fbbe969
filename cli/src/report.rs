//! Terminal and JSON output.

use anyhow::Result;
use dishprint_core::{Analysis, DishDescription, EmissionsTable, MealRanking};
use serde::Serialize;
use std::io::{self, Write};

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Serialize)]
struct AnalysisOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a DishDescription>,
    #[serde(flatten)]
    analysis: &'a Analysis,
}

pub fn analysis(
    analysis: &Analysis,
    description: Option<&DishDescription>,
    json: bool,
) -> Result<()> {
    if json {
        return print_json(&AnalysisOutput {
            description,
            analysis,
        });
    }

    write_analysis(&mut io::stdout().lock(), analysis, description)?;
    Ok(())
}

fn write_analysis(
    out: &mut impl Write,
    analysis: &Analysis,
    description: Option<&DishDescription>,
) -> io::Result<()> {
    if let Some(description) = description {
        writeln!(out, "Dish Description: {}", description.caption)?;
        writeln!(out, "Details: {}", description.details)?;
        writeln!(out)?;
    }

    if description.is_some() || !analysis.detected.is_empty() {
        if analysis.detected.is_empty() {
            writeln!(out, "Detected ingredients: (none)")?;
        } else {
            writeln!(out, "Detected ingredients: {}", analysis.detected.join(", "))?;
        }
        if analysis.selected != analysis.detected {
            writeln!(out, "Selected ingredients: {}", analysis.selected.join(", "))?;
        }
        writeln!(out)?;
    }

    let (Some(impact), Some(equivalents)) = (analysis.impact, analysis.equivalents) else {
        writeln!(out, "No known ingredients to calculate.")?;
        return Ok(());
    };

    writeln!(
        out,
        "Total Carbon Footprint: {:.2} kg CO₂e ({})",
        analysis.footprint.total_co2,
        impact.label()
    )?;
    writeln!(out)?;

    writeln!(
        out,
        "{:<12} {:>12} {:>8} {:>14}",
        "Ingredient", "Portion (kg)", "CO₂/kg", "Total CO₂ (kg)"
    )?;
    for line in &analysis.footprint.breakdown {
        writeln!(
            out,
            "{:<12} {:>12.3} {:>8.1} {:>14.2}",
            line.ingredient, line.portion_kg, line.co2_per_kg, line.total_co2
        )?;
    }

    if !analysis.suggestions.is_empty() {
        writeln!(out)?;
        writeln!(out, "Reduction Suggestions:")?;
        for suggestion in &analysis.suggestions {
            writeln!(out, "  {}", suggestion)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Your meal's footprint is equivalent to:")?;
    for line in equivalents.lines() {
        writeln!(out, "  - {}", line)?;
    }

    Ok(())
}

pub fn ranking(ranking: &MealRanking, json: bool) -> Result<()> {
    #[derive(Serialize)]
    struct RankingOutput<'a> {
        #[serde(flatten)]
        ranking: &'a MealRanking,
        savings: Option<f64>,
    }

    if json {
        return print_json(&RankingOutput {
            ranking,
            savings: ranking.savings(),
        });
    }

    println!("Meals ranked by carbon footprint (lowest to highest):");
    for (i, meal) in ranking.meals.iter().enumerate() {
        println!("{}. {}: {:.2} kg CO2e", i + 1, meal.name, meal.total_co2);
    }

    if let (Some(high), Some(low), Some(savings)) =
        (ranking.highest(), ranking.lowest(), ranking.savings())
    {
        println!();
        println!(
            "Switching from {} to {} saves {:.2} kg CO2e per meal!",
            high.name, low.name, savings
        );
    }

    Ok(())
}

pub fn ingredients(table: &EmissionsTable, top: usize, json: bool) -> Result<()> {
    let ranked = table.ranked();

    if json {
        #[derive(Serialize)]
        struct Entry<'a> {
            ingredient: &'a str,
            co2_per_kg: f64,
        }
        let entries: Vec<Entry> = ranked
            .iter()
            .map(|&(ingredient, co2_per_kg)| Entry {
                ingredient,
                co2_per_kg,
            })
            .collect();
        return print_json(&entries);
    }

    write_ingredients(&mut io::stdout().lock(), &ranked, top)?;
    Ok(())
}

fn write_ingredients(out: &mut impl Write, ranked: &[(&str, f64)], top: usize) -> io::Result<()> {
    writeln!(out, "Total ingredients: {}", ranked.len())?;

    let top = top.min(ranked.len());

    // Factors keep their decimal point: 27.0, not 27
    writeln!(out)?;
    writeln!(out, "Top {} Highest Carbon Footprint Ingredients:", top)?;
    for (i, (name, factor)) in ranked.iter().take(top).enumerate() {
        writeln!(out, "{}. {}: {:?} kg CO2e/kg", i + 1, title_case(name), factor)?;
    }

    writeln!(out)?;
    writeln!(out, "Top {} Lowest Carbon Footprint Ingredients:", top)?;
    for (i, (name, factor)) in ranked[ranked.len() - top..].iter().enumerate() {
        writeln!(out, "{}. {}: {:?} kg CO2e/kg", i + 1, title_case(name), factor)?;
    }

    Ok(())
}

/// "olive oil" -> "Olive Oil"
fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
