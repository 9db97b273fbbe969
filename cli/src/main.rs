mod report;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use dishprint_core::ai::{describe_dish, CachingAiClient};
use dishprint_core::{
    analyze, load_image, rank_meals, EmissionsTable, Meal, PortionOverrides, PortionTable, Tables,
    DEFAULT_PORTION_KG,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dishprint")]
#[command(about = "Estimate the carbon footprint of a dish", long_about = None)]
struct Cli {
    #[command(flatten)]
    tables: TableArgs,

    /// Print machine-readable JSON instead of a report
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct TableArgs {
    /// Emission factors JSON file (default: built-in table)
    #[arg(long, global = true, env = "DISHPRINT_EMISSIONS")]
    emissions: Option<PathBuf>,

    /// Standard portions JSON file (default: built-in table)
    #[arg(long, global = true, env = "DISHPRINT_PORTIONS")]
    portions: Option<PathBuf>,

    /// Portion in kg for ingredients with no standard portion
    #[arg(long, global = true, default_value_t = DEFAULT_PORTION_KG)]
    default_portion: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe a dish photo with the vision model and estimate its footprint
    Analyze {
        /// Photo of the dish (JPEG, PNG, GIF or WebP)
        image: PathBuf,
        /// Use these ingredients instead of the detected ones (comma-separated)
        #[arg(long, value_delimiter = ',')]
        ingredients: Option<Vec<String>>,
        /// Portion override, e.g. --portion beef=0.2 (repeatable)
        #[arg(long = "portion", id = "portion", value_name = "NAME=KG")]
        portions: Vec<String>,
    },
    /// Estimate the footprint of a dish from text descriptions
    Describe {
        /// One or more descriptions of the dish
        #[arg(required = true)]
        text: Vec<String>,
        /// Use these ingredients instead of the detected ones (comma-separated)
        #[arg(long, value_delimiter = ',')]
        ingredients: Option<Vec<String>>,
        /// Portion override, e.g. --portion beef=0.2 (repeatable)
        #[arg(long = "portion", id = "portion", value_name = "NAME=KG")]
        portions: Vec<String>,
    },
    /// Estimate the footprint of an explicit ingredient list
    Calculate {
        #[arg(required = true)]
        ingredients: Vec<String>,
        /// Portion override, e.g. --portion beef=0.2 (repeatable)
        #[arg(long = "portion", id = "portion", value_name = "NAME=KG")]
        portions: Vec<String>,
    },
    /// Rank meals from lowest to highest footprint
    Compare {
        /// Meal as NAME=ingredient,ingredient,... (repeatable)
        #[arg(long = "meal", value_name = "NAME=INGREDIENTS", required = true)]
        meals: Vec<String>,
    },
    /// List the ingredients with the highest and lowest emission factors
    Ingredients {
        /// How many entries to show at each end
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let tables = load_tables(&cli.tables)?;

    match cli.command {
        Commands::Analyze {
            image,
            ingredients,
            portions,
        } => {
            let photo = load_image(&image)
                .with_context(|| format!("Failed to load {}", image.display()))?;
            let client = CachingAiClient::from_env().context("Failed to configure AI client")?;

            let described = describe_dish(&client, &photo)
                .await
                .context("Failed to describe dish")?;
            tracing::info!(
                cached = described.cached,
                total_tokens = described.usage.total_tokens,
                "Dish described"
            );

            let selection = ingredients.map(|i| normalize_names(&i, &tables));
            let overrides = PortionOverrides::from_assignments(&portions)?;
            let analysis = analyze(
                &described.description.texts(),
                &tables,
                selection.as_deref(),
                Some(&overrides),
            );
            report::analysis(&analysis, Some(&described.description), cli.json)?;
        }
        Commands::Describe {
            text,
            ingredients,
            portions,
        } => {
            let selection = ingredients.map(|i| normalize_names(&i, &tables));
            let overrides = PortionOverrides::from_assignments(&portions)?;
            let analysis = analyze(&text, &tables, selection.as_deref(), Some(&overrides));
            report::analysis(&analysis, None, cli.json)?;
        }
        Commands::Calculate {
            ingredients,
            portions,
        } => {
            let selection = normalize_names(&ingredients, &tables);
            let overrides = PortionOverrides::from_assignments(&portions)?;
            let analysis = analyze(&[], &tables, Some(&selection), Some(&overrides));
            report::analysis(&analysis, None, cli.json)?;
        }
        Commands::Compare { meals } => {
            let meals = meals
                .iter()
                .map(|m| {
                    Meal::parse(m).with_context(|| {
                        format!("Invalid meal {:?}, expected NAME=ingredient,ingredient", m)
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            let ranking = rank_meals(&meals, &tables);
            report::ranking(&ranking, cli.json)?;
        }
        Commands::Ingredients { top } => {
            report::ingredients(&tables.emissions, top, cli.json)?;
        }
    }

    Ok(())
}

fn load_tables(args: &TableArgs) -> Result<Tables> {
    let emissions = match &args.emissions {
        Some(path) => EmissionsTable::from_path(path)
            .with_context(|| format!("Failed to load emissions table {}", path.display()))?,
        None => EmissionsTable::builtin(),
    };

    let portions = match &args.portions {
        Some(path) => PortionTable::from_path(path)
            .with_context(|| format!("Failed to load portions table {}", path.display()))?,
        None => PortionTable::builtin(),
    };

    if !args.default_portion.is_finite() || args.default_portion <= 0.0 {
        bail!(
            "--default-portion must be a positive number of kg, got {}",
            args.default_portion
        );
    }

    Ok(Tables {
        emissions,
        portions,
        default_portion_kg: args.default_portion,
    })
}

/// Lowercase user-supplied ingredient names and warn about any the
/// emissions table does not know. Unknown names are kept; they simply
/// contribute nothing.
fn normalize_names(names: &[String], tables: &Tables) -> Vec<String> {
    names
        .iter()
        .map(|name| name.trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .inspect(|name| {
            if !tables.emissions.contains(name) {
                tracing::warn!(ingredient = %name, "Unknown ingredient, ignoring");
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_calculate() {
        let cli = Cli::try_parse_from([
            "dishprint",
            "calculate",
            "beef",
            "potatoes",
            "--portion",
            "beef=0.2",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Calculate {
                ingredients,
                portions,
            } => {
                assert_eq!(ingredients, ["beef", "potatoes"]);
                assert_eq!(portions, ["beef=0.2"]);
            }
            _ => panic!("expected calculate"),
        }
    }

    #[test]
    fn test_rejects_bad_default_portion() {
        let args = TableArgs {
            emissions: None,
            portions: None,
            default_portion: 0.0,
        };
        assert!(load_tables(&args).is_err());
    }

    #[test]
    fn test_normalize_names() {
        let tables = Tables::builtin();
        let names = vec![" Beef ".to_string(), "".to_string(), "Dragonfruit".to_string()];
        assert_eq!(normalize_names(&names, &tables), ["beef", "dragonfruit"]);
    }
}
