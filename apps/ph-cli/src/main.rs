use clap::{Parser, Subcommand};
use ph_app::{
    AppError, AppResult, CurvePoint, Reading, Scenario, capacity_breakpoint, constants_to_yaml,
    evaluate, evaluate_all, load_constants, load_scenarios, parse_species, titration_curve,
};
use ph_chem::{
    BufferPair, Category, DropReagent, HouseholdItem, PhEngine, filter_species_catalog,
    indicator_label,
};
use ph_core::ChemConstants;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ph-cli")]
#[command(about = "phlab CLI - acid/base pH calculator", long_about = None)]
struct Cli {
    /// Constants table (YAML or JSON) overriding the standard values
    #[arg(long, global = true)]
    constants: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List species, optionally filtered by name or formula
    Species {
        query: Option<String>,
    },
    /// pH of a single dissolved species
    Solution {
        /// Species key, e.g. HCl, NaOH, NH4Cl
        species: String,
        /// Concentration in mol/L
        concentration: f64,
    },
    /// Drops of strong acid or base into water
    Water {
        /// Reagent in the dropper (hcl-0.1, hcl-0.01, naoh-0.1, naoh-0.01)
        #[arg(long)]
        reagent: Option<DropReagent>,
        #[arg(long, default_value_t = 0)]
        drops: u32,
        /// Starting water volume in mL
        #[arg(long)]
        initial_volume_ml: Option<f64>,
    },
    /// Drops of strong acid or base into a buffer
    Buffer {
        /// Buffer pair (acetate, ammonia, phosphate, carbonate, bicarbonate)
        pair: BufferPair,
        /// Weak acid concentration in mol/L
        #[arg(long)]
        acid: f64,
        /// Conjugate base concentration in mol/L
        #[arg(long)]
        base: f64,
        #[arg(long)]
        reagent: Option<DropReagent>,
        #[arg(long, default_value_t = 0)]
        drops: u32,
    },
    /// Reference pH of a household item
    Household {
        /// Item key, e.g. vinegar, baking-soda, blood
        item: HouseholdItem,
    },
    /// pH after each drop, as CSV
    #[command(subcommand)]
    Curve(CurveCommands),
    /// Evaluate every scenario in a YAML or JSON file
    Run {
        scenario_path: PathBuf,
    },
    /// Print the constants table in effect
    Constants,
}

#[derive(Subcommand)]
enum CurveCommands {
    /// Titration curve of water
    Water {
        #[arg(long)]
        reagent: DropReagent,
        #[arg(long)]
        max_drops: u32,
        #[arg(long)]
        initial_volume_ml: Option<f64>,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Titration curve of a buffer
    Buffer {
        pair: BufferPair,
        #[arg(long)]
        acid: f64,
        #[arg(long)]
        base: f64,
        #[arg(long)]
        reagent: DropReagent,
        #[arg(long)]
        max_drops: u32,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Quiet by default; RUST_LOG=debug shows each evaluation
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let constants = match cli.constants.as_deref() {
        Some(path) => load_constants(path)?,
        None => ChemConstants::standard(),
    };
    let engine = PhEngine::new(constants)?;

    match cli.command {
        Commands::Species { query } => cmd_species(query.as_deref().unwrap_or("")),
        Commands::Solution {
            species,
            concentration,
        } => {
            let scenario = Scenario::Solution {
                species: parse_species(&species)?,
                concentration,
            };
            cmd_evaluate(&engine, &scenario)
        }
        Commands::Water {
            reagent,
            drops,
            initial_volume_ml,
        } => cmd_evaluate(
            &engine,
            &Scenario::Water {
                reagent,
                drops,
                initial_volume_ml,
            },
        ),
        Commands::Buffer {
            pair,
            acid,
            base,
            reagent,
            drops,
        } => cmd_evaluate(
            &engine,
            &Scenario::Buffer {
                pair,
                acid_concentration: acid,
                base_concentration: base,
                reagent,
                drops,
            },
        ),
        Commands::Household { item } => cmd_evaluate(&engine, &Scenario::Household { item }),
        Commands::Curve(curve_cmd) => match curve_cmd {
            CurveCommands::Water {
                reagent,
                max_drops,
                initial_volume_ml,
                output,
            } => {
                let scenario = Scenario::Water {
                    reagent: Some(reagent),
                    drops: 0,
                    initial_volume_ml,
                };
                cmd_curve(&engine, &scenario, max_drops, output.as_deref())
            }
            CurveCommands::Buffer {
                pair,
                acid,
                base,
                reagent,
                max_drops,
                output,
            } => {
                let scenario = Scenario::Buffer {
                    pair,
                    acid_concentration: acid,
                    base_concentration: base,
                    reagent: Some(reagent),
                    drops: 0,
                };
                cmd_curve(&engine, &scenario, max_drops, output.as_deref())
            }
        },
        Commands::Run { scenario_path } => cmd_run(&engine, &scenario_path),
        Commands::Constants => {
            print!("{}", constants_to_yaml(engine.constants())?);
            Ok(())
        }
    }
}

fn cmd_species(query: &str) -> AppResult<()> {
    let entries = filter_species_catalog(query);
    if entries.is_empty() {
        println!("No species match '{}'", query);
        return Ok(());
    }
    for category in [Category::AcidsBases, Category::Salts] {
        let group: Vec<_> = entries.iter().filter(|e| e.category() == category).collect();
        if group.is_empty() {
            continue;
        }
        match category {
            Category::AcidsBases => println!("Acids and bases:"),
            Category::Salts => println!("Salts:"),
        }
        for entry in group {
            println!(
                "  {:<10} {} - {}",
                entry.canonical_id,
                entry.species.formula(),
                entry.display_name
            );
        }
    }
    Ok(())
}

fn print_reading(reading: &Reading) {
    println!("pH: {}", reading.format_ph());
    if let Some(h) = reading.h_concentration {
        println!("[H+]: {:.3e} M", h);
    }
    println!(
        "Indicator: {} ({})",
        reading.indicator,
        indicator_label(reading.ph)
    );
    if reading.capacity_exceeded {
        println!("⚠ Buffer capacity exceeded");
    }
}

fn cmd_evaluate(engine: &PhEngine, scenario: &Scenario) -> AppResult<()> {
    println!("{}", scenario.label());
    let reading = evaluate(engine, scenario)?;
    print_reading(&reading);
    Ok(())
}

fn curve_csv(points: &[CurvePoint]) -> String {
    let mut csv = String::from("drops,ph,capacity_exceeded\n");
    for point in points {
        csv.push_str(&format!(
            "{},{:.3},{}\n",
            point.drops, point.ph, point.capacity_exceeded
        ));
    }
    csv
}

fn cmd_curve(
    engine: &PhEngine,
    scenario: &Scenario,
    max_drops: u32,
    output: Option<&Path>,
) -> AppResult<()> {
    let points = titration_curve(engine, scenario, max_drops)?;
    let csv = curve_csv(&points);

    if let Some(path) = output {
        std::fs::write(path, csv).map_err(|source| AppError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        println!("✓ Wrote {} points to {}", points.len(), path.display());
        if let Some(drops) = capacity_breakpoint(&points) {
            println!("  Buffer capacity exceeded at {} drops", drops);
        }
    } else {
        print!("{}", csv);
    }
    Ok(())
}

fn cmd_run(engine: &PhEngine, scenario_path: &Path) -> AppResult<()> {
    let file = load_scenarios(scenario_path)?;
    if file.scenarios.is_empty() {
        println!("No scenarios found in {}", scenario_path.display());
        return Ok(());
    }

    let results = evaluate_all(engine, &file);
    let mut failed = 0;
    for (name, result) in &results {
        match result {
            Ok(reading) => {
                let flag = if reading.capacity_exceeded {
                    " (capacity exceeded)"
                } else {
                    ""
                };
                println!("  {:<24} pH {}{}", name, reading.format_ph(), flag);
            }
            Err(err) => {
                failed += 1;
                println!("  {:<24} error: {}", name, err);
            }
        }
    }

    if failed > 0 {
        return Err(AppError::InvalidInput(format!(
            "{} of {} scenarios failed",
            failed,
            results.len()
        )));
    }
    Ok(())
}
