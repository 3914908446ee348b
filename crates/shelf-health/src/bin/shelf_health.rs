//! Shelf Health CLI Tool
//!
//! Run the health & compatibility engine from the command line.
//!
//! Usage:
//!   shelf-health analyze --name <name> [--category <category>] [profile flags]
//!   shelf-health compat --name <name> [--category <category>] [profile flags]
//!   shelf-health scan <barcode> [profile flags]
//!   shelf-health guidance [profile flags]
//!
//! Logging goes to stderr and is controlled by `SHELF_HEALTH_LOG`
//! (e.g. `SHELF_HEALTH_LOG=debug` to trace every matched rule).

use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use shelf_health::{
    find_by_barcode, EngineConfig, HealthEngine, HealthError, HealthSession, ProductSignal,
    ProfileUpdate,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shelf-health")]
#[command(author = "Shelf Health")]
#[command(version = "0.1.0")]
#[command(about = "Rule-based health and allergy analysis for store products", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    profile: ProfileArgs,

    /// Output format: json, compact, or table
    #[arg(short, long, default_value = "json", global = true)]
    format: String,

    /// Engine configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct ProfileArgs {
    #[arg(long, global = true)]
    diabetic: bool,

    #[arg(long, global = true)]
    heart_disease: bool,

    #[arg(long, global = true)]
    hypertension: bool,

    #[arg(long, global = true)]
    pregnant: bool,

    /// Declared allergy (repeatable)
    #[arg(short, long = "allergy", global = true)]
    allergies: Vec<String>,

    /// child, adult, or senior
    #[arg(long, default_value = "adult", global = true)]
    age_group: String,

    /// Fitness goal (repeatable)
    #[arg(long = "fitness-goal", global = true)]
    fitness_goals: Vec<String>,
}

#[derive(Args)]
struct ProductArgs {
    /// Product name
    #[arg(short, long)]
    name: String,

    /// Catalog category
    #[arg(long)]
    category: Option<String>,
}

impl ProductArgs {
    fn signal(self) -> ProductSignal {
        ProductSignal {
            name: self.name,
            category: self.category,
            ..Default::default()
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Full analysis of a product
    Analyze(ProductArgs),

    /// Compatibility verdict for a product
    Compat(ProductArgs),

    /// Look up a demo barcode and analyze the scanned item
    Scan {
        /// Barcode printed on the item
        barcode: String,
    },

    /// Dietary guidance for the profile
    Guidance,
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("SHELF_HEALTH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    let engine = match &cli.config {
        Some(path) => HealthEngine::with_config(EngineConfig::load(path)?),
        None => HealthEngine::new(),
    };

    let mut session = HealthSession::with_engine(engine);
    session.update_profile(build_update(cli.profile)?);

    let result: Value = match cli.command {
        Commands::Analyze(product) => {
            let analysis = session.analyze(&product.signal());
            let mut value = serde_json::to_value(&analysis)?;
            value["display_score"] = analysis.display_score().into();
            value["score_band"] = analysis.score_band().label().into();
            value
        }
        Commands::Compat(product) => {
            serde_json::to_value(session.get_compatibility(&product.signal()))?
        }
        Commands::Scan { barcode } => {
            let scanned = find_by_barcode(&barcode)?;
            serde_json::to_value(session.scan(scanned))?
        }
        Commands::Guidance => serde_json::to_value(session.guidance())?,
    };

    let output_str = match cli.format.as_str() {
        "json" => serde_json::to_string_pretty(&result)?,
        "compact" => serde_json::to_string(&result)?,
        "table" => result_to_table(&result),
        _ => serde_json::to_string_pretty(&result)?,
    };
    println!("{}", output_str);

    Ok(())
}

fn build_update(args: ProfileArgs) -> Result<ProfileUpdate, HealthError> {
    Ok(ProfileUpdate {
        diabetic: Some(args.diabetic),
        heart_disease: Some(args.heart_disease),
        hypertension: Some(args.hypertension),
        pregnant: Some(args.pregnant),
        allergies: Some(args.allergies),
        age_group: Some(args.age_group.parse()?),
        fitness_goals: Some(args.fitness_goals),
        dietary_preferences: None,
    })
}

fn result_to_table(value: &Value) -> String {
    let mut out = String::new();
    render(value, 0, &mut out);
    out.trim_end().to_string()
}

fn render(value: &Value, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match value {
        Value::Object(map) => {
            for (key, v) in map {
                match v {
                    Value::Object(_) => {
                        out.push_str(&format!("{}{}:\n", indent, key));
                        render(v, depth + 1, out);
                    }
                    Value::Array(items) if items.iter().any(Value::is_object) => {
                        out.push_str(&format!("{}{}:\n", indent, key));
                        render(v, depth + 1, out);
                    }
                    _ => out.push_str(&format!("{}{:<20} {}\n", indent, key, scalar(v))),
                }
            }
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                if item.is_object() {
                    out.push_str(&format!("{}[{}]\n", indent, i));
                    render(item, depth + 1, out);
                } else {
                    out.push_str(&format!("{}- {}\n", indent, scalar(item)));
                }
            }
        }
        other => out.push_str(&format!("{}{}\n", indent, scalar(other))),
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) if items.is_empty() => "-".to_string(),
        Value::Array(items) => items.iter().map(scalar).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}
