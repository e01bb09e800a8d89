mod display;
mod session;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use fatigue_core::FeatureVector;
use fatigue_model::{Artifacts, Pipeline};

/// Default location of the fitted artifacts, relative to the working directory.
const DEFAULT_MODEL_DIR: &str = "models/fatigue";

#[derive(Parser)]
#[command(name = "fatigue", version, about = "Material fatigue-strength classification")]
struct Cli {
    /// Directory containing scaler.json and model.json.
    #[arg(
        long,
        global = true,
        env = "FATIGUE_MODEL_DIR",
        default_value = DEFAULT_MODEL_DIR
    )]
    model_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Predict the fatigue-strength class for a set of input values.
    Predict {
        /// Feature values as CODE=VALUE pairs; unset features default to 0.0.
        values: Vec<String>,
    },
    /// Rank per-feature attribution scores for a set of input values.
    Explain {
        /// Feature values as CODE=VALUE pairs; unset features default to 0.0.
        values: Vec<String>,
    },
    /// Interactive session; field values persist across triggers.
    Session,
    /// List the input schema.
    Features,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("fatigue v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    match cli.command {
        Command::Predict { values } => {
            let input = parse_values(&values)?;
            let artifacts = load_artifacts(&cli.model_dir)?;
            let label = Pipeline::new(&artifacts).classify(&input)?;
            display::print_classification(label);
            Ok(())
        }
        Command::Explain { values } => {
            let input = parse_values(&values)?;
            let artifacts = load_artifacts(&cli.model_dir)?;
            let ranked = Pipeline::new(&artifacts).explain_importances(&input);
            display::print_importance_chart(&ranked);
            Ok(())
        }
        Command::Session => {
            let artifacts = load_artifacts(&cli.model_dir)?;
            session::run(&Pipeline::new(&artifacts))
        }
        Command::Features => {
            display::print_feature_table();
            Ok(())
        }
    }
}

fn load_artifacts(dir: &Path) -> anyhow::Result<Artifacts> {
    Artifacts::load(dir)
        .with_context(|| format!("loading model artifacts from {}", dir.display()))
}

/// Assemble an input vector from `CODE=VALUE` arguments.
fn parse_values(pairs: &[String]) -> anyhow::Result<FeatureVector> {
    let mut input = FeatureVector::default();
    for pair in pairs {
        let (code, raw) = pair
            .split_once('=')
            .with_context(|| format!("expected CODE=VALUE, got {pair:?}"))?;
        let value: f64 = raw
            .trim()
            .parse()
            .with_context(|| format!("{code}: {raw:?} is not a number"))?;
        input.set(code.trim(), value)?;
    }
    Ok(input)
}
