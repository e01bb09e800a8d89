//! Interactive session: the form analog of the one-shot subcommands.
//!
//! Field values persist across triggers within one session, the way form
//! widgets retain their last-set value, and reset to 0.0 on `reset`.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use fatigue_core::{FEATURES, FeatureVector};
use fatigue_model::Pipeline;

use crate::display;

pub fn run(pipeline: &Pipeline<'_>) -> anyhow::Result<()> {
    let mut input = FeatureVector::default();

    println!("Material fatigue-strength session. Type `help` for commands.");
    prompt()?;
    for line in io::stdin().lock().lines() {
        let line = line?;
        match execute(pipeline, &mut input, line.trim()) {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Quit) => break,
            Err(err) => eprintln!("error: {err:#}"),
        }
        prompt()?;
    }
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Continue,
    Quit,
}

fn execute(
    pipeline: &Pipeline<'_>,
    input: &mut FeatureVector,
    line: &str,
) -> anyhow::Result<Outcome> {
    let mut parts = line.split_whitespace();
    match parts.next() {
        None => {}
        Some("set") => {
            let code = parts.next().context("usage: set <code> <value>")?;
            let raw = parts.next().context("usage: set <code> <value>")?;
            let value: f64 = raw
                .parse()
                .with_context(|| format!("{raw:?} is not a number"))?;
            input.set(code, value)?;
        }
        Some("show") => {
            for feature in &FEATURES {
                let value = input.get(feature.code).unwrap_or(0.0);
                println!("  {:<10} {:<34} {}", feature.code, feature.name, value);
            }
        }
        Some("predict") => {
            let label = pipeline.classify(input)?;
            display::print_classification(label);
        }
        Some("explain") => {
            display::print_importance_chart(&pipeline.explain_importances(input));
        }
        Some("reset") => input.clear(),
        Some("help") => print_help(),
        Some("quit") | Some("exit") => return Ok(Outcome::Quit),
        Some(other) => anyhow::bail!("unknown command {other:?}, try `help`"),
    }
    Ok(Outcome::Continue)
}

fn print_help() {
    println!("  set <code> <value>   set one input field (see `fatigue features`)");
    println!("  show                 list current field values");
    println!("  predict              classify the current field values");
    println!("  explain              rank feature importances for the current values");
    println!("  reset                reset every field to 0.0");
    println!("  quit                 leave the session");
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}
