//! Terminal rendering for classification results and importance charts.
//!
//! The chart is a horizontal bar chart printed top-down in ranking order,
//! so the largest score is the top row.

use fatigue_core::{ClassLabel, FEATURES};
use fatigue_model::Importance;

const BAR_WIDTH: usize = 40;

const RED: &str = "\x1b[31m";
const ORANGE: &str = "\x1b[38;5;208m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

fn severity_color(label: ClassLabel) -> &'static str {
    match label {
        ClassLabel::Weak => RED,
        ClassLabel::Moderate => ORANGE,
        ClassLabel::Strong => GREEN,
    }
}

/// Print the colored result message with its severity icon.
pub fn print_classification(label: ClassLabel) {
    println!();
    println!(
        "  {} {}{}{}",
        label.icon(),
        severity_color(label),
        label.message(),
        RESET
    );
    println!();
}

/// Print the ranked importances as a horizontal bar chart.
pub fn print_importance_chart(ranked: &[Importance]) {
    let max = ranked.first().map(|i| i.score).unwrap_or(0.0);

    println!();
    println!("  Feature importances (mean |attribution|)");
    println!();
    for item in ranked {
        println!("  {:<34}  {:>8.4}  {}", item.name, item.score, bar(item.score, max));
    }
    println!();
}

/// List the input schema in fitting order.
pub fn print_feature_table() {
    println!("Input schema ({} features, in fitting order):", FEATURES.len());
    for feature in &FEATURES {
        println!("  {:<10} {}", feature.code, feature.name);
    }
}

fn bar(score: f64, max: f64) -> String {
    if max <= 0.0 {
        return String::new();
    }
    let filled = ((score / max) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled)
}
