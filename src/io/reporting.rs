// src/io/reporting.rs

use crate::analysis::calculator::EoqAnalysis;
use crate::analysis::curve::{curve_minimum, CurvePoint};
use crate::model::inputs::EoqInputs;
use std::error::Error;
use std::path::Path;

/// Formats a monetary value with two decimals and thousands separators,
/// e.g. 1549193.338 -> "1,549,193.34". Display-boundary formatting only;
/// the analysis itself never rounds.
pub fn format_thousands(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    if value < 0.0 {
        format!("-{}.{}", int_grouped, frac_part)
    } else {
        format!("{}.{}", int_grouped, frac_part)
    }
}

/// Prints the input parameters and the three result metrics to the console.
pub fn print_summary(inputs: &EoqInputs, analysis: &EoqAnalysis) {
    println!("\n=== Input Parameters ===");
    println!("Annual Demand (D):          {:.2} units", inputs.annual_demand);
    println!("Order Cost (S):             {}", format_thousands(inputs.order_cost));
    println!("Holding Cost (H):           {}", format_thousands(inputs.holding_cost));

    println!("\n=== Results ===");
    println!("EOQ (units):                {:.2}", analysis.eoq);
    println!("Orders per Year:            {:.2}", analysis.orders_per_year);
    println!(
        "Total Inventory Cost:       {}",
        format_thousands(analysis.total_cost)
    );
}

/// Prints where the sampled curve bottoms out, as a cross-check against the
/// analytic optimum.
pub fn print_curve_minimum(points: &[CurvePoint]) {
    match curve_minimum(points) {
        Some(best) => println!(
            "Curve minimum: q = {} at cost {}",
            best.order_quantity,
            format_thousands(best.total_cost)
        ),
        None => println!("Curve is empty (EOQ below one unit); nothing to plot."),
    }
}

/// Writes the cost curve to a CSV file for an external plotting tool.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "cost_curve.csv").
/// * `points` - The curve produced by the analysis.
pub fn write_cost_curve(file_path: &str, points: &[CurvePoint]) -> Result<(), Box<dyn Error>> {
    let path = Path::new(file_path);
    let mut wtr = csv::Writer::from_path(path)?;

    for point in points {
        wtr.serialize(point)?;
    }

    // Flush the buffer to ensure all data is written
    wtr.flush()?;

    println!(
        "Successfully exported {} rows to '{}'",
        points.len(),
        file_path
    );
    Ok(())
}
