mod analysis;
mod io;
mod model;

use crate::analysis::calculator;
use crate::analysis::curve;
use crate::io::reporting;
use crate::model::inputs::EoqInputs;
use std::env;
use std::process;

// Defaults for a quick demo run without arguments.
const DEFAULT_ANNUAL_DEMAND: f64 = 1000.0;
const DEFAULT_ORDER_COST: f64 = 50000.0;
const DEFAULT_HOLDING_COST: f64 = 2000.0;

/// Reads up to three positional arguments (D, S, H); missing ones fall back
/// to the defaults. Range checking happens later in the calculator, this
/// only rejects values that are not numbers at all.
fn parse_inputs(args: &[String]) -> Result<EoqInputs, String> {
    let mut values = [
        DEFAULT_ANNUAL_DEMAND,
        DEFAULT_ORDER_COST,
        DEFAULT_HOLDING_COST,
    ];
    let names = ["annual demand", "order cost", "holding cost"];

    for (i, arg) in args.iter().skip(1).take(3).enumerate() {
        values[i] = arg
            .parse::<f64>()
            .map_err(|_| format!("could not parse {} '{}' as a number", names[i], arg))?;
    }

    Ok(EoqInputs::new(values[0], values[1], values[2]))
}

fn main() {
    println!("=== EOQ Calculator (Economic Order Quantity) ===");

    // 1. COLLECT INPUTS
    let args: Vec<String> = env::args().collect();
    let inputs = match parse_inputs(&args) {
        Ok(inputs) => inputs,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            eprintln!("Usage: eoq-calculator [annual_demand] [order_cost] [holding_cost]");
            process::exit(1);
        }
    };

    // 2. RUN THE ANALYSIS
    let analysis = match calculator::compute(&inputs) {
        Ok(analysis) => analysis,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // 3. REPORT THE METRICS
    reporting::print_summary(&inputs, &analysis);

    // 4. SAMPLE THE COST CURVE
    // Quantities 1..2*EOQ, for plotting ordering cost vs holding cost.
    let points = curve::cost_curve(&inputs, analysis.eoq);
    reporting::print_curve_minimum(&points);

    // 5. EXPORT FOR PLOTTING
    let output_file = "cost_curve.csv";
    match reporting::write_cost_curve(output_file, &points) {
        Ok(_) => println!("Done. Plot './{}' to see the curve.", output_file),
        Err(e) => eprintln!("Error writing CSV: {}", e),
    }
}
