//! Nodal - DC solver for resistive networks
//!
//! Reads a `.cir` netlist and writes the solved totals and probe readings.
//!
//! # Usage
//!
//! ```bash
//! nodal divider          # reads divider.cir, writes divider.out
//! nodal divider.cir --stdout -v
//! ```

use std::path::PathBuf;

use clap::Parser;
use log::{info, LevelFilter};
use nodal_core::{
    error::Result,
    netlist,
    report::{format_report, write_report},
    solver::DEFAULT_PIVOT_TOLERANCE,
    NodalSolver, SolverConfig,
};

/// DC nodal analysis of resistive networks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the circuit description (".cir" is appended when missing)
    #[arg(value_name = "CIRCUIT")]
    circuit: PathBuf,

    /// Report path (defaults to the circuit path with an ".out" extension)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Print the report instead of writing a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Smallest LU pivot, relative to its column, accepted before the network counts as singular
    #[arg(long, default_value_t = DEFAULT_PIVOT_TOLERANCE)]
    pivot_tolerance: f64,

    /// Match component probes by exact name only
    #[arg(long)]
    exact_probes: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let circuit_path = if args.circuit.extension().is_some() {
        args.circuit.clone()
    } else {
        args.circuit.with_extension("cir")
    };

    // Parse the circuit file
    let model = netlist::parse_file(&circuit_path)?;
    info!(
        "loaded {} resistors and {} probes from {}",
        model.num_resistors(),
        model.probes().len(),
        circuit_path.display()
    );

    // Solve
    let config = SolverConfig::new()
        .with_pivot_tolerance(args.pivot_tolerance)
        .with_suffix_match(!args.exact_probes);
    let results = NodalSolver::with_config(config).solve(&model)?;

    if args.stdout {
        print!("{}", format_report(&results));
        return Ok(());
    }

    let out_path = args
        .output
        .unwrap_or_else(|| circuit_path.with_extension("out"));
    write_report(&out_path, &results)?;
    println!("Results have been written to {}", out_path.display());

    Ok(())
}
