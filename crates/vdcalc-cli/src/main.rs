//! vdcalc command-line interface.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser};
use vdcalc_core::{parse_resistance, Catalog, Constraints, Goal, Series};
use vdcalc_solver::{find_best, report};

#[derive(Parser)]
#[command(name = "vdcalc")]
#[command(about = "Find the best resistor pair for a voltage divider", long_about = None)]
#[command(version)]
#[command(group(ArgGroup::new("goal").required(true).args(["divide", "ratio"])))]
struct Cli {
    /// Use standard E6 (20%) resistor values
    #[arg(long)]
    e6: bool,

    /// Use standard E12 (10%) resistor values
    #[arg(long)]
    e12: bool,

    /// Use standard E24 (5%) resistor values
    #[arg(long)]
    e24: bool,

    /// Use standard E48 (2%) resistor values
    #[arg(long)]
    e48: bool,

    /// Use standard E96 (1%) resistor values
    #[arg(long)]
    e96: bool,

    /// Read parts from an inventory file containing one resistor value per line
    #[arg(long, value_name = "FILE")]
    database: Option<PathBuf>,

    /// Goal division factor: (R1 + R2) / R2 = N
    #[arg(long, value_name = "N")]
    divide: Option<f64>,

    /// Goal ratio: R1 = N * R2
    #[arg(long, value_name = "N")]
    ratio: Option<f64>,

    /// R1 must be at least this value (suffixes k and M accepted)
    #[arg(long, value_name = "R", value_parser = parse_bound)]
    min_r1: Option<f64>,

    /// R1 cannot exceed this value
    #[arg(long, value_name = "R", value_parser = parse_bound)]
    max_r1: Option<f64>,

    /// R2 must be at least this value
    #[arg(long, value_name = "R", value_parser = parse_bound)]
    min_r2: Option<f64>,

    /// R2 cannot exceed this value
    #[arg(long, value_name = "R", value_parser = parse_bound)]
    max_r2: Option<f64>,

    /// Sum of R1 and R2 must be at least this value
    #[arg(long, value_name = "R", value_parser = parse_bound)]
    min_sum: Option<f64>,

    /// Sum of R1 and R2 cannot exceed this value
    #[arg(long, value_name = "R", value_parser = parse_bound)]
    max_sum: Option<f64>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn parse_bound(s: &str) -> std::result::Result<f64, String> {
    parse_resistance(s).ok_or_else(|| format!("invalid resistance value: {s:?}"))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let catalog = build_catalog(&cli)?;

    let goal = match (cli.divide, cli.ratio) {
        (Some(n), None) => Goal::divide_by(n)?,
        (None, Some(n)) => Goal::ratio_to(n)?,
        _ => unreachable!("clap enforces exactly one goal"),
    };

    let constraints = Constraints {
        min_r1: cli.min_r1,
        max_r1: cli.max_r1,
        min_r2: cli.min_r2,
        max_r2: cli.max_r2,
        min_sum: cli.min_sum,
        max_sum: cli.max_sum,
    };

    if cli.verbose {
        println!("Catalog: {} values", catalog.len());
        println!("Goal: {goal:?}");
        println!();
    }

    let best = find_best(&catalog, goal, &constraints)?;
    print!("{}", report::render(&best));

    Ok(())
}

fn build_catalog(cli: &Cli) -> Result<Catalog> {
    let mut catalog = Catalog::new();

    if cli.e6 {
        catalog.add_series(Series::E6);
    }
    if cli.e12 {
        catalog.add_series(Series::E12);
    }
    if cli.e24 {
        catalog.add_series(Series::E24);
    }
    if cli.e48 {
        catalog.add_series(Series::E48);
    }
    if cli.e96 {
        catalog.add_series(Series::E96);
    }

    if let Some(path) = &cli.database {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read inventory file: {}", path.display()))?;
        catalog.add_inventory(&text);
    }

    if catalog.is_empty() {
        bail!(
            "no component values specified; use --database FILE or one of \
             --e6/--e12/--e24/--e48/--e96"
        );
    }

    Ok(catalog)
}
