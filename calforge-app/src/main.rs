use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::Path;

mod config;
mod workflow;

use workflow::PrepRequest;

/// Plans titration-calorimetry sample preparations from a materials
/// catalog and an operator request.
#[derive(Debug, Parser)]
#[command(name = "calforge", version)]
struct Cli {
    /// Directory holding the materials catalog (solvents/, compounds/, liquids/)
    #[arg(long, default_value = "./data/catalog")]
    catalog: String,

    /// Preparation request file
    #[arg(long, default_value = "./data/request.yaml")]
    request: String,

    /// Directory run output is written under
    #[arg(long, default_value = "./data/runs")]
    output: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    println!("--- Calforge Preparation Planner ---");

    let request_str = fs::read_to_string(&cli.request)
        .with_context(|| format!("Failed to read {}", cli.request))?;
    let request: PrepRequest = serde_yaml::from_str(&request_str)
        .with_context(|| format!("Failed to parse {}", cli.request))?;

    let kb = config::Catalog::load(&cli.catalog)?;

    let output_dir = format!(
        "{}/prep_{}",
        cli.output,
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    );
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir))?;

    // Copy the request file to the output directory for traceability
    fs::copy(&cli.request, Path::new(&output_dir).join("request.yaml"))?;

    workflow::run_preparations(&request, &kb, &output_dir)?;

    println!("\nPreparation planning complete. Results are in '{}'", output_dir);

    Ok(())
}
