use crate::config::Catalog;
use anyhow::{Context, Result};
use calforge_core::plan::DispensePlanWriter;
use calforge_core::preparation::{SimpleMixture, SimpleSolution};
use calforge_schemas::location::WellLocation;
use calforge_schemas::material::{Compound, PureLiquid, Solvent};
use calforge_schemas::quantity::Quantity;
use serde::Deserialize;
use std::path::Path;

/// One solution to prepare: a weighed compound dissolved in a weighed
/// solvent at a destination well. Masses are entered in the workflow's
/// base mass unit.
#[derive(Debug, Clone, Deserialize)]
pub struct SolutionPrep {
    pub compound: String,
    pub compound_mass: f64,
    pub solvent: String,
    pub solvent_mass: f64,
    pub location: WellLocation,
}

/// One mixture to prepare: cataloged liquids combined by mole fraction,
/// each drawn from its own source well.
#[derive(Debug, Clone, Deserialize)]
pub struct MixturePrep {
    pub components: Vec<String>,
    pub mole_fractions: Vec<f64>,
    pub locations: Vec<WellLocation>,
}

/// An operator-authored preparation request, read from YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct PrepRequest {
    #[serde(default)]
    pub solutions: Vec<SolutionPrep>,
    #[serde(default)]
    pub mixtures: Vec<MixturePrep>,
}

/// Resolves every request entry against the catalog, derives the
/// preparations and writes the dispense plan.
pub fn run_preparations(request: &PrepRequest, kb: &Catalog, output_dir: &str) -> Result<()> {
    println!("\n--- [Workflow] Planning preparations ---");

    let plan_path = Path::new(output_dir).join("dispense_plan.csv");
    let mut writer = DispensePlanWriter::new(plan_path.to_str().unwrap())?;

    for prep in &request.solutions {
        let solution = build_solution(prep, kb)?;
        println!(
            "  solution '{}': {} in {}, concentration {}",
            solution.name(),
            solution.compound_mass(),
            solution.solvent().name,
            solution.concentration()
        );
        writer.log_solution(&solution)?;
    }

    for prep in &request.mixtures {
        let mixture = build_mixture(prep, kb)?;
        let names: Vec<&str> = mixture.components().iter().map(|c| c.name.as_str()).collect();
        println!(
            "  mixture {}: volume fractions {:?}",
            names.join("/"),
            mixture.volume_fractions()
        );
        writer.log_mixture(&mixture)?;
    }

    println!(
        "Planned {} solutions and {} mixtures into '{}'",
        request.solutions.len(),
        request.mixtures.len(),
        writer.path()
    );
    Ok(())
}

fn build_solution(prep: &SolutionPrep, kb: &Catalog) -> Result<SimpleSolution<Compound, Solvent>> {
    let compound = kb.compound(&prep.compound)?.clone();
    let solvent = kb.solvent(&prep.solvent)?.clone();
    SimpleSolution::new(
        compound,
        Quantity::mass(prep.compound_mass),
        solvent,
        Quantity::mass(prep.solvent_mass),
        prep.location.clone(),
    )
    .with_context(|| format!("Failed to derive solution of '{}'", prep.compound))
}

fn build_mixture(prep: &MixturePrep, kb: &Catalog) -> Result<SimpleMixture<PureLiquid>> {
    let components = prep
        .components
        .iter()
        .map(|name| kb.liquid(name).map(|liquid| liquid.clone()))
        .collect::<Result<Vec<_>>>()?;
    SimpleMixture::new(
        components,
        prep.mole_fractions.clone(),
        prep.locations.clone(),
    )
    .with_context(|| format!("Failed to derive mixture of {:?}", prep.components))
}
