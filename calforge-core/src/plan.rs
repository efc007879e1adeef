use crate::error::CalforgeError;
use crate::material::{LiquidMaterial, SoluteMaterial, SolventMaterial};
use crate::preparation::{SimpleMixture, SimpleSolution};
use csv::Writer;
use serde::Serialize;
use std::fs;

#[derive(Debug, Serialize)]
struct PlanEntry {
    step: u64,
    kind: String,
    preparation: String,
    destination: String,
    volume: Option<f64>,
    concentration: Option<f64>,
    transfers_json: String,
}

/// Writes the flat dispense plan the liquid-handling scheduler consumes.
///
/// One row per preparation; the individual material transfers are carried
/// in a JSON column, each with the deck location it draws from or lands in.
pub struct DispensePlanWriter {
    writer: Writer<fs::File>,
    path: String,
    step: u64,
}

impl DispensePlanWriter {
    pub fn new(path: &str) -> Result<Self, CalforgeError> {
        let writer = Writer::from_path(path)
            .map_err(|e| CalforgeError::CsvError(path.to_string(), e))?;
        Ok(Self {
            writer,
            path: path.to_string(),
            step: 0,
        })
    }

    pub fn log_solution<C, S>(
        &mut self,
        solution: &SimpleSolution<C, S>,
    ) -> Result<(), anyhow::Error>
    where
        C: SoluteMaterial,
        S: SolventMaterial,
    {
        let transfers_json = serde_json::to_string(&vec![
            serde_json::json!({
                "material": solution.compound().name(),
                "mass": solution.compound_mass().value,
                "location": solution.location().to_string(),
            }),
            serde_json::json!({
                "material": solution.solvent().name(),
                "mass": solution.solvent_mass().value,
                "location": solution.location().to_string(),
            }),
        ])?;

        self.step += 1;
        let entry = PlanEntry {
            step: self.step,
            kind: "solution".to_string(),
            preparation: solution.name().to_string(),
            destination: solution.location().to_string(),
            volume: Some(solution.volume().value),
            concentration: Some(solution.concentration().value),
            transfers_json,
        };
        self.writer.serialize(entry)?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn log_mixture<L>(&mut self, mixture: &SimpleMixture<L>) -> Result<(), anyhow::Error>
    where
        L: LiquidMaterial,
    {
        let transfers: Vec<serde_json::Value> = mixture
            .components()
            .iter()
            .enumerate()
            .map(|(i, component)| {
                serde_json::json!({
                    "material": component.name(),
                    "mole_fraction": mixture.mole_fractions()[i],
                    "mass_fraction": mixture.mass_fractions()[i],
                    "volume_fraction": mixture.volume_fractions()[i],
                    "location": mixture.locations()[i].to_string(),
                })
            })
            .collect();
        let transfers_json = serde_json::to_string(&transfers)?;

        let preparation = mixture
            .components()
            .iter()
            .map(LiquidMaterial::name)
            .collect::<Vec<_>>()
            .join("/");

        self.step += 1;
        let entry = PlanEntry {
            step: self.step,
            kind: "mixture".to_string(),
            preparation,
            destination: String::new(),
            volume: None,
            concentration: None,
            transfers_json,
        };
        self.writer.serialize(entry)?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}
