use crate::material::{Compound, PureLiquid, Solvent};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SolventFile {
    pub schema_version: String,
    pub solvents: Vec<Solvent>,
}

#[derive(Debug, Deserialize)]
pub struct CompoundFile {
    pub schema_version: String,
    pub compounds: Vec<Compound>,
}

#[derive(Debug, Deserialize)]
pub struct PureLiquidFile {
    pub schema_version: String,
    pub liquids: Vec<PureLiquid>,
}
