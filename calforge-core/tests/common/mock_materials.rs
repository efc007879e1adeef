//! Mock materials for testing
//!
//! These stand-ins implement the capability traits directly, without going
//! through the catalog types, so the preparation constructors can be
//! validated against the structural contract alone.

use calforge_core::material::{LiquidMaterial, SoluteMaterial, SolventMaterial};
use calforge_schemas::quantity::Quantity;

/// A solute that is not a `Compound`.
pub struct MockCompound {
    pub name: String,
    pub molecular_weight: Option<Quantity>,
    pub purity: f64,
}

impl MockCompound {
    pub fn new(name: &str, molecular_weight: Quantity, purity: f64) -> Self {
        Self {
            name: name.to_string(),
            molecular_weight: Some(molecular_weight),
            purity,
        }
    }
}

impl SoluteMaterial for MockCompound {
    fn name(&self) -> &str {
        &self.name
    }

    fn molecular_weight(&self) -> Option<Quantity> {
        self.molecular_weight
    }

    fn purity(&self) -> f64 {
        self.purity
    }
}

/// A solvent that is not a `Solvent`.
pub struct MockSolvent {
    pub name: String,
    pub density: Option<Quantity>,
}

impl MockSolvent {
    pub fn new(name: &str, density: Quantity) -> Self {
        Self {
            name: name.to_string(),
            density: Some(density),
        }
    }
}

impl SolventMaterial for MockSolvent {
    fn name(&self) -> &str {
        &self.name
    }

    fn density(&self) -> Option<Quantity> {
        self.density
    }
}

/// A mixture component that is not a `PureLiquid`.
pub struct MockLiquid {
    pub name: String,
    pub density: Quantity,
    pub molecular_weight: Quantity,
}

impl MockLiquid {
    pub fn new(name: &str, density: Quantity, molecular_weight: Quantity) -> Self {
        Self {
            name: name.to_string(),
            density,
            molecular_weight,
        }
    }
}

impl LiquidMaterial for MockLiquid {
    fn name(&self) -> &str {
        &self.name
    }

    fn density(&self) -> Quantity {
        self.density
    }

    fn molecular_weight(&self) -> Quantity {
        self.molecular_weight
    }
}
