//! Capability traits over material descriptors.
//!
//! The preparation constructors are generic over these traits rather than
//! over the concrete catalog types, so anything exposing the required
//! read-only properties can back a preparation: a cataloged material, a
//! value assembled on the fly by the operator layer, or a test double.

use calforge_schemas::material::{Compound, PureLiquid, Solvent};
use calforge_schemas::quantity::Quantity;

/// A substance that can be weighed out and dissolved.
pub trait SoluteMaterial {
    fn name(&self) -> &str;
    /// Molar mass, if known. `None` or a zero magnitude makes the material
    /// unusable for a solution preparation.
    fn molecular_weight(&self) -> Option<Quantity>;
    /// Mass fraction of active substance, in (0, 1].
    fn purity(&self) -> f64;
}

/// A substance a compound can be dissolved in.
pub trait SolventMaterial {
    fn name(&self) -> &str;
    /// Density, if known. `None` or a zero magnitude makes the material
    /// unusable for a solution preparation.
    fn density(&self) -> Option<Quantity>;
}

/// A liquid with fully known physical properties, usable as a mixture
/// component.
pub trait LiquidMaterial {
    fn name(&self) -> &str;
    fn density(&self) -> Quantity;
    fn molecular_weight(&self) -> Quantity;
}

impl SoluteMaterial for Compound {
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

impl SoluteMaterial for PureLiquid {
    fn name(&self) -> &str {
        &self.name
    }

    fn molecular_weight(&self) -> Option<Quantity> {
        Some(self.molecular_weight)
    }

    fn purity(&self) -> f64 {
        self.purity
    }
}

impl SolventMaterial for Solvent {
    fn name(&self) -> &str {
        &self.name
    }

    fn density(&self) -> Option<Quantity> {
        self.density
    }
}

impl SolventMaterial for PureLiquid {
    fn name(&self) -> &str {
        &self.name
    }

    fn density(&self) -> Option<Quantity> {
        Some(self.density)
    }
}

impl LiquidMaterial for PureLiquid {
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
