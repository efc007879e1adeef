use crate::quantity::Quantity;
use serde::{Deserialize, Serialize};

/// A named solvent. The density is optional; a solvent with an unknown
/// density can still be cataloged but cannot back a solution preparation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solvent {
    pub name: String,
    pub density: Option<Quantity>,
}

impl Solvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            density: None,
        }
    }

    pub fn with_density(name: impl Into<String>, density: Quantity) -> Self {
        Self {
            name: name.into(),
            density: Some(density),
        }
    }
}

/// A pure compound, typically a solid to be weighed out and dissolved.
///
/// Purity is a mass fraction in (0, 1] and defaults to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compound {
    pub name: String,
    pub molecular_weight: Option<Quantity>,
    pub purity: f64,
}

impl Compound {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            molecular_weight: None,
            purity: 1.00,
        }
    }

    pub fn with_molecular_weight(name: impl Into<String>, molecular_weight: Quantity) -> Self {
        Self {
            name: name.into(),
            molecular_weight: Some(molecular_weight),
            purity: 1.00,
        }
    }

    pub fn with_purity(name: impl Into<String>, molecular_weight: Quantity, purity: f64) -> Self {
        Self {
            name: name.into(),
            molecular_weight: Some(molecular_weight),
            purity,
        }
    }
}

/// A pure liquid that can serve both as a mixture component and as a
/// solvent. Density and molecular weight are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PureLiquid {
    pub name: String,
    pub density: Quantity,
    pub molecular_weight: Quantity,
    pub purity: f64,
}

impl PureLiquid {
    pub fn new(name: impl Into<String>, density: Quantity, molecular_weight: Quantity) -> Self {
        Self {
            name: name.into(),
            density,
            molecular_weight,
            purity: 1.0,
        }
    }

    pub fn with_purity(
        name: impl Into<String>,
        density: Quantity,
        molecular_weight: Quantity,
        purity: f64,
    ) -> Self {
        Self {
            name: name.into(),
            density,
            molecular_weight,
            purity,
        }
    }
}
