use crate::error::CalforgeError;
use crate::material::{SoluteMaterial, SolventMaterial};
use calforge_schemas::location::WellLocation;
use calforge_schemas::quantity::{Dimension, Quantity};

/// One compound dissolved in one solvent, with every quantity the
/// dispensing scheduler needs derived up front.
///
/// The solution is modeled as ideal: its volume and density are taken to be
/// the pure solvent's, ignoring the volume contribution of the dissolved
/// compound. For the dilute samples a titration run works with this is well
/// within pipetting accuracy.
///
/// All fields are computed once at construction and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleSolution<C, S> {
    name: String,
    compound: C,
    compound_mass: Quantity,
    solvent: S,
    solvent_mass: Quantity,
    location: WellLocation,
    density: Quantity,
    volume: Quantity,
    solution_mass: Quantity,
    compound_moles: Quantity,
    concentration: Quantity,
}

impl<C, S> SimpleSolution<C, S>
where
    C: SoluteMaterial,
    S: SolventMaterial,
{
    /// Derives a solution from a weighed-out compound and solvent mass.
    ///
    /// # Errors
    ///
    /// Fails before any arithmetic if the compound has no usable molecular
    /// weight, the solvent has no usable density, the purity lies outside
    /// (0, 1], or any input carries the wrong physical dimension.
    pub fn new(
        compound: C,
        compound_mass: Quantity,
        solvent: S,
        solvent_mass: Quantity,
        location: WellLocation,
    ) -> Result<Self, CalforgeError> {
        let compound_mass = compound_mass.expect_dimension(Dimension::MASS)?;
        let solvent_mass = solvent_mass.expect_dimension(Dimension::MASS)?;

        let molecular_weight = compound
            .molecular_weight()
            .filter(|mw| !mw.is_zero())
            .ok_or_else(|| CalforgeError::MissingValue {
                material: compound.name().to_string(),
                property: "molecular weight",
            })?
            .expect_dimension(Dimension::MOLAR_MASS)?;

        let purity = compound.purity();
        if !(purity > 0.0 && purity <= 1.0) {
            return Err(CalforgeError::InvalidFraction {
                label: format!("purity of '{}'", compound.name()),
                value: purity,
            });
        }

        let density = solvent
            .density()
            .filter(|d| !d.is_zero())
            .ok_or_else(|| CalforgeError::MissingValue {
                material: solvent.name().to_string(),
                property: "density",
            })?
            .expect_dimension(Dimension::DENSITY)?;

        let volume = solvent_mass.checked_div(density)?;
        let solution_mass = compound_mass.checked_add(solvent_mass)?;
        let compound_moles = compound_mass.checked_div(molecular_weight)? * purity;
        let concentration = compound_moles.checked_div(volume)?;

        Ok(Self {
            name: compound.name().to_string(),
            compound,
            compound_mass,
            solvent,
            solvent_mass,
            location,
            density,
            volume,
            solution_mass,
            compound_moles,
            concentration,
        })
    }

    /// The solution is named after its compound.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn compound(&self) -> &C {
        &self.compound
    }

    pub fn compound_mass(&self) -> Quantity {
        self.compound_mass
    }

    pub fn solvent(&self) -> &S {
        &self.solvent
    }

    pub fn solvent_mass(&self) -> Quantity {
        self.solvent_mass
    }

    pub fn location(&self) -> &WellLocation {
        &self.location
    }

    /// Density of the solution, equal to the pure solvent's.
    pub fn density(&self) -> Quantity {
        self.density
    }

    /// Volume of the solution, equal to the solvent volume.
    pub fn volume(&self) -> Quantity {
        self.volume
    }

    pub fn solution_mass(&self) -> Quantity {
        self.solution_mass
    }

    /// Moles of active compound, corrected for purity.
    pub fn compound_moles(&self) -> Quantity {
        self.compound_moles
    }

    pub fn concentration(&self) -> Quantity {
        self.concentration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calforge_schemas::material::{Compound, Solvent};

    fn destination() -> WellLocation {
        WellLocation::new("DestinationPlate", "ITCPlate", 1)
    }

    // 1.0 mg of imatinib in 10.0 g of water, the reference preparation.
    fn imatinib_in_water() -> SimpleSolution<Compound, Solvent> {
        let imatinib = Compound::with_purity("imatinib", Quantity::molar_mass(589.7), 1.0);
        let water = Solvent::with_density("water", Quantity::density(0.9970479));
        SimpleSolution::new(
            imatinib,
            Quantity::mass(0.001),
            water,
            Quantity::mass(10.0),
            destination(),
        )
        .unwrap()
    }

    #[test]
    fn test_derived_quantities() {
        let solution = imatinib_in_water();

        assert_eq!(solution.name(), "imatinib");
        assert_eq!(solution.density(), Quantity::density(0.9970479));
        assert_eq!(solution.volume(), Quantity::volume(10.0 / 0.9970479));
        assert_eq!(solution.solution_mass(), Quantity::mass(0.001 + 10.0));
        assert_eq!(solution.compound_moles(), Quantity::moles(0.001 / 589.7));
        assert_eq!(
            solution.concentration(),
            Quantity::concentration((0.001 / 589.7) / (10.0 / 0.9970479))
        );
        assert_eq!(solution.location(), &destination());
    }

    #[test]
    fn test_concentration_identity() {
        let solution = imatinib_in_water();
        assert_eq!(
            solution.concentration(),
            solution
                .compound_moles()
                .checked_div(solution.volume())
                .unwrap()
        );
    }

    #[test]
    fn test_purity_scales_moles() {
        let compound = Compound::with_purity("compound1", Quantity::molar_mass(209.12), 0.975);
        let water = Solvent::with_density("water", Quantity::density(0.9970479));
        let solution = SimpleSolution::new(
            compound,
            Quantity::mass(0.5),
            water,
            Quantity::mass(5.0),
            destination(),
        )
        .unwrap();
        assert_eq!(
            solution.compound_moles(),
            Quantity::moles(0.5 / 209.12 * 0.975)
        );
    }

    #[test]
    fn test_missing_molecular_weight_is_rejected() {
        let nacl = Compound::new("nacl");
        let water = Solvent::with_density("water", Quantity::density(0.9970479));
        let err = SimpleSolution::new(
            nacl,
            Quantity::mass(0.001),
            water,
            Quantity::mass(10.0),
            destination(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CalforgeError::MissingValue { property: "molecular weight", .. }
        ));
    }

    #[test]
    fn test_zero_molecular_weight_is_rejected() {
        let bad = Compound::with_molecular_weight("mystery", Quantity::molar_mass(0.0));
        let water = Solvent::with_density("water", Quantity::density(0.9970479));
        let err = SimpleSolution::new(
            bad,
            Quantity::mass(0.001),
            water,
            Quantity::mass(10.0),
            destination(),
        )
        .unwrap_err();
        assert!(matches!(err, CalforgeError::MissingValue { .. }));
    }

    #[test]
    fn test_unknown_density_is_rejected() {
        let imatinib = Compound::with_molecular_weight("imatinib", Quantity::molar_mass(589.7));
        let mystery = Solvent::new("mystery solvent");
        let err = SimpleSolution::new(
            imatinib,
            Quantity::mass(0.001),
            mystery,
            Quantity::mass(10.0),
            destination(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CalforgeError::MissingValue { property: "density", .. }
        ));
    }

    #[test]
    fn test_out_of_range_purity_is_rejected() {
        let bad = Compound::with_purity("degraded", Quantity::molar_mass(100.0), 0.0);
        let water = Solvent::with_density("water", Quantity::density(0.9970479));
        let err = SimpleSolution::new(
            bad,
            Quantity::mass(0.001),
            water,
            Quantity::mass(10.0),
            destination(),
        )
        .unwrap_err();
        assert!(matches!(err, CalforgeError::InvalidFraction { .. }));
    }

    #[test]
    fn test_swapped_mass_dimension_is_rejected() {
        let imatinib = Compound::with_molecular_weight("imatinib", Quantity::molar_mass(589.7));
        let water = Solvent::with_density("water", Quantity::density(0.9970479));
        let err = SimpleSolution::new(
            imatinib,
            Quantity::volume(0.001),
            water,
            Quantity::mass(10.0),
            destination(),
        )
        .unwrap_err();
        assert!(matches!(err, CalforgeError::Dimension(_)));
    }
}
