use crate::error::CalforgeError;
use crate::material::LiquidMaterial;
use calforge_schemas::location::WellLocation;
use calforge_schemas::quantity::{Dimension, Quantity};

/// Relative tolerance on the mole-fraction sum. Operator-entered fractions
/// routinely carry rounding from a third decimal place; anything beyond
/// this is a data-entry error.
const MOLE_FRACTION_TOLERANCE: f64 = 1e-6;

/// N liquids combined by mole fraction, with the mass and volume fractions
/// the dispensing scheduler needs derived up front.
///
/// `components`, `locations` and the three fraction sequences are aligned
/// by index: position i in each describes the same physical component, in
/// the order the components were given.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleMixture<L> {
    components: Vec<L>,
    locations: Vec<WellLocation>,
    mole_fractions: Vec<f64>,
    mass_fractions: Vec<f64>,
    volume_fractions: Vec<f64>,
}

impl<L: LiquidMaterial> SimpleMixture<L> {
    /// Derives a mixture from components and their mole fractions.
    ///
    /// # Errors
    ///
    /// Fails before any arithmetic if the three input sequences differ in
    /// length, any mole fraction lies outside (0, 1], the fractions do not
    /// sum to 1 within tolerance, or any component carries an unusable
    /// density or molecular weight.
    pub fn new(
        components: Vec<L>,
        mole_fractions: Vec<f64>,
        locations: Vec<WellLocation>,
    ) -> Result<Self, CalforgeError> {
        let n = components.len();
        if mole_fractions.len() != n {
            return Err(CalforgeError::ShapeMismatch {
                expected: n,
                field: "mole fractions",
                actual: mole_fractions.len(),
            });
        }
        if locations.len() != n {
            return Err(CalforgeError::ShapeMismatch {
                expected: n,
                field: "locations",
                actual: locations.len(),
            });
        }

        for (component, &fraction) in components.iter().zip(&mole_fractions) {
            if !(fraction > 0.0 && fraction <= 1.0) {
                return Err(CalforgeError::InvalidFraction {
                    label: format!("mole fraction of '{}'", component.name()),
                    value: fraction,
                });
            }
        }
        let sum: f64 = mole_fractions.iter().sum();
        if (sum - 1.0).abs() > MOLE_FRACTION_TOLERANCE {
            return Err(CalforgeError::UnbalancedFractions { sum });
        }

        let mut molar_masses = Vec::with_capacity(n);
        let mut molar_volumes = Vec::with_capacity(n);
        for component in &components {
            let molecular_weight = component.molecular_weight();
            if molecular_weight.is_zero() {
                return Err(CalforgeError::MissingValue {
                    material: component.name().to_string(),
                    property: "molecular weight",
                });
            }
            let molecular_weight = molecular_weight.expect_dimension(Dimension::MOLAR_MASS)?;

            let density = component.density();
            if density.is_zero() {
                return Err(CalforgeError::MissingValue {
                    material: component.name().to_string(),
                    property: "density",
                });
            }
            let density = density.expect_dimension(Dimension::DENSITY)?;

            molar_masses.push(molecular_weight);
            molar_volumes.push(molecular_weight.checked_div(density)?);
        }

        let mut normalizing_mass = Quantity::new(0.0, Dimension::MOLAR_MASS);
        let mut normalizing_volume = Quantity::new(0.0, Dimension::MOLAR_VOLUME);
        for i in 0..n {
            normalizing_mass = normalizing_mass.checked_add(molar_masses[i] * mole_fractions[i])?;
            normalizing_volume =
                normalizing_volume.checked_add(molar_volumes[i] * mole_fractions[i])?;
        }

        let mut mass_fractions = Vec::with_capacity(n);
        let mut volume_fractions = Vec::with_capacity(n);
        for i in 0..n {
            let mass_fraction =
                (molar_masses[i] * mole_fractions[i]).checked_div(normalizing_mass)?;
            mass_fractions.push(mass_fraction.value);

            let volume_fraction =
                (molar_volumes[i] * mole_fractions[i]).checked_div(normalizing_volume)?;
            volume_fractions.push(volume_fraction.value);
        }

        Ok(Self {
            components,
            locations,
            mole_fractions,
            mass_fractions,
            volume_fractions,
        })
    }

    pub fn components(&self) -> &[L] {
        &self.components
    }

    pub fn locations(&self) -> &[WellLocation] {
        &self.locations
    }

    /// The operator-supplied mole fractions, stored verbatim.
    pub fn mole_fractions(&self) -> &[f64] {
        &self.mole_fractions
    }

    pub fn mass_fractions(&self) -> &[f64] {
        &self.mass_fractions
    }

    pub fn volume_fractions(&self) -> &[f64] {
        &self.volume_fractions
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calforge_schemas::material::PureLiquid;

    fn water() -> PureLiquid {
        PureLiquid::new(
            "water",
            Quantity::density(0.9970479),
            Quantity::molar_mass(18.01528),
        )
    }

    fn ethanol() -> PureLiquid {
        PureLiquid::new("ethanol", Quantity::density(0.789), Quantity::molar_mass(46.07))
    }

    fn methanol() -> PureLiquid {
        PureLiquid::new("methanol", Quantity::density(0.7914), Quantity::molar_mass(32.04))
    }

    fn vial_holder(position: u32) -> WellLocation {
        WellLocation::new("SourcePlate", "5x3 Vial Holder", position)
    }

    fn water_ethanol() -> SimpleMixture<PureLiquid> {
        SimpleMixture::new(
            vec![water(), ethanol()],
            vec![0.6, 0.4],
            vec![vial_holder(1), vial_holder(2)],
        )
        .unwrap()
    }

    #[test]
    fn test_fractions_match_hand_computation() {
        let mixture = water_ethanol();

        let mw = [18.01528, 46.07];
        let rho = [0.9970479, 0.789];
        let x = [0.6, 0.4];
        let normalizing_mass: f64 = x[0] * mw[0] + x[1] * mw[1];
        let molar_volumes = [mw[0] / rho[0], mw[1] / rho[1]];
        let normalizing_volume: f64 = x[0] * molar_volumes[0] + x[1] * molar_volumes[1];

        for i in 0..2 {
            assert!((mixture.mass_fractions()[i] - x[i] * mw[i] / normalizing_mass).abs() < 1e-12);
            assert!(
                (mixture.volume_fractions()[i] - x[i] * molar_volumes[i] / normalizing_volume)
                    .abs()
                    < 1e-12
            );
        }
    }

    #[test]
    fn test_input_order_is_preserved() {
        let mixture = water_ethanol();
        assert_eq!(mixture.components()[0].name, "water");
        assert_eq!(mixture.components()[1].name, "ethanol");
        assert_eq!(mixture.locations(), &[vial_holder(1), vial_holder(2)]);
        assert_eq!(mixture.mole_fractions(), &[0.6, 0.4]);
    }

    #[test]
    fn test_derived_fractions_sum_to_one() {
        let mixture = SimpleMixture::new(
            vec![water(), ethanol(), methanol()],
            vec![0.25, 0.35, 0.4],
            vec![vial_holder(1), vial_holder(2), vial_holder(3)],
        )
        .unwrap();
        let mass_sum: f64 = mixture.mass_fractions().iter().sum();
        let volume_sum: f64 = mixture.volume_fractions().iter().sum();
        assert!((mass_sum - 1.0).abs() < 1e-9);
        assert!((volume_sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_component_mixture_is_trivial() {
        let mixture =
            SimpleMixture::new(vec![water()], vec![1.0], vec![vial_holder(1)]).unwrap();
        assert_eq!(mixture.mass_fractions(), &[1.0]);
        assert_eq!(mixture.volume_fractions(), &[1.0]);
    }

    #[test]
    fn test_fraction_count_mismatch_is_rejected() {
        let err = SimpleMixture::new(
            vec![water(), ethanol()],
            vec![1.0],
            vec![vial_holder(1), vial_holder(2)],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CalforgeError::ShapeMismatch { field: "mole fractions", .. }
        ));
    }

    #[test]
    fn test_location_count_mismatch_is_rejected() {
        let err = SimpleMixture::new(
            vec![water(), ethanol()],
            vec![0.6, 0.4],
            vec![vial_holder(1)],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CalforgeError::ShapeMismatch { field: "locations", .. }
        ));
    }

    #[test]
    fn test_unbalanced_fractions_are_rejected() {
        let err = SimpleMixture::new(
            vec![water(), ethanol()],
            vec![0.6, 0.39],
            vec![vial_holder(1), vial_holder(2)],
        )
        .unwrap_err();
        match err {
            CalforgeError::UnbalancedFractions { sum } => assert!((sum - 0.99).abs() < 1e-12),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_out_of_range_fraction_is_rejected() {
        let err = SimpleMixture::new(
            vec![water(), ethanol()],
            vec![1.2, -0.2],
            vec![vial_holder(1), vial_holder(2)],
        )
        .unwrap_err();
        assert!(matches!(err, CalforgeError::InvalidFraction { .. }));
    }

    #[test]
    fn test_zero_density_component_is_rejected() {
        let weightless = PureLiquid::new(
            "phantom",
            Quantity::density(0.0),
            Quantity::molar_mass(18.0),
        );
        let err = SimpleMixture::new(
            vec![water(), weightless],
            vec![0.5, 0.5],
            vec![vial_holder(1), vial_holder(2)],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CalforgeError::MissingValue { property: "density", .. }
        ));
    }
}
