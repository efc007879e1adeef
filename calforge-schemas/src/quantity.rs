//! A small dimensioned-quantity value type used throughout the preparation
//! calculations. Quantities carry a magnitude and a physical dimension;
//! addition is only defined between equal dimensions, while multiplication
//! and division derive the resulting dimension.
//!
//! No unit conversion happens here. Magnitudes are trusted to already be
//! commensurable (one consistent unit per dimension across a workflow,
//! e.g. grams, milliliters, moles).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Div, Mul};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum QuantityError {
    #[error("cannot combine quantities of dimension {0} and {1}")]
    IncompatibleDimensions(Dimension, Dimension),

    #[error("division by a zero-magnitude quantity of dimension {0}")]
    DivisionByZero(Dimension),

    #[error("expected a {expected} quantity, got {actual}")]
    UnexpectedDimension {
        expected: Dimension,
        actual: Dimension,
    },
}

/// A physical dimension, expressed as integer exponents over the three base
/// dimensions the preparation domain needs: mass, volume and
/// amount-of-substance.
///
/// Multiplying quantities adds the exponents, dividing subtracts them, so
/// derived dimensions (density, molar mass, concentration) fall out of the
/// arithmetic without being special-cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub mass: i8,
    pub volume: i8,
    pub amount: i8,
}

impl Dimension {
    pub const DIMENSIONLESS: Dimension = Dimension { mass: 0, volume: 0, amount: 0 };
    pub const MASS: Dimension = Dimension { mass: 1, volume: 0, amount: 0 };
    pub const VOLUME: Dimension = Dimension { mass: 0, volume: 1, amount: 0 };
    pub const AMOUNT: Dimension = Dimension { mass: 0, volume: 0, amount: 1 };
    /// Mass per amount-of-substance (e.g. g/mol).
    pub const MOLAR_MASS: Dimension = Dimension { mass: 1, volume: 0, amount: -1 };
    /// Mass per volume (e.g. g/mL).
    pub const DENSITY: Dimension = Dimension { mass: 1, volume: -1, amount: 0 };
    /// Amount-of-substance per volume (e.g. mol/mL).
    pub const CONCENTRATION: Dimension = Dimension { mass: 0, volume: -1, amount: 1 };
    /// Volume per amount-of-substance (e.g. mL/mol).
    pub const MOLAR_VOLUME: Dimension = Dimension { mass: 0, volume: 1, amount: -1 };

    fn multiply(self, other: Dimension) -> Dimension {
        Dimension {
            mass: self.mass + other.mass,
            volume: self.volume + other.volume,
            amount: self.amount + other.amount,
        }
    }

    fn divide(self, other: Dimension) -> Dimension {
        Dimension {
            mass: self.mass - other.mass,
            volume: self.volume - other.volume,
            amount: self.amount - other.amount,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match (self.mass, self.volume, self.amount) {
            (0, 0, 0) => "dimensionless",
            (1, 0, 0) => "mass",
            (0, 1, 0) => "volume",
            (0, 0, 1) => "amount-of-substance",
            (1, 0, -1) => "molar mass",
            (1, -1, 0) => "density",
            (0, -1, 1) => "concentration",
            (0, 1, -1) => "molar volume",
            _ => {
                return write!(
                    f,
                    "mass^{} volume^{} amount^{}",
                    self.mass, self.volume, self.amount
                )
            }
        };
        f.write_str(name)
    }
}

/// A magnitude tagged with a physical dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub dimension: Dimension,
}

impl Quantity {
    pub fn new(value: f64, dimension: Dimension) -> Self {
        Self { value, dimension }
    }

    pub fn mass(value: f64) -> Self {
        Self::new(value, Dimension::MASS)
    }

    pub fn volume(value: f64) -> Self {
        Self::new(value, Dimension::VOLUME)
    }

    pub fn moles(value: f64) -> Self {
        Self::new(value, Dimension::AMOUNT)
    }

    pub fn molar_mass(value: f64) -> Self {
        Self::new(value, Dimension::MOLAR_MASS)
    }

    pub fn density(value: f64) -> Self {
        Self::new(value, Dimension::DENSITY)
    }

    pub fn concentration(value: f64) -> Self {
        Self::new(value, Dimension::CONCENTRATION)
    }

    pub fn dimensionless(value: f64) -> Self {
        Self::new(value, Dimension::DIMENSIONLESS)
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    /// Adds another quantity of the same dimension.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::IncompatibleDimensions` if the dimensions
    /// differ.
    pub fn checked_add(self, other: Quantity) -> Result<Quantity, QuantityError> {
        if self.dimension != other.dimension {
            return Err(QuantityError::IncompatibleDimensions(
                self.dimension,
                other.dimension,
            ));
        }
        Ok(Quantity::new(self.value + other.value, self.dimension))
    }

    /// Subtracts another quantity of the same dimension.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::IncompatibleDimensions` if the dimensions
    /// differ.
    pub fn checked_sub(self, other: Quantity) -> Result<Quantity, QuantityError> {
        if self.dimension != other.dimension {
            return Err(QuantityError::IncompatibleDimensions(
                self.dimension,
                other.dimension,
            ));
        }
        Ok(Quantity::new(self.value - other.value, self.dimension))
    }

    /// Checks that this quantity carries the expected dimension and passes
    /// it through unchanged.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::UnexpectedDimension` otherwise.
    pub fn expect_dimension(self, expected: Dimension) -> Result<Quantity, QuantityError> {
        if self.dimension != expected {
            return Err(QuantityError::UnexpectedDimension {
                expected,
                actual: self.dimension,
            });
        }
        Ok(self)
    }

    /// Divides by another quantity, deriving the resulting dimension.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::DivisionByZero` if the divisor magnitude
    /// is zero.
    pub fn checked_div(self, other: Quantity) -> Result<Quantity, QuantityError> {
        if other.is_zero() {
            return Err(QuantityError::DivisionByZero(other.dimension));
        }
        Ok(Quantity::new(
            self.value / other.value,
            self.dimension.divide(other.dimension),
        ))
    }
}

impl Mul for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        Quantity::new(self.value * rhs.value, self.dimension.multiply(rhs.dimension))
    }
}

impl Div for Quantity {
    type Output = Quantity;

    fn div(self, rhs: Quantity) -> Quantity {
        Quantity::new(self.value / rhs.value, self.dimension.divide(rhs.dimension))
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        Quantity::new(self.value * rhs, self.dimension)
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;

    fn div(self, rhs: f64) -> Quantity {
        Quantity::new(self.value / rhs, self.dimension)
    }
}

impl PartialOrd for Quantity {
    /// Quantities order by magnitude within an equal dimension; quantities
    /// of different dimensions are incomparable.
    fn partial_cmp(&self, other: &Quantity) -> Option<Ordering> {
        if self.dimension != other.dimension {
            return None;
        }
        self.value.partial_cmp(&other.value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.value, self.dimension)
    }
}
