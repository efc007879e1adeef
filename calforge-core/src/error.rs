use calforge_schemas::quantity::QuantityError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalforgeError {
    #[error("material '{material}' has no usable {property}")]
    MissingValue {
        material: String,
        property: &'static str,
    },

    #[error("{field} length {actual} does not match component count {expected}")]
    ShapeMismatch {
        expected: usize,
        field: &'static str,
        actual: usize,
    },

    #[error("{label} must lie in (0, 1], got {value}")]
    InvalidFraction { label: String, value: f64 },

    #[error("mole fractions must sum to 1, got {sum}")]
    UnbalancedFractions { sum: f64 },

    #[error("dimension error: {0}")]
    Dimension(#[from] QuantityError),

    #[error("Failed to write dispense plan '{0}': {1}")]
    CsvError(String, #[source] csv::Error),
}
