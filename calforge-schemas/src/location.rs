use serde::{Deserialize, Serialize};
use std::fmt;

/// A deck position a material is drawn from or dispensed into.
///
/// The preparation core never interprets these fields; they are stored on
/// derived entities verbatim and forwarded to the scheduling layer, which
/// maps them onto the robot's deck layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellLocation {
    pub rack_label: String,
    pub rack_type: String,
    pub position: u32,
}

impl WellLocation {
    pub fn new(rack_label: impl Into<String>, rack_type: impl Into<String>, position: u32) -> Self {
        Self {
            rack_label: rack_label.into(),
            rack_type: rack_type.into(),
            position,
        }
    }
}

impl fmt::Display for WellLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}:{}", self.rack_label, self.rack_type, self.position)
    }
}
