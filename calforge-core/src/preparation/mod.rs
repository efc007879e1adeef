//! Derived preparation entities.
//!
//! A preparation is computed once from cataloged materials plus the masses
//! or mole fractions the operator entered, and is immutable afterwards.
//! The scheduler reads the derived quantities; nothing here touches
//! hardware.

pub mod mixture;
pub mod solution;

pub use mixture::SimpleMixture;
pub use solution::SimpleSolution;
