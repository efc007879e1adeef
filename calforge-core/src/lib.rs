//! Derived-quantity computations for automated titration calorimetry
//! sample preparation.
//!
//! Given cataloged materials plus operator-entered masses or mole
//! fractions, this crate derives the concentrations, mass fractions and
//! volume fractions a liquid-handling scheduler dispenses from, and writes
//! the resulting dispense plan. All derivations are pure, synchronous and
//! validated up front; every entity is immutable once constructed.

pub mod error;
pub mod material;
pub mod plan;
pub mod preparation;
