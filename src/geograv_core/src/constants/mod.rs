//! # Constants
//! Physical constants and reference values.
//!
//! Lengths are in meters, masses in kg, accelerations are reported in mGal.
mod densities;
mod universal;

pub use densities::*;
pub use universal::*;
