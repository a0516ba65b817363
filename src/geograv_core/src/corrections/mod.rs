//! # Corrections
//! Standard corrections applied to measured gravity data.
//!
//! All corrections are in mGal and are evaluated element-wise. Single input
//! corrections keep the shape of their input, corrections of several inputs broadcast
//! them against each other (see [`crate::array`]).
//!
//! Formulas follow:
//!
//! - Hinze, W. J., et al. (2005). New standards for reducing gravity data: The North
//!   American gravity database. Geophysics, 70(4), J25-J32.
//! - Hinze, W. J., von Frese, R. R. B., Saad, A. H. (2013). Gravity and Magnetic
//!   Exploration. Cambridge University Press.
//! - Blakely, R. J. (1995). Potential Theory in Gravity and Magnetic Applications.
//!   Cambridge University Press.
//!
mod atmospheric;
mod bouguer;
mod eotvos;
mod free_air;
mod spherical_cap;

pub use atmospheric::*;
pub use bouguer::*;
pub use eotvos::*;
pub use free_air::*;
pub use spherical_cap::*;
