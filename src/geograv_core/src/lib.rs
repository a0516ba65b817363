//! # geograv Core
//! Gravitational fields of point masses, and the standard corrections applied to
//! measured gravity data.
//!
//! Every function here is a pure map from numeric inputs to numeric outputs following
//! a published closed form formula. Fields and corrections are evaluated element-wise
//! over [`ndarray`] arrays of any shape.
//!
//! - [`forward`] - Point mass forward modelling in Cartesian or spherical coordinates.
//! - [`corrections`] - Bouguer, atmospheric, spherical cap, free air and Eötvös
//!   corrections.
//!
//! Accelerations are reported in mGal, the potential in J/kg.
//!

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    while_true,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]

pub mod array;
pub mod constants;
pub mod corrections;
pub mod errors;
pub mod forward;
pub mod geometry;

/// Common useful imports
pub mod prelude {
    pub use crate::constants::BouguerDensities;
    pub use crate::corrections::{
        atmospheric_correction, bouguer_correction, eotvos_correction, free_air_correction,
        spherical_bouguer_cap_correction,
    };
    pub use crate::errors::{Error, GravResult};
    pub use crate::forward::{point_mass_gravity, Coincident, Field, ForwardOptions};
    pub use crate::geometry::{CoordinateSystem, ObservationPoints, PointMass, PointMasses};
}
