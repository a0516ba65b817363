/// Newtonian gravitational constant in m^3 / (kg s^2).
pub const GRAVITATIONAL_CONST: f64 = 6.673e-11;

/// Conversion from SI acceleration (m / s^2) to mGal.
pub const SI_TO_MGAL: f64 = 1e5;

/// Mean radius of the Earth in meters, used as a reference radius for spherical
/// computations.
pub const MEAN_EARTH_RADIUS: f64 = 6_371_000.0;
