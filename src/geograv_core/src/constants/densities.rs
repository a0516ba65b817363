use serde::{Deserialize, Serialize};

/// Reference density of the upper crust in kg/m^3.
pub const DENSITY_CRUST: f64 = 2670.0;

/// Reference density of sea water in kg/m^3.
pub const DENSITY_WATER: f64 = 1040.0;

/// Densities used by the Bouguer plate correction.
///
/// The crust density is used as the density of topography on land, and as the
/// density of the normal Earth's crust in the oceans, where the plate is filled with
/// the contrast between the water and the crust.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BouguerDensities {
    /// Density of the crust in kg/m^3.
    pub crust: f64,

    /// Density of water in kg/m^3.
    pub water: f64,
}

impl Default for BouguerDensities {
    fn default() -> Self {
        BouguerDensities {
            crust: DENSITY_CRUST,
            water: DENSITY_WATER,
        }
    }
}

impl BouguerDensities {
    /// Density of the plate, selected by the sign of the topography.
    ///
    /// Heights above or at the datum use the crust density. Below the datum the
    /// bathymetry is negative, so the contrast is flipped in sign here, which makes
    /// `density * height` equal `(water - crust) * |height|`.
    #[inline(always)]
    pub fn plate_density(&self, height: f64) -> f64 {
        if height < 0.0 {
            self.crust - self.water
        } else {
            self.crust
        }
    }
}
