use ndarray::{Array, ArrayBase, Data, Dimension};
use std::f64::consts::TAU;

use crate::constants::{BouguerDensities, GRAVITATIONAL_CONST, SI_TO_MGAL};

/// Gravitational effect of topography using a Bouguer plate approximation, in mGal.
///
/// On land (height >= 0) this is the classic Bouguer plate
///
/// `g_bg = 2 pi G rho_c h`
///
/// In the oceans, subtracting normal gravity over corrects, since the normal Earth has
/// crust where the real Earth has water. The plate then removes this residual:
///
/// `g_bg = 2 pi G (rho_w - rho_c) |h|`
///
/// The infinite plate is adequate for flat regions and observation points close to
/// the surface of the Earth.
///
/// # Arguments
///
/// * `topography` - Topography height and bathymetry depth in meters, referenced to
///   the ellipsoid.
/// * `densities` - Crust and water densities.
pub fn bouguer_correction_scalar(topography: f64, densities: &BouguerDensities) -> f64 {
    SI_TO_MGAL * TAU * GRAVITATIONAL_CONST * densities.plate_density(topography) * topography
}

/// Element-wise [`bouguer_correction_scalar`].
///
/// ```
///     use geograv_core::prelude::*;
///     use ndarray::arr1;
///
///     let topo = arr1(&[-1000.0, 0.0, 1000.0]);
///     let bouguer = bouguer_correction(&topo, &BouguerDensities::default());
///     assert!(bouguer[0] < 0.0);
///     assert_eq!(bouguer[1], 0.0);
///     assert!(bouguer[2] > 0.0);
/// ```
pub fn bouguer_correction<S, D>(
    topography: &ArrayBase<S, D>,
    densities: &BouguerDensities,
) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    topography.mapv(|h| bouguer_correction_scalar(h, densities))
}
