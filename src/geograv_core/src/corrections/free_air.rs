use ndarray::{ArrayBase, ArrayD, Data, Dimension, Zip};

use crate::array::{broadcast_shape, broadcast_to};
use crate::errors::GravResult;

/// Free air correction in mGal, Hinze 2005 eq. 5, including the second order term.
///
/// `g_fa = -(0.3087691 - 0.0004398 sin^2(phi)) h + 7.2125e-8 h^2`
///
/// If normal gravity is computed at the station elevation rather than on the
/// ellipsoid, this correction is not required.
///
/// # Arguments
///
/// * `topography` - Height of the station above the ellipsoid in meters.
/// * `latitude` - Latitude of the station in degrees.
pub fn free_air_correction_scalar(topography: f64, latitude: f64) -> f64 {
    let sin_lat = latitude.to_radians().sin();
    -(0.3087691 - 0.0004398 * sin_lat.powi(2)) * topography + 7.2125e-8 * topography.powi(2)
}

/// Element-wise [`free_air_correction_scalar`].
///
/// The inputs are broadcast against each other, so a single latitude may be used
/// with an array of heights.
///
/// ```
///     use geograv_core::prelude::*;
///     use ndarray::{arr0, arr1};
///
///     let topo = arr1(&[0.0, 100.0, 1000.0]);
///     let corr = free_air_correction(&topo, &arr0(45.0)).unwrap();
///     assert_eq!(corr.shape(), &[3]);
///     assert_eq!(corr[[0]], 0.0);
///
///     assert!(free_air_correction(&topo, &arr1(&[0.0, 10.0])).is_err());
/// ```
pub fn free_air_correction<S1, D1, S2, D2>(
    topography: &ArrayBase<S1, D1>,
    latitude: &ArrayBase<S2, D2>,
) -> GravResult<ArrayD<f64>>
where
    S1: Data<Elem = f64>,
    D1: Dimension,
    S2: Data<Elem = f64>,
    D2: Dimension,
{
    let shape = broadcast_shape(&[topography.shape(), latitude.shape()])?;
    let topography = broadcast_to(topography, &shape)?;
    let latitude = broadcast_to(latitude, &shape)?;
    Ok(Zip::from(&topography)
        .and(&latitude)
        .map_collect(|&h, &lat| free_air_correction_scalar(h, lat)))
}
