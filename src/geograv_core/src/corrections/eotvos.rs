use ndarray::{ArrayBase, ArrayD, Data, Dimension, Zip};

use crate::array::{broadcast_shape, broadcast_to};
use crate::errors::GravResult;

/// Eötvös correction for a gravity meter on a moving platform in mGal, Blakely 1995.
///
/// `g_e = 7.503 v sin(alpha) cos(phi) + 0.004154 v^2`
///
/// # Arguments
///
/// * `latitude` - Latitude of the platform in degrees.
/// * `velocity` - Speed of the platform in knots.
/// * `azimuth` - Direction of travel in degrees, clockwise from true north.
pub fn eotvos_correction_scalar(latitude: f64, velocity: f64, azimuth: f64) -> f64 {
    7.503 * velocity * azimuth.to_radians().sin() * latitude.to_radians().cos()
        + 0.004154 * velocity.powi(2)
}

/// Element-wise [`eotvos_correction_scalar`], broadcasting the three inputs.
pub fn eotvos_correction<S1, D1, S2, D2, S3, D3>(
    latitude: &ArrayBase<S1, D1>,
    velocity: &ArrayBase<S2, D2>,
    azimuth: &ArrayBase<S3, D3>,
) -> GravResult<ArrayD<f64>>
where
    S1: Data<Elem = f64>,
    D1: Dimension,
    S2: Data<Elem = f64>,
    D2: Dimension,
    S3: Data<Elem = f64>,
    D3: Dimension,
{
    let shape = broadcast_shape(&[latitude.shape(), velocity.shape(), azimuth.shape()])?;
    let latitude = broadcast_to(latitude, &shape)?;
    let velocity = broadcast_to(velocity, &shape)?;
    let azimuth = broadcast_to(azimuth, &shape)?;
    Ok(Zip::from(&latitude)
        .and(&velocity)
        .and(&azimuth)
        .map_collect(|&lat, &v, &az| eotvos_correction_scalar(lat, v, az)))
}
