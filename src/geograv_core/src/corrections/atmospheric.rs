use ndarray::{Array, ArrayBase, Data, Dimension};

/// Gravitational effect of the atmosphere above the station in mGal, Hinze 2005 eq. 5.
///
/// `g_atm = 0.874 - 9.9e-5 h + 3.56e-9 h^2`
///
/// # Arguments
///
/// * `topography` - Height of the station above the ellipsoid in meters.
pub fn atmospheric_correction_scalar(topography: f64) -> f64 {
    0.874 - 9.9e-5 * topography + 3.56e-9 * topography.powi(2)
}

/// Element-wise [`atmospheric_correction_scalar`].
pub fn atmospheric_correction<S, D>(topography: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    topography.mapv(atmospheric_correction_scalar)
}
