use ndarray::{Array, ArrayBase, Data, Dimension};

/// Spherical cap correction to the Bouguer slab in mGal, Hinze 2013.
///
/// `g_cap = 0.001464139 h - 3.533047e-7 h^2 + 1.002709e-13 h^3 + 3.002407e-18 h^4`
///
/// This is the difference between the infinite slab and a spherical cap extending
/// to 166.7 km around the station.
///
/// # Arguments
///
/// * `topography` - Height of the station above the ellipsoid in meters.
pub fn spherical_bouguer_cap_correction_scalar(topography: f64) -> f64 {
    let h = topography;
    0.001464139 * h - 3.533047e-7 * h.powi(2) + 1.002709e-13 * h.powi(3)
        + 3.002407e-18 * h.powi(4)
}

/// Element-wise [`spherical_bouguer_cap_correction_scalar`].
pub fn spherical_bouguer_cap_correction<S, D>(topography: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    topography.mapv(spherical_bouguer_cap_correction_scalar)
}
