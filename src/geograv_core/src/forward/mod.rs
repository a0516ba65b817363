//! # Forward modelling
//! Gravitational fields generated by point masses.
//!
//! Point masses are the simplest geometry which generates a gravitational field.
//! They are useful for building synthetic models, as equivalent sources, or as a quick
//! approximation of more complex bodies.
//!
//! The field at every observation point is the direct sum of the contributions of all
//! sources, this is `O(N * M)` for `N` sources and `M` observation points. Observation
//! points are evaluated in parallel, the sum over the sources of a single point is
//! always done in order.
//!
mod field;

pub use field::*;

use log::{debug, warn};
use nalgebra::Vector3;
use ndarray::{Array, Dimension};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, GravResult};
use crate::geometry::{CoordinateSystem, ObservationPoints, PointMasses};

/// Behavior when an observation point coincides with a source.
///
/// The field of a point mass is undefined at the location of the point mass.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub enum Coincident {
    /// Fail the computation with [`Error::DegenerateGeometry`].
    #[default]
    Error,

    /// The observation point evaluates to NaN, all other points are unaffected.
    Nan,
}

/// Configuration of a forward computation.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct ForwardOptions {
    /// Field component to compute.
    pub field: Field,

    /// Coordinate system of both the observation points and the sources.
    pub coordinate_system: CoordinateSystem,

    /// Zero distance policy.
    pub coincident: Coincident,
}

impl ForwardOptions {
    /// Options for the specified field and coordinate system, with the default zero
    /// distance policy.
    pub fn new(field: Field, coordinate_system: CoordinateSystem) -> Self {
        ForwardOptions {
            field,
            coordinate_system,
            coincident: Coincident::default(),
        }
    }

    /// Replace the zero distance policy.
    pub fn with_coincident(mut self, coincident: Coincident) -> Self {
        self.coincident = coincident;
        self
    }
}

/// Compute the gravitational field of point masses at the observation points.
///
/// The result has the shape of the observation points. Accelerations are in mGal and
/// the potential is in J/kg.
///
/// ```
///     use geograv_core::prelude::*;
///     use ndarray::arr1;
///
///     let sources = PointMasses::new(&[0.0], &[0.0], &[-1000.0], &[1e10]).unwrap();
///     let observations =
///         ObservationPoints::new(arr1(&[0.0]), arr1(&[0.0]), arr1(&[0.0])).unwrap();
///     let options = ForwardOptions::new(Field::GZ, CoordinateSystem::Cartesian);
///
///     let g_z = point_mass_gravity(&observations, &sources, &options).unwrap();
///     // G * m / r^2, converted to mGal
///     assert!((g_z[0] - 6.673e-11 * 1e10 / 1e6 * 1e5).abs() < 1e-12);
/// ```
///
/// # Arguments
///
/// * `observations` - Points where the field is evaluated.
/// * `sources` - Point masses generating the field.
/// * `options` - Field component, coordinate system and zero distance policy.
pub fn point_mass_gravity<D: Dimension>(
    observations: &ObservationPoints<D>,
    sources: &PointMasses,
    options: &ForwardOptions,
) -> GravResult<Array<f64, D>> {
    let coordinate_system = options.coordinate_system;
    debug!(
        "Computing {} of {} point masses at {} observation points in {} coordinates",
        options.field,
        sources.len(),
        observations.len(),
        coordinate_system
    );

    sources.validate(coordinate_system)?;
    let positions = observations.positions();
    positions
        .iter()
        .try_for_each(|p| coordinate_system.validate(p))?;

    let values = positions
        .par_iter()
        .enumerate()
        .map(|(idx, position)| evaluate_point(idx, position, sources, options))
        .collect::<GravResult<Vec<f64>>>()?;

    Ok(Array::from_shape_vec(observations.raw_dim(), values)?)
}

/// Sum the contribution of every source at a single observation point.
fn evaluate_point(
    idx: usize,
    observation: &[f64; 3],
    sources: &PointMasses,
    options: &ForwardOptions,
) -> GravResult<f64> {
    let mut acc = Vector3::<f64>::zeros();
    for (idy, source) in sources.iter().enumerate() {
        let (rel, distance) = options
            .coordinate_system
            .relative_position(observation, &source.position);

        if distance == 0.0 {
            match options.coincident {
                Coincident::Error => {
                    return Err(Error::DegenerateGeometry {
                        observation: idx,
                        point_mass: idy,
                    })
                }
                Coincident::Nan => {
                    warn!(
                        "Observation point {} coincides with point mass {}, returning NaN",
                        idx, idy
                    );
                    return Ok(f64::NAN);
                }
            }
        }
        options
            .field
            .accumulate(&mut acc, &rel, distance, source.mass);
    }
    Ok(options.field.project(&acc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{GRAVITATIONAL_CONST, SI_TO_MGAL};
    use approx::assert_relative_eq;
    use ndarray::{arr1, Array2};

    fn single_point(easting: f64, northing: f64, upward: f64) -> ObservationPoints<ndarray::Ix1> {
        ObservationPoints::new(arr1(&[easting]), arr1(&[northing]), arr1(&[upward])).unwrap()
    }

    #[test]
    fn test_source_below() {
        let mass = 2e9;
        let sources = PointMasses::new(&[10.0], &[-20.0], &[-300.0], &[mass]).unwrap();
        let obs = single_point(10.0, -20.0, 100.0);
        let expected = GRAVITATIONAL_CONST * mass / 400.0_f64.powi(2) * SI_TO_MGAL;

        let run = |field| {
            point_mass_gravity(&obs, &sources, &ForwardOptions::new(field, CoordinateSystem::Cartesian))
                .unwrap()[0]
        };
        assert_relative_eq!(run(Field::GZ), expected, max_relative = 1e-14);
        assert_relative_eq!(run(Field::G), expected, max_relative = 1e-14);
        assert_eq!(run(Field::GEasting), 0.0);
        assert_eq!(run(Field::GNorthing), 0.0);
        assert_relative_eq!(
            run(Field::Potential),
            GRAVITATIONAL_CONST * mass / 400.0,
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_horizontal_sign() {
        // Source to the north east, horizontal attraction points towards it.
        let sources = PointMasses::new(&[100.0], &[100.0], &[0.0], &[1e9]).unwrap();
        let obs = single_point(0.0, 0.0, 0.0);
        let options = ForwardOptions::new(Field::GEasting, CoordinateSystem::Cartesian);
        let g_e = point_mass_gravity(&obs, &sources, &options).unwrap()[0];
        let options = ForwardOptions::new(Field::GNorthing, CoordinateSystem::Cartesian);
        let g_n = point_mass_gravity(&obs, &sources, &options).unwrap()[0];
        let options = ForwardOptions::new(Field::GZ, CoordinateSystem::Cartesian);
        let g_z = point_mass_gravity(&obs, &sources, &options).unwrap()[0];
        assert!(g_e > 0.0);
        assert_relative_eq!(g_e, g_n, max_relative = 1e-14);
        assert_eq!(g_z, 0.0);
    }

    #[test]
    fn test_coincident() {
        let sources = PointMasses::new(&[0.0, 50.0], &[0.0, 0.0], &[0.0, 0.0], &[1e9, 1e9]).unwrap();
        let obs = ObservationPoints::new(
            arr1(&[0.0, 0.0, 50.0]),
            arr1(&[10.0, 0.0, 0.0]),
            arr1(&[0.0, 0.0, 0.0]),
        )
        .unwrap();

        let options = ForwardOptions::default();
        let err = point_mass_gravity(&obs, &sources, &options).unwrap_err();
        assert!(matches!(err, Error::DegenerateGeometry { .. }));

        let options = ForwardOptions::new(Field::Potential, CoordinateSystem::Cartesian)
            .with_coincident(Coincident::Nan);
        let values = point_mass_gravity(&obs, &sources, &options).unwrap();
        assert!(values[0].is_finite());
        assert!(values[1].is_nan());
        assert!(values[2].is_nan());
    }

    #[test]
    fn test_coincident_index() {
        let sources = PointMasses::new(&[0.0, 5.0], &[0.0, 5.0], &[0.0, 5.0], &[1.0, 1.0]).unwrap();
        let obs = ObservationPoints::new(
            arr1(&[1.0, 5.0]),
            arr1(&[1.0, 5.0]),
            arr1(&[1.0, 5.0]),
        )
        .unwrap();
        let err = point_mass_gravity(&obs, &sources, &ForwardOptions::default()).unwrap_err();
        assert_eq!(
            err,
            Error::DegenerateGeometry {
                observation: 1,
                point_mass: 1
            }
        );
    }

    #[test]
    fn test_output_shape() {
        let sources = PointMasses::new(&[0.0], &[0.0], &[-100.0], &[1e9]).unwrap();
        let easting = Array2::from_shape_fn((3, 4), |(_, j)| j as f64 * 10.0);
        let northing = Array2::from_shape_fn((3, 4), |(i, _)| i as f64 * 10.0);
        let upward = Array2::zeros((3, 4));
        let obs = ObservationPoints::new(easting, northing, upward).unwrap();

        let values = point_mass_gravity(&obs, &sources, &ForwardOptions::default()).unwrap();
        assert_eq!(values.shape(), &[3, 4]);
        // The point straight above the source has the strongest downward attraction.
        let max = values.iter().copied().fold(f64::MIN, f64::max);
        assert_eq!(values[[0, 0]], max);
        assert!(values[[2, 3]] < values[[0, 1]]);
    }

    #[test]
    fn test_empty_sources() {
        let obs = single_point(0.0, 0.0, 0.0);
        let values =
            point_mass_gravity(&obs, &PointMasses::default(), &ForwardOptions::default()).unwrap();
        assert_eq!(values[0], 0.0);
    }

    #[test]
    fn test_invalid_spherical_radius() {
        let sources = PointMasses::new(&[0.0], &[0.0], &[6e6], &[1e9]).unwrap();
        let obs = single_point(0.0, 0.0, 0.0);
        let options = ForwardOptions::new(Field::GZ, CoordinateSystem::Spherical);
        assert!(matches!(
            point_mass_gravity(&obs, &sources, &options),
            Err(Error::ValueError(_))
        ));
    }

    #[test]
    fn test_options_serde() {
        let options = ForwardOptions::new(Field::GNorthing, CoordinateSystem::Spherical)
            .with_coincident(Coincident::Nan);
        let text = serde_json::to_string(&options).unwrap();
        assert_eq!(
            text,
            r#"{"field":"g_y","coordinate_system":"spherical","coincident":"Nan"}"#
        );
        let back: ForwardOptions = serde_json::from_str(&text).unwrap();
        assert_eq!(back, options);

        let alias: Field = serde_json::from_str(r#""g_easting""#).unwrap();
        assert_eq!(alias, Field::GEasting);
    }
}
