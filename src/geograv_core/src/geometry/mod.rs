//! # Geometry
//! Positions of observation points and gravity sources.
//!
//! Two coordinate systems are supported:
//!
//! - [`CoordinateSystem::Cartesian`]: (easting, northing, upward) in meters, with the
//!   upward axis pointing away from the Earth.
//! - [`CoordinateSystem::Spherical`]: geocentric (longitude, latitude, radius), with
//!   the angles in degrees and the radius in meters.
//!
//! Both reduce the geometry between an observation point and a source to a relative
//! vector in the local east/north/up frame of the observation point, along with the
//! distance between them.
//!
mod point_mass;

pub use point_mass::*;

use nalgebra::Vector3;
use ndarray::{Array, Dimension};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use crate::errors::{Error, GravResult};

/// Coordinate system of observation points and sources.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateSystem {
    /// Easting, northing and upward coordinates in meters.
    #[default]
    Cartesian,

    /// Longitude and latitude in degrees, geocentric radius in meters.
    Spherical,
}

impl Display for CoordinateSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordinateSystem::Cartesian => f.write_str("cartesian"),
            CoordinateSystem::Spherical => f.write_str("spherical"),
        }
    }
}

impl FromStr for CoordinateSystem {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cartesian" => Ok(CoordinateSystem::Cartesian),
            "spherical" => Ok(CoordinateSystem::Spherical),
            _ => Err(Error::InvalidSelector {
                kind: "coordinate system",
                value: s.into(),
                expected: "cartesian, spherical",
            }),
        }
    }
}

impl CoordinateSystem {
    /// Position of the source relative to the observation point, expressed in the
    /// local east/north/up frame of the observation point, and the distance between
    /// the two.
    ///
    /// In Cartesian coordinates this is simply the difference of the two positions.
    ///
    /// In spherical coordinates the distance is the geocentric distance
    ///
    /// `l^2 = r^2 + r'^2 - 2 r r' cos(psi)`
    ///
    /// and the source position is projected onto the local frame using the spherical
    /// trigonometric relations for the east, north and radial directions.
    ///
    /// # Arguments
    ///
    /// * `observation` - Position of the observation point.
    /// * `source` - Position of the source.
    #[inline(always)]
    pub fn relative_position(
        &self,
        observation: &[f64; 3],
        source: &[f64; 3],
    ) -> (Vector3<f64>, f64) {
        match self {
            CoordinateSystem::Cartesian => {
                let rel = Vector3::from(*source) - Vector3::from(*observation);
                let distance = rel.norm();
                (rel, distance)
            }
            CoordinateSystem::Spherical => {
                // cos(psi) of identical points may round to either side of 1.
                if observation == source {
                    return (Vector3::zeros(), 0.0);
                }
                let (sin_lat, cos_lat) = observation[1].to_radians().sin_cos();
                let (sin_lat_p, cos_lat_p) = source[1].to_radians().sin_cos();
                let (sin_dlon, cos_dlon) = (source[0] - observation[0]).to_radians().sin_cos();
                let radius = observation[2];
                let radius_p = source[2];

                let cos_psi = sin_lat * sin_lat_p + cos_lat * cos_lat_p * cos_dlon;
                let distance_sq =
                    radius.powi(2) + radius_p.powi(2) - 2.0 * radius * radius_p * cos_psi;

                let rel = Vector3::new(
                    radius_p * cos_lat_p * sin_dlon,
                    radius_p * (cos_lat * sin_lat_p - sin_lat * cos_lat_p * cos_dlon),
                    radius_p * cos_psi - radius,
                );
                // Rounding may push the squared distance of coincident points below 0.
                (rel, distance_sq.max(0.0).sqrt())
            }
        }
    }

    /// Check that a position is valid within this coordinate system.
    pub fn validate(&self, position: &[f64; 3]) -> GravResult<()> {
        if !position.iter().all(|x| x.is_finite()) {
            return Err(Error::ValueError(format!(
                "Coordinates must be finite, found {:?}",
                position
            )));
        }
        if *self == CoordinateSystem::Spherical && position[2] <= 0.0 {
            return Err(Error::ValueError(format!(
                "Spherical radius must be positive, found {}",
                position[2]
            )));
        }
        Ok(())
    }
}

/// Observation points where a field is computed.
///
/// The three coordinate arrays are co-indexed and share a single shape, which may be
/// of any dimensionality, for example a 1-D profile or a 2-D grid. Computed fields
/// take the same shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationPoints<D: Dimension> {
    easting: Array<f64, D>,
    northing: Array<f64, D>,
    upward: Array<f64, D>,
}

impl<D: Dimension> ObservationPoints<D> {
    /// Construct new observation points from three arrays of equal shape.
    ///
    /// For spherical coordinates these are longitude, latitude and radius.
    pub fn new(
        easting: Array<f64, D>,
        northing: Array<f64, D>,
        upward: Array<f64, D>,
    ) -> GravResult<Self> {
        for other in [&northing, &upward] {
            if other.shape() != easting.shape() {
                return Err(Error::ShapeMismatch {
                    expected: easting.shape().to_vec(),
                    found: other.shape().to_vec(),
                });
            }
        }
        Ok(ObservationPoints {
            easting,
            northing,
            upward,
        })
    }

    /// Shape shared by the coordinate arrays.
    pub fn shape(&self) -> &[usize] {
        self.easting.shape()
    }

    /// Dimension shared by the coordinate arrays.
    pub fn raw_dim(&self) -> D {
        self.easting.raw_dim()
    }

    /// Total number of observation points.
    pub fn len(&self) -> usize {
        self.easting.len()
    }

    /// Are there no observation points.
    pub fn is_empty(&self) -> bool {
        self.easting.is_empty()
    }

    /// Easting (or longitude) coordinates.
    pub fn easting(&self) -> &Array<f64, D> {
        &self.easting
    }

    /// Northing (or latitude) coordinates.
    pub fn northing(&self) -> &Array<f64, D> {
        &self.northing
    }

    /// Upward (or radius) coordinates.
    pub fn upward(&self) -> &Array<f64, D> {
        &self.upward
    }

    /// Positions of all points, in the logical (row-major) order of the arrays.
    pub fn positions(&self) -> Vec<[f64; 3]> {
        self.easting
            .iter()
            .zip(self.northing.iter())
            .zip(self.upward.iter())
            .map(|((e, n), u)| [*e, *n, *u])
            .collect()
    }
}
