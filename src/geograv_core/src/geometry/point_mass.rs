use serde::{Deserialize, Serialize};

use super::CoordinateSystem;
use crate::errors::{Error, GravResult};

/// An idealized gravity source with all of its mass concentrated at a single point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointMass {
    /// Position of the point, in the coordinates of the computation.
    pub position: [f64; 3],

    /// Mass in kg, negative values represent a mass deficit.
    pub mass: f64,
}

impl PointMass {
    /// Construct a new point mass.
    pub fn new(position: [f64; 3], mass: f64) -> Self {
        PointMass { position, mass }
    }
}

/// A collection of point masses.
///
/// ```
///     use geograv_core::geometry::PointMasses;
///     let sources = PointMasses::new(
///         &[5e3, 15e3],
///         &[5e3, 15e3],
///         &[-5e3, -2.5e3],
///         &[10e6, -10e6],
///     ).unwrap();
///     assert_eq!(sources.len(), 2);
///
///     // Every coordinate needs a mass.
///     assert!(PointMasses::new(&[0.0], &[0.0], &[0.0], &[1.0, 2.0]).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointMasses {
    points: Vec<PointMass>,
}

impl PointMasses {
    /// Construct point masses from co-indexed coordinate and mass slices.
    ///
    /// # Arguments
    ///
    /// * `easting` - Easting of each point, or longitude for spherical coordinates.
    /// * `northing` - Northing of each point, or latitude for spherical coordinates.
    /// * `upward` - Upward coordinate of each point, or radius for spherical coordinates.
    /// * `masses` - Mass of each point in kg.
    pub fn new(
        easting: &[f64],
        northing: &[f64],
        upward: &[f64],
        masses: &[f64],
    ) -> GravResult<Self> {
        let n_points = easting.len();
        for (what, found) in [
            ("northing", northing.len()),
            ("upward", upward.len()),
            ("masses", masses.len()),
        ] {
            if found != n_points {
                return Err(Error::LengthMismatch {
                    what,
                    expected: n_points,
                    found,
                });
            }
        }
        let points = (0..n_points)
            .map(|idx| PointMass::new([easting[idx], northing[idx], upward[idx]], masses[idx]))
            .collect();
        Self::from_points(points)
    }

    /// Construct point masses from a list of [`PointMass`].
    pub fn from_points(points: Vec<PointMass>) -> GravResult<Self> {
        if let Some(idx) = points.iter().position(|p| !p.mass.is_finite()) {
            return Err(Error::ValueError(format!(
                "Mass of point {} is not finite: {}",
                idx, points[idx].mass
            )));
        }
        Ok(PointMasses { points })
    }

    /// Check all positions against the requirements of the coordinate system.
    pub fn validate(&self, coordinate_system: CoordinateSystem) -> GravResult<()> {
        self.points
            .iter()
            .try_for_each(|p| coordinate_system.validate(&p.position))
    }

    /// Number of point masses.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Is the collection empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the point masses.
    pub fn iter(&self) -> std::slice::Iter<'_, PointMass> {
        self.points.iter()
    }

    /// Sum of all masses in kg.
    pub fn total_mass(&self) -> f64 {
        self.points.iter().map(|p| p.mass).sum()
    }

    /// The same points with the sign of every mass flipped.
    pub fn negated(&self) -> Self {
        PointMasses {
            points: self
                .points
                .iter()
                .map(|p| PointMass::new(p.position, -p.mass))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointMasses {
    type Item = &'a PointMass;
    type IntoIter = std::slice::Iter<'a, PointMass>;
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
