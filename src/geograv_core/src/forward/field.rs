//! Field components which may be computed from a distribution of point masses.
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use crate::constants::{GRAVITATIONAL_CONST, SI_TO_MGAL};
use crate::errors::Error;

/// Field component selector.
///
/// Every component is computed from the same per-source geometry, the relative
/// position of the source in the local east/north/up frame of the observation point
/// and the distance between them. Contributions are accumulated into a single vector
/// by [`Field::accumulate`] and reduced to the requested value by [`Field::project`].
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub enum Field {
    /// Gravitational potential in J/kg.
    #[serde(rename = "potential")]
    Potential,

    /// Downward component of the gravitational acceleration in mGal.
    #[default]
    #[serde(rename = "g_z")]
    GZ,

    /// Easting component of the gravitational acceleration in mGal.
    #[serde(rename = "g_x", alias = "g_easting")]
    GEasting,

    /// Northing component of the gravitational acceleration in mGal.
    #[serde(rename = "g_y", alias = "g_northing")]
    GNorthing,

    /// Magnitude of the gravitational acceleration in mGal.
    #[serde(rename = "g")]
    G,
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Potential => f.write_str("potential"),
            Field::GZ => f.write_str("g_z"),
            Field::GEasting => f.write_str("g_x"),
            Field::GNorthing => f.write_str("g_y"),
            Field::G => f.write_str("g"),
        }
    }
}

impl FromStr for Field {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "potential" => Ok(Field::Potential),
            "g_z" => Ok(Field::GZ),
            "g_x" | "g_easting" => Ok(Field::GEasting),
            "g_y" | "g_northing" => Ok(Field::GNorthing),
            "g" => Ok(Field::G),
            _ => Err(Error::InvalidSelector {
                kind: "field",
                value: s.into(),
                expected: "potential, g_z, g_x, g_easting, g_y, g_northing, g",
            }),
        }
    }
}

impl Field {
    /// Is this field a component of the acceleration, as opposed to the potential.
    pub fn is_acceleration(&self) -> bool {
        !matches!(self, Field::Potential)
    }

    /// Units of the computed values.
    pub fn units(&self) -> &'static str {
        match self {
            Field::Potential => "J/kg",
            _ => "mGal",
        }
    }

    /// Add the contribution of a single point mass to the accumulator.
    ///
    /// The potential is accumulated in the first element as `m / l`, accelerations
    /// accumulate the full attraction vector `m * rel / l^3`. The gravitational
    /// constant is applied once in [`Field::project`].
    ///
    /// # Arguments
    ///
    /// * `acc` - Accumulator for the observation point.
    /// * `rel` - Source position relative to the observation point, local east/north/up.
    /// * `distance` - Distance between the source and the observation point.
    /// * `mass` - Mass of the source in kg.
    #[inline(always)]
    pub fn accumulate(&self, acc: &mut Vector3<f64>, rel: &Vector3<f64>, distance: f64, mass: f64) {
        match self {
            Field::Potential => acc.x += mass / distance,
            Field::GZ | Field::GEasting | Field::GNorthing | Field::G => {
                *acc += rel * (mass * distance.powi(-3))
            }
        }
    }

    /// Reduce an accumulator filled by [`Field::accumulate`] to the field value.
    #[inline(always)]
    pub fn project(&self, acc: &Vector3<f64>) -> f64 {
        match self {
            Field::Potential => GRAVITATIONAL_CONST * acc.x,
            Field::GEasting => GRAVITATIONAL_CONST * SI_TO_MGAL * acc.x,
            Field::GNorthing => GRAVITATIONAL_CONST * SI_TO_MGAL * acc.y,
            // The attraction points towards the source, downward is negative up.
            Field::GZ => -GRAVITATIONAL_CONST * SI_TO_MGAL * acc.z,
            Field::G => GRAVITATIONAL_CONST * SI_TO_MGAL * acc.norm(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_field_from_str() {
        assert_eq!("g_z".parse::<Field>().unwrap(), Field::GZ);
        assert_eq!("G_Easting".parse::<Field>().unwrap(), Field::GEasting);
        assert_eq!("g_y".parse::<Field>().unwrap(), Field::GNorthing);
        assert_eq!("potential".parse::<Field>().unwrap(), Field::Potential);
        assert_eq!("g".parse::<Field>().unwrap(), Field::G);
        assert!(matches!(
            "g_up".parse::<Field>(),
            Err(Error::InvalidSelector { kind: "field", .. })
        ));

        for field in [
            Field::Potential,
            Field::GZ,
            Field::GEasting,
            Field::GNorthing,
            Field::G,
        ] {
            assert_eq!(field.to_string().parse::<Field>().unwrap(), field);
        }
    }

    #[test]
    fn test_accumulate_project() {
        // Source 3 m east and 4 m below.
        let rel = Vector3::new(3.0, 0.0, -4.0);
        let mass = 1e9;

        let mut acc = Vector3::zeros();
        Field::GZ.accumulate(&mut acc, &rel, 5.0, mass);
        let g_z = Field::GZ.project(&acc);
        assert_relative_eq!(
            g_z,
            GRAVITATIONAL_CONST * mass * 4.0 / 125.0 * SI_TO_MGAL,
            max_relative = 1e-14
        );
        let g = Field::G.project(&acc);
        assert_relative_eq!(
            g,
            GRAVITATIONAL_CONST * mass / 25.0 * SI_TO_MGAL,
            max_relative = 1e-14
        );
        assert_relative_eq!(
            Field::GEasting.project(&acc),
            GRAVITATIONAL_CONST * mass * 3.0 / 125.0 * SI_TO_MGAL,
            max_relative = 1e-14
        );

        let mut acc = Vector3::zeros();
        Field::Potential.accumulate(&mut acc, &rel, 5.0, mass);
        assert_relative_eq!(
            Field::Potential.project(&acc),
            GRAVITATIONAL_CONST * mass / 5.0,
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_field_units() {
        assert_eq!(Field::Potential.units(), "J/kg");
        assert_eq!(Field::GZ.units(), "mGal");
        assert!(!Field::Potential.is_acceleration());
        assert!(Field::G.is_acceleration());
    }
}
