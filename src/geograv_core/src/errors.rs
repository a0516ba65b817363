//! # Errors
//! Errors emitted by geograv_core

/// Define all errors which may be raised by this crate, as well as optionally provide
/// conversion to pyo3 error types which allow for the errors to be raised in Python.
use thiserror::Error;

/// geograv specific result.
pub type GravResult<T> = Result<T, Error>;

/// Possible Errors which may be raised by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Co-indexed or broadcast arrays have incompatible shapes.
    #[error("Dimension mismatch: expected shape {expected:?}, found {found:?}")]
    ShapeMismatch {
        /// Shape required by the operation.
        expected: Vec<usize>,

        /// Shape which was provided.
        found: Vec<usize>,
    },

    /// Paired one dimensional inputs do not have the same number of elements.
    #[error("Length mismatch for {what}: expected {expected} elements, found {found}")]
    LengthMismatch {
        /// Which input had the wrong length.
        what: &'static str,

        /// Required length.
        expected: usize,

        /// Provided length.
        found: usize,
    },

    /// Unrecognized selector string, such as an unknown field name.
    #[error("Invalid {kind} '{value}', expected one of: {expected}")]
    InvalidSelector {
        /// Which kind of selector failed to parse.
        kind: &'static str,

        /// The rejected value.
        value: String,

        /// Comma separated list of the accepted values.
        expected: &'static str,
    },

    /// An observation point coincides with a source, the field is undefined there.
    #[error("Observation point {observation} coincides with point mass {point_mass}")]
    DegenerateGeometry {
        /// Flat (row-major) index of the observation point.
        observation: usize,

        /// Index of the point mass.
        point_mass: usize,
    },

    /// Input or variable exceeded expected or allowed bounds.
    #[error("{0}")]
    ValueError(String),
}

#[cfg(feature = "pyo3")]
use pyo3::{exceptions, PyErr};

#[cfg(feature = "pyo3")]
impl From<Error> for PyErr {
    fn from(err: Error) -> PyErr {
        PyErr::new::<exceptions::PyValueError, _>(err.to_string())
    }
}

impl From<ndarray::ShapeError> for Error {
    fn from(value: ndarray::ShapeError) -> Self {
        Error::ValueError(value.to_string())
    }
}
