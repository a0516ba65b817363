//! Broadcasting of element-wise array inputs.
//!
//! Shapes follow the NumPy rules: they are aligned on their trailing axes, and an
//! axis of length 1 (or a missing leading axis) is stretched to match the others.
//! A 0-d array therefore acts as a scalar.
use ndarray::{ArrayBase, ArrayViewD, Data, Dimension, IxDyn};

use crate::errors::{Error, GravResult};

/// Compute the common shape that all of the provided shapes broadcast to.
///
/// ```
///     use geograv_core::array::broadcast_shape;
///     let shape = broadcast_shape(&[&[4, 1], &[3], &[]]).unwrap();
///     assert_eq!(shape, vec![4, 3]);
///     assert!(broadcast_shape(&[&[4], &[3]]).is_err());
/// ```
pub fn broadcast_shape(shapes: &[&[usize]]) -> GravResult<Vec<usize>> {
    let ndim = shapes.iter().map(|s| s.len()).max().unwrap_or(0);
    let mut out = vec![1; ndim];

    for shape in shapes {
        let offset = ndim - shape.len();
        for (axis, &len) in shape.iter().enumerate() {
            let current = out[offset + axis];
            if current == 1 {
                out[offset + axis] = len;
            } else if len != 1 && len != current {
                return Err(Error::ShapeMismatch {
                    expected: out,
                    found: shape.to_vec(),
                });
            }
        }
    }
    Ok(out)
}

/// View an array as the given broadcast shape.
///
/// Fails with [`Error::ShapeMismatch`] when the array cannot be stretched to it.
pub fn broadcast_to<'a, S, D>(
    array: &'a ArrayBase<S, D>,
    shape: &[usize],
) -> GravResult<ArrayViewD<'a, f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    array
        .broadcast(IxDyn(shape))
        .ok_or_else(|| Error::ShapeMismatch {
            expected: shape.to_vec(),
            found: array.shape().to_vec(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr0, arr1, arr2};

    #[test]
    fn test_broadcast_shape() {
        assert_eq!(broadcast_shape(&[&[5], &[5]]).unwrap(), vec![5]);
        assert_eq!(broadcast_shape(&[&[2, 3], &[]]).unwrap(), vec![2, 3]);
        assert_eq!(broadcast_shape(&[&[2, 1], &[1, 3]]).unwrap(), vec![2, 3]);
        assert_eq!(broadcast_shape(&[]).unwrap(), Vec::<usize>::new());

        let err = broadcast_shape(&[&[2, 3], &[2]]).unwrap_err();
        assert_eq!(
            err,
            Error::ShapeMismatch {
                expected: vec![2, 3],
                found: vec![2]
            }
        );
    }

    #[test]
    fn test_broadcast_to() {
        let scalar = arr0(2.0);
        let view = broadcast_to(&scalar, &[2, 2]).unwrap();
        assert_eq!(view.shape(), &[2, 2]);
        assert!(view.iter().all(|x| *x == 2.0));

        let row = arr1(&[1.0, 2.0, 3.0]);
        let view = broadcast_to(&row, &[2, 3]).unwrap();
        assert_eq!(view[[1, 2]], 3.0);

        let grid = arr2(&[[1.0, 2.0], [3.0, 4.0]]);
        assert!(broadcast_to(&grid, &[3]).is_err());
    }
}
