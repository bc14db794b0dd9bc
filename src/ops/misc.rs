//! Initialisers and the cleanup hint

use super::OpSet;
use crate::backends::{Holds, Simd};
use crate::error::{LaneError, Result};
use crate::lane::Lane;
use crate::vector::Vector;

impl<S: Simd> OpSet<S> {
    /// All lanes zero
    pub fn zero<T: Lane>(self) -> Vector<S, T>
    where
        S: Holds<T>,
    {
        Vector::from_fn(|_| T::default())
    }

    /// Broadcast `x` to every lane
    pub fn set_all<T: Lane>(self, x: T) -> Vector<S, T>
    where
        S: Holds<T>,
    {
        Vector::from_fn(|_| x)
    }

    /// Lanes from `values`, remaining lanes zero
    ///
    /// # Errors
    ///
    /// Returns [`LaneError::SizeMismatch`] if `values` has more elements than lanes.
    pub fn set<T: Lane>(self, values: &[T]) -> Result<Vector<S, T>>
    where
        S: Holds<T>,
    {
        self.setf(T::default(), values)
    }

    /// Lanes from `values`, remaining lanes `fallback`
    ///
    /// # Examples
    ///
    /// ```
    /// use univec::{Registry, Baseline};
    ///
    /// let ops = Registry::global().ops::<Baseline>().unwrap();
    /// let v = ops.setf(9u32, &[1]).unwrap();
    /// assert_eq!(v.to_vec(), vec![1, 9, 9, 9]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`LaneError::SizeMismatch`] if `values` has more elements than lanes.
    pub fn setf<T: Lane>(self, fallback: T, values: &[T]) -> Result<Vector<S, T>>
    where
        S: Holds<T>,
    {
        let nlanes = Vector::<S, T>::NLANES;
        if values.len() > nlanes {
            return Err(LaneError::SizeMismatch {
                expected: nlanes,
                actual: values.len(),
            });
        }
        Ok(Vector::from_fn(|i| values.get(i).copied().unwrap_or(fallback)))
    }

    /// Hint the hardware to drop wide-register state before narrower code
    /// runs. Has no effect on any lane value.
    #[inline]
    pub fn cleanup(self) {
        S::cleanup();
    }
}
