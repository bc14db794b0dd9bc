//! Reinterpretation and boolean conversion

use super::OpSet;
use crate::backends::{Holds, Register, Simd};
use crate::lane::Lane;
use crate::vector::{Mask, Vector};

impl<S: Simd> OpSet<S> {
    /// Relabel the register of `v` as `U` lanes; no bit changes
    ///
    /// # Examples
    ///
    /// ```
    /// use univec::{Registry, Baseline};
    ///
    /// let ops = Registry::global().ops::<Baseline>().unwrap();
    /// let v = ops.set_all(-1i32);
    /// let u = ops.reinterpret::<u32, _>(v);
    /// assert_eq!(u.type_name(), "vu32");
    /// assert!(u.iter().all(|lane| lane == u32::MAX));
    /// ```
    pub fn reinterpret<U: Lane, T: Lane>(self, v: Vector<S, T>) -> Vector<S, U>
    where
        S: Holds<T> + Holds<U>,
    {
        Vector::from_register(*v.register())
    }

    /// Data to boolean: a lane with any bit set becomes true
    pub fn cvt_to_mask<T: Lane>(self, v: Vector<S, T>) -> Mask<S, T::Mask>
    where
        S: Holds<T>,
    {
        let bytes = v.register().as_bytes();
        Mask::from_fn(|i| bytes[i * T::BYTES..(i + 1) * T::BYTES].iter().any(|b| *b != 0))
    }

    /// Boolean to data: false lanes all-zero, true lanes all-one
    pub fn cvt_from_mask<T: Lane>(self, mask: Mask<S, T::Mask>) -> Vector<S, T>
    where
        S: Holds<T>,
    {
        Vector::from_register(*mask.register())
    }
}
