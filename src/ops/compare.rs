//! Comparison and mask selection
//!
//! Comparisons follow the lane type's natural order: unsigned or signed
//! integer order, IEEE order for floats (a NaN lane compares false for
//! everything except `cmpneq`).

use super::OpSet;
use crate::backends::{Holds, Register, Simd};
use crate::lane::Lane;
use crate::vector::{Mask, Vector};

impl<S: Simd> OpSet<S> {
    #[inline]
    fn compare<T: Lane>(
        self,
        a: Vector<S, T>,
        b: Vector<S, T>,
        pred: impl Fn(T, T) -> bool,
    ) -> Mask<S, T::Mask>
    where
        S: Holds<T>,
    {
        Mask::from_fn(|i| pred(a.get(i), b.get(i)))
    }

    /// Lane-wise `a == b`
    pub fn cmpeq<T: Lane>(self, a: Vector<S, T>, b: Vector<S, T>) -> Mask<S, T::Mask>
    where
        S: Holds<T>,
    {
        self.compare(a, b, |x, y| x == y)
    }

    /// Lane-wise `a != b`
    pub fn cmpneq<T: Lane>(self, a: Vector<S, T>, b: Vector<S, T>) -> Mask<S, T::Mask>
    where
        S: Holds<T>,
    {
        self.compare(a, b, |x, y| x != y)
    }

    /// Lane-wise `a > b`
    pub fn cmpgt<T: Lane>(self, a: Vector<S, T>, b: Vector<S, T>) -> Mask<S, T::Mask>
    where
        S: Holds<T>,
    {
        self.compare(a, b, |x, y| x > y)
    }

    /// Lane-wise `a >= b`
    pub fn cmpge<T: Lane>(self, a: Vector<S, T>, b: Vector<S, T>) -> Mask<S, T::Mask>
    where
        S: Holds<T>,
    {
        self.compare(a, b, |x, y| x >= y)
    }

    /// Lane-wise `a < b`
    pub fn cmplt<T: Lane>(self, a: Vector<S, T>, b: Vector<S, T>) -> Mask<S, T::Mask>
    where
        S: Holds<T>,
    {
        self.compare(a, b, |x, y| x < y)
    }

    /// Lane-wise `a <= b`
    pub fn cmple<T: Lane>(self, a: Vector<S, T>, b: Vector<S, T>) -> Mask<S, T::Mask>
    where
        S: Holds<T>,
    {
        self.compare(a, b, |x, y| x <= y)
    }

    /// `a` where `mask` is set, `b` elsewhere
    ///
    /// Computed bitwise as `(a & mask) | (b & !mask)`; mask lanes are always
    /// all-one or all-zero, so whole lanes are picked.
    pub fn select<T: Lane>(
        self,
        mask: Mask<S, T::Mask>,
        a: Vector<S, T>,
        b: Vector<S, T>,
    ) -> Vector<S, T>
    where
        S: Holds<T>,
    {
        let mut reg = *a.register();
        let picks = mask.register().as_bytes().iter();
        let others = b.register().as_bytes().iter();
        for ((dst, m), other) in reg.as_bytes_mut().iter_mut().zip(picks).zip(others) {
            *dst = (*dst & m) | (other & !m);
        }
        Vector::from_register(reg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::{Avx512f, Baseline};

    #[test]
    fn test_compare_unsigned_vs_signed() {
        let ops = OpSet::<Baseline>::new();
        let a = ops.set_all(200u8);
        let b = ops.set_all(100u8);
        assert!(ops.cmpgt(a, b).all());

        // Same bits as signed lanes: -56 < 100
        let a = ops.set_all(200u8 as i8);
        let b = ops.set_all(100i8);
        assert!(ops.cmplt(a, b).all());
        assert!(!ops.cmpge(a, b).any());
    }

    #[test]
    fn test_compare_lane_by_lane() {
        let ops = OpSet::<Baseline>::new();
        let a = ops.load(&[1i32, 5, 3, 7]).unwrap();
        let b = ops.load(&[4i32, 5, 2, 9]).unwrap();
        assert_eq!(ops.cmpeq(a, b).to_vec(), vec![false, true, false, false]);
        assert_eq!(ops.cmpneq(a, b).to_vec(), vec![true, false, true, true]);
        assert_eq!(ops.cmpgt(a, b).to_vec(), vec![false, false, true, false]);
        assert_eq!(ops.cmpge(a, b).to_vec(), vec![false, true, true, false]);
        assert_eq!(ops.cmplt(a, b).to_vec(), vec![true, false, false, true]);
        assert_eq!(ops.cmple(a, b).to_vec(), vec![true, true, false, true]);
    }

    #[test]
    fn test_compare_nan() {
        let ops = OpSet::<Baseline>::new();
        let nan = ops.set_all(f64::NAN);
        assert!(!ops.cmpeq(nan, nan).any());
        assert!(ops.cmpneq(nan, nan).all());
        assert!(!ops.cmple(nan, nan).any());
    }

    #[test]
    fn test_select_identities() {
        let ops = OpSet::<Avx512f>::new();
        let data_a: Vec<u16> = (1..=32).collect();
        let data_b: Vec<u16> = (1..=32).rev().collect();
        let a = ops.load(&data_a).unwrap();
        let b = ops.load(&data_b).unwrap();
        let yes = ops.cmpeq(ops.zero::<u16>(), ops.zero());
        let no = ops.cmpneq(ops.zero::<u16>(), ops.zero());
        assert_eq!(ops.select(yes, a, b), a);
        assert_eq!(ops.select(no, a, b), b);
    }

    #[test]
    fn test_select_mixed_mask() {
        let ops = OpSet::<Baseline>::new();
        let a = ops.load(&[1.0f32, 2.0, 3.0, 4.0]).unwrap();
        let b = ops.load(&[-1.0f32, -2.0, -3.0, -4.0]).unwrap();
        let mask = ops.cmpgt(a, ops.set_all(2.5));
        assert_eq!(ops.select(mask, a, b).to_vec(), vec![-1.0, -2.0, 3.0, 4.0]);
    }
}
