//! Lane reordering across two vectors
//!
//! "Low half" means lanes `0..NLANES / 2`, "high half" the rest.

use super::OpSet;
use crate::backends::{Holds, Simd};
use crate::lane::Lane;
use crate::vector::Vector;

impl<S: Simd> OpSet<S> {
    /// Low half of `a` followed by the low half of `b`
    pub fn combine_low<T: Lane>(self, a: Vector<S, T>, b: Vector<S, T>) -> Vector<S, T>
    where
        S: Holds<T>,
    {
        let half = Vector::<S, T>::NLANES / 2;
        Vector::from_fn(|i| if i < half { a.get(i) } else { b.get(i - half) })
    }

    /// High half of `a` followed by the high half of `b`
    pub fn combine_high<T: Lane>(self, a: Vector<S, T>, b: Vector<S, T>) -> Vector<S, T>
    where
        S: Holds<T>,
    {
        let half = Vector::<S, T>::NLANES / 2;
        Vector::from_fn(|i| if i < half { a.get(half + i) } else { b.get(i) })
    }

    /// `(combine_low(a, b), combine_high(a, b))`
    pub fn combine<T: Lane>(
        self,
        a: Vector<S, T>,
        b: Vector<S, T>,
    ) -> (Vector<S, T>, Vector<S, T>)
    where
        S: Holds<T>,
    {
        (self.combine_low(a, b), self.combine_high(a, b))
    }

    /// Interleave the lanes of `a` and `b`
    ///
    /// The first result interleaves the low halves (`a0 b0 a1 b1 ...`), the
    /// second the high halves.
    ///
    /// # Examples
    ///
    /// ```
    /// use univec::{Registry, Baseline};
    ///
    /// let ops = Registry::global().ops::<Baseline>().unwrap();
    /// let a = ops.load(&[0u32, 1, 2, 3]).unwrap();
    /// let b = ops.load(&[10u32, 11, 12, 13]).unwrap();
    /// let (lo, hi) = ops.zip(a, b);
    /// assert_eq!(lo.to_vec(), vec![0, 10, 1, 11]);
    /// assert_eq!(hi.to_vec(), vec![2, 12, 3, 13]);
    /// ```
    pub fn zip<T: Lane>(self, a: Vector<S, T>, b: Vector<S, T>) -> (Vector<S, T>, Vector<S, T>)
    where
        S: Holds<T>,
    {
        let half = Vector::<S, T>::NLANES / 2;
        let interleave = |offset: usize| {
            Vector::from_fn(|i| {
                let src = offset + i / 2;
                if i % 2 == 0 {
                    a.get(src)
                } else {
                    b.get(src)
                }
            })
        };
        (interleave(0), interleave(half))
    }

    /// De-interleave `x ++ y` into its even and odd lanes; undoes [`zip`](Self::zip)
    pub fn unzip<T: Lane>(self, x: Vector<S, T>, y: Vector<S, T>) -> (Vector<S, T>, Vector<S, T>)
    where
        S: Holds<T>,
    {
        let nlanes = Vector::<S, T>::NLANES;
        let pick = |parity: usize| {
            Vector::from_fn(|i| {
                let src = 2 * i + parity;
                if src < nlanes {
                    x.get(src)
                } else {
                    y.get(src - nlanes)
                }
            })
        };
        (pick(0), pick(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::{Avx2, Baseline};

    #[test]
    fn test_combine_halves() {
        let ops = OpSet::<Baseline>::new();
        let a = ops.load(&[1u16, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let b = ops.load(&[11u16, 12, 13, 14, 15, 16, 17, 18]).unwrap();
        assert_eq!(
            ops.combine_low(a, b).to_vec(),
            vec![1, 2, 3, 4, 11, 12, 13, 14]
        );
        assert_eq!(
            ops.combine_high(a, b).to_vec(),
            vec![5, 6, 7, 8, 15, 16, 17, 18]
        );
        let (lo, hi) = ops.combine(a, b);
        assert_eq!(lo, ops.combine_low(a, b));
        assert_eq!(hi, ops.combine_high(a, b));
    }

    #[test]
    fn test_zip_f64_pairs() {
        let ops = OpSet::<Baseline>::new();
        let a = ops.load(&[1.0f64, 2.0]).unwrap();
        let b = ops.load(&[-1.0f64, -2.0]).unwrap();
        let (lo, hi) = ops.zip(a, b);
        assert_eq!(lo.to_vec(), vec![1.0, -1.0]);
        assert_eq!(hi.to_vec(), vec![2.0, -2.0]);
    }

    #[test]
    fn test_zip_wide_register() {
        let ops = OpSet::<Avx2>::new();
        let a: Vec<u32> = (0..8).collect();
        let b: Vec<u32> = (100..108).collect();
        let (lo, hi) = ops.zip(ops.load(&a).unwrap(), ops.load(&b).unwrap());
        assert_eq!(lo.to_vec(), vec![0, 100, 1, 101, 2, 102, 3, 103]);
        assert_eq!(hi.to_vec(), vec![4, 104, 5, 105, 6, 106, 7, 107]);
    }

    #[test]
    fn test_unzip_splits_even_odd() {
        let ops = OpSet::<Baseline>::new();
        let x = ops.load(&[0i32, 1, 2, 3]).unwrap();
        let y = ops.load(&[4i32, 5, 6, 7]).unwrap();
        let (even, odd) = ops.unzip(x, y);
        assert_eq!(even.to_vec(), vec![0, 2, 4, 6]);
        assert_eq!(odd.to_vec(), vec![1, 3, 5, 7]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            #[test]
            fn prop_unzip_inverts_zip(
                a in proptest::collection::vec(any::<u8>(), 32),
                b in proptest::collection::vec(any::<u8>(), 32),
            ) {
                let ops = OpSet::<Avx2>::new();
                let va = ops.load(&a).unwrap();
                let vb = ops.load(&b).unwrap();
                let (lo, hi) = ops.zip(va, vb);
                let (ra, rb) = ops.unzip(lo, hi);
                prop_assert_eq!(ra, va);
                prop_assert_eq!(rb, vb);
            }

            #[test]
            fn prop_combine_keeps_every_lane(
                a in proptest::collection::vec(any::<i64>(), 2),
                b in proptest::collection::vec(any::<i64>(), 2),
            ) {
                let ops = OpSet::<Baseline>::new();
                let (lo, hi) = ops.combine(ops.load(&a).unwrap(), ops.load(&b).unwrap());
                prop_assert_eq!(lo.to_vec(), vec![a[0], b[0]]);
                prop_assert_eq!(hi.to_vec(), vec![a[1], b[1]]);
            }
        }
    }
}
