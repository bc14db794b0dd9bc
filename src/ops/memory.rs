//! Load and store operations
//!
//! Loads read the first `NLANES` elements of a caller-owned slice; stores write
//! the first `NLANES` elements of one. A slice shorter than required is a
//! [`LaneError::SizeMismatch`]; longer slices are fine and the excess is left
//! alone.
//!
//! The aligned and streaming variants keep the same lane-for-lane results as
//! the plain ones. They only name the access discipline a hardware backend may
//! assume (register-aligned buffer, non-temporal hint).

use super::OpSet;
use crate::backends::{HalfFill, Holds, Simd};
use crate::error::{LaneError, Result};
use crate::lane::Lane;
use crate::vector::Vector;

#[inline]
fn require(expected: usize, actual: usize) -> Result<()> {
    if actual < expected {
        return Err(LaneError::SizeMismatch { expected, actual });
    }
    Ok(())
}

impl<S: Simd> OpSet<S> {
    /// Load `NLANES` lanes from `seq`, lane 0 = `seq[0]`
    ///
    /// # Errors
    ///
    /// Returns [`LaneError::SizeMismatch`] if `seq` has fewer than `NLANES` elements.
    pub fn load<T: Lane>(self, seq: &[T]) -> Result<Vector<S, T>>
    where
        S: Holds<T>,
    {
        let nlanes = Vector::<S, T>::NLANES;
        require(nlanes, seq.len())?;
        Ok(Vector::from_fn(|i| seq[i]))
    }

    /// Same result as [`load`](Self::load); `seq` is expected register-aligned
    pub fn load_aligned<T: Lane>(self, seq: &[T]) -> Result<Vector<S, T>>
    where
        S: Holds<T>,
    {
        self.load(seq)
    }

    /// Same result as [`load`](Self::load); a non-temporal hint for the backend
    pub fn load_stream<T: Lane>(self, seq: &[T]) -> Result<Vector<S, T>>
    where
        S: Holds<T>,
    {
        self.load(seq)
    }

    /// Load the low half from `seq[..NLANES / 2]`
    ///
    /// The high half is target-defined: cleared on most targets, a copy of the
    /// low half on VSX. It never reads past `NLANES / 2` elements.
    ///
    /// # Errors
    ///
    /// Returns [`LaneError::SizeMismatch`] if `seq` has fewer than `NLANES / 2` elements.
    pub fn load_low<T: Lane>(self, seq: &[T]) -> Result<Vector<S, T>>
    where
        S: Holds<T>,
    {
        let half = Vector::<S, T>::NLANES / 2;
        require(half, seq.len())?;
        Ok(Vector::from_fn(|i| match (i < half, S::LOW_HALF_FILL) {
            (true, _) => seq[i],
            (false, HalfFill::Duplicate) => seq[i - half],
            (false, HalfFill::Zero) => T::default(),
        }))
    }

    /// Write all lanes of `v` into `buf[..NLANES]`
    ///
    /// # Errors
    ///
    /// Returns [`LaneError::SizeMismatch`] if `buf` has fewer than `NLANES` elements.
    pub fn store<T: Lane>(self, buf: &mut [T], v: Vector<S, T>) -> Result<()>
    where
        S: Holds<T>,
    {
        require(Vector::<S, T>::NLANES, buf.len())?;
        for (dst, lane) in buf.iter_mut().zip(v.iter()) {
            *dst = lane;
        }
        Ok(())
    }

    /// Same effect as [`store`](Self::store); `buf` is expected register-aligned
    pub fn store_aligned<T: Lane>(self, buf: &mut [T], v: Vector<S, T>) -> Result<()>
    where
        S: Holds<T>,
    {
        self.store(buf, v)
    }

    /// Same effect as [`store`](Self::store); a non-temporal hint for the backend
    pub fn store_stream<T: Lane>(self, buf: &mut [T], v: Vector<S, T>) -> Result<()>
    where
        S: Holds<T>,
    {
        self.store(buf, v)
    }

    /// Write the low half of `v` into `buf[..NLANES / 2]`, nothing else
    ///
    /// # Errors
    ///
    /// Returns [`LaneError::SizeMismatch`] if `buf` has fewer than `NLANES / 2` elements.
    pub fn store_low<T: Lane>(self, buf: &mut [T], v: Vector<S, T>) -> Result<()>
    where
        S: Holds<T>,
    {
        let half = Vector::<S, T>::NLANES / 2;
        require(half, buf.len())?;
        for (i, dst) in buf[..half].iter_mut().enumerate() {
            *dst = v.get(i);
        }
        Ok(())
    }

    /// Write the high half of `v` into `buf[..NLANES / 2]`, nothing else
    ///
    /// # Errors
    ///
    /// Returns [`LaneError::SizeMismatch`] if `buf` has fewer than `NLANES / 2` elements.
    pub fn store_high<T: Lane>(self, buf: &mut [T], v: Vector<S, T>) -> Result<()>
    where
        S: Holds<T>,
    {
        let half = Vector::<S, T>::NLANES / 2;
        require(half, buf.len())?;
        for (i, dst) in buf[..half].iter_mut().enumerate() {
            *dst = v.get(half + i);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::{Avx2, Baseline, Vsx};

    #[test]
    fn test_load_store_round_trip() {
        let ops = OpSet::<Avx2>::new();
        let data: Vec<i16> = (1..=16).collect();
        let v = ops.load(&data).unwrap();
        assert_eq!(v.to_vec(), data);

        let mut out = vec![0i16; 16];
        ops.store(&mut out, v).unwrap();
        assert_eq!(out, data);
    }

    #[test]
    fn test_load_variants_agree() {
        let ops = OpSet::<Baseline>::new();
        let data = [1.5f32, -2.0, 3.25, 4.0];
        let v = ops.load(&data).unwrap();
        assert_eq!(ops.load_aligned(&data).unwrap(), v);
        assert_eq!(ops.load_stream(&data).unwrap(), v);
    }

    #[test]
    fn test_load_rejects_short_sequence() {
        let ops = OpSet::<Baseline>::new();
        let err = ops.load(&[1u32, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            LaneError::SizeMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_load_ignores_excess() {
        let ops = OpSet::<Baseline>::new();
        let v = ops.load(&[1u64, 2, 3, 4, 5]).unwrap();
        assert_eq!(v.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_load_low_clears_high_half() {
        let ops = OpSet::<Baseline>::new();
        let data: Vec<u16> = (1..=8).collect();
        let v = ops.load_low(&data).unwrap();
        assert_eq!(v.to_vec(), vec![1, 2, 3, 4, 0, 0, 0, 0]);
        assert_ne!(v, ops.load(&data).unwrap());
    }

    #[test]
    fn test_load_low_needs_only_half() {
        let ops = OpSet::<Baseline>::new();
        let v = ops.load_low(&[7u32, 8]).unwrap();
        assert_eq!(v.to_vec(), vec![7, 8, 0, 0]);
        assert!(ops.load_low(&[7u32]).is_err());
    }

    #[test]
    fn test_load_low_duplicates_on_vsx() {
        let ops = OpSet::<Vsx>::new();
        let data: Vec<u32> = vec![1, 2, 3, 4];
        let v = ops.load_low(&data).unwrap();
        assert_eq!(v.to_vec(), vec![1, 2, 1, 2]);
        assert_ne!(v, ops.load(&data).unwrap());
    }

    #[test]
    fn test_store_low_and_high_leave_rest_untouched() {
        let ops = OpSet::<Baseline>::new();
        let v = ops.load(&[1i32, 2, 3, 4]).unwrap();

        let mut low = [0i32; 4];
        ops.store_low(&mut low, v).unwrap();
        assert_eq!(low, [1, 2, 0, 0]);

        let mut high = [0i32; 4];
        ops.store_high(&mut high, v).unwrap();
        assert_eq!(high, [3, 4, 0, 0]);
    }

    #[test]
    fn test_store_rejects_short_buffer() {
        let ops = OpSet::<Baseline>::new();
        let v = ops.load(&[1u8; 16]).unwrap();
        let mut buf = [0u8; 15];
        assert!(ops.store(&mut buf, v).is_err());
        let mut half = [0u8; 8];
        assert!(ops.store_low(&mut half, v).is_ok());
        assert!(ops.store_high(&mut half[..7], v).is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            #[test]
            fn prop_store_load_round_trip(data in proptest::collection::vec(any::<i8>(), 32)) {
                let ops = OpSet::<Avx2>::new();
                let v = ops.load(&data).unwrap();
                let mut out = vec![0i8; 32];
                ops.store_stream(&mut out, v).unwrap();
                prop_assert_eq!(out, data);
            }

            #[test]
            fn prop_store_low_matches_low_half(data in proptest::collection::vec(any::<u16>(), 8)) {
                let ops = OpSet::<Baseline>::new();
                let v = ops.load_low(&data).unwrap();
                let mut out = vec![0u16; 8];
                ops.store_low(&mut out, v).unwrap();
                prop_assert_eq!(&out[..4], &data[..4]);
                prop_assert!(out[4..].iter().all(|x| *x == 0));
            }
        }
    }
}
