//! Vector and boolean-vector values
//!
//! A [`Vector<S, T>`] is one register of target `S` viewed as `NLANES` lanes of
//! type `T`. A [`Mask<S, B>`] is the boolean counterpart produced by
//! comparisons: every lane is all-zero (false) or all-one (true).
//!
//! Both are plain `Copy` values. They are only built by an
//! [`OpSet`](crate::OpSet), which requires `S: Holds<T>`, so a vector of a lane
//! type its target cannot hold never exists.
//!
//! # Examples
//!
//! ```
//! use univec::{Registry, Baseline};
//!
//! let ops = Registry::global().ops::<Baseline>().unwrap();
//! let v = ops.load_u16(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
//!
//! assert_eq!(v.nlanes(), 8);
//! assert_eq!(v.lane(2), Some(3));
//! assert_eq!(v.type_name(), "vu16");
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::backends::{Register, Simd};
use crate::lane::{BoolLane, Lane, LaneType};
use crate::Target;

/// Fixed-width vector of `T` lanes on target `S`
pub struct Vector<S: Simd, T: Lane> {
    reg: S::Register,
    _lane: PhantomData<T>,
}

impl<S: Simd, T: Lane> Clone for Vector<S, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Simd, T: Lane> Copy for Vector<S, T> {}

impl<S: Simd, T: Lane> Vector<S, T> {
    /// Lanes per vector: register width / lane width
    pub const NLANES: usize = <S::Register as Register>::BYTES / T::BYTES;

    #[inline]
    pub(crate) fn from_register(reg: S::Register) -> Self {
        Self {
            reg,
            _lane: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn register(&self) -> &S::Register {
        &self.reg
    }

    /// Build a vector lane by lane, lane 0 first
    #[inline]
    pub(crate) fn from_fn(mut f: impl FnMut(usize) -> T) -> Self {
        let mut reg = S::Register::zeroed();
        for (i, chunk) in reg.as_bytes_mut().chunks_exact_mut(T::BYTES).enumerate() {
            f(i).write(chunk);
        }
        Self::from_register(reg)
    }

    /// Lane `i`; callers guarantee `i < NLANES`
    #[inline]
    pub(crate) fn get(&self, i: usize) -> T {
        T::read(&self.reg.as_bytes()[i * T::BYTES..(i + 1) * T::BYTES])
    }

    #[inline]
    pub(crate) fn map(self, f: impl Fn(T) -> T) -> Self {
        Self::from_fn(|i| f(self.get(i)))
    }

    #[inline]
    pub(crate) fn zip_map(self, other: Self, f: impl Fn(T, T) -> T) -> Self {
        Self::from_fn(|i| f(self.get(i), other.get(i)))
    }

    /// Combine the raw bytes of two registers, ignoring lane boundaries
    #[inline]
    pub(crate) fn zip_bytes(self, other: Self, f: impl Fn(u8, u8) -> u8) -> Self {
        let mut reg = self.reg;
        for (dst, src) in reg.as_bytes_mut().iter_mut().zip(other.reg.as_bytes()) {
            *dst = f(*dst, *src);
        }
        Self::from_register(reg)
    }

    /// Number of lanes
    pub fn nlanes(&self) -> usize {
        Self::NLANES
    }

    /// Lane `i`, or `None` past the last lane
    pub fn lane(&self, i: usize) -> Option<T> {
        (i < Self::NLANES).then(|| self.get(i))
    }

    /// Lanes in order, lane 0 first
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..Self::NLANES).map(move |i| self.get(i))
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    pub fn lane_type(&self) -> LaneType {
        T::TYPE
    }

    /// Type label, e.g. `"vu8"`; follows the lane type through reinterpretation
    pub fn type_name(&self) -> &'static str {
        T::TYPE.vector_name()
    }

    pub fn target(&self) -> Target {
        S::TARGET
    }
}

/// Lane-wise equality under `T`'s own `PartialEq` (a NaN lane is never equal)
impl<S: Simd, T: Lane> PartialEq for Vector<S, T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<S: Simd, T: Lane> fmt::Debug for Vector<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())?;
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Boolean vector with `B`-wide lanes on target `S`
pub struct Mask<S: Simd, B: BoolLane> {
    reg: S::Register,
    _lane: PhantomData<B>,
}

impl<S: Simd, B: BoolLane> Clone for Mask<S, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Simd, B: BoolLane> Copy for Mask<S, B> {}

impl<S: Simd, B: BoolLane> Mask<S, B> {
    /// Lanes per mask: register width / boolean lane width
    pub const NLANES: usize = <S::Register as Register>::BYTES / B::BYTES;

    #[inline]
    pub(crate) fn from_register(reg: S::Register) -> Self {
        Self {
            reg,
            _lane: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn register(&self) -> &S::Register {
        &self.reg
    }

    /// Build a mask lane by lane; `true` lanes are all-one, `false` all-zero
    #[inline]
    pub(crate) fn from_fn(mut f: impl FnMut(usize) -> bool) -> Self {
        let mut reg = S::Register::zeroed();
        for (i, chunk) in reg.as_bytes_mut().chunks_exact_mut(B::BYTES).enumerate() {
            if f(i) {
                chunk.fill(0xFF);
            }
        }
        Self::from_register(reg)
    }

    #[inline]
    fn get(&self, i: usize) -> bool {
        self.reg.as_bytes()[i * B::BYTES] != 0
    }

    pub fn nlanes(&self) -> usize {
        Self::NLANES
    }

    /// Lane `i`, or `None` past the last lane
    pub fn lane(&self, i: usize) -> Option<bool> {
        (i < Self::NLANES).then(|| self.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..Self::NLANES).map(move |i| self.get(i))
    }

    pub fn to_vec(&self) -> Vec<bool> {
        self.iter().collect()
    }

    /// True if any lane is set
    pub fn any(&self) -> bool {
        self.reg.as_bytes().iter().any(|b| *b != 0)
    }

    /// True if every lane is set
    pub fn all(&self) -> bool {
        self.reg.as_bytes().iter().all(|b| *b == 0xFF)
    }

    /// Type label, e.g. `"vb8"`
    pub fn type_name(&self) -> &'static str {
        B::VECTOR_NAME
    }

    pub fn target(&self) -> Target {
        S::TARGET
    }
}

impl<S: Simd, B: BoolLane> PartialEq for Mask<S, B> {
    fn eq(&self, other: &Self) -> bool {
        self.reg == other.reg
    }
}

impl<S: Simd, B: BoolLane> Eq for Mask<S, B> {}

impl<S: Simd, B: BoolLane> fmt::Debug for Mask<S, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())?;
        f.debug_list().entries(self.iter()).finish()
    }
}
