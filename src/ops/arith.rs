//! Arithmetic, bitwise and shift operations
//!
//! Integer `add`/`sub`/`mul` wrap modulo the lane width. `adds`/`subs` clamp
//! instead and exist only for 8- and 16-bit lanes. Shifts exist for 16-bit and
//! wider integer lanes; right shifts are logical for unsigned lanes and
//! arithmetic for signed ones. Bitwise operations act on the raw register
//! bits, so they behave the same for every lane type.

use super::OpSet;
use crate::backends::{Holds, Simd};
use crate::lane::{FloatLane, Lane, MulLane, SaturatingLane, ShiftLane};
use crate::vector::Vector;

impl<S: Simd> OpSet<S> {
    /// Lane-wise `a + b`
    pub fn add<T: Lane>(self, a: Vector<S, T>, b: Vector<S, T>) -> Vector<S, T>
    where
        S: Holds<T>,
    {
        a.zip_map(b, T::lane_add)
    }

    /// Lane-wise `a - b`
    pub fn sub<T: Lane>(self, a: Vector<S, T>, b: Vector<S, T>) -> Vector<S, T>
    where
        S: Holds<T>,
    {
        a.zip_map(b, T::lane_sub)
    }

    /// Lane-wise `a * b` (not available for 64-bit integer lanes)
    pub fn mul<T: MulLane>(self, a: Vector<S, T>, b: Vector<S, T>) -> Vector<S, T>
    where
        S: Holds<T>,
    {
        a.zip_map(b, T::lane_mul)
    }

    /// Lane-wise `a / b` (float lanes only)
    pub fn div<T: FloatLane>(self, a: Vector<S, T>, b: Vector<S, T>) -> Vector<S, T>
    where
        S: Holds<T>,
    {
        a.zip_map(b, T::lane_div)
    }

    /// Saturating `a + b`
    ///
    /// # Examples
    ///
    /// ```
    /// use univec::{Registry, Baseline};
    ///
    /// let ops = Registry::global().ops::<Baseline>().unwrap();
    /// let v = ops.adds(ops.set_all(120i8), ops.set_all(50i8));
    /// assert!(v.iter().all(|lane| lane == 127));
    /// ```
    pub fn adds<T: SaturatingLane>(self, a: Vector<S, T>, b: Vector<S, T>) -> Vector<S, T>
    where
        S: Holds<T>,
    {
        a.zip_map(b, T::lane_adds)
    }

    /// Saturating `a - b`
    pub fn subs<T: SaturatingLane>(self, a: Vector<S, T>, b: Vector<S, T>) -> Vector<S, T>
    where
        S: Holds<T>,
    {
        a.zip_map(b, T::lane_subs)
    }

    /// Shift every lane left by a runtime `count`
    pub fn shl<T: ShiftLane>(self, v: Vector<S, T>, count: u32) -> Vector<S, T>
    where
        S: Holds<T>,
    {
        v.map(|lane| lane.lane_shl(count))
    }

    /// Shift every lane left by the immediate `N`
    pub fn shli<const N: u32, T: ShiftLane>(self, v: Vector<S, T>) -> Vector<S, T>
    where
        S: Holds<T>,
    {
        self.shl(v, N)
    }

    /// Shift every lane right by a runtime `count`
    pub fn shr<T: ShiftLane>(self, v: Vector<S, T>, count: u32) -> Vector<S, T>
    where
        S: Holds<T>,
    {
        v.map(|lane| lane.lane_shr(count))
    }

    /// Shift every lane right by the immediate `N`
    pub fn shri<const N: u32, T: ShiftLane>(self, v: Vector<S, T>) -> Vector<S, T>
    where
        S: Holds<T>,
    {
        self.shr(v, N)
    }

    /// Bitwise `a ^ b`
    pub fn xor<T: Lane>(self, a: Vector<S, T>, b: Vector<S, T>) -> Vector<S, T>
    where
        S: Holds<T>,
    {
        a.zip_bytes(b, |x, y| x ^ y)
    }

    /// Bitwise `a | b`
    pub fn or<T: Lane>(self, a: Vector<S, T>, b: Vector<S, T>) -> Vector<S, T>
    where
        S: Holds<T>,
    {
        a.zip_bytes(b, |x, y| x | y)
    }

    /// Bitwise `a & b`
    pub fn and<T: Lane>(self, a: Vector<S, T>, b: Vector<S, T>) -> Vector<S, T>
    where
        S: Holds<T>,
    {
        a.zip_bytes(b, |x, y| x & y)
    }

    /// Bitwise `!a`
    pub fn not<T: Lane>(self, a: Vector<S, T>) -> Vector<S, T>
    where
        S: Holds<T>,
    {
        a.zip_bytes(a, |x, _| !x)
    }
}
