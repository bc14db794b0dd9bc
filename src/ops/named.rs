//! `<operation>_<lanetype>` spellings of the generic operations
//!
//! Each lane type gets exactly the methods of its operation set, so
//! `mul_u64`, `div_s32` or `shl_u8` simply do not exist. The `f64` methods are
//! only implemented for [`SimdF64`] targets.

use super::OpSet;
use crate::backends::{Holds, Simd, SimdF64};
use crate::error::Result;
use crate::lane::{Lane, B16, B32, B64, B8};
use crate::vector::{Mask, Vector};

macro_rules! common_ops {
    ($sfx:ident, $t:ty, $bsfx:ident, $b:ty) => {
        paste::paste! {
            #[doc = concat!("[`load`](Self::load) for `", stringify!($sfx), "` lanes")]
            #[inline]
            pub fn [<load_ $sfx>](self, seq: &[$t]) -> Result<Vector<S, $t>> {
                self.load(seq)
            }

            #[inline]
            pub fn [<load_aligned_ $sfx>](self, seq: &[$t]) -> Result<Vector<S, $t>> {
                self.load_aligned(seq)
            }

            #[inline]
            pub fn [<load_stream_ $sfx>](self, seq: &[$t]) -> Result<Vector<S, $t>> {
                self.load_stream(seq)
            }

            #[inline]
            pub fn [<load_low_ $sfx>](self, seq: &[$t]) -> Result<Vector<S, $t>> {
                self.load_low(seq)
            }

            #[doc = concat!("[`store`](Self::store) for `", stringify!($sfx), "` lanes")]
            #[inline]
            pub fn [<store_ $sfx>](self, buf: &mut [$t], v: Vector<S, $t>) -> Result<()> {
                self.store(buf, v)
            }

            #[inline]
            pub fn [<store_aligned_ $sfx>](self, buf: &mut [$t], v: Vector<S, $t>) -> Result<()> {
                self.store_aligned(buf, v)
            }

            #[inline]
            pub fn [<store_stream_ $sfx>](self, buf: &mut [$t], v: Vector<S, $t>) -> Result<()> {
                self.store_stream(buf, v)
            }

            #[inline]
            pub fn [<store_low_ $sfx>](self, buf: &mut [$t], v: Vector<S, $t>) -> Result<()> {
                self.store_low(buf, v)
            }

            #[inline]
            pub fn [<store_high_ $sfx>](self, buf: &mut [$t], v: Vector<S, $t>) -> Result<()> {
                self.store_high(buf, v)
            }

            #[inline]
            pub fn [<zero_ $sfx>](self) -> Vector<S, $t> {
                self.zero()
            }

            #[inline]
            pub fn [<set_all_ $sfx>](self, x: $t) -> Vector<S, $t> {
                self.set_all(x)
            }

            #[inline]
            pub fn [<set_ $sfx>](self, values: &[$t]) -> Result<Vector<S, $t>> {
                self.set(values)
            }

            #[inline]
            pub fn [<setf_ $sfx>](self, fallback: $t, values: &[$t]) -> Result<Vector<S, $t>> {
                self.setf(fallback, values)
            }

            #[inline]
            pub fn [<add_ $sfx>](self, a: Vector<S, $t>, b: Vector<S, $t>) -> Vector<S, $t> {
                self.add(a, b)
            }

            #[inline]
            pub fn [<sub_ $sfx>](self, a: Vector<S, $t>, b: Vector<S, $t>) -> Vector<S, $t> {
                self.sub(a, b)
            }

            #[inline]
            pub fn [<xor_ $sfx>](self, a: Vector<S, $t>, b: Vector<S, $t>) -> Vector<S, $t> {
                self.xor(a, b)
            }

            #[inline]
            pub fn [<or_ $sfx>](self, a: Vector<S, $t>, b: Vector<S, $t>) -> Vector<S, $t> {
                self.or(a, b)
            }

            #[inline]
            pub fn [<and_ $sfx>](self, a: Vector<S, $t>, b: Vector<S, $t>) -> Vector<S, $t> {
                self.and(a, b)
            }

            #[inline]
            pub fn [<not_ $sfx>](self, a: Vector<S, $t>) -> Vector<S, $t> {
                self.not(a)
            }

            #[inline]
            pub fn [<cmpeq_ $sfx>](self, a: Vector<S, $t>, b: Vector<S, $t>) -> Mask<S, $b> {
                self.cmpeq(a, b)
            }

            #[inline]
            pub fn [<cmpneq_ $sfx>](self, a: Vector<S, $t>, b: Vector<S, $t>) -> Mask<S, $b> {
                self.cmpneq(a, b)
            }

            #[inline]
            pub fn [<cmpgt_ $sfx>](self, a: Vector<S, $t>, b: Vector<S, $t>) -> Mask<S, $b> {
                self.cmpgt(a, b)
            }

            #[inline]
            pub fn [<cmpge_ $sfx>](self, a: Vector<S, $t>, b: Vector<S, $t>) -> Mask<S, $b> {
                self.cmpge(a, b)
            }

            #[inline]
            pub fn [<cmplt_ $sfx>](self, a: Vector<S, $t>, b: Vector<S, $t>) -> Mask<S, $b> {
                self.cmplt(a, b)
            }

            #[inline]
            pub fn [<cmple_ $sfx>](self, a: Vector<S, $t>, b: Vector<S, $t>) -> Mask<S, $b> {
                self.cmple(a, b)
            }

            #[inline]
            pub fn [<select_ $sfx>](
                self,
                mask: Mask<S, $b>,
                a: Vector<S, $t>,
                b: Vector<S, $t>,
            ) -> Vector<S, $t> {
                self.select(mask, a, b)
            }

            #[doc = concat!("Relabel any vector of this target as `", stringify!($sfx), "` lanes")]
            #[inline]
            pub fn [<reinterpret_ $sfx>]<U: Lane>(self, v: Vector<S, U>) -> Vector<S, $t>
            where
                S: Holds<U>,
            {
                self.reinterpret::<$t, U>(v)
            }

            #[doc = concat!("`", stringify!($sfx), "` data to `", stringify!($bsfx), "` mask")]
            #[inline]
            pub fn [<cvt_ $bsfx _ $sfx>](self, v: Vector<S, $t>) -> Mask<S, $b> {
                self.cvt_to_mask(v)
            }

            #[doc = concat!("`", stringify!($bsfx), "` mask to `", stringify!($sfx), "` data")]
            #[inline]
            pub fn [<cvt_ $sfx _ $bsfx>](self, mask: Mask<S, $b>) -> Vector<S, $t> {
                self.cvt_from_mask(mask)
            }

            #[inline]
            pub fn [<combine_low_ $sfx>](self, a: Vector<S, $t>, b: Vector<S, $t>) -> Vector<S, $t> {
                self.combine_low(a, b)
            }

            #[inline]
            pub fn [<combine_high_ $sfx>](self, a: Vector<S, $t>, b: Vector<S, $t>) -> Vector<S, $t> {
                self.combine_high(a, b)
            }

            #[inline]
            pub fn [<combine_ $sfx>](
                self,
                a: Vector<S, $t>,
                b: Vector<S, $t>,
            ) -> (Vector<S, $t>, Vector<S, $t>) {
                self.combine(a, b)
            }

            #[inline]
            pub fn [<zip_ $sfx>](
                self,
                a: Vector<S, $t>,
                b: Vector<S, $t>,
            ) -> (Vector<S, $t>, Vector<S, $t>) {
                self.zip(a, b)
            }

            #[inline]
            pub fn [<unzip_ $sfx>](
                self,
                x: Vector<S, $t>,
                y: Vector<S, $t>,
            ) -> (Vector<S, $t>, Vector<S, $t>) {
                self.unzip(x, y)
            }
        }
    };
}

macro_rules! mul_ops {
    ($sfx:ident, $t:ty) => {
        paste::paste! {
            #[inline]
            pub fn [<mul_ $sfx>](self, a: Vector<S, $t>, b: Vector<S, $t>) -> Vector<S, $t> {
                self.mul(a, b)
            }
        }
    };
}

macro_rules! div_ops {
    ($sfx:ident, $t:ty) => {
        paste::paste! {
            #[inline]
            pub fn [<div_ $sfx>](self, a: Vector<S, $t>, b: Vector<S, $t>) -> Vector<S, $t> {
                self.div(a, b)
            }
        }
    };
}

macro_rules! saturating_ops {
    ($sfx:ident, $t:ty) => {
        paste::paste! {
            #[inline]
            pub fn [<adds_ $sfx>](self, a: Vector<S, $t>, b: Vector<S, $t>) -> Vector<S, $t> {
                self.adds(a, b)
            }

            #[inline]
            pub fn [<subs_ $sfx>](self, a: Vector<S, $t>, b: Vector<S, $t>) -> Vector<S, $t> {
                self.subs(a, b)
            }
        }
    };
}

macro_rules! shift_ops {
    ($sfx:ident, $t:ty) => {
        paste::paste! {
            #[inline]
            pub fn [<shl_ $sfx>](self, v: Vector<S, $t>, count: u32) -> Vector<S, $t> {
                self.shl(v, count)
            }

            #[inline]
            pub fn [<shli_ $sfx>]<const N: u32>(self, v: Vector<S, $t>) -> Vector<S, $t> {
                self.shli::<N, $t>(v)
            }

            #[inline]
            pub fn [<shr_ $sfx>](self, v: Vector<S, $t>, count: u32) -> Vector<S, $t> {
                self.shr(v, count)
            }

            #[inline]
            pub fn [<shri_ $sfx>]<const N: u32>(self, v: Vector<S, $t>) -> Vector<S, $t> {
                self.shri::<N, $t>(v)
            }
        }
    };
}

impl<S: Simd> OpSet<S> {
    common_ops!(u8, u8, b8, B8);
    common_ops!(s8, i8, b8, B8);
    common_ops!(u16, u16, b16, B16);
    common_ops!(s16, i16, b16, B16);
    common_ops!(u32, u32, b32, B32);
    common_ops!(s32, i32, b32, B32);
    common_ops!(u64, u64, b64, B64);
    common_ops!(s64, i64, b64, B64);
    common_ops!(f32, f32, b32, B32);

    mul_ops!(u8, u8);
    mul_ops!(s8, i8);
    mul_ops!(u16, u16);
    mul_ops!(s16, i16);
    mul_ops!(u32, u32);
    mul_ops!(s32, i32);
    mul_ops!(f32, f32);

    div_ops!(f32, f32);

    saturating_ops!(u8, u8);
    saturating_ops!(s8, i8);
    saturating_ops!(u16, u16);
    saturating_ops!(s16, i16);

    shift_ops!(u16, u16);
    shift_ops!(s16, i16);
    shift_ops!(u32, u32);
    shift_ops!(s32, i32);
    shift_ops!(u64, u64);
    shift_ops!(s64, i64);
}

impl<S: SimdF64> OpSet<S> {
    common_ops!(f64, f64, b64, B64);
    mul_ops!(f64, f64);
    div_ops!(f64, f64);
}
