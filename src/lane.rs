//! Lane type system
//!
//! The ten scalar lane kinds a vector can hold, the four boolean lane kinds
//! produced by comparisons, and the capability traits that decide which
//! operations exist for which lane type.
//!
//! | Trait            | Implemented by                         |
//! |------------------|----------------------------------------|
//! | [`Lane`]         | `u8 i8 u16 i16 u32 i32 u64 i64 f32 f64` |
//! | [`IntLane`]      | all integer lanes                      |
//! | [`MulLane`]      | all lanes except `u64`/`i64`           |
//! | [`FloatLane`]    | `f32 f64`                              |
//! | [`SaturatingLane`] | `u8 i8 u16 i16`                      |
//! | [`ShiftLane`]    | `u16 i16 u32 i32 u64 i64`              |
//!
//! An operation missing from a lane type's set is a missing trait impl, so
//! calling it is a compile error rather than a runtime failure.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::{LaneError, Result};

mod sealed {
    pub trait Sealed {}
}

/// Scalar lane kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LaneType {
    /// Unsigned 8-bit integer
    U8,
    /// Signed 8-bit integer
    S8,
    /// Unsigned 16-bit integer
    U16,
    /// Signed 16-bit integer
    S16,
    /// Unsigned 32-bit integer
    U32,
    /// Signed 32-bit integer
    S32,
    /// Unsigned 64-bit integer
    U64,
    /// Signed 64-bit integer
    S64,
    /// Single-precision float
    F32,
    /// Double-precision float
    F64,
}

impl LaneType {
    /// Every lane type, in suffix order
    pub const ALL: [LaneType; 10] = [
        LaneType::U8,
        LaneType::S8,
        LaneType::U16,
        LaneType::S16,
        LaneType::U32,
        LaneType::S32,
        LaneType::U64,
        LaneType::S64,
        LaneType::F32,
        LaneType::F64,
    ];

    /// Width of one lane in bits
    pub const fn bit_width(self) -> usize {
        match self {
            LaneType::U8 | LaneType::S8 => 8,
            LaneType::U16 | LaneType::S16 => 16,
            LaneType::U32 | LaneType::S32 | LaneType::F32 => 32,
            LaneType::U64 | LaneType::S64 | LaneType::F64 => 64,
        }
    }

    /// Width of one lane in bytes
    pub const fn bytes(self) -> usize {
        self.bit_width() / 8
    }

    pub const fn is_unsigned(self) -> bool {
        matches!(
            self,
            LaneType::U8 | LaneType::U16 | LaneType::U32 | LaneType::U64
        )
    }

    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            LaneType::S8 | LaneType::S16 | LaneType::S32 | LaneType::S64
        )
    }

    pub const fn is_float(self) -> bool {
        matches!(self, LaneType::F32 | LaneType::F64)
    }

    /// Operation-name suffix, e.g. `"s16"`
    pub const fn suffix(self) -> &'static str {
        match self {
            LaneType::U8 => "u8",
            LaneType::S8 => "s8",
            LaneType::U16 => "u16",
            LaneType::S16 => "s16",
            LaneType::U32 => "u32",
            LaneType::S32 => "s32",
            LaneType::U64 => "u64",
            LaneType::S64 => "s64",
            LaneType::F32 => "f32",
            LaneType::F64 => "f64",
        }
    }

    /// Suffix of the same-width boolean lane, e.g. `"b16"`
    pub const fn bool_suffix(self) -> &'static str {
        match self.bit_width() {
            8 => "b8",
            16 => "b16",
            32 => "b32",
            _ => "b64",
        }
    }

    /// Name reported by vectors of this lane type, e.g. `"vs16"`
    pub const fn vector_name(self) -> &'static str {
        match self {
            LaneType::U8 => "vu8",
            LaneType::S8 => "vs8",
            LaneType::U16 => "vu16",
            LaneType::S16 => "vs16",
            LaneType::U32 => "vu32",
            LaneType::S32 => "vs32",
            LaneType::U64 => "vu64",
            LaneType::S64 => "vs64",
            LaneType::F32 => "vf32",
            LaneType::F64 => "vf64",
        }
    }

    /// Smallest representable integer, `None` for float lanes
    pub const fn int_min(self) -> Option<i128> {
        if self.is_float() {
            None
        } else if self.is_unsigned() {
            Some(0)
        } else {
            Some(-(1i128 << (self.bit_width() - 1)))
        }
    }

    /// Largest representable integer, `None` for float lanes
    pub const fn int_max(self) -> Option<i128> {
        if self.is_float() {
            None
        } else if self.is_unsigned() {
            Some((1i128 << self.bit_width()) - 1)
        } else {
            Some((1i128 << (self.bit_width() - 1)) - 1)
        }
    }
}

impl fmt::Display for LaneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for LaneType {
    type Err = LaneError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        // Rust spells signed lanes `iN`; accept both.
        let wanted = match wanted.strip_prefix('i') {
            Some(bits) => format!("s{bits}"),
            None => wanted,
        };
        LaneType::ALL
            .into_iter()
            .find(|lane| lane.suffix() == wanted)
            .ok_or_else(|| LaneError::UnknownLaneType(s.to_string()))
    }
}

/// Boolean lane kind, one per lane width
pub trait BoolLane: sealed::Sealed + Copy + fmt::Debug + Send + Sync + 'static {
    /// Width of one boolean lane in bytes
    const BYTES: usize;
    /// Operation-name suffix, e.g. `"b8"`
    const SUFFIX: &'static str;
    /// Name reported by boolean vectors of this width, e.g. `"vb8"`
    const VECTOR_NAME: &'static str;
}

macro_rules! bool_lane {
    ($name:ident, $bytes:expr, $suffix:literal, $vname:literal) => {
        #[doc = concat!("Boolean lane of ", stringify!($bytes), " byte(s)")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name;

        impl sealed::Sealed for $name {}

        impl BoolLane for $name {
            const BYTES: usize = $bytes;
            const SUFFIX: &'static str = $suffix;
            const VECTOR_NAME: &'static str = $vname;
        }
    };
}

bool_lane!(B8, 1, "b8", "vb8");
bool_lane!(B16, 2, "b16", "vb16");
bool_lane!(B32, 4, "b32", "vb32");
bool_lane!(B64, 8, "b64", "vb64");

/// A scalar that can occupy one vector lane
///
/// Lanes are stored in native byte order, so reinterpreting a register under
/// another lane type keeps every bit in place.
pub trait Lane:
    sealed::Sealed + Copy + Default + PartialEq + PartialOrd + fmt::Debug + Send + Sync + 'static
{
    const TYPE: LaneType;
    const BYTES: usize;

    /// Same-width boolean lane produced by comparisons
    type Mask: BoolLane;

    /// Decode a lane from exactly `Self::BYTES` bytes
    fn read(bytes: &[u8]) -> Self;

    /// Encode a lane into exactly `Self::BYTES` bytes
    fn write(self, bytes: &mut [u8]);

    /// Wrapping for integers, IEEE for floats
    fn lane_add(self, rhs: Self) -> Self;

    /// Wrapping for integers, IEEE for floats
    fn lane_sub(self, rhs: Self) -> Self;
}

/// Integer lanes
pub trait IntLane: Lane + Eq + Ord {
    const MIN: Self;
    const MAX: Self;
}

/// Lanes with a lane-wise multiply (every lane type except 64-bit integers)
pub trait MulLane: Lane {
    fn lane_mul(self, rhs: Self) -> Self;
}

/// Floating-point lanes
pub trait FloatLane: MulLane {
    fn lane_div(self, rhs: Self) -> Self;
}

/// 8- and 16-bit integer lanes with clamping add/sub
pub trait SaturatingLane: IntLane {
    fn lane_adds(self, rhs: Self) -> Self;
    fn lane_subs(self, rhs: Self) -> Self;
}

/// Integer lanes of 16 bits or wider with shifts
///
/// A count at or beyond the lane width shifts every bit out: the result is
/// zero, or the sign fill for a signed right shift.
pub trait ShiftLane: IntLane {
    fn lane_shl(self, count: u32) -> Self;
    fn lane_shr(self, count: u32) -> Self;
}

macro_rules! lane_io {
    ($t:ty, $kind:ident, $mask:ty, $add:ident, $sub:ident) => {
        impl sealed::Sealed for $t {}

        impl Lane for $t {
            const TYPE: LaneType = LaneType::$kind;
            const BYTES: usize = std::mem::size_of::<$t>();

            type Mask = $mask;

            #[inline]
            fn read(bytes: &[u8]) -> Self {
                let mut raw = [0u8; std::mem::size_of::<$t>()];
                raw.copy_from_slice(bytes);
                <$t>::from_ne_bytes(raw)
            }

            #[inline]
            fn write(self, bytes: &mut [u8]) {
                bytes.copy_from_slice(&self.to_ne_bytes());
            }

            #[inline]
            fn lane_add(self, rhs: Self) -> Self {
                self.$add(rhs)
            }

            #[inline]
            fn lane_sub(self, rhs: Self) -> Self {
                self.$sub(rhs)
            }
        }
    };
}

lane_io!(u8, U8, B8, wrapping_add, wrapping_sub);
lane_io!(i8, S8, B8, wrapping_add, wrapping_sub);
lane_io!(u16, U16, B16, wrapping_add, wrapping_sub);
lane_io!(i16, S16, B16, wrapping_add, wrapping_sub);
lane_io!(u32, U32, B32, wrapping_add, wrapping_sub);
lane_io!(i32, S32, B32, wrapping_add, wrapping_sub);
lane_io!(u64, U64, B64, wrapping_add, wrapping_sub);
lane_io!(i64, S64, B64, wrapping_add, wrapping_sub);
lane_io!(f32, F32, B32, add, sub);
lane_io!(f64, F64, B64, add, sub);

macro_rules! int_lane {
    ($($t:ty),*) => {$(
        impl IntLane for $t {
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
        }
    )*};
}

int_lane!(u8, i8, u16, i16, u32, i32, u64, i64);

macro_rules! int_mul_lane {
    ($($t:ty),*) => {$(
        impl MulLane for $t {
            #[inline]
            fn lane_mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }
        }
    )*};
}

int_mul_lane!(u8, i8, u16, i16, u32, i32);

macro_rules! float_lane {
    ($($t:ty),*) => {$(
        impl MulLane for $t {
            #[inline]
            fn lane_mul(self, rhs: Self) -> Self {
                self * rhs
            }
        }

        impl FloatLane for $t {
            #[inline]
            fn lane_div(self, rhs: Self) -> Self {
                self / rhs
            }
        }
    )*};
}

float_lane!(f32, f64);

macro_rules! saturating_lane {
    ($($t:ty),*) => {$(
        impl SaturatingLane for $t {
            #[inline]
            fn lane_adds(self, rhs: Self) -> Self {
                self.saturating_add(rhs)
            }

            #[inline]
            fn lane_subs(self, rhs: Self) -> Self {
                self.saturating_sub(rhs)
            }
        }
    )*};
}

saturating_lane!(u8, i8, u16, i16);

macro_rules! shift_lane {
    (unsigned: $($t:ty),*) => {$(
        impl ShiftLane for $t {
            #[inline]
            fn lane_shl(self, count: u32) -> Self {
                self.checked_shl(count).unwrap_or(0)
            }

            #[inline]
            fn lane_shr(self, count: u32) -> Self {
                self.checked_shr(count).unwrap_or(0)
            }
        }
    )*};
    (signed: $($t:ty),*) => {$(
        impl ShiftLane for $t {
            #[inline]
            fn lane_shl(self, count: u32) -> Self {
                self.checked_shl(count).unwrap_or(0)
            }

            #[inline]
            fn lane_shr(self, count: u32) -> Self {
                self.checked_shr(count)
                    .unwrap_or(self >> (<$t>::BITS - 1))
            }
        }
    )*};
}

shift_lane!(unsigned: u16, u32, u64);
shift_lane!(signed: i16, i32, i64);
