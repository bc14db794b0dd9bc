//! POWER VSX target (128-bit)
//!
//! VSX implements the partial load as a 64-bit load splatted across the
//! register, so the high half of `load_low` repeats the low half instead of
//! being cleared.

use super::{sealed, HalfFill, Reg128, Simd, SimdF64};
use crate::Target;

/// POWER Vector-Scalar Extension target (128-bit)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vsx;

impl sealed::Sealed for Vsx {}

impl Simd for Vsx {
    const TARGET: Target = Target::VSX;
    const SIMD_F64: bool = true;
    const LOW_HALF_FILL: HalfFill = HalfFill::Duplicate;

    type Register = Reg128;

    fn detect() -> bool {
        cfg!(all(target_arch = "powerpc64", target_feature = "vsx"))
    }
}

impl SimdF64 for Vsx {}
