//! ARM targets: NEON (ARMv7) and ASIMD (AArch64)
//!
//! Both use 128-bit registers. ARMv7 NEON has no double-precision vector
//! arithmetic, so [`Neon`] does not implement [`SimdF64`] and f64 vectors
//! cannot be built for it. AArch64 ASIMD adds f64 lanes.
//!
//! `load_low` follows `vcombine(vld1(p), vdup(0))` and clears the high half.

use super::{sealed, Reg128, Simd, SimdF64};
use crate::Target;

/// ARMv7 NEON target (128-bit, no f64 lanes)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neon;

impl sealed::Sealed for Neon {}

impl Simd for Neon {
    const TARGET: Target = Target::NEON;
    const SIMD_F64: bool = false;

    type Register = Reg128;

    fn detect() -> bool {
        cfg!(all(target_arch = "arm", target_feature = "neon"))
    }
}

/// AArch64 Advanced SIMD target (128-bit)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Asimd;

impl sealed::Sealed for Asimd {}

impl Simd for Asimd {
    const TARGET: Target = Target::ASIMD;
    const SIMD_F64: bool = true;

    type Register = Reg128;

    fn detect() -> bool {
        #[cfg(target_arch = "aarch64")]
        {
            std::arch::is_aarch64_feature_detected!("asimd")
        }
        #[cfg(not(target_arch = "aarch64"))]
        {
            false
        }
    }
}

impl SimdF64 for Asimd {}
