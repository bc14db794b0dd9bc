//! SSE2 target (x86 baseline SIMD)
//!
//! 128-bit registers: 16 x u8, 8 x u16, 4 x f32, 2 x f64. Available on every
//! x86_64 CPU. `load_low` follows `_mm_loadl_epi64` and clears the high half.

use super::{sealed, Reg128, Simd, SimdF64};
use crate::Target;

/// SSE2 target (128-bit SIMD for x86)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sse2;

impl sealed::Sealed for Sse2 {}

impl Simd for Sse2 {
    const TARGET: Target = Target::SSE2;
    const SIMD_F64: bool = true;

    type Register = Reg128;

    fn detect() -> bool {
        #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
        {
            is_x86_feature_detected!("sse2")
        }
        #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
        {
            false
        }
    }
}

impl SimdF64 for Sse2 {}
