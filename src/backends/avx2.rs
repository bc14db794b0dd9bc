//! AVX2 target (x86 256-bit SIMD)
//!
//! 256-bit registers: 32 x u8, 16 x u16, 8 x f32, 4 x f64.
//!
//! # Cleanup
//!
//! Mixing 256-bit AVX code with legacy SSE code costs a state transition on
//! many Intel cores. [`Simd::cleanup`] issues `vzeroupper` to avoid it. The
//! hint is purely a performance matter and never affects lane results.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::{sealed, Reg256, Simd, SimdF64};
use crate::Target;

/// AVX2 target (256-bit SIMD for x86)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Avx2;

impl sealed::Sealed for Avx2 {}

impl Simd for Avx2 {
    const TARGET: Target = Target::AVX2;
    const SIMD_F64: bool = true;

    type Register = Reg256;

    fn detect() -> bool {
        #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
        {
            is_x86_feature_detected!("avx2")
        }
        #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
        {
            false
        }
    }

    #[inline]
    fn cleanup() {
        zero_upper();
    }
}

impl SimdF64 for Avx2 {}

/// Clear the upper halves of the ymm/zmm registers when the CPU has AVX
#[inline]
pub(super) fn zero_upper() {
    #[cfg(target_arch = "x86_64")]
    if is_x86_feature_detected!("avx") {
        // SAFETY: AVX support was verified on the line above
        unsafe { vzeroupper() }
    }
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx")]
unsafe fn vzeroupper() {
    _mm256_zeroupper();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avx2_width() {
        assert_eq!(Avx2::WIDTH_BITS, 256);
        assert!(Avx2::SIMD_F64);
    }

    #[test]
    fn test_avx2_cleanup_is_safe_without_avx() {
        // Must be a no-op on hosts without AVX and harmless with it
        Avx2::cleanup();
        Avx2::cleanup();
    }
}
