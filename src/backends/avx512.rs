//! AVX-512F target (x86 512-bit SIMD)
//!
//! 512-bit registers: 64 x u8, 32 x u16, 16 x f32, 8 x f64.
//!
//! Hardware comparisons produce `k` mask registers; the contract still exposes
//! them as all-zero/all-one boolean lanes, so results match the narrower
//! targets exactly.

use super::{avx2, sealed, Reg512, Simd, SimdF64};
use crate::Target;

/// AVX-512 Foundation target (512-bit SIMD for x86)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Avx512f;

impl sealed::Sealed for Avx512f {}

impl Simd for Avx512f {
    const TARGET: Target = Target::AVX512F;
    const SIMD_F64: bool = true;

    type Register = Reg512;

    fn detect() -> bool {
        #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
        {
            is_x86_feature_detected!("avx512f")
        }
        #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
        {
            false
        }
    }

    #[inline]
    fn cleanup() {
        avx2::zero_upper();
    }
}

impl SimdF64 for Avx512f {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avx512_width() {
        assert_eq!(Avx512f::WIDTH_BITS, 512);
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn test_avx512_implies_avx_register_family() {
        // An AVX-512F host always reports AVX; the reverse does not hold
        if Avx512f::detect() {
            assert!(std::arch::is_x86_feature_detected!("avx"));
        }
    }
}
