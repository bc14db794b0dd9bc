//! Scalar (portable) baseline target
//!
//! A 128-bit register emulated with plain byte storage. It runs on every
//! platform and serves as the reference every other target is checked
//! against.

use super::{sealed, Reg128, Simd, SimdF64};
use crate::Target;

/// Portable baseline target (128-bit, always available)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Baseline;

impl sealed::Sealed for Baseline {}

impl Simd for Baseline {
    const TARGET: Target = Target::Baseline;
    const SIMD_F64: bool = true;

    type Register = Reg128;

    #[inline]
    fn detect() -> bool {
        true
    }
}

impl SimdF64 for Baseline {}
