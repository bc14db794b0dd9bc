//! WebAssembly SIMD128 target
//!
//! 128-bit `v128` registers. Availability is fixed at compile time by the
//! `simd128` target feature; WebAssembly has no runtime feature query.

use super::{sealed, Reg128, Simd, SimdF64};
use crate::Target;

/// WebAssembly SIMD128 target (128-bit)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WasmSimd128;

impl sealed::Sealed for WasmSimd128 {}

impl Simd for WasmSimd128 {
    const TARGET: Target = Target::WasmSIMD;
    const SIMD_F64: bool = true;

    type Register = Reg128;

    fn detect() -> bool {
        cfg!(all(target_arch = "wasm32", target_feature = "simd128"))
    }
}

impl SimdF64 for WasmSimd128 {}
