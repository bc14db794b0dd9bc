//! Target backends for different SIMD instruction sets
//!
//! Each backend is a zero-sized marker type implementing [`Simd`]. The marker
//! fixes the register width, whether double-precision lanes exist, and the few
//! behaviours the contract leaves target-defined. Vectors carry the marker in
//! their type, so a vector built for one target cannot reach another target's
//! operations.
//!
//! # Backends
//!
//! - `scalar`: Portable baseline (128-bit, always available)
//! - `sse2`: x86 baseline SIMD (128-bit)
//! - `avx2`: x86 256-bit SIMD
//! - `avx512`: x86 512-bit SIMD
//! - `neon`: ARMv7 NEON (128-bit, no f64) and AArch64 ASIMD (128-bit)
//! - `vsx`: POWER VSX (128-bit)
//! - `wasm`: WebAssembly SIMD128
//!
//! Lane semantics are emulated in portable code for every backend. Machine
//! encodings plug in behind the same markers without changing observable
//! results.

pub mod avx2;
pub mod avx512;
pub mod neon;
pub mod scalar;
pub mod sse2;
pub mod vsx;
pub mod wasm;

pub use avx2::Avx2;
pub use avx512::Avx512f;
pub use neon::{Asimd, Neon};
pub use scalar::Baseline;
pub use sse2::Sse2;
pub use vsx::Vsx;
pub use wasm::WasmSimd128;

use std::fmt::Debug;

use crate::Target;

mod sealed {
    pub trait Sealed {}
}

/// Raw storage of one vector register
pub trait Register: sealed::Sealed + Copy + Debug + PartialEq + Eq + Send + Sync + 'static {
    /// Register width in bytes
    const BYTES: usize;

    /// All-zero register
    fn zeroed() -> Self;

    /// Register contents, lowest lane first
    fn as_bytes(&self) -> &[u8];

    /// Mutable register contents, lowest lane first
    fn as_bytes_mut(&mut self) -> &mut [u8];
}

macro_rules! register {
    ($name:ident, $bytes:literal, $bits:literal) => {
        #[doc = concat!(stringify!($bits), "-bit register, aligned to its own width")]
        #[repr(C, align($bytes))]
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        pub struct $name([u8; $bytes]);

        impl sealed::Sealed for $name {}

        impl Register for $name {
            const BYTES: usize = $bytes;

            #[inline]
            fn zeroed() -> Self {
                Self([0u8; $bytes])
            }

            #[inline]
            fn as_bytes(&self) -> &[u8] {
                &self.0
            }

            #[inline]
            fn as_bytes_mut(&mut self) -> &mut [u8] {
                &mut self.0
            }
        }
    };
}

register!(Reg128, 16, 128);
register!(Reg256, 32, 256);
register!(Reg512, 64, 512);

/// What a partial load leaves in the high half of the register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalfFill {
    /// High half cleared (`movq`, `vcombine(x, 0)`)
    Zero,
    /// High half repeats the low half (VSX splat of a 64-bit load)
    Duplicate,
}

/// A SIMD target backend
///
/// # Invariants
///
/// - `WIDTH_BITS == Self::Register::BYTES * 8`
/// - `SIMD_F64` is true exactly when the marker implements [`SimdF64`]
pub trait Simd: sealed::Sealed + Copy + Debug + Default + Send + Sync + 'static {
    /// Runtime descriptor of this target
    const TARGET: Target;

    /// Native register width in bits
    const WIDTH_BITS: usize = <Self::Register as Register>::BYTES * 8;

    /// Whether the target has double-precision lanes
    const SIMD_F64: bool;

    /// High-half behaviour of `load_low`
    const LOW_HALF_FILL: HalfFill = HalfFill::Zero;

    type Register: Register;

    /// Whether the host CPU can run this target
    fn detect() -> bool;

    /// Advisory hint to reset vector state between instruction families.
    /// Never required for correctness.
    #[inline]
    fn cleanup() {}
}

/// Targets with double-precision (f64) lanes
pub trait SimdF64: Simd {}

/// Targets able to hold lanes of type `T`
///
/// Every target holds the integer lanes and `f32`; only [`SimdF64`] targets
/// hold `f64`. Vectors can only be built where this bound is met, so an f64
/// vector for a target without double precision cannot exist.
pub trait Holds<T>: Simd {}

macro_rules! holds_everywhere {
    ($($t:ty),*) => {$(
        impl<S: Simd> Holds<$t> for S {}
    )*};
}

holds_everywhere!(u8, i8, u16, i16, u32, i32, u64, i64, f32);

impl<S: SimdF64> Holds<f64> for S {}
