//! univec: Portable Lane-Wise Vector Operations
//!
//! **univec** gives numeric code one contract for lane-wise arithmetic,
//! logical, comparison, memory, conversion and reordering operations over
//! fixed-width registers, whatever the SIMD instruction set underneath:
//!
//! 1. **x86** - SSE2 (128-bit), AVX2 (256-bit), AVX-512F (512-bit)
//! 2. **ARM** - NEON (ARMv7, no f64), ASIMD (AArch64)
//! 3. **POWER / WebAssembly** - VSX, SIMD128
//! 4. **baseline** - portable emulation, always available
//!
//! # Design Principles
//!
//! - **Write once, run on every target**: code generic over [`Simd`] sees identical lane results everywhere
//! - **Absent means absent**: an operation outside a lane type's set is a compile error, not a runtime failure
//! - **Capabilities are data**: the [`Registry`] reports support, and why a target is unavailable
//!
//! # Quick Start
//!
//! ```rust
//! use univec::{Registry, Baseline};
//!
//! let ops = Registry::global().ops::<Baseline>().unwrap();
//!
//! let a = ops.load_f32(&[1.0, 2.0, 3.0, 4.0]).unwrap();
//! let b = ops.set_all_f32(10.0);
//!
//! let sum = ops.add_f32(a, b);
//! assert_eq!(sum.to_vec(), vec![11.0, 12.0, 13.0, 14.0]);
//!
//! let big = ops.cmpgt_f32(sum, ops.set_all_f32(12.5));
//! assert_eq!(big.to_vec(), vec![false, false, true, true]);
//! ```

use std::fmt;
use std::str::FromStr;

pub mod backends;
pub mod config;
pub mod error;
pub mod lane;
pub mod ops;
pub mod registry;
pub mod vector;

pub use backends::{
    Asimd, Avx2, Avx512f, Baseline, Holds, Neon, Simd, SimdF64, Sse2, Vsx, WasmSimd128,
};
pub use config::RegistryConfig;
pub use error::{LaneError, Result, UnavailableReason};
pub use lane::{
    BoolLane, FloatLane, IntLane, Lane, LaneType, MulLane, SaturatingLane, ShiftLane, B16, B32,
    B64, B8,
};
pub use ops::OpSet;
pub use registry::{Registry, TargetInfo, TargetVisitor};
pub use vector::{Mask, Vector};

/// SIMD execution target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Target {
    /// Portable emulation (128-bit)
    Baseline,
    /// SSE2 (x86 baseline, 128-bit)
    SSE2,
    /// AVX2 (256-bit)
    AVX2,
    /// AVX-512 Foundation (512-bit)
    AVX512F,
    /// ARMv7 NEON (128-bit, no f64)
    NEON,
    /// AArch64 Advanced SIMD (128-bit)
    ASIMD,
    /// POWER Vector-Scalar Extension (128-bit)
    VSX,
    /// WebAssembly SIMD128
    WasmSIMD,
}

impl Target {
    /// Number of targets
    pub const COUNT: usize = 8;

    /// Every target, in declaration order
    pub const ALL: [Target; Target::COUNT] = [
        Target::Baseline,
        Target::SSE2,
        Target::AVX2,
        Target::AVX512F,
        Target::NEON,
        Target::ASIMD,
        Target::VSX,
        Target::WasmSIMD,
    ];

    /// Every target, most capable first
    pub const PRIORITY: [Target; Target::COUNT] = [
        Target::AVX512F,
        Target::AVX2,
        Target::SSE2,
        Target::ASIMD,
        Target::NEON,
        Target::VSX,
        Target::WasmSIMD,
        Target::Baseline,
    ];

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Canonical name, e.g. `"AVX512F"` or `"baseline"`
    pub const fn name(self) -> &'static str {
        match self {
            Target::Baseline => "baseline",
            Target::SSE2 => "SSE2",
            Target::AVX2 => "AVX2",
            Target::AVX512F => "AVX512F",
            Target::NEON => "NEON",
            Target::ASIMD => "ASIMD",
            Target::VSX => "VSX",
            Target::WasmSIMD => "WASM_SIMD128",
        }
    }

    /// Register width in bits
    pub const fn width_bits(self) -> usize {
        match self {
            Target::AVX2 => 256,
            Target::AVX512F => 512,
            _ => 128,
        }
    }

    /// Whether the instruction set has double-precision lanes
    pub const fn has_f64(self) -> bool {
        !matches!(self, Target::NEON)
    }

    /// Whether the host CPU can run this target
    pub fn is_detected(self) -> bool {
        match self {
            Target::Baseline => Baseline::detect(),
            Target::SSE2 => Sse2::detect(),
            Target::AVX2 => Avx2::detect(),
            Target::AVX512F => Avx512f::detect(),
            Target::NEON => Neon::detect(),
            Target::ASIMD => Asimd::detect(),
            Target::VSX => Vsx::detect(),
            Target::WasmSIMD => WasmSimd128::detect(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Target {
    type Err = LaneError;

    /// Parse a canonical name, ignoring case
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Target::ALL
            .into_iter()
            .find(|target| target.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LaneError::UnknownTarget(s.to_string()))
    }
}

/// Select the most capable target the host CPU can run
///
/// Performs runtime CPU feature detection, ignoring any
/// [`RegistryConfig`]. The selection follows [`Target::PRIORITY`]:
///
/// **x86/x86_64**: AVX-512F, AVX2, SSE2
///
/// **ARM**: ASIMD (AArch64), NEON (ARMv7)
///
/// **POWER / WASM**: VSX, SIMD128
///
/// **Everything else**: baseline
///
/// # Examples
///
/// ```
/// use univec::select_best_available_target;
///
/// let target = select_best_available_target();
/// println!("Using target: {target}");
/// ```
pub fn select_best_available_target() -> Target {
    Target::PRIORITY
        .into_iter()
        .find(|target| target.is_detected())
        .unwrap_or(Target::Baseline)
}
