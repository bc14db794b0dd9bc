//! Target registry and runtime dispatch
//!
//! The registry records, for every [`Target`], whether its operation set can
//! be used on this machine and whether it has double-precision lanes. It is
//! built once and never changes afterwards.
//!
//! Generic code reaches a target chosen at runtime through a
//! [`TargetVisitor`]:
//!
//! ```
//! use univec::{OpSet, Registry, Simd, Target, TargetVisitor};
//!
//! struct Lanes;
//!
//! impl TargetVisitor for Lanes {
//!     type Output = usize;
//!
//!     fn visit<S: Simd>(&mut self, ops: OpSet<S>) -> usize {
//!         ops.nlanes::<u8>()
//!     }
//! }
//!
//! let registry = Registry::global();
//! assert_eq!(registry.dispatch(Target::Baseline, &mut Lanes), Ok(16));
//! ```

use std::fmt;
use std::sync::OnceLock;

#[cfg(feature = "tracing")]
use tracing::{debug, info, instrument};

use crate::backends::{
    Asimd, Avx2, Avx512f, Baseline, Neon, Simd, SimdF64, Sse2, Vsx, WasmSimd128,
};
use crate::config::RegistryConfig;
use crate::error::{LaneError, Result, UnavailableReason};
use crate::ops::OpSet;
use crate::Target;

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Capabilities of one target on this machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetInfo {
    pub target: Target,
    /// Register width in bits
    pub width_bits: usize,
    /// Operation set usable here
    pub simd: bool,
    /// Operation set usable here and has f64 lanes
    pub simd_f64: bool,
    /// Why `simd` is false, if it is
    pub unavailable: Option<UnavailableReason>,
}

impl TargetInfo {
    fn probe(target: Target, config: &RegistryConfig) -> Self {
        let unavailable = if config.is_disabled(target) {
            Some(UnavailableReason::Disabled)
        } else if !(config.emulate || target.is_detected()) {
            Some(UnavailableReason::NotSupported)
        } else {
            None
        };
        let simd = unavailable.is_none();

        Self {
            target,
            width_bits: target.width_bits(),
            simd,
            simd_f64: simd && target.has_f64(),
            unavailable,
        }
    }

    /// `Ok` if the operation set is usable
    ///
    /// # Errors
    ///
    /// [`LaneError::Unavailable`] carrying the reason it is not.
    pub fn check(&self) -> Result<()> {
        match self.unavailable {
            Some(reason) => Err(LaneError::Unavailable {
                target: self.target,
                reason,
            }),
            None => Ok(()),
        }
    }

    /// `Ok` if f64 lanes are usable
    ///
    /// # Errors
    ///
    /// [`LaneError::Unavailable`]; the reason is
    /// [`UnavailableReason::NoDoublePrecision`] when the target itself works.
    pub fn check_f64(&self) -> Result<()> {
        self.check()?;
        if !self.simd_f64 {
            return Err(LaneError::Unavailable {
                target: self.target,
                reason: UnavailableReason::NoDoublePrecision,
            });
        }
        Ok(())
    }
}

impl fmt::Display for TargetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}-bit): ", self.target, self.width_bits)?;
        match self.unavailable {
            Some(reason) => write!(f, "{reason}"),
            None if self.simd_f64 => f.write_str("supported"),
            None => write!(f, "supported, {}", UnavailableReason::NoDoublePrecision),
        }
    }
}

/// Generic code run against whichever target the registry picks
pub trait TargetVisitor {
    type Output;

    /// Run on a target without f64 lanes (and, by default, on every target)
    fn visit<S: Simd>(&mut self, ops: OpSet<S>) -> Self::Output;

    /// Run on a target with f64 lanes
    ///
    /// Override to exercise f64 vectors; the default forwards to
    /// [`visit`](Self::visit).
    fn visit_f64<S: SimdF64>(&mut self, ops: OpSet<S>) -> Self::Output {
        self.visit(ops)
    }
}

/// Table of every target's capabilities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    infos: [TargetInfo; Target::COUNT],
}

impl Registry {
    /// Probe every target under `config`
    #[cfg_attr(feature = "tracing", instrument(skip(config), fields(emulate = config.emulate)))]
    pub fn new(config: &RegistryConfig) -> Self {
        let infos = Target::ALL.map(|target| TargetInfo::probe(target, config));

        #[cfg(feature = "tracing")]
        {
            for info in &infos {
                debug!(target_name = %info.target, simd = info.simd, simd_f64 = info.simd_f64, "{info}");
            }
            let supported = infos.iter().filter(|info| info.simd).count();
            info!(supported, total = Target::COUNT, "target registry ready");
        }

        Self { infos }
    }

    /// Process-wide registry configured from the environment
    ///
    /// Built on first use from [`RegistryConfig::from_env`].
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(|| Registry::new(&RegistryConfig::from_env()))
    }

    pub fn info(&self, target: Target) -> &TargetInfo {
        &self.infos[target.index()]
    }

    /// Look a target up by name, ignoring case
    ///
    /// # Errors
    ///
    /// [`LaneError::UnknownTarget`] if no target has this name.
    pub fn get(&self, name: &str) -> Result<&TargetInfo> {
        let target: Target = name.parse()?;
        Ok(self.info(target))
    }

    pub fn is_supported(&self, target: Target) -> bool {
        self.info(target).simd
    }

    pub fn supports_f64(&self, target: Target) -> bool {
        self.info(target).simd_f64
    }

    /// Every target's entry, in [`Target::ALL`] order
    pub fn targets(&self) -> impl Iterator<Item = &TargetInfo> {
        self.infos.iter()
    }

    /// Targets whose operation set is usable
    pub fn supported(&self) -> Vec<Target> {
        self.targets()
            .filter(|info| info.simd)
            .map(|info| info.target)
            .collect()
    }

    /// Most capable usable target; `baseline` when nothing else is
    pub fn best(&self) -> Target {
        Target::PRIORITY
            .into_iter()
            .find(|target| self.is_supported(*target))
            .unwrap_or(Target::Baseline)
    }

    /// Operation set of `S`
    ///
    /// # Errors
    ///
    /// [`LaneError::Unavailable`] if `S` is not supported or disabled.
    pub fn ops<S: Simd>(&self) -> Result<OpSet<S>> {
        self.info(S::TARGET).check()?;
        Ok(OpSet::new())
    }

    /// Run `visitor` on `target`
    ///
    /// Targets with f64 lanes go through [`TargetVisitor::visit_f64`], the
    /// others through [`TargetVisitor::visit`].
    ///
    /// # Errors
    ///
    /// [`LaneError::Unavailable`] if `target` is not supported or disabled.
    pub fn dispatch<V: TargetVisitor>(&self, target: Target, visitor: &mut V) -> Result<V::Output> {
        match target {
            Target::Baseline => self.run_f64::<Baseline, V>(visitor),
            Target::SSE2 => self.run_f64::<Sse2, V>(visitor),
            Target::AVX2 => self.run_f64::<Avx2, V>(visitor),
            Target::AVX512F => self.run_f64::<Avx512f, V>(visitor),
            Target::NEON => self.run::<Neon, V>(visitor),
            Target::ASIMD => self.run_f64::<Asimd, V>(visitor),
            Target::VSX => self.run_f64::<Vsx, V>(visitor),
            Target::WasmSIMD => self.run_f64::<WasmSimd128, V>(visitor),
        }
    }

    /// Run `visitor` on every target, supported or not
    pub fn for_each<V: TargetVisitor>(&self, visitor: &mut V) -> Vec<(Target, Result<V::Output>)> {
        Target::ALL
            .into_iter()
            .map(|target| (target, self.dispatch(target, visitor)))
            .collect()
    }

    fn run<S: Simd, V: TargetVisitor>(&self, visitor: &mut V) -> Result<V::Output> {
        let ops = self.ops::<S>()?;
        Ok(visitor.visit(ops))
    }

    fn run_f64<S: SimdF64, V: TargetVisitor>(&self, visitor: &mut V) -> Result<V::Output> {
        let ops = self.ops::<S>()?;
        Ok(visitor.visit_f64(ops))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(&RegistryConfig::default())
    }
}
