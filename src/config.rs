//! Registry configuration
//!
//! Decides which targets a [`Registry`](crate::Registry) may hand out beyond
//! what the host CPU reports.
//!
//! # Examples
//!
//! ```
//! use univec::{RegistryConfig, Target};
//!
//! let config = RegistryConfig::new()
//!     .with_disabled(Target::AVX512F)
//!     .with_emulation(true)
//!     .build();
//! assert!(config.is_disabled(Target::AVX512F));
//! assert!(config.emulate);
//! ```
//!
//! # Environment
//!
//! [`RegistryConfig::from_env`] reads:
//!
//! - `UNIVEC_DISABLE`: target names separated by commas or spaces, e.g. `AVX512F,AVX2`
//! - `UNIVEC_EMULATE`: `1`, `true`, `yes` or `on` to treat every target as supported

use std::env;

#[cfg(feature = "tracing")]
use tracing::warn;

use crate::Target;

/// Environment variable listing targets to disable
pub const ENV_DISABLE: &str = "UNIVEC_DISABLE";

/// Environment variable enabling emulation of every target
pub const ENV_EMULATE: &str = "UNIVEC_EMULATE";

/// Which targets a registry reports as usable
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Targets forced unavailable. Never contains `baseline`.
    pub disabled: Vec<Target>,
    /// Treat every target as supported on this machine. Lane semantics are
    /// emulated in portable code, so results stay exact.
    pub emulate: bool,
}

impl RegistryConfig {
    /// Nothing disabled, no emulation
    pub fn new() -> Self {
        Self::default()
    }

    /// Force `target` unavailable
    ///
    /// `baseline` is always available and is ignored here.
    ///
    /// # Examples
    ///
    /// ```
    /// use univec::{RegistryConfig, Target};
    ///
    /// let config = RegistryConfig::new()
    ///     .with_disabled(Target::AVX2)
    ///     .with_disabled(Target::Baseline);
    /// assert_eq!(config.disabled, vec![Target::AVX2]);
    /// ```
    pub fn with_disabled(mut self, target: Target) -> Self {
        if target == Target::Baseline {
            #[cfg(feature = "tracing")]
            warn!("baseline cannot be disabled, ignoring");
            return self;
        }
        if !self.disabled.contains(&target) {
            self.disabled.push(target);
        }
        self
    }

    /// Treat every target as supported regardless of the host CPU
    pub fn with_emulation(mut self, enabled: bool) -> Self {
        self.emulate = enabled;
        self
    }

    /// Finalize configuration (no-op, for builder pattern consistency)
    pub fn build(self) -> Self {
        self
    }

    /// Read [`ENV_DISABLE`] and [`ENV_EMULATE`]
    ///
    /// Unknown target names are skipped with a warning rather than failing.
    pub fn from_env() -> Self {
        Self::from_values(
            env::var(ENV_DISABLE).ok().as_deref(),
            env::var(ENV_EMULATE).ok().as_deref(),
        )
    }

    /// Build from the raw values of the two environment variables
    pub fn from_values(disable: Option<&str>, emulate: Option<&str>) -> Self {
        let mut config = Self::new();

        for name in disable
            .unwrap_or_default()
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|name| !name.is_empty())
        {
            match name.parse::<Target>() {
                Ok(target) => config = config.with_disabled(target),
                Err(_err) => {
                    #[cfg(feature = "tracing")]
                    warn!(name, "{ENV_DISABLE}: {_err}, ignoring");
                }
            }
        }

        config.emulate = emulate.map(parse_flag).unwrap_or(false);
        config
    }

    pub fn is_disabled(&self, target: Target) -> bool {
        self.disabled.contains(&target)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RegistryConfig::default();
        assert!(config.disabled.is_empty());
        assert!(!config.emulate);
        assert_eq!(config, RegistryConfig::new().build());
    }

    #[test]
    fn test_builder_pattern() {
        let config = RegistryConfig::new()
            .with_disabled(Target::AVX2)
            .with_disabled(Target::AVX2)
            .with_disabled(Target::VSX)
            .with_emulation(true)
            .build();
        assert_eq!(config.disabled, vec![Target::AVX2, Target::VSX]);
        assert!(config.emulate);
        assert!(config.is_disabled(Target::VSX));
        assert!(!config.is_disabled(Target::SSE2));
    }

    #[test]
    fn test_baseline_never_disabled() {
        let config = RegistryConfig::new().with_disabled(Target::Baseline);
        assert!(!config.is_disabled(Target::Baseline));
    }

    #[test]
    fn test_from_values_parses_list() {
        let config = RegistryConfig::from_values(Some("avx512f, AVX2  neon"), None);
        assert_eq!(
            config.disabled,
            vec![Target::AVX512F, Target::AVX2, Target::NEON]
        );
        assert!(!config.emulate);
    }

    #[test]
    fn test_from_values_skips_unknown_names() {
        let config = RegistryConfig::from_values(Some("AVX1024,SSE2,,baseline"), Some("yes"));
        assert_eq!(config.disabled, vec![Target::SSE2]);
        assert!(config.emulate);
    }

    #[test]
    fn test_emulate_flag_values() {
        for on in ["1", "true", "ON", " Yes "] {
            assert!(RegistryConfig::from_values(None, Some(on)).emulate, "{on}");
        }
        for off in ["0", "false", "", "maybe"] {
            assert!(!RegistryConfig::from_values(None, Some(off)).emulate, "{off}");
        }
    }
}
