//! Error types for univec operations

use std::fmt;

use thiserror::Error;

use crate::Target;

/// Result type for univec operations
pub type Result<T> = std::result::Result<T, LaneError>;

/// Why a target's operation set cannot be handed out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnavailableReason {
    /// The host CPU lacks the instruction set
    NotSupported,
    /// Switched off through [`RegistryConfig`](crate::RegistryConfig)
    Disabled,
    /// The target has no double-precision lanes
    NoDoublePrecision,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UnavailableReason::NotSupported => "isn't supported by current machine",
            UnavailableReason::Disabled => "disabled by configuration",
            UnavailableReason::NoDoublePrecision => "doesn't support double-precision",
        })
    }
}

/// Errors that can occur during univec operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LaneError {
    /// Caller buffer is shorter than the operation needs
    #[error("Size mismatch: expected {expected} lanes, got {actual}")]
    SizeMismatch {
        /// Lanes required
        expected: usize,
        /// Lanes supplied
        actual: usize,
    },

    /// No target with this name is known
    #[error("Unknown target: {0}")]
    UnknownTarget(String),

    /// No lane type with this suffix is known
    #[error("Unknown lane type: {0}")]
    UnknownLaneType(String),

    /// Target (or its f64 lanes) cannot be used
    #[error("target '{target}' {reason}")]
    Unavailable {
        /// Target that was asked for
        target: Target,
        /// Why it is unavailable
        reason: UnavailableReason,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_mismatch_error() {
        let err = LaneError::SizeMismatch {
            expected: 16,
            actual: 5,
        };
        assert_eq!(err.to_string(), "Size mismatch: expected 16 lanes, got 5");
    }

    #[test]
    fn test_unknown_target_error() {
        let err = LaneError::UnknownTarget("AVX1024".to_string());
        assert_eq!(err.to_string(), "Unknown target: AVX1024");
    }

    #[test]
    fn test_unavailable_error_messages() {
        let err = LaneError::Unavailable {
            target: Target::AVX512F,
            reason: UnavailableReason::NotSupported,
        };
        assert_eq!(
            err.to_string(),
            "target 'AVX512F' isn't supported by current machine"
        );

        let err = LaneError::Unavailable {
            target: Target::NEON,
            reason: UnavailableReason::NoDoublePrecision,
        };
        assert_eq!(
            err.to_string(),
            "target 'NEON' doesn't support double-precision"
        );
    }

    #[test]
    fn test_error_equality() {
        let err1 = LaneError::Unavailable {
            target: Target::AVX2,
            reason: UnavailableReason::Disabled,
        };
        let err2 = LaneError::Unavailable {
            target: Target::AVX2,
            reason: UnavailableReason::Disabled,
        };
        assert_eq!(err1, err2);
        assert_ne!(err1, LaneError::UnknownTarget("AVX2".to_string()));
    }
}
