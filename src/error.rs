//! Errors raised by the network and the loss metric.

use thiserror::Error;

use crate::network::Phase;

pub type Result<T> = std::result::Result<T, NetworkError>;

/// Precondition violations detected at the boundary of the offending call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkError {
    #[error("Invalid topology: {reason}")]
    InvalidTopology { reason: String },

    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Only raised by a network in strict mode.
    #[error("`{operation}` called out of order while the network is {phase}")]
    OutOfOrder {
        operation: &'static str,
        phase: Phase,
    },
}

impl NetworkError {
    pub(crate) fn invalid_topology(reason: impl Into<String>) -> Self {
        Self::InvalidTopology {
            reason: reason.into(),
        }
    }
}

/// Fails with `ShapeMismatch` unless `actual == expected`.
pub(crate) fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(NetworkError::ShapeMismatch { expected, actual })
    }
}
