//! Engine error types.
//!
//! Every error kind is detected before the event loop takes its first step:
//! a request either yields a complete [`crate::SimulationResult`] or one of
//! these failures, never a partial timeline.

use thiserror::Error;

use crate::models::Pid;

/// Failure modes of a simulation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// No processes were supplied; averages over nothing are refused.
    #[error("no processes supplied")]
    EmptyInput,

    /// A process record violates an input invariant.
    #[error("invalid process {pid}: {message}")]
    InvalidProcess {
        /// The offending process.
        pid: Pid,
        /// What was wrong with it.
        message: String,
    },

    /// A request-level parameter is missing or out of range.
    #[error("invalid parameter: {message}")]
    InvalidParameter {
        /// What was wrong with the request.
        message: String,
    },
}

impl SimulationError {
    pub(crate) fn invalid_process(pid: Pid, message: impl Into<String>) -> Self {
        Self::InvalidProcess {
            pid,
            message: message.into(),
        }
    }

    pub(crate) fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}
