//! Error types for the thermal model.

use thiserror::Error;
use ts_core::CoreError;

/// Errors raised by the resistance-network formulas.
///
/// Invalid physical input is a permanent caller error, never a transient
/// condition: nothing here is retried or recovered internally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// A numeric precondition failed. The message names the offending
    /// quantity and the constraint it violated.
    #[error("Invalid input: {field} {constraint}")]
    InvalidInput {
        field: &'static str,
        constraint: &'static str,
    },

    /// Fin geometry consumes the entire sink width. Distinct from a plain
    /// range error: it signals a design-level contradiction in the input
    /// geometry, not a sign mistake.
    #[error("Infeasible geometry: {what}")]
    InfeasibleGeometry { what: &'static str },

    #[error("Non-finite value for {what}")]
    NonFinite { what: &'static str },
}

pub type PhysicsResult<T> = Result<T, PhysicsError>;

impl From<CoreError> for PhysicsError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NonFinite { what, .. } => PhysicsError::NonFinite { what },
            CoreError::InvalidArg { what } => PhysicsError::InvalidInput {
                field: what,
                constraint: "is invalid",
            },
        }
    }
}
