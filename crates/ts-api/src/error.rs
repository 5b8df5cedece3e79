//! Error types for the API boundary.

use ts_physics::PhysicsError;

/// Boundary-level error, carrying enough category information to map onto
/// the transport contract (400 for caller mistakes, 500 for everything else).
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required field is absent. Distinct from a present-but-wrong field.
    #[error("Missing required field: {path}")]
    MissingField { path: String },

    /// A field is present but fails its type or sign contract.
    #[error("Invalid field: {path} {reason}")]
    InvalidField { path: String, reason: &'static str },

    /// The payload is not a JSON object at all.
    #[error("Payload must be a JSON object")]
    InvalidPayload,

    /// The model rejected the numbers (defense-in-depth preconditions).
    #[error(transparent)]
    Physics(#[from] PhysicsError),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// HTTP status this error maps to at the transport boundary.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::MissingField { .. }
            | ApiError::InvalidField { .. }
            | ApiError::InvalidPayload => 400,
            ApiError::Physics(err) => match err {
                PhysicsError::InvalidInput { .. } | PhysicsError::InfeasibleGeometry { .. } => 400,
                // A non-finite intermediate means the model broke, not the caller
                PhysicsError::NonFinite { .. } => 500,
            },
        }
    }

    /// True when the error is the caller's fault and its message is safe to return.
    pub fn is_client_error(&self) -> bool {
        self.status() == 400
    }

    /// Text for the `{"error": ...}` document. Precondition messages only name
    /// fields and constraints, so they are safe to surface; anything else is
    /// replaced with an opaque message.
    pub fn client_message(&self) -> String {
        if self.is_client_error() {
            self.to_string()
        } else {
            "Internal server error".to_string()
        }
    }
}
