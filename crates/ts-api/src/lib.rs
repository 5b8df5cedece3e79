//! ts-api: the request/response boundary around the thermal model.
//!
//! Accepts an untrusted JSON payload, validates it field by field (missing
//! and invalid are distinct categories), compiles it into the typed physics
//! entities, runs the analysis, and shapes the response document. Also owns
//! the client/server error split the transport layer relies on.
//!
//! Validation here deliberately duplicates the precondition checks inside the
//! formulas: a fast-fail schema layer at the boundary, defense in depth below.

pub mod config;
pub mod error;
pub mod schema;
pub mod service;
pub mod validate;

// Re-export key types for convenience
pub use config::Defaults;
pub use error::{ApiError, ApiResult};
pub use schema::{HealthResponse, Resistances, SolveRequest, SolveResponse};
pub use service::{health, run_analysis, solve, SERVICE_NAME};
