//! Common argument guards for the formula layer.
//!
//! Every formula validates its own arguments through these helpers before
//! touching them, independent of any checking the request boundary already
//! did. The double check is intentional.

use crate::error::{PhysicsError, PhysicsResult};
use ts_core::numeric::{ensure_finite, Real};

/// Require a strictly positive, finite value.
pub fn require_positive(value: Real, field: &'static str) -> PhysicsResult<Real> {
    ensure_finite(value, field).map_err(|_| PhysicsError::NonFinite { what: field })?;
    if value <= 0.0 {
        return Err(PhysicsError::InvalidInput {
            field,
            constraint: "must be positive",
        });
    }
    Ok(value)
}

/// Require a finite value that is zero or greater.
pub fn require_non_negative(value: Real, field: &'static str) -> PhysicsResult<Real> {
    ensure_finite(value, field).map_err(|_| PhysicsError::NonFinite { what: field })?;
    if value < 0.0 {
        return Err(PhysicsError::InvalidInput {
            field,
            constraint: "must not be negative",
        });
    }
    Ok(value)
}

/// Require a finite value, with no sign constraint (e.g. ambient temperature).
pub fn require_finite(value: Real, field: &'static str) -> PhysicsResult<Real> {
    ensure_finite(value, field).map_err(|_| PhysicsError::NonFinite { what: field })?;
    Ok(value)
}

/// Ensure a computed result is finite, returning PhysicsError if not.
pub fn check_finite(value: Real, what: &'static str) -> PhysicsResult<()> {
    ensure_finite(value, what).map_err(|_| PhysicsError::NonFinite { what })?;
    Ok(())
}
