//! Derived geometric quantities: die area, fin spacing, convection area.

use crate::common::require_positive;
use crate::error::{PhysicsError, PhysicsResult};

/// Processor die footprint area (m²).
pub fn die_area(die_length: f64, die_width: f64) -> PhysicsResult<f64> {
    require_positive(die_length, "die length")?;
    require_positive(die_width, "die width")?;

    Ok(die_length * die_width)
}

/// Spacing between adjacent fins (m).
///
/// S = (W - n * t) / (n - 1)
///
/// Spacing needs at least one gap, so the fin count must exceed 1. Fins that
/// would occupy the full sink width are rejected as [`PhysicsError::InfeasibleGeometry`].
pub fn fin_spacing(sink_width: f64, fin_count: u32, fin_thickness: f64) -> PhysicsResult<f64> {
    require_positive(sink_width, "sink width")?;
    if fin_count <= 1 {
        return Err(PhysicsError::InvalidInput {
            field: "number of fins",
            constraint: "must be greater than 1",
        });
    }
    require_positive(fin_thickness, "fin thickness")?;

    let usable_width = sink_width - f64::from(fin_count) * fin_thickness;
    if usable_width <= 0.0 {
        return Err(PhysicsError::InfeasibleGeometry {
            what: "fins occupy the entire sink width",
        });
    }

    Ok(usable_width / f64::from(fin_count - 1))
}

/// Total convection surface area of the fin array (m²).
///
/// Both faces of every fin convect: A = 2 * n * H * L.
pub fn total_convection_area(
    fin_height: f64,
    sink_length: f64,
    fin_count: u32,
) -> PhysicsResult<f64> {
    require_positive(fin_height, "fin height")?;
    require_positive(sink_length, "sink length")?;
    if fin_count == 0 {
        return Err(PhysicsError::InvalidInput {
            field: "number of fins",
            constraint: "must be positive",
        });
    }

    Ok(2.0 * f64::from(fin_count) * fin_height * sink_length)
}
