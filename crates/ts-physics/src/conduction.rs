//! Heat-sink base conduction resistance.
//!
//! 1D steady-state conduction through the base plate. Same algebra as the TIM
//! layer but kept as its own operation: the inputs come from a different
//! physical layer and carry a different default conductivity.

use crate::common::require_positive;
use crate::error::PhysicsResult;

/// Conduction resistance through the heat-sink base (°C/W).
///
/// R = t / (k * A)
pub fn conduction_resistance(
    base_thickness: f64,
    conductivity: f64,
    die_area: f64,
) -> PhysicsResult<f64> {
    require_positive(base_thickness, "base thickness")?;
    require_positive(conductivity, "sink thermal conductivity")?;
    require_positive(die_area, "die area")?;

    Ok(base_thickness / (conductivity * die_area))
}
