//! Final junction-temperature calculation.

use crate::common::{require_finite, require_non_negative, require_positive};
use crate::error::PhysicsResult;

/// Steady-state junction temperature (°C).
///
/// Thermal Ohm's law: T_j = T_ambient + Q * R_total.
///
/// Ambient temperature is unconstrained in sign (sub-zero intake air is
/// valid). Zero power is valid and gives T_j == T_ambient.
pub fn junction_temperature(
    ambient_temperature: f64,
    heat_dissipation: f64,
    total_resistance: f64,
) -> PhysicsResult<f64> {
    require_finite(ambient_temperature, "ambient temperature")?;
    require_non_negative(heat_dissipation, "heat dissipation")?;
    require_positive(total_resistance, "total thermal resistance")?;

    Ok(ambient_temperature + heat_dissipation * total_resistance)
}
