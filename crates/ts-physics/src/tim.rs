//! Thermal-interface-material layer resistance.

use crate::common::require_positive;
use crate::error::PhysicsResult;

/// Conductive resistance of the TIM layer between die and sink base (°C/W).
///
/// R = t / (k * A)
pub fn tim_resistance(thickness: f64, conductivity: f64, die_area: f64) -> PhysicsResult<f64> {
    require_positive(thickness, "TIM thickness")?;
    require_positive(conductivity, "TIM thermal conductivity")?;
    require_positive(die_area, "die area")?;

    Ok(thickness / (conductivity * die_area))
}
