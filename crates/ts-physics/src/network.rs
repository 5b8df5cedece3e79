//! Series composition of the thermal-resistance network.

use crate::common::{require_non_negative, require_positive};
use crate::error::PhysicsResult;

/// Heat-sink resistance: base conduction in series with fin convection.
///
/// R_hs = R_cond + R_conv
pub fn heat_sink_resistance(
    conduction_resistance: f64,
    convection_resistance: f64,
) -> PhysicsResult<f64> {
    require_positive(conduction_resistance, "conduction resistance")?;
    require_positive(convection_resistance, "convection resistance")?;

    Ok(conduction_resistance + convection_resistance)
}

/// Total junction-to-ambient resistance.
///
/// R_total = R_jc + R_tim + R_hs
///
/// R_jc is a datasheet constant and may legitimately be zero (a perfectly
/// bonded package); the computed resistances may not.
pub fn total_resistance(
    junction_to_case: f64,
    tim_resistance: f64,
    heat_sink_resistance: f64,
) -> PhysicsResult<f64> {
    require_non_negative(junction_to_case, "junction-to-case resistance")?;
    require_positive(tim_resistance, "TIM resistance")?;
    require_positive(heat_sink_resistance, "heat sink resistance")?;

    Ok(junction_to_case + tim_resistance + heat_sink_resistance)
}
