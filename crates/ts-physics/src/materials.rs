//! Reference material and air-property data.
//!
//! These are plain reference constants consumed by callers (defaults at the
//! API boundary, tests). The formulas themselves never read them: every
//! conductivity and property is an explicit argument.

/// Al 6061-T6, the usual extruded-heat-sink alloy (W/m·K).
pub const ALUMINUM_6061_CONDUCTIVITY: f64 = 167.0;

/// Typical thermal grease (W/m·K).
pub const TYPICAL_TIM_CONDUCTIVITY: f64 = 4.0;

/// Typical TIM bond-line thickness (m).
pub const TYPICAL_TIM_THICKNESS: f64 = 0.0001;

/// Air at 25 °C: thermal conductivity (W/m·K).
pub const AIR_CONDUCTIVITY_25C: f64 = 0.0262;

/// Air at 25 °C: kinematic viscosity (m²/s).
pub const AIR_KINEMATIC_VISCOSITY_25C: f64 = 1.57e-5;

/// Air at 25 °C: Prandtl number.
pub const AIR_PRANDTL_25C: f64 = 0.71;

/// Default ambient temperature (°C).
pub const DEFAULT_AMBIENT_TEMPERATURE: f64 = 25.0;

/// Default junction-to-case resistance when the datasheet value is unknown (°C/W).
pub const DEFAULT_JUNCTION_TO_CASE: f64 = 0.1;

/// Default extruded fin thickness (m).
pub const DEFAULT_FIN_THICKNESS: f64 = 0.0008;

/// Default base-plate thickness (m).
pub const DEFAULT_BASE_THICKNESS: f64 = 0.0025;
