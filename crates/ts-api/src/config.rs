//! Service configuration.

use ts_physics::materials;

/// Explicit default values handed into the service per call.
///
/// These replace hidden module-level globals: the formulas never read
/// defaults themselves, the boundary decides and passes them down.
#[derive(Debug, Clone, Copy)]
pub struct Defaults {
    /// Sink material conductivity used when the payload omits
    /// `heat_sink.thermal_conductivity` (W/m·K).
    pub sink_conductivity: f64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            sink_conductivity: materials::ALUMINUM_6061_CONDUCTIVITY,
        }
    }
}
