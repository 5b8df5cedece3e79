//! Analysis service: validate, compile to typed entities, solve, shape.

use serde_json::Value;
use tracing::debug;

use crate::config::Defaults;
use crate::error::ApiResult;
use crate::schema::{HealthResponse, Resistances, SolveRequest, SolveResponse};
use crate::validate;
use ts_core::units::{celsius, m, m2ps, mps, unitless, w, wpmk};
use ts_physics::{AirProperties, Die, HeatSinkGeometry, ThermalAnalysis, TimLayer};

pub const SERVICE_NAME: &str = "thermsink";

/// Full request path: raw payload in, response document out.
pub fn run_analysis(payload: &Value, defaults: &Defaults) -> ApiResult<SolveResponse> {
    let request = validate::parse_request(payload)?;
    solve(&request, defaults)
}

/// Run an already-validated request.
pub fn solve(request: &SolveRequest, defaults: &Defaults) -> ApiResult<SolveResponse> {
    debug!(
        power_w = request.processor.power,
        fins = request.heat_sink.number_of_fins,
        velocity_mps = request.air.velocity,
        "running thermal analysis"
    );

    let result = compile(request, defaults).solve()?;

    Ok(SolveResponse {
        resistances: Resistances {
            tim: result.resistances.tim_c_per_w,
            conduction: result.resistances.conduction_c_per_w,
            convection: result.resistances.convection_c_per_w,
            heat_sink: result.resistances.heat_sink_c_per_w,
            total: result.resistances.total_c_per_w,
        },
        junction_temperature: result.junction_temperature_c,
    })
}

/// Static liveness document.
pub fn health() -> HealthResponse {
    HealthResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
    }
}

fn compile(request: &SolveRequest, defaults: &Defaults) -> ThermalAnalysis {
    let sink_conductivity = request
        .heat_sink
        .thermal_conductivity
        .unwrap_or(defaults.sink_conductivity);

    ThermalAnalysis {
        die: Die {
            length: m(request.processor.die_length),
            width: m(request.processor.die_width),
        },
        heat_sink: HeatSinkGeometry {
            length: m(request.heat_sink.sink_length),
            width: m(request.heat_sink.sink_width),
            base_thickness: m(request.heat_sink.base_thickness),
            fin_thickness: m(request.heat_sink.fin_thickness),
            fin_height: m(request.heat_sink.fin_height),
            fin_count: request.heat_sink.number_of_fins,
        },
        sink_conductivity: wpmk(sink_conductivity),
        tim: TimLayer {
            thickness: m(request.tim.thickness),
            conductivity: wpmk(request.tim.thermal_conductivity),
        },
        air: AirProperties {
            velocity: mps(request.air.velocity),
            conductivity: wpmk(request.air.thermal_conductivity),
            kinematic_viscosity: m2ps(request.air.kinematic_viscosity),
            prandtl: unitless(request.air.prandtl_number),
        },
        power: w(request.processor.power),
        ambient: celsius(request.ambient.temperature),
        junction_to_case_c_per_w: request.junction_to_case_resistance,
    }
}
