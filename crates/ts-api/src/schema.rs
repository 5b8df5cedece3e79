//! Wire schema for the solve endpoint.
//!
//! Field names here are the wire contract; they match the request payload
//! and response document keys exactly.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolveRequest {
    pub processor: ProcessorSpec,
    pub heat_sink: HeatSinkSpec,
    pub tim: TimSpec,
    pub air: AirSpec,
    pub ambient: AmbientSpec,
    pub junction_to_case_resistance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessorSpec {
    /// Die length (m)
    pub die_length: f64,
    /// Die width (m)
    pub die_width: f64,
    /// Dissipated power (W)
    pub power: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeatSinkSpec {
    pub sink_length: f64,
    pub sink_width: f64,
    pub base_thickness: f64,
    pub number_of_fins: u32,
    pub fin_thickness: f64,
    pub fin_height: f64,
    /// Sink material conductivity (W/m·K); falls back to the configured
    /// default (aluminum) when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thermal_conductivity: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimSpec {
    pub thermal_conductivity: f64,
    pub thickness: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AirSpec {
    pub velocity: f64,
    pub thermal_conductivity: f64,
    pub kinematic_viscosity: f64,
    pub prandtl_number: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AmbientSpec {
    /// Ambient temperature (°C); may be zero or negative.
    pub temperature: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolveResponse {
    pub resistances: Resistances,
    /// Junction temperature (°C)
    pub junction_temperature: f64,
}

/// The five resistances of the network (°C/W each).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resistances {
    pub tim: f64,
    pub conduction: f64,
    pub convection: f64,
    pub heat_sink: f64,
    pub total: f64,
}

/// Static liveness document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}
