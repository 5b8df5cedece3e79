//! Field-by-field payload validation.
//!
//! Walks the raw `serde_json::Value` rather than relying on derive errors so
//! that a missing field and an invalid field stay distinct categories, and so
//! every error names the full dotted path of the offending field.
//!
//! Sign contract at the boundary: every quantity must be > 0, except
//! `ambient.temperature` (any finite value) and `junction_to_case_resistance`
//! (zero allowed). The formulas re-check their own preconditions afterwards.

use serde_json::{Map, Value};

use crate::error::{ApiError, ApiResult};
use crate::schema::{
    AirSpec, AmbientSpec, HeatSinkSpec, ProcessorSpec, SolveRequest, TimSpec,
};

/// Validate a raw payload and build the typed request.
pub fn parse_request(payload: &Value) -> ApiResult<SolveRequest> {
    let root = payload.as_object().ok_or(ApiError::InvalidPayload)?;

    let processor = section(root, "processor")?;
    let heat_sink = section(root, "heat_sink")?;
    let tim = section(root, "tim")?;
    let air = section(root, "air")?;
    let ambient = section(root, "ambient")?;

    Ok(SolveRequest {
        processor: ProcessorSpec {
            die_length: positive(processor, "processor", "die_length")?,
            die_width: positive(processor, "processor", "die_width")?,
            power: positive(processor, "processor", "power")?,
        },
        heat_sink: HeatSinkSpec {
            sink_length: positive(heat_sink, "heat_sink", "sink_length")?,
            sink_width: positive(heat_sink, "heat_sink", "sink_width")?,
            base_thickness: positive(heat_sink, "heat_sink", "base_thickness")?,
            number_of_fins: fin_count(heat_sink, "heat_sink", "number_of_fins")?,
            fin_thickness: positive(heat_sink, "heat_sink", "fin_thickness")?,
            fin_height: positive(heat_sink, "heat_sink", "fin_height")?,
            thermal_conductivity: optional_positive(
                heat_sink,
                "heat_sink",
                "thermal_conductivity",
            )?,
        },
        tim: TimSpec {
            thermal_conductivity: positive(tim, "tim", "thermal_conductivity")?,
            thickness: positive(tim, "tim", "thickness")?,
        },
        air: AirSpec {
            velocity: positive(air, "air", "velocity")?,
            thermal_conductivity: positive(air, "air", "thermal_conductivity")?,
            kinematic_viscosity: positive(air, "air", "kinematic_viscosity")?,
            prandtl_number: positive(air, "air", "prandtl_number")?,
        },
        ambient: AmbientSpec {
            temperature: any_number(ambient, "ambient", "temperature")?,
        },
        junction_to_case_resistance: non_negative(root, "", "junction_to_case_resistance")?,
    })
}

fn join(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

fn require<'a>(obj: &'a Map<String, Value>, name: &str, path: &str) -> ApiResult<&'a Value> {
    obj.get(name).ok_or_else(|| ApiError::MissingField {
        path: path.to_string(),
    })
}

fn section<'a>(root: &'a Map<String, Value>, name: &str) -> ApiResult<&'a Map<String, Value>> {
    require(root, name, name)?
        .as_object()
        .ok_or_else(|| ApiError::InvalidField {
            path: name.to_string(),
            reason: "must be an object",
        })
}

fn number(obj: &Map<String, Value>, parent: &str, name: &str) -> ApiResult<f64> {
    let path = join(parent, name);
    let value = require(obj, name, &path)?;
    value.as_f64().ok_or(ApiError::InvalidField {
        path,
        reason: "must be a number",
    })
}

fn any_number(obj: &Map<String, Value>, parent: &str, name: &str) -> ApiResult<f64> {
    number(obj, parent, name)
}

fn positive(obj: &Map<String, Value>, parent: &str, name: &str) -> ApiResult<f64> {
    let v = number(obj, parent, name)?;
    if v <= 0.0 {
        return Err(ApiError::InvalidField {
            path: join(parent, name),
            reason: "must be > 0",
        });
    }
    Ok(v)
}

fn non_negative(obj: &Map<String, Value>, parent: &str, name: &str) -> ApiResult<f64> {
    let v = number(obj, parent, name)?;
    if v < 0.0 {
        return Err(ApiError::InvalidField {
            path: join(parent, name),
            reason: "must be >= 0",
        });
    }
    Ok(v)
}

fn optional_positive(
    obj: &Map<String, Value>,
    parent: &str,
    name: &str,
) -> ApiResult<Option<f64>> {
    if !obj.contains_key(name) {
        return Ok(None);
    }
    positive(obj, parent, name).map(Some)
}

fn fin_count(obj: &Map<String, Value>, parent: &str, name: &str) -> ApiResult<u32> {
    let path = join(parent, name);
    let value = require(obj, name, &path)?;
    if !value.is_number() {
        return Err(ApiError::InvalidField {
            path,
            reason: "must be a number",
        });
    }
    match value.as_u64() {
        Some(n) if (2..=u64::from(u32::MAX)).contains(&n) => Ok(n as u32),
        _ => Err(ApiError::InvalidField {
            path,
            reason: "must be an integer greater than 1",
        }),
    }
}
