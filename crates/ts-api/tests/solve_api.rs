//! Integration tests for the solve boundary: payload in, document out,
//! transport-contract error categories.

use serde_json::{json, Value};
use ts_api::{run_analysis, ApiError, Defaults};

fn reference_payload() -> Value {
    json!({
        "processor": {"die_length": 0.0525, "die_width": 0.045, "power": 150.0},
        "heat_sink": {
            "sink_length": 0.09, "sink_width": 0.116, "base_thickness": 0.0025,
            "number_of_fins": 60, "fin_thickness": 0.0008, "fin_height": 0.0245
        },
        "tim": {"thermal_conductivity": 4.0, "thickness": 0.0001},
        "air": {
            "velocity": 1.0, "thermal_conductivity": 0.0262,
            "kinematic_viscosity": 1.57e-5, "prandtl_number": 0.71
        },
        "ambient": {"temperature": 25.0},
        "junction_to_case_resistance": 0.1
    })
}

#[test]
fn reference_payload_solves_into_expected_bands() {
    let response = run_analysis(&reference_payload(), &Defaults::default()).unwrap();

    let r = &response.resistances;
    for value in [r.tim, r.conduction, r.convection, r.heat_sink, r.total] {
        assert!(value > 0.0);
    }
    assert!(r.heat_sink > 0.10 && r.heat_sink < 0.15);
    assert!(response.junction_temperature > 55.0 && response.junction_temperature < 65.0);

    // Additive invariants survive the boundary
    assert_eq!(r.heat_sink, r.conduction + r.convection);
    assert_eq!(r.total, 0.1 + r.tim + r.heat_sink);
}

#[test]
fn response_document_has_the_wire_keys() {
    let response = run_analysis(&reference_payload(), &Defaults::default()).unwrap();
    let doc = serde_json::to_value(&response).unwrap();

    for key in ["tim", "conduction", "convection", "heat_sink", "total"] {
        assert!(doc["resistances"][key].is_f64(), "missing resistances.{key}");
    }
    assert!(doc["junction_temperature"].is_f64());
}

#[test]
fn missing_field_maps_to_400_with_its_path() {
    let mut payload = reference_payload();
    payload["heat_sink"].as_object_mut().unwrap().remove("fin_height");

    let err = run_analysis(&payload, &Defaults::default()).unwrap_err();
    assert_eq!(err.status(), 400);
    assert!(matches!(err, ApiError::MissingField { ref path } if path == "heat_sink.fin_height"));
}

#[test]
fn invalid_field_maps_to_400() {
    let mut payload = reference_payload();
    payload["processor"]["power"] = json!(-150.0);

    let err = run_analysis(&payload, &Defaults::default()).unwrap_err();
    assert_eq!(err.status(), 400);
    assert!(err.client_message().contains("processor.power"));
}

#[test]
fn infeasible_geometry_passes_sign_checks_but_fails_the_model() {
    // Every number is positive, so the boundary lets it through; the core's
    // own precondition layer catches the contradiction.
    let mut payload = reference_payload();
    payload["heat_sink"]["sink_width"] = json!(0.05);
    payload["heat_sink"]["number_of_fins"] = json!(100);
    payload["heat_sink"]["fin_thickness"] = json!(0.001);

    let err = run_analysis(&payload, &Defaults::default()).unwrap_err();
    assert_eq!(err.status(), 400);
    assert!(err.client_message().contains("fins occupy the entire sink width"));
}

#[test]
fn default_sink_conductivity_matches_explicit_aluminum() {
    let implicit = run_analysis(&reference_payload(), &Defaults::default()).unwrap();

    let mut payload = reference_payload();
    payload["heat_sink"]["thermal_conductivity"] = json!(167.0);
    let explicit = run_analysis(&payload, &Defaults::default()).unwrap();

    assert_eq!(implicit, explicit);
}

#[test]
fn copper_sink_beats_aluminum() {
    let aluminum = run_analysis(&reference_payload(), &Defaults::default()).unwrap();

    let mut payload = reference_payload();
    payload["heat_sink"]["thermal_conductivity"] = json!(385.0);
    let copper = run_analysis(&payload, &Defaults::default()).unwrap();

    assert!(copper.junction_temperature < aluminum.junction_temperature);
}

#[test]
fn sub_zero_ambient_shifts_the_junction_down() {
    let warm = run_analysis(&reference_payload(), &Defaults::default()).unwrap();

    let mut payload = reference_payload();
    payload["ambient"]["temperature"] = json!(-15.0);
    let cold = run_analysis(&payload, &Defaults::default()).unwrap();

    let shift = warm.junction_temperature - cold.junction_temperature;
    assert!((shift - 40.0).abs() < 1e-9);
}

#[test]
fn identical_payloads_give_identical_documents() {
    let defaults = Defaults::default();
    let a = run_analysis(&reference_payload(), &defaults).unwrap();
    let b = run_analysis(&reference_payload(), &defaults).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        a.junction_temperature.to_bits(),
        b.junction_temperature.to_bits()
    );
}
