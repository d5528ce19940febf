//! Unit tests for API types serialization/deserialization.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use praxis::api::{AddressJson, DoctorJson, HealthResponse, QueryRequest, QueryResponse};
use praxis_core::{Doctor, Operation, Speciality, derive_address};

// =============================================================================
// HEALTH RESPONSE TESTS
// =============================================================================

#[test]
fn test_health_response_default() {
    let health = HealthResponse::default();
    assert_eq!(health.status, "ok");
    assert!(!health.version.is_empty());
}

#[test]
fn test_health_response_serialization() {
    let health = HealthResponse {
        status: "ok".to_string(),
        version: "0.4.1".to_string(),
    };

    let json = serde_json::to_string(&health).unwrap();
    assert!(json.contains("\"status\":\"ok\""));
    assert!(json.contains("\"version\":\"0.4.1\""));
}

// =============================================================================
// QUERY REQUEST TESTS
// =============================================================================

#[test]
fn test_request_doctors_full() {
    let json = r#"{
        "type": "doctors",
        "specialities": ["PSYCHOLOGIST", "OPHTHALMOLOGIST"],
        "include_address": true
    }"#;
    let request: QueryRequest = serde_json::from_str(json).unwrap();

    match request {
        QueryRequest::Doctors {
            specialities,
            include_address,
        } => {
            assert_eq!(
                specialities,
                Some(vec![
                    Speciality::Psychologist,
                    Speciality::Ophthalmologist
                ])
            );
            assert!(include_address);
        }
        other => panic!("wrong variant: {other:?}"),
    }
}

#[test]
fn test_request_doctors_absent_specialities() {
    // Missing key deserializes to None - the absent filter.
    let request: QueryRequest = serde_json::from_str(r#"{"type": "doctors"}"#).unwrap();

    match request {
        QueryRequest::Doctors {
            specialities,
            include_address,
        } => {
            assert_eq!(specialities, None);
            assert!(!include_address, "include_address defaults to false");
        }
        other => panic!("wrong variant: {other:?}"),
    }
}

#[test]
fn test_request_doctors_empty_specialities() {
    // Present-but-empty is NOT the same as absent.
    let request: QueryRequest =
        serde_json::from_str(r#"{"type": "doctors", "specialities": []}"#).unwrap();

    match request {
        QueryRequest::Doctors { specialities, .. } => assert_eq!(specialities, Some(vec![])),
        other => panic!("wrong variant: {other:?}"),
    }
}

#[test]
fn test_request_doctor() {
    let request: QueryRequest =
        serde_json::from_str(r#"{"type": "doctor", "id": "1"}"#).unwrap();

    match request {
        QueryRequest::Doctor {
            id,
            include_address,
        } => {
            assert_eq!(id, "1");
            assert!(!include_address);
        }
        other => panic!("wrong variant: {other:?}"),
    }
}

#[test]
fn test_request_calc_known_tokens() {
    let request: QueryRequest = serde_json::from_str(
        r#"{"type": "calc", "a": 10.0, "b": 5.0, "operations": ["ADD", "DIVIDE"]}"#,
    )
    .unwrap();

    match request {
        QueryRequest::Calc { a, b, operations } => {
            assert_eq!(a, 10.0);
            assert_eq!(b, 5.0);
            assert_eq!(operations, vec![Operation::Add, Operation::Divide]);
        }
        other => panic!("wrong variant: {other:?}"),
    }
}

#[test]
fn test_request_calc_unknown_token_maps_to_unrecognized() {
    // Tokens outside the closed set do not fail validation; they
    // deserialize to the no-op variant.
    let request: QueryRequest = serde_json::from_str(
        r#"{"type": "calc", "a": 1.0, "b": 2.0, "operations": ["ADD", "MODULO"]}"#,
    )
    .unwrap();

    match request {
        QueryRequest::Calc { operations, .. } => {
            assert_eq!(operations, vec![Operation::Add, Operation::Unrecognized]);
        }
        other => panic!("wrong variant: {other:?}"),
    }
}

#[test]
fn test_request_closest_color() {
    let request: QueryRequest =
        serde_json::from_str(r##"{"type": "closest_color", "hex": "#FF5733"}"##).unwrap();

    match request {
        QueryRequest::ClosestColor { hex } => assert_eq!(hex, "#FF5733"),
        other => panic!("wrong variant: {other:?}"),
    }
}

#[test]
fn test_request_unknown_type_is_rejected() {
    let result: Result<QueryRequest, _> =
        serde_json::from_str(r#"{"type": "mutate", "id": "1"}"#);
    assert!(result.is_err());
}

// =============================================================================
// QUERY RESPONSE TESTS
// =============================================================================

#[test]
fn test_response_absent_doctors_omits_field() {
    let response = QueryResponse::doctors(None);
    assert!(response.success);
    assert!(!response.found);

    let json = serde_json::to_string(&response).unwrap();
    assert!(
        !json.contains("doctors"),
        "absent result must omit the field: {json}"
    );
}

#[test]
fn test_response_empty_doctors_keeps_field() {
    let response = QueryResponse::doctors(Some(vec![]));
    assert!(response.found);

    let json = serde_json::to_string(&response).unwrap();
    assert!(
        json.contains("\"doctors\":[]"),
        "empty result must serialize an empty array: {json}"
    );
}

#[test]
fn test_response_number() {
    let response = QueryResponse::number(75.0);
    assert!(response.success);
    assert!(response.found);
    assert_eq!(response.value, Some(75.0));

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"value\":75.0"));
}

#[test]
fn test_response_color_absent() {
    let response = QueryResponse::color(None);
    assert!(response.success);
    assert!(!response.found);

    let json = serde_json::to_string(&response).unwrap();
    assert!(!json.contains("color"));
}

#[test]
fn test_response_error() {
    let response = QueryResponse::error("bad payload");
    assert!(!response.success);
    assert!(!response.found);
    assert_eq!(response.error.as_deref(), Some("bad payload"));
}

// =============================================================================
// DOCTOR JSON TESTS
// =============================================================================

#[test]
fn test_doctor_json_without_address() {
    let doctor = Doctor::new("1", "Samia Mekame", Speciality::Ophthalmologist);
    let json = serde_json::to_string(&DoctorJson::from_parts(&doctor, None)).unwrap();

    assert!(json.contains("\"id\":\"1\""));
    assert!(json.contains("\"speciality\":\"OPHTHALMOLOGIST\""));
    assert!(!json.contains("address"));
}

#[test]
fn test_doctor_json_with_derived_address() {
    let doctor = Doctor::new("2", "Catherine Bedoy", Speciality::Psychologist);
    let wire = DoctorJson::from_parts(&doctor, Some(derive_address(&doctor)));

    assert_eq!(
        wire.address,
        Some(AddressJson {
            street_name: "2 street".to_string()
        })
    );

    let json = serde_json::to_string(&wire).unwrap();
    assert!(json.contains("\"street_name\":\"2 street\""));
}

#[test]
fn test_doctor_json_roundtrip() {
    let doctor = Doctor::new("3", "Ana Reyes", Speciality::Psychologist);
    let wire = DoctorJson::from_parts(&doctor, Some(derive_address(&doctor)));

    let json = serde_json::to_string(&wire).unwrap();
    let parsed: DoctorJson = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, wire);
}
