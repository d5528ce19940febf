//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.
//!
//! Coercion and validation happen here, at the boundary: by the time
//! a request reaches a core resolver it is fully typed. Tokens the
//! schema does not know (operator tokens outside the closed set)
//! deserialize to the `Unrecognized` no-op rather than failing, which
//! keeps the wire contract of the original service.

use praxis_core::{Address, Doctor, Operation, Speciality};
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// QUERY REQUEST
// =============================================================================

/// Query request (tagged union).
///
/// Exactly one core resolver is invoked per request. The optional
/// `include_address` flag models the response shape asking for the
/// derived address field; when set, the derived-field resolver runs
/// once per resolved doctor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QueryRequest {
    /// Filter the directory by speciality membership.
    Doctors {
        #[serde(default)]
        specialities: Option<Vec<Speciality>>,
        #[serde(default)]
        include_address: bool,
    },
    /// Look up a single doctor by identifier.
    Doctor {
        id: String,
        #[serde(default)]
        include_address: bool,
    },
    /// Fold a sequence of operator tokens over two operands.
    Calc {
        a: f64,
        b: f64,
        operations: Vec<Operation>,
    },
    /// Match a color against the reference palette.
    ClosestColor { hex: String },
}

// =============================================================================
// DOCTOR / ADDRESS JSON
// =============================================================================

/// Address JSON representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressJson {
    pub street_name: String,
}

impl From<Address> for AddressJson {
    fn from(address: Address) -> Self {
        Self {
            street_name: address.street_name,
        }
    }
}

/// Doctor JSON representation.
///
/// The `address` field appears only when the request asked for the
/// derived field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorJson {
    pub id: String,
    pub name: String,
    pub speciality: Speciality,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub address: Option<AddressJson>,
}

impl DoctorJson {
    /// Build the wire record from a resolved doctor and an optional
    /// derived address.
    #[must_use]
    pub fn from_parts(doctor: &Doctor, address: Option<Address>) -> Self {
        Self {
            id: doctor.id.as_str().to_string(),
            name: doctor.name.clone(),
            speciality: doctor.speciality,
            address: address.map(AddressJson::from),
        }
    }
}

// =============================================================================
// QUERY RESPONSE
// =============================================================================

/// Query response.
///
/// One struct covers all four operations; fields irrelevant to the
/// answered operation are omitted from the JSON. The `doctors` field
/// is omitted entirely for an absent filter result — observably
/// different from `"doctors": []`.
///
/// Non-finite `value` results (division by a zero operand) serialize
/// as JSON `null`, matching IEEE-754 degradation on a wire format
/// with no infinity literal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub success: bool,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub doctors: Option<Vec<DoctorJson>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub doctor: Option<DoctorJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub color: Option<String>,
    pub error: Option<String>,
}

impl QueryResponse {
    fn empty() -> Self {
        Self {
            success: true,
            found: false,
            doctors: None,
            doctor: None,
            value: None,
            color: None,
            error: None,
        }
    }

    /// Filter result. `None` means the speciality set was absent.
    #[must_use]
    pub fn doctors(result: Option<Vec<DoctorJson>>) -> Self {
        Self {
            found: result.is_some(),
            doctors: result,
            ..Self::empty()
        }
    }

    /// Lookup result.
    #[must_use]
    pub fn doctor(result: Option<DoctorJson>) -> Self {
        Self {
            found: result.is_some(),
            doctor: result,
            ..Self::empty()
        }
    }

    /// Arithmetic result.
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self {
            found: true,
            value: Some(value),
            ..Self::empty()
        }
    }

    /// Nearest-color result. `None` means no entry matched (NaN
    /// propagation from undecodable input).
    #[must_use]
    pub fn color(result: Option<String>) -> Self {
        Self {
            found: result.is_some(),
            color: result,
            ..Self::empty()
        }
    }

    /// Boundary rejection — the request never reached a resolver.
    #[must_use]
    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            ..Self::empty()
        }
    }
}
