//! # Core Type Definitions
//!
//! This module contains all core types for the Praxis resolver layer:
//! - Entity records (`Doctor`, `DoctorId`, `Speciality`)
//! - The derived address record (`Address`)
//! - Arithmetic operator tokens (`Operation`)
//! - Error types (`PraxisError`)
//!
//! ## Immutability Guarantees
//!
//! All entity types in this module:
//! - Are created once at store construction and never mutated
//! - Carry no interior mutability and no hidden state
//! - Serialize to the exact wire shapes the routing surface expects

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// ENTITY IDENTIFIERS
// =============================================================================

/// Unique identifier for a doctor within the directory store.
///
/// Uniqueness is an invariant maintained by store construction;
/// resolvers never re-validate it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DoctorId(pub String);

impl DoctorId {
    /// Create a new doctor identifier.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// SPECIALITY
// =============================================================================

/// Closed enumeration of doctor specialities.
///
/// The wire encoding is SCREAMING_SNAKE_CASE. Extending this set
/// requires redeploying the schema and the store together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Speciality {
    Psychologist,
    Ophthalmologist,
}

impl Speciality {
    /// The wire spelling of this speciality.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Psychologist => "PSYCHOLOGIST",
            Self::Ophthalmologist => "OPHTHALMOLOGIST",
        }
    }
}

// =============================================================================
// DOCTOR
// =============================================================================

/// An immutable doctor record.
///
/// The associated address is NOT stored; it is computed on demand by
/// [`crate::address::derive_address`] from the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    /// Unique identifier within the store.
    pub id: DoctorId,
    /// Display name.
    pub name: String,
    /// Speciality, drawn from the closed enumeration.
    pub speciality: Speciality,
}

impl Doctor {
    /// Create a new doctor record.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, speciality: Speciality) -> Self {
        Self {
            id: DoctorId::new(id),
            name: name.into(),
            speciality,
        }
    }
}

// =============================================================================
// ADDRESS
// =============================================================================

/// The synthetic address record produced by the derived-field resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street name derived from the doctor identifier.
    pub street_name: String,
}

// =============================================================================
// OPERATION TOKENS
// =============================================================================

/// Arithmetic operator tokens accepted by the arithmetic folder.
///
/// Any token outside the closed set deserializes to `Unrecognized`,
/// which the folder treats as a no-op step. This preserves the wire
/// contract: unknown tokens degrade silently instead of failing
/// validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Catch-all for tokens outside the closed set.
    #[serde(other)]
    Unrecognized,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the Praxis system.
///
/// The resolver layer itself never fails: absence is a value
/// (`Option`), malformed numeric input degrades per IEEE-754. These
/// variants cover the application shell — transport bootstrap,
/// configuration, and boundary validation.
#[derive(Debug, Error)]
pub enum PraxisError {
    /// An I/O error occurred (socket bind, server loop).
    #[error("I/O error: {0}")]
    Io(String),

    /// A configuration file could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// A request failed boundary validation before reaching a resolver.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// =============================================================================
// TESTS
// =============================================================================
