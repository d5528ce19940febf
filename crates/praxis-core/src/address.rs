//! # Derived-Field Resolver
//!
//! Computes the synthetic address attribute for an already-resolved
//! doctor. The address is never stored; it is derived
//! deterministically from the identifier on every call.

use crate::types::{Address, Doctor};

/// Derive the synthetic address for a doctor.
#[must_use]
pub fn derive_address(doctor: &Doctor) -> Address {
    Address {
        street_name: format!("{} street", doctor.id.as_str()),
    }
}

// =============================================================================
// TESTS
// =============================================================================
