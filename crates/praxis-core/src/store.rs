//! # Directory Store
//!
//! The store exclusively owns the fixed doctor collection and the
//! ordered reference color palette. Both are created once at
//! construction and never mutated; resolvers receive read-only views.
//!
//! Palette order is significant: the nearest-color matcher breaks
//! distance ties by first occurrence.

use crate::types::{Doctor, Speciality};

/// Immutable in-memory store for the directory datasets.
///
/// Constructed explicitly and passed by reference into resolvers, so
/// tests can substitute alternative datasets.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    doctors: Vec<Doctor>,
    palette: Vec<String>,
}

impl DirectoryStore {
    /// Create a store from explicit datasets.
    ///
    /// Invariants assumed, not checked: doctor ids are unique, the
    /// palette is non-empty and every entry is a well-formed
    /// `#RRGGBB` string.
    #[must_use]
    pub fn new(doctors: Vec<Doctor>, palette: Vec<String>) -> Self {
        Self { doctors, palette }
    }

    /// Create the store with the production datasets compiled into
    /// the binary.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(
            vec![
                Doctor::new("1", "Samia Mekame", Speciality::Ophthalmologist),
                Doctor::new("2", "Catherine Bedoy", Speciality::Psychologist),
            ],
            vec![
                "#FF5733".to_string(),
                "#33FF57".to_string(),
                "#3357FF".to_string(),
            ],
        )
    }

    /// All doctors, in store order.
    #[must_use]
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// The reference color palette, in tie-breaking order.
    #[must_use]
    pub fn palette(&self) -> &[String] {
        &self.palette
    }
}

// =============================================================================
// TESTS
// =============================================================================
