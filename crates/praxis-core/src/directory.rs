//! # Directory Resolvers
//!
//! Filter and lookup over the doctor collection. Both are pure reads
//! against a borrowed store; absence is a value, never an error.

use crate::store::DirectoryStore;
use crate::types::{Doctor, Speciality};

/// Filter doctors by speciality membership.
///
/// Returns `None` when no speciality set is supplied at all — an
/// absent result, observably distinct from `Some` of an empty
/// sequence. With a set present, returns the doctors whose speciality
/// is a member, in store order (not input order). Duplicate entries
/// in the input set are harmless.
#[must_use]
pub fn filter_by_speciality<'a>(
    store: &'a DirectoryStore,
    specialities: Option<&[Speciality]>,
) -> Option<Vec<&'a Doctor>> {
    let specialities = specialities?;
    Some(
        store
            .doctors()
            .iter()
            .filter(|d| specialities.contains(&d.speciality))
            .collect(),
    )
}

/// Look up the single doctor with the given identifier.
///
/// At most one match exists by the store's uniqueness invariant.
#[must_use]
pub fn find_by_id<'a>(store: &'a DirectoryStore, id: &str) -> Option<&'a Doctor> {
    store.doctors().iter().find(|d| d.id.as_str() == id)
}

// =============================================================================
// TESTS
// =============================================================================
