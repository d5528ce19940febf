//! # praxis-core
//!
//! The pure resolver layer for Praxis - THE LOGIC.
//!
//! This crate implements the CORE of the query-serving layer: the set
//! of pure functions that, given an already-validated request, compute
//! a result against the in-memory datasets.
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Owns the only data in the system (the immutable directory store)
//! - Is pure: no I/O, no async, no network dependencies, no hidden state
//! - Never fails: absence is an `Option`, numeric degradation follows
//!   IEEE-754
//! - Leaves argument coercion and validation to the routing surface in
//!   `apps/praxis`

// =============================================================================
// MODULES
// =============================================================================

pub mod address;
pub mod arithmetic;
pub mod directory;
pub mod palette;
pub mod store;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{Address, Doctor, DoctorId, Operation, PraxisError, Speciality};

// =============================================================================
// RE-EXPORTS: Store & Resolvers
// =============================================================================

pub use address::derive_address;
pub use arithmetic::evaluate;
pub use directory::{filter_by_speciality, find_by_id};
pub use palette::nearest_color;
pub use store::DirectoryStore;
