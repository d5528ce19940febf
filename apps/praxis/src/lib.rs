//! # praxis (library surface)
//!
//! Exposes the application modules for integration tests. The binary
//! entry point lives in `main.rs`.

pub mod api;
pub mod cli;
pub mod config;
