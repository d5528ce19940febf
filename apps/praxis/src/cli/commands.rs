//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::api;
use crate::config::ServerConfig;
use praxis_core::{
    DirectoryStore, Operation, PraxisError, Speciality, derive_address, evaluate,
    filter_by_speciality, find_by_id, nearest_color,
};
use std::path::Path;

// =============================================================================
// TOKEN PARSING
// =============================================================================

/// Parse a comma-separated speciality filter.
///
/// Specialities are schema-validated at the boundary: a token outside
/// the closed enumeration rejects the whole request.
fn parse_specialities(input: &str) -> Result<Vec<Speciality>, PraxisError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|token| match token {
            "PSYCHOLOGIST" => Ok(Speciality::Psychologist),
            "OPHTHALMOLOGIST" => Ok(Speciality::Ophthalmologist),
            other => Err(PraxisError::InvalidRequest(format!(
                "unknown speciality '{}'",
                other
            ))),
        })
        .collect()
}

/// Parse a comma-separated operator token list.
///
/// Unknown tokens map to the `Unrecognized` no-op, matching the wire
/// behavior of the arithmetic folder.
fn parse_operations(input: &str) -> Vec<Operation> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|token| match token {
            "ADD" => Operation::Add,
            "SUBTRACT" => Operation::Subtract,
            "MULTIPLY" => Operation::Multiply,
            "DIVIDE" => Operation::Divide,
            _ => Operation::Unrecognized,
        })
        .collect()
}

// =============================================================================
// SERVE COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_serve(
    store: DirectoryStore,
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<&Path>,
) -> Result<(), PraxisError> {
    let config = match config_path {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    }
    .with_overrides(host, port);

    println!("Praxis Directory Query Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:    {}", config.host);
    println!("  Port:    {}", config.port);
    println!("  Doctors: {}", store.doctors().len());
    println!("  Palette: {} entries", store.palette().len());
    println!();
    println!("Endpoints:");
    println!("  POST /query  - Execute a query");
    println!("  GET  /health - Health check");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    api::run_server(&config.addr(), store).await
}

// =============================================================================
// DOCTORS COMMAND
// =============================================================================

/// List doctors filtered by speciality.
pub fn cmd_doctors(
    store: &DirectoryStore,
    json_mode: bool,
    specialities: Option<&str>,
    addresses: bool,
) -> Result<(), PraxisError> {
    let filter = specialities.map(parse_specialities).transpose()?;
    let result = filter_by_speciality(store, filter.as_deref());

    if json_mode {
        let doctors = result.as_ref().map(|doctors| {
            doctors
                .iter()
                .map(|d| doctor_value(d, addresses))
                .collect::<Vec<_>>()
        });
        let output = serde_json::json!({
            "found": doctors.is_some(),
            "doctors": doctors,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Praxis Directory");
    println!("================");
    println!();
    match result {
        None => println!("No speciality filter supplied - no result."),
        Some(doctors) if doctors.is_empty() => println!("No doctors match the filter."),
        Some(doctors) => {
            for doctor in doctors {
                print_doctor_line(doctor, addresses);
            }
        }
    }

    Ok(())
}

// =============================================================================
// DOCTOR COMMAND
// =============================================================================

/// Look up a single doctor by id.
pub fn cmd_doctor(
    store: &DirectoryStore,
    json_mode: bool,
    id: &str,
    address: bool,
) -> Result<(), PraxisError> {
    let result = find_by_id(store, id);

    if json_mode {
        let output = serde_json::json!({
            "found": result.is_some(),
            "doctor": result.map(|d| doctor_value(d, address)),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    match result {
        Some(doctor) => print_doctor_line(doctor, address),
        None => println!("No doctor with id '{}'.", id),
    }

    Ok(())
}

// =============================================================================
// CALC COMMAND
// =============================================================================

/// Fold operator tokens over two operands.
pub fn cmd_calc(json_mode: bool, a: f64, b: f64, operations: &str) -> Result<(), PraxisError> {
    let tokens = parse_operations(operations);
    let value = evaluate(a, b, &tokens);

    if json_mode {
        // Non-finite results serialize as JSON null.
        let output = serde_json::json!({ "value": value });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("{}", value);
    Ok(())
}

// =============================================================================
// CLOSEST-COLOR COMMAND
// =============================================================================

/// Match a color against the reference palette.
pub fn cmd_color(store: &DirectoryStore, json_mode: bool, hex: &str) -> Result<(), PraxisError> {
    let result = nearest_color(store.palette(), hex);

    if json_mode {
        let output = serde_json::json!({
            "found": result.is_some(),
            "color": result,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    match result {
        Some(color) => println!("{}", color),
        None => println!("No palette entry matches '{}'.", hex),
    }

    Ok(())
}

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

/// JSON value for a doctor, with the derived address when asked for.
fn doctor_value(doctor: &praxis_core::Doctor, include_address: bool) -> serde_json::Value {
    let mut value = serde_json::json!({
        "id": doctor.id.as_str(),
        "name": doctor.name,
        "speciality": doctor.speciality.as_str(),
    });
    if include_address {
        let address = derive_address(doctor);
        value["address"] = serde_json::json!({ "street_name": address.street_name });
    }
    value
}

/// One text line per doctor.
fn print_doctor_line(doctor: &praxis_core::Doctor, include_address: bool) {
    if include_address {
        let address = derive_address(doctor);
        println!(
            "{}  {}  {}  ({})",
            doctor.id.as_str(),
            doctor.name,
            doctor.speciality.as_str(),
            address.street_name
        );
    } else {
        println!(
            "{}  {}  {}",
            doctor.id.as_str(),
            doctor.name,
            doctor.speciality.as_str()
        );
    }
}

// =============================================================================
// TESTS
// =============================================================================
