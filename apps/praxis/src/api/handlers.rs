//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.

use super::{
    AppState,
    types::{DoctorJson, HealthResponse, QueryRequest, QueryResponse},
};
use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use praxis_core::{
    Doctor, DirectoryStore, derive_address, evaluate, filter_by_speciality, find_by_id,
    nearest_color,
};

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// QUERY HANDLER
// =============================================================================

/// Execute a query.
///
/// This is the single routing endpoint: the tagged request selects
/// exactly one core resolver. Coercion failures never reach the core;
/// they come back as a 400 with an error body.
pub async fn query_handler(
    State(state): State<AppState>,
    request: Result<Json<QueryRequest>, JsonRejection>,
) -> impl IntoResponse {
    match request {
        Ok(Json(request)) => (StatusCode::OK, Json(execute_query(&state.store, &request))),
        Err(rejection) => (
            StatusCode::BAD_REQUEST,
            Json(QueryResponse::error(format!(
                "Invalid request: {}",
                rejection.body_text()
            ))),
        ),
    }
}

/// Dispatch a validated request to its resolver.
fn execute_query(store: &DirectoryStore, request: &QueryRequest) -> QueryResponse {
    match request {
        QueryRequest::Doctors {
            specialities,
            include_address,
        } => {
            let result = filter_by_speciality(store, specialities.as_deref());
            QueryResponse::doctors(result.map(|doctors| {
                doctors
                    .into_iter()
                    .map(|d| doctor_json(d, *include_address))
                    .collect()
            }))
        }

        QueryRequest::Doctor {
            id,
            include_address,
        } => QueryResponse::doctor(find_by_id(store, id).map(|d| doctor_json(d, *include_address))),

        QueryRequest::Calc { a, b, operations } => {
            QueryResponse::number(evaluate(*a, *b, operations))
        }

        QueryRequest::ClosestColor { hex } => {
            QueryResponse::color(nearest_color(store.palette(), hex).map(str::to_string))
        }
    }
}

/// Build the wire record, invoking the derived-field resolver when
/// the response shape asks for the address.
fn doctor_json(doctor: &Doctor, include_address: bool) -> DoctorJson {
    let address = include_address.then(|| {
        tracing::debug!(?doctor, "deriving address");
        derive_address(doctor)
    });
    DoctorJson::from_parts(doctor, address)
}
