//! Tag API Library
//!
//! This crate provides the core functionality for the tag API
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod migrator;
pub mod repositories;
pub mod services;

use axum::{extract::State, response::Json, routing::get, Router};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub services: handlers::AppServices,
}

/// Uniform response envelope: a human-readable status phrase plus an
/// optional payload, serialized as `null` when absent.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn with_data(status: impl Into<String>, data: T) -> Self {
        Self {
            status: status.into(),
            data: Some(data),
        }
    }

    pub fn empty(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            data: None,
        }
    }
}

/// Builds the API router: status/health endpoints plus the tags resource
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(api_status))
        .route("/health", get(health_check))
        .nest("/tags", handlers::tags::tag_routes())
}

async fn api_status() -> Json<ApiResponse<Value>> {
    let version = env!("CARGO_PKG_VERSION");
    let status_data = json!({
        "status": "ok",
        "version": version,
        "service": "tag-api",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    Json(ApiResponse::with_data("OK", status_data))
}

async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Value>>, errors::ServiceError> {
    let db_status = match state.db.ping().await {
        Ok(_) => "healthy",
        Err(_) => "unhealthy",
    };

    let health_data = json!({
        "status": db_status,
        "checks": {
            "database": db_status,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    Ok(Json(ApiResponse::with_data("OK", health_data)))
}

#[cfg(test)]
mod response_tests {
    use super::*;

    #[test]
    fn empty_envelope_serializes_null_data() {
        let response = ApiResponse::<()>::empty("Successfully created");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "Successfully created");
        assert!(value["data"].is_null());
    }

    #[test]
    fn data_envelope_carries_payload() {
        let response = ApiResponse::with_data("Successfully fetched", json!({"id": 1}));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "Successfully fetched");
        assert_eq!(value["data"]["id"], 1);
    }
}
