use crate::ApiResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Standard success response carrying a payload
pub fn success_response<T: Serialize>(status: &str, data: T) -> Response {
    (StatusCode::OK, Json(ApiResponse::with_data(status, data))).into_response()
}

/// Standard success response with a null payload
pub fn empty_success_response(status: &str) -> Response {
    (StatusCode::OK, Json(ApiResponse::<()>::empty(status))).into_response()
}

/// Standard created response with a null payload
pub fn created_response(status: &str) -> Response {
    (StatusCode::CREATED, Json(ApiResponse::<()>::empty(status))).into_response()
}
