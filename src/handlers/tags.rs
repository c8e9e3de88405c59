use super::common::{created_response, empty_success_response, success_response};
use crate::{errors::ApiError, handlers::AppState, services::tags::TagRequest};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Json, Path, State,
    },
    response::IntoResponse,
    routing::{delete, get, patch, post, put},
    Router,
};
use tracing::info;

// Handler functions

/// Create a new tag
async fn create_tag(
    State(state): State<AppState>,
    payload: Result<Json<TagRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;

    let tag = state.services.tags.create(payload).await?;

    info!("Tag created: {}", tag.id);

    Ok(created_response("Successfully created"))
}

/// List all tags
async fn list_tags(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let tags = state.services.tags.find_all().await?;

    Ok(success_response("Successfully fetched", tags))
}

/// Get a tag by id
async fn get_tag(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id?;

    let tag = state.services.tags.find_by_id(id).await?;

    Ok(success_response("Successfully fetched", tag))
}

/// Update a tag's name
async fn update_tag(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<TagRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    state.services.tags.update(id, payload).await?;

    info!("Tag updated: {}", id);

    Ok(empty_success_response("Successfully updated"))
}

/// Delete a tag
async fn delete_tag(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id?;

    state.services.tags.delete(id).await?;

    info!("Tag deleted: {}", id);

    Ok(empty_success_response("Successfully deleted"))
}

/// Creates the router for tag endpoints.
/// Both PUT and PATCH update a tag in place.
pub fn tag_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_tag))
        .route("/", get(list_tags))
        .route("/:id", get(get_tag))
        .route("/:id", put(update_tag))
        .route("/:id", patch(update_tag))
        .route("/:id", delete(delete_tag))
}
