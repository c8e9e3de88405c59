use crate::{entities::tag, errors::ServiceError, repositories::tags::TagRepository};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

/// Input shape shared by create and update
#[derive(Debug, Deserialize, Validate)]
pub struct TagRequest {
    #[validate(length(
        min = 4,
        max = 200,
        message = "Tag name must be between 4 and 200 characters"
    ))]
    pub name: String,
}

/// Output shape returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagResponse {
    pub id: i32,
    pub name: String,
}

impl From<tag::Model> for TagResponse {
    fn from(model: tag::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

/// Service for managing tags
#[derive(Clone)]
pub struct TagService {
    repository: Arc<TagRepository>,
}

impl TagService {
    /// Creates a new tag service instance
    pub fn new(repository: Arc<TagRepository>) -> Self {
        Self { repository }
    }

    /// Validates and persists a new tag
    #[instrument(skip(self))]
    pub async fn create(&self, request: TagRequest) -> Result<TagResponse, ServiceError> {
        request.validate()?;

        let row = self.repository.save(request.name).await?;
        Ok(row.into())
    }

    /// Lists every tag
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<TagResponse>, ServiceError> {
        let rows = self.repository.find_all().await?;
        Ok(rows.into_iter().map(TagResponse::from).collect())
    }

    /// Fetches a tag by id
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i32) -> Result<TagResponse, ServiceError> {
        let row = self.repository.find_by_id(id).await?;
        Ok(row.into())
    }

    /// Validates the request, checks existence, then overwrites the name.
    ///
    /// Validation runs before the existence check so an invalid name on a
    /// nonexistent id still reports a validation failure.
    #[instrument(skip(self))]
    pub async fn update(&self, id: i32, request: TagRequest) -> Result<(), ServiceError> {
        request.validate()?;

        self.repository.find_by_id(id).await?;
        self.repository.update(id, request.name).await
    }

    /// Deletes a tag, relying on the repository's affected-row signal
    /// to distinguish "never existed" from a successful delete
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_length_bounds() {
        let too_short = TagRequest { name: "abc".into() };
        assert!(too_short.validate().is_err());

        let minimum = TagRequest {
            name: "abcd".into(),
        };
        assert!(minimum.validate().is_ok());

        let maximum = TagRequest {
            name: "x".repeat(200),
        };
        assert!(maximum.validate().is_ok());

        let too_long = TagRequest {
            name: "x".repeat(201),
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn empty_name_fails_validation() {
        let empty = TagRequest { name: "".into() };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn response_maps_entity_fields() {
        let model = tag::Model {
            id: 7,
            name: "Tag Seven".into(),
        };
        let response = TagResponse::from(model);
        assert_eq!(response.id, 7);
        assert_eq!(response.name, "Tag Seven");
    }
}
