use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;

use crate::entities::tag::{ActiveModel as TagActiveModel, Column, Entity as Tag, Model as TagModel};
use crate::errors::ServiceError;
use crate::repositories::Repository;

use super::BaseRepository;

/// Repository for single-row tag operations
#[derive(Debug)]
pub struct TagRepository {
    base: BaseRepository,
}

impl TagRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Insert a new tag row; the store assigns the id
    pub async fn save(&self, name: String) -> Result<TagModel, ServiceError> {
        let row = TagActiveModel {
            name: Set(name),
            ..Default::default()
        };

        row.insert(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)
    }

    /// Fetch every tag row in the store's natural order
    pub async fn find_all(&self) -> Result<Vec<TagModel>, ServiceError> {
        Tag::find()
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)
    }

    /// Fetch a tag by id; zero matching rows is a NotFound, not a store error
    pub async fn find_by_id(&self, id: i32) -> Result<TagModel, ServiceError> {
        Tag::find_by_id(id)
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)?
            .ok_or_else(|| ServiceError::NotFound(format!("Tag with id {} not found", id)))
    }

    /// Update the name of the tag with the given id.
    ///
    /// Zero affected rows is reported as NotFound so a row deleted between
    /// the caller's existence check and this statement cannot vanish silently.
    pub async fn update(&self, id: i32, name: String) -> Result<(), ServiceError> {
        let result = Tag::update_many()
            .col_expr(Column::Name, Expr::value(name))
            .filter(Column::Id.eq(id))
            .exec(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)?;

        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!(
                "Tag with id {} not found",
                id
            )));
        }

        Ok(())
    }

    /// Delete the tag with the given id; zero affected rows is a NotFound
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let result = Tag::delete_by_id(id)
            .exec(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)?;

        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!(
                "Tag with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
