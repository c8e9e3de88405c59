use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Tag entity
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    /// Primary key, assigned by the store on insert
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Tag name
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
