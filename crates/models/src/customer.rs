use sea_orm::{
    entity::prelude::*, ActiveValue::Unchanged, DatabaseConnection, PaginatorTrait, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub age: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn exists_by_email(db: &DatabaseConnection, email: &str) -> Result<bool, ModelError> {
    let n = Entity::find().filter(Column::Email.eq(email)).count(db).await?;
    Ok(n > 0)
}

pub async fn exists_by_id(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let n = Entity::find_by_id(id).count(db).await?;
    Ok(n > 0)
}

/// Insert a row; the database assigns `id`.
pub async fn create(db: &DatabaseConnection, name: &str, email: &str, age: i32) -> Result<Model, ModelError> {
    let am = ActiveModel {
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        age: Set(age),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Overwrite every column of the row with the given id.
pub async fn update(db: &DatabaseConnection, id: i32, name: &str, email: &str, age: i32) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Unchanged(id),
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        age: Set(age),
    };
    Ok(am.update(db).await?)
}

/// Returns the number of rows removed (0 when the id was absent).
pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> Result<u64, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected)
}
