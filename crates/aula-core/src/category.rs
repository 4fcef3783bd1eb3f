use aula_db::{category, course};
use aula_entity::category::{ActiveModel, Model};
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::DatabaseConnection;

use crate::error::ServiceError;

pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub async fn get_category(conn: &DatabaseConnection, id: i32) -> Result<Model, ServiceError> {
    category::Query::find_by_id(conn, id)
        .await?
        .ok_or(ServiceError::not_found("category", id))
}

pub async fn list_categories(conn: &DatabaseConnection) -> Result<Vec<Model>, ServiceError> {
    Ok(category::Query::find_all(conn).await?)
}

pub async fn create_category(
    conn: &DatabaseConnection,
    name: &str,
    description: Option<String>,
) -> Result<Model, ServiceError> {
    Ok(category::Mutation::create(conn, name, description).await?)
}

pub async fn update_category(conn: &DatabaseConnection, id: i32, patch: CategoryPatch) -> Result<Model, ServiceError> {
    let _ = get_category(conn, id).await?;

    let mut category = ActiveModel {
        id: Unchanged(id),
        ..Default::default()
    };
    if let Some(name) = patch.name {
        category.name = Set(name);
    }
    if let Some(description) = patch.description {
        category.description = Set(Some(description));
    }

    Ok(category::Mutation::update(conn, category).await?)
}

pub async fn delete_category(conn: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let _ = get_category(conn, id).await?;

    let courses = course::Query::count_by_category(conn, id).await?;
    if courses > 0 {
        return Err(ServiceError::Conflict(format!(
            "category {id} is still referenced by {courses} course(s)"
        )));
    }

    category::Mutation::delete(conn, id).await?;
    Ok(())
}
