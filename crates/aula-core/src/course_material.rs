use aula_db::{course, course_material};
use aula_entity::course_material::{ActiveModel, Model};
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::DatabaseConnection;

use crate::error::ServiceError;

pub struct NewMaterial {
    pub course_id: i32,
    pub title: String,
    pub material_type: String,
    pub file_path: String,
}

pub struct MaterialPatch {
    pub title: Option<String>,
    pub material_type: Option<String>,
    pub file_path: Option<String>,
}

pub async fn get_material(conn: &DatabaseConnection, id: i32) -> Result<Model, ServiceError> {
    course_material::Query::find_by_id(conn, id)
        .await?
        .ok_or(ServiceError::not_found("course material", id))
}

pub async fn get_material_by_course(conn: &DatabaseConnection, course_id: i32) -> Result<Option<Model>, ServiceError> {
    if !course::Query::exists(conn, course_id).await? {
        return Err(ServiceError::not_found("course", course_id));
    }
    Ok(course_material::Query::find_by_course(conn, course_id).await?)
}

pub async fn list_materials(conn: &DatabaseConnection) -> Result<Vec<Model>, ServiceError> {
    Ok(course_material::Query::find_all(conn).await?)
}

pub async fn create_material(conn: &DatabaseConnection, new: NewMaterial) -> Result<Model, ServiceError> {
    if !course::Query::exists(conn, new.course_id).await? {
        return Err(ServiceError::missing_reference("course", new.course_id));
    }

    course_material::Mutation::create(conn, new.course_id, &new.title, &new.material_type, &new.file_path)
        .await
        .map_err(|err| {
            ServiceError::on_unique(
                err,
                format!("course {} already has a material record", new.course_id),
            )
        })
}

pub async fn update_material(conn: &DatabaseConnection, id: i32, patch: MaterialPatch) -> Result<Model, ServiceError> {
    let _ = get_material(conn, id).await?;

    let mut material = ActiveModel {
        id: Unchanged(id),
        ..Default::default()
    };
    if let Some(title) = patch.title {
        material.title = Set(title);
    }
    if let Some(material_type) = patch.material_type {
        material.material_type = Set(material_type);
    }
    if let Some(file_path) = patch.file_path {
        material.file_path = Set(file_path);
    }

    Ok(course_material::Mutation::update(conn, material).await?)
}

pub async fn delete_material(conn: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let _ = get_material(conn, id).await?;
    course_material::Mutation::delete(conn, id).await?;
    Ok(())
}
