use aula_entity::course_material::{ActiveModel, Entity, Model};
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait};
use std::error::Error;

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        course_id: i32,
        title: &str,
        material_type: &str,
        file_path: &str,
    ) -> Result<Model, DbErr> {
        let material = ActiveModel {
            course_id: Set(course_id),
            title: Set(title.to_owned()),
            material_type: Set(material_type.to_owned()),
            file_path: Set(file_path.to_owned()),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        material.insert(conn).await
    }

    pub async fn update<C: ConnectionTrait>(conn: &C, material: ActiveModel) -> Result<Model, DbErr> {
        material.update(conn).await
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, id: i32) -> Result<u64, DbErr> {
        Entity::delete_by_id(id)
            .exec(conn)
            .await
            .map(|res| res.rows_affected)
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to delete course material");
            })
    }
}
