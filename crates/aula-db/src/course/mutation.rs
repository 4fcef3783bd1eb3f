use aula_entity::course::{ActiveModel, Entity, Model};
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait};
use std::error::Error;

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        instructor_id: i32,
        category_id: i32,
        name: &str,
        description: Option<String>,
        image: Option<String>,
    ) -> Result<Model, DbErr> {
        let course = ActiveModel {
            instructor_id: Set(instructor_id),
            category_id: Set(category_id),
            name: Set(name.to_owned()),
            description: Set(description),
            image: Set(image),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        course.insert(conn).await
    }

    pub async fn update<C: ConnectionTrait>(conn: &C, course: ActiveModel) -> Result<Model, DbErr> {
        course.update(conn).await
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, id: i32) -> Result<u64, DbErr> {
        Entity::delete_by_id(id)
            .exec(conn)
            .await
            .map(|res| res.rows_affected)
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to delete course");
            })
    }
}
