use aula_entity::quiz::quiz::{ActiveModel, Entity, Model};
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait};
use std::error::Error;

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        course_id: i32,
        name: &str,
        description: Option<String>,
    ) -> Result<Model, DbErr> {
        let quiz = ActiveModel {
            course_id: Set(course_id),
            name: Set(name.to_owned()),
            description: Set(description),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        quiz.insert(conn).await
    }

    pub async fn update<C: ConnectionTrait>(conn: &C, quiz: ActiveModel) -> Result<Model, DbErr> {
        quiz.update(conn).await
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, id: i32) -> Result<u64, DbErr> {
        Entity::delete_by_id(id)
            .exec(conn)
            .await
            .map(|res| res.rows_affected)
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to delete quiz");
            })
    }
}
