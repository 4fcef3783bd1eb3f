use aula_entity::quiz::result::{ActiveModel, Entity, Model};
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait};
use std::error::Error;

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        quiz_id: i32,
        student_id: i32,
        score: i32,
    ) -> Result<Model, DbErr> {
        let result = ActiveModel {
            quiz_id: Set(quiz_id),
            student_id: Set(student_id),
            score: Set(score),
            completed_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        result.insert(conn).await
    }

    pub async fn update<C: ConnectionTrait>(conn: &C, result: ActiveModel) -> Result<Model, DbErr> {
        result.update(conn).await
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, id: i32) -> Result<u64, DbErr> {
        Entity::delete_by_id(id)
            .exec(conn)
            .await
            .map(|res| res.rows_affected)
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to delete quiz result");
            })
    }
}
