use aula_entity::quiz::question::{ActiveModel, Entity, Model};
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait};
use std::error::Error;

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(conn: &C, quiz_id: i32, text: &str) -> Result<Model, DbErr> {
        let question = ActiveModel {
            quiz_id: Set(quiz_id),
            text: Set(text.to_owned()),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        question.insert(conn).await
    }

    pub async fn update<C: ConnectionTrait>(conn: &C, question: ActiveModel) -> Result<Model, DbErr> {
        question.update(conn).await
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, id: i32) -> Result<u64, DbErr> {
        Entity::delete_by_id(id)
            .exec(conn)
            .await
            .map(|res| res.rows_affected)
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to delete quiz question");
            })
    }
}
