use aula_entity::quiz::answer::{ActiveModel, Entity, Model};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait};
use std::error::Error;

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        question_id: i32,
        text: &str,
        answer_type: &str,
        is_correct: bool,
    ) -> Result<Model, DbErr> {
        let answer = ActiveModel {
            question_id: Set(question_id),
            text: Set(text.to_owned()),
            answer_type: Set(answer_type.to_owned()),
            is_correct: Set(is_correct),
            ..Default::default()
        };
        answer.insert(conn).await
    }

    pub async fn update<C: ConnectionTrait>(conn: &C, answer: ActiveModel) -> Result<Model, DbErr> {
        answer.update(conn).await
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, id: i32) -> Result<u64, DbErr> {
        Entity::delete_by_id(id)
            .exec(conn)
            .await
            .map(|res| res.rows_affected)
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to delete quiz answer");
            })
    }
}
