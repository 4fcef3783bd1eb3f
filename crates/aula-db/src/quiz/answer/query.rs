use aula_entity::quiz::answer::{Column, Entity, Model};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "error loading quiz answer");
        })
    }

    pub async fn find_by_question<C: ConnectionTrait>(conn: &C, question_id: i32) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::QuestionId.eq(question_id))
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "error listing answers by question");
            })
    }

    pub async fn count_by_question<C: ConnectionTrait>(conn: &C, question_id: i32) -> Result<u64, DbErr> {
        Entity::find().filter(Column::QuestionId.eq(question_id)).count(conn).await
    }

    pub async fn exists<C: ConnectionTrait>(conn: &C, id: i32) -> Result<bool, DbErr> {
        Entity::find_by_id(id).count(conn).await.map(|count| count > 0)
    }
}
