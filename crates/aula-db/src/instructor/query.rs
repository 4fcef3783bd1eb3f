use aula_entity::instructor::{Column, Entity, Model};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "error loading instructor");
        })
    }

    pub async fn find_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<Model>, DbErr> {
        Entity::find().all(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "error listing instructors");
        })
    }

    pub async fn find_by_user_id<C: ConnectionTrait>(conn: &C, user_id: i32) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "error loading instructor by user");
            })
    }

    pub async fn exists<C: ConnectionTrait>(conn: &C, id: i32) -> Result<bool, DbErr> {
        Entity::find_by_id(id).count(conn).await.map(|count| count > 0)
    }
}
