use aula_entity::category::{Entity, Model};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait};
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "error loading category");
        })
    }

    pub async fn find_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<Model>, DbErr> {
        Entity::find().all(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "error listing categories");
        })
    }

    pub async fn exists<C: ConnectionTrait>(conn: &C, id: i32) -> Result<bool, DbErr> {
        Entity::find_by_id(id).count(conn).await.map(|count| count > 0)
    }
}
