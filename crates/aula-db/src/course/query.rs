use aula_entity::course::{Column, Entity, Model};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "error loading course");
        })
    }

    pub async fn find_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<Model>, DbErr> {
        Entity::find().all(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "error listing courses");
        })
    }

    pub async fn find_by_instructor<C: ConnectionTrait>(conn: &C, instructor_id: i32) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::InstructorId.eq(instructor_id))
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "error listing courses by instructor");
            })
    }

    pub async fn count_by_instructor<C: ConnectionTrait>(conn: &C, instructor_id: i32) -> Result<u64, DbErr> {
        Entity::find().filter(Column::InstructorId.eq(instructor_id)).count(conn).await
    }

    pub async fn count_by_category<C: ConnectionTrait>(conn: &C, category_id: i32) -> Result<u64, DbErr> {
        Entity::find().filter(Column::CategoryId.eq(category_id)).count(conn).await
    }

    pub async fn exists<C: ConnectionTrait>(conn: &C, id: i32) -> Result<bool, DbErr> {
        Entity::find_by_id(id).count(conn).await.map(|count| count > 0)
    }
}
