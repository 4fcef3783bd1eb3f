use aula_entity::enrollment::{Column, Entity, Model};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "error loading enrollment");
        })
    }

    pub async fn find_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<Model>, DbErr> {
        Entity::find().all(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "error listing enrollments");
        })
    }

    pub async fn find_by_student<C: ConnectionTrait>(conn: &C, student_id: i32) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "error listing enrollments by student");
            })
    }

    pub async fn find_by_course<C: ConnectionTrait>(conn: &C, course_id: i32) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::CourseId.eq(course_id))
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "error listing enrollments by course");
            })
    }

    pub async fn find_by_student_and_course<C: ConnectionTrait>(
        conn: &C,
        student_id: i32,
        course_id: i32,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::CourseId.eq(course_id))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "error loading enrollment pair");
            })
    }

    pub async fn count_by_student<C: ConnectionTrait>(conn: &C, student_id: i32) -> Result<u64, DbErr> {
        Entity::find().filter(Column::StudentId.eq(student_id)).count(conn).await
    }

    pub async fn count_by_course<C: ConnectionTrait>(conn: &C, course_id: i32) -> Result<u64, DbErr> {
        Entity::find().filter(Column::CourseId.eq(course_id)).count(conn).await
    }

    pub async fn exists<C: ConnectionTrait>(conn: &C, id: i32) -> Result<bool, DbErr> {
        Entity::find_by_id(id).count(conn).await.map(|count| count > 0)
    }
}
