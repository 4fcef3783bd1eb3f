use aula_entity::enrollment::{ActiveModel, Entity, Model};
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait};
use std::error::Error;

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        student_id: i32,
        course_id: i32,
        status: &str,
    ) -> Result<Model, DbErr> {
        let enrollment = ActiveModel {
            student_id: Set(student_id),
            course_id: Set(course_id),
            status: Set(status.to_owned()),
            enrolled_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        enrollment.insert(conn).await
    }

    pub async fn update<C: ConnectionTrait>(conn: &C, enrollment: ActiveModel) -> Result<Model, DbErr> {
        enrollment.update(conn).await
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, id: i32) -> Result<u64, DbErr> {
        Entity::delete_by_id(id)
            .exec(conn)
            .await
            .map(|res| res.rows_affected)
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to delete enrollment");
            })
    }
}
