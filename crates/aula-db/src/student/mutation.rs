use aula_entity::student::{ActiveModel, Entity, Model};
use chrono::NaiveDate;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait};
use std::error::Error;

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        user_id: i32,
        first_name: &str,
        last_name: &str,
        date_of_birth: NaiveDate,
        profile_picture: Option<String>,
    ) -> Result<Model, DbErr> {
        let student = ActiveModel {
            user_id: Set(user_id),
            first_name: Set(first_name.to_owned()),
            last_name: Set(last_name.to_owned()),
            date_of_birth: Set(date_of_birth),
            profile_picture: Set(profile_picture),
            ..Default::default()
        };
        student.insert(conn).await
    }

    pub async fn update<C: ConnectionTrait>(conn: &C, student: ActiveModel) -> Result<Model, DbErr> {
        student.update(conn).await
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, id: i32) -> Result<u64, DbErr> {
        Entity::delete_by_id(id)
            .exec(conn)
            .await
            .map(|res| res.rows_affected)
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to delete student");
            })
    }
}
