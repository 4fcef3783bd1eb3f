use aula_entity::instructor::{ActiveModel, Entity, Model};
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
        bio: Option<String>,
        profile_picture: Option<String>,
    ) -> Result<Model, DbErr> {
        let instructor = ActiveModel {
            user_id: Set(user_id),
            first_name: Set(first_name.to_owned()),
            last_name: Set(last_name.to_owned()),
            bio: Set(bio),
            profile_picture: Set(profile_picture),
            ..Default::default()
        };
        instructor.insert(conn).await
    }

    pub async fn update<C: ConnectionTrait>(conn: &C, instructor: ActiveModel) -> Result<Model, DbErr> {
        instructor.update(conn).await
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, id: i32) -> Result<u64, DbErr> {
        Entity::delete_by_id(id)
            .exec(conn)
            .await
            .map(|res| res.rows_affected)
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to delete instructor");
            })
    }
}
