use aula_entity::user::{ActiveModel, Entity, Model, Role};
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait};
use std::error::Error;

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        email: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<Model, DbErr> {
        let user = ActiveModel {
            email: Set(email.to_owned()),
            password_hash: Set(password_hash.to_owned()),
            role: Set(role),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        user.insert(conn).await
    }

    pub async fn update<C: ConnectionTrait>(conn: &C, user: ActiveModel) -> Result<Model, DbErr> {
        user.update(conn).await
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, id: i32) -> Result<u64, DbErr> {
        Entity::delete_by_id(id)
            .exec(conn)
            .await
            .map(|res| res.rows_affected)
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to delete user");
            })
    }
}
