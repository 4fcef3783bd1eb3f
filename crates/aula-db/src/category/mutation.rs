use aula_entity::category::{ActiveModel, Entity, Model};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait};
use std::error::Error;

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        name: &str,
        description: Option<String>,
    ) -> Result<Model, DbErr> {
        let category = ActiveModel {
            name: Set(name.to_owned()),
            description: Set(description),
            ..Default::default()
        };
        category.insert(conn).await
    }

    pub async fn update<C: ConnectionTrait>(conn: &C, category: ActiveModel) -> Result<Model, DbErr> {
        category.update(conn).await
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, id: i32) -> Result<u64, DbErr> {
        Entity::delete_by_id(id)
            .exec(conn)
            .await
            .map(|res| res.rows_affected)
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to delete category");
            })
    }
}
