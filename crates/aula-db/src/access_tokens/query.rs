use aula_entity::access_tokens::{Column, Entity, Model};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct Query;

impl Query {
    pub async fn find_by_user<C: ConnectionTrait>(conn: &C, user_id: i32) -> Result<Option<Model>, DbErr> {
        Entity::find().filter(Column::UserId.eq(user_id)).one(conn).await
    }

    pub async fn find_by_token<C: ConnectionTrait>(conn: &C, token: &str) -> Result<Option<Model>, DbErr> {
        Entity::find().filter(Column::AccessToken.eq(token)).one(conn).await
    }
}
