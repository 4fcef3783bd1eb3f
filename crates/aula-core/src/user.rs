use aula_db::{access_tokens, instructor, student, user};
use aula_entity::user::{ActiveModel, Model, Role};
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::DatabaseConnection;

use crate::error::ServiceError;

pub struct UserPatch {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<Role>,
}

pub async fn get_user(conn: &DatabaseConnection, id: i32) -> Result<Model, ServiceError> {
    user::Query::find_by_id(conn, id)
        .await?
        .ok_or(ServiceError::not_found("user", id))
}

pub async fn list_users(conn: &DatabaseConnection) -> Result<Vec<Model>, ServiceError> {
    Ok(user::Query::find_all(conn).await?)
}

pub async fn create_user(
    conn: &DatabaseConnection,
    email: &str,
    password_hash: &str,
    role: Role,
) -> Result<Model, ServiceError> {
    let user = user::Mutation::create(conn, email, password_hash, role)
        .await
        .map_err(|err| ServiceError::on_unique(err, format!("a user with email {email} already exists")))?;
    tracing::info!(user_id = user.id, "created user");
    Ok(user)
}

/// Changing a user's role is rejected while a profile of the current role is
/// still linked; the profile has to be deleted first.
pub async fn update_user(conn: &DatabaseConnection, id: i32, patch: UserPatch) -> Result<Model, ServiceError> {
    let current = get_user(conn, id).await?;

    if let Some(role) = patch.role {
        if role != current.role {
            if student::Query::find_by_user_id(conn, id).await?.is_some() {
                return Err(ServiceError::Conflict(format!(
                    "user {id} still has a student profile"
                )));
            }
            if instructor::Query::find_by_user_id(conn, id).await?.is_some() {
                return Err(ServiceError::Conflict(format!(
                    "user {id} still has an instructor profile"
                )));
            }
        }
    }

    let mut user = ActiveModel {
        id: Unchanged(id),
        ..Default::default()
    };
    if let Some(email) = patch.email {
        user.email = Set(email);
    }
    if let Some(password_hash) = patch.password_hash {
        user.password_hash = Set(password_hash);
    }
    if let Some(role) = patch.role {
        user.role = Set(role);
    }

    user::Mutation::update(conn, user)
        .await
        .map_err(|err| ServiceError::on_unique(err, "a user with that email already exists".to_owned()))
}

/// Deleting a user with a linked profile is rejected; session tokens are not
/// domain data and are removed along with the user.
pub async fn delete_user(conn: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let _ = get_user(conn, id).await?;

    if student::Query::find_by_user_id(conn, id).await?.is_some() {
        return Err(ServiceError::Conflict(format!(
            "user {id} still has a student profile"
        )));
    }
    if instructor::Query::find_by_user_id(conn, id).await?.is_some() {
        return Err(ServiceError::Conflict(format!(
            "user {id} still has an instructor profile"
        )));
    }

    access_tokens::Mutation::delete_access_token(conn, id).await?;
    user::Mutation::delete(conn, id).await?;
    Ok(())
}
