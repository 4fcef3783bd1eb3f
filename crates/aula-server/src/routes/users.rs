use axum::extract::Path;
use axum::routing::get;
use axum::{Extension, Json, Router};
use http::StatusCode;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use utoipa::ToSchema;

use aula_core::user::UserPatch;
use aula_model::convert::{IntoDbModel, IntoModel};
use aula_model::user::{Role, User};

use crate::auth::hash_password;
use crate::routes::error::ApiError;
use crate::session::Session;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_users))
        .route("/{user_id}", get(get_user).put(update_user).delete(delete_user))
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/users",
    responses(
        (status = OK, body = Vec<User>, description = "All user accounts"),
    ),
    tag = "v0/users",
    security(("token" = []))
)]
pub(crate) async fn list_users(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Json<Vec<User>>, ApiError> {
    session.require_admin()?;

    let users = aula_core::user::list_users(&conn).await?;
    Ok(Json(users.into_iter().map(IntoModel::into_model).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v0/users/{user_id}",
    responses(
        (status = OK, body = User, description = "The requested user"),
        (status = NOT_FOUND, description = "No such user"),
    ),
    tag = "v0/users",
    security(("token" = []))
)]
pub(crate) async fn get_user(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(user_id): Path<i32>,
) -> Result<Json<User>, ApiError> {
    session.require_self_or_admin(user_id)?;

    let user = aula_core::user::get_user(&conn, user_id).await?;
    Ok(Json(user.into_model()))
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserPayload {
    email: Option<String>,
    password: Option<String>,
    role: Option<Role>,
}

#[utoipa::path(
    put,
    path = "/api/v0/users/{user_id}",
    request_body = UserPayload,
    responses(
        (status = OK, body = User, description = "The updated user"),
        (status = CONFLICT, description = "Email already taken"),
    ),
    tag = "v0/users",
    security(("token" = []))
)]
pub(crate) async fn update_user(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(user_id): Path<i32>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<User>, ApiError> {
    session.require_self_or_admin(user_id)?;
    // Only administrators may move an account between roles.
    if payload.role.is_some() {
        session.require_admin()?;
    }

    let password_hash = payload.password.as_deref().map(hash_password).transpose()?;

    let patch = UserPatch {
        email: payload.email,
        password_hash,
        role: payload.role.map(IntoDbModel::into_db_model),
    };
    let user = aula_core::user::update_user(&conn, user_id, patch).await?;
    Ok(Json(user.into_model()))
}

#[utoipa::path(
    delete,
    path = "/api/v0/users/{user_id}",
    responses(
        (status = NO_CONTENT, description = "User deleted"),
        (status = CONFLICT, description = "User still has a student or instructor profile"),
    ),
    tag = "v0/users",
    security(("token" = []))
)]
pub(crate) async fn delete_user(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(user_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    session.require_admin()?;

    aula_core::user::delete_user(&conn, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
