use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use http::StatusCode;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use utoipa::ToSchema;

use aula_db::{access_tokens, user};
use aula_model::convert::{IntoDbModel, IntoModel};
use aula_model::login::{SessionInfo, Token};
use aula_model::user::{Role, User};

use crate::auth::{hash_password, verify_password};
use crate::routes::error::ApiError;
use crate::session::Session;

pub(crate) fn create_router<S: Clone + Send + Sync + 'static>() -> Router<S> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/whoami", get(whoami))
        .with_state(())
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegisterPayload {
    email: String,
    password: String,
    role: Role,
}

#[utoipa::path(
    post,
    path = "/api/v0/auth/register",
    request_body = RegisterPayload,
    responses(
        (status = CREATED, body = User, description = "Account created"),
        (status = CONFLICT, description = "A user with that email already exists"),
    ),
    tag = "v0/auth"
)]
pub(crate) async fn register(
    Extension(conn): Extension<DatabaseConnection>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let password_hash = hash_password(&payload.password)?;
    let user = aula_core::user::create_user(&conn, &payload.email, &password_hash, payload.role.into_db_model()).await?;

    Ok((StatusCode::CREATED, Json(IntoModel::<User>::into_model(user))))
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginPayload {
    email: String,
    password: String,
}

#[utoipa::path(
    post,
    path = "/api/v0/auth/login",
    request_body = LoginPayload,
    responses(
        (status = OK, body = Token, description = "Successful login, returns Bearer token"),
        (status = UNAUTHORIZED, description = "Unknown email or wrong password"),
    ),
    tag = "v0/auth"
)]
pub(crate) async fn login(
    Extension(conn): Extension<DatabaseConnection>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<Token>, ApiError> {
    let Some(user) = user::Query::find_by_email(&conn, &payload.email).await? else {
        tracing::debug!("login attempt for unknown email");
        return Err(ApiError::Unauthorized);
    };

    if !verify_password(&payload.password, &user.password_hash) {
        tracing::debug!(user_id = user.id, "login attempt with wrong password");
        return Err(ApiError::Unauthorized);
    }

    let token = access_tokens::Mutation::create_access_token(&conn, user.id).await?;

    Ok(Json(Token {
        access_token: token.access_token,
    }))
}

#[utoipa::path(
    post,
    path = "/api/v0/auth/logout",
    responses(
        (status = NO_CONTENT, description = "Session token deleted"),
    ),
    tag = "v0/auth",
    security(("token" = []))
)]
pub(crate) async fn logout(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<StatusCode, ApiError> {
    access_tokens::Mutation::delete_access_token(&conn, session.user.user_id).await?;
    tracing::debug!(user_id = session.user.user_id, "user logged out");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v0/auth/whoami",
    responses(
        (status = OK, body = SessionInfo, description = "The authenticated principal"),
        (status = UNAUTHORIZED, description = "No valid session token"),
    ),
    tag = "v0/auth",
    security(("token" = []))
)]
pub(crate) async fn whoami(session: Session) -> Json<SessionInfo> {
    Json(session.info())
}
