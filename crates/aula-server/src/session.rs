use aula_db::{instructor, student, user};
use aula_model::convert::IntoModel;
use aula_model::login::SessionInfo;
use aula_model::user::{Role, User};
use axum::extract::FromRequestParts;
use axum::{Extension, RequestPartsExt};
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use http::request::Parts;
use sea_orm::DatabaseConnection;
use std::error::Error;

use crate::routes::error::ApiError;

/// The authenticated principal for one request, resolved from the bearer
/// token. The profile ids are loaded alongside the user so route handlers can
/// do ownership checks without another round trip.
#[derive(Clone, Debug)]
pub struct Session {
    pub user: User,
    pub student_id: Option<i32>,
    pub instructor_id: Option<i32>,
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| ApiError::Unauthorized)?;

        let Extension::<DatabaseConnection>(conn) = parts
            .extract::<Extension<DatabaseConnection>>()
            .await
            .map_err(|error| {
                tracing::error!(
                    error = &error as &dyn Error,
                    "database connection not found in app data"
                );
                ApiError::Internal
            })?;

        Self::from_db(&conn, bearer.token()).await
    }
}

impl Session {
    async fn from_db(conn: &DatabaseConnection, token: &str) -> Result<Self, ApiError> {
        let Some(db_user) = user::Query::find_by_token(conn, token).await? else {
            return Err(ApiError::Unauthorized);
        };

        let (student, instructor) = tokio::try_join!(
            student::Query::find_by_user_id(conn, db_user.id),
            instructor::Query::find_by_user_id(conn, db_user.id),
        )?;

        Ok(Self {
            user: db_user.into_model(),
            student_id: student.map(|student| student.id),
            instructor_id: instructor.map(|instructor| instructor.id),
        })
    }

    pub fn info(&self) -> SessionInfo {
        SessionInfo {
            user: self.user.clone(),
            student_id: self.student_id,
            instructor_id: self.instructor_id,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user.role == Role::Admin
    }

    pub fn require_admin(&self) -> Result<(), ApiError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(ApiError::Forbidden("administrator role required"))
        }
    }

    /// Passes for the user themselves or an administrator.
    pub fn require_self_or_admin(&self, user_id: i32) -> Result<(), ApiError> {
        if self.is_admin() || self.user.user_id == user_id {
            Ok(())
        } else {
            Err(ApiError::Forbidden("not allowed to act on another user"))
        }
    }

    /// Returns the caller's student profile id, or rejects. Administrators
    /// have no student profile and must act through the student endpoints on
    /// behalf of an explicit student id.
    pub fn require_student(&self) -> Result<i32, ApiError> {
        self.student_id
            .ok_or(ApiError::Forbidden("student profile required"))
    }

    pub fn require_instructor(&self) -> Result<i32, ApiError> {
        self.instructor_id
            .ok_or(ApiError::Forbidden("instructor profile required"))
    }

    /// Passes for the owning student or an administrator.
    pub fn require_student_or_admin(&self, student_id: i32) -> Result<(), ApiError> {
        if self.is_admin() || self.student_id == Some(student_id) {
            Ok(())
        } else {
            Err(ApiError::Forbidden("not allowed to act for another student"))
        }
    }

    /// Passes for the owning instructor or an administrator.
    pub fn require_instructor_or_admin(&self, instructor_id: i32) -> Result<(), ApiError> {
        if self.is_admin() || self.instructor_id == Some(instructor_id) {
            Ok(())
        } else {
            Err(ApiError::Forbidden("not allowed to act for another instructor"))
        }
    }
}
