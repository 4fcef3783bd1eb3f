use axum::extract::Path;
use axum::routing::get;
use axum::{Extension, Json, Router};
use http::StatusCode;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use utoipa::ToSchema;

use aula_core::enrollment::NewEnrollment;
use aula_model::convert::IntoModel;
use aula_model::enrollment::Enrollment;

use crate::routes::error::ApiError;
use crate::session::Session;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_enrollments).post(create_enrollment))
        .route(
            "/{enrollment_id}",
            get(get_enrollment).put(update_enrollment).delete(delete_enrollment),
        )
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/enrollments",
    responses(
        (status = OK, body = Vec<Enrollment>, description = "All enrollments"),
    ),
    tag = "v0/enrollments",
    security(("token" = []))
)]
pub(crate) async fn list_enrollments(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Json<Vec<Enrollment>>, ApiError> {
    session.require_admin()?;

    let enrollments = aula_core::enrollment::list_enrollments(&conn).await?;
    Ok(Json(enrollments.into_iter().map(IntoModel::into_model).collect()))
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EnrollmentPayload {
    student_id: i32,
    course_id: i32,
    status: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v0/enrollments",
    request_body = EnrollmentPayload,
    responses(
        (status = CREATED, body = Enrollment, description = "Enrollment created"),
        (status = CONFLICT, description = "The student is already enrolled in the course"),
        (status = UNPROCESSABLE_ENTITY, description = "Unknown student or course"),
    ),
    tag = "v0/enrollments",
    security(("token" = []))
)]
pub(crate) async fn create_enrollment(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Json(payload): Json<EnrollmentPayload>,
) -> Result<(StatusCode, Json<Enrollment>), ApiError> {
    session.require_student_or_admin(payload.student_id)?;

    let enrollment = aula_core::enrollment::create_enrollment(
        &conn,
        NewEnrollment {
            student_id: payload.student_id,
            course_id: payload.course_id,
            status: payload.status.unwrap_or_else(|| "active".to_owned()),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(enrollment.into_model())))
}

#[utoipa::path(
    get,
    path = "/api/v0/enrollments/{enrollment_id}",
    responses(
        (status = OK, body = Enrollment, description = "The requested enrollment"),
        (status = NOT_FOUND, description = "No such enrollment"),
    ),
    tag = "v0/enrollments",
    security(("token" = []))
)]
pub(crate) async fn get_enrollment(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(enrollment_id): Path<i32>,
) -> Result<Json<Enrollment>, ApiError> {
    let enrollment = aula_core::enrollment::get_enrollment(&conn, enrollment_id).await?;
    session.require_student_or_admin(enrollment.student_id)?;

    Ok(Json(enrollment.into_model()))
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EnrollmentStatusPayload {
    status: String,
}

#[utoipa::path(
    put,
    path = "/api/v0/enrollments/{enrollment_id}",
    request_body = EnrollmentStatusPayload,
    responses(
        (status = OK, body = Enrollment, description = "The updated enrollment"),
    ),
    tag = "v0/enrollments",
    security(("token" = []))
)]
pub(crate) async fn update_enrollment(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(enrollment_id): Path<i32>,
    Json(payload): Json<EnrollmentStatusPayload>,
) -> Result<Json<Enrollment>, ApiError> {
    let enrollment = aula_core::enrollment::get_enrollment(&conn, enrollment_id).await?;
    session.require_student_or_admin(enrollment.student_id)?;

    let enrollment =
        aula_core::enrollment::update_enrollment_status(&conn, enrollment_id, payload.status).await?;

    Ok(Json(enrollment.into_model()))
}

#[utoipa::path(
    delete,
    path = "/api/v0/enrollments/{enrollment_id}",
    responses(
        (status = NO_CONTENT, description = "Enrollment deleted"),
    ),
    tag = "v0/enrollments",
    security(("token" = []))
)]
pub(crate) async fn delete_enrollment(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(enrollment_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let enrollment = aula_core::enrollment::get_enrollment(&conn, enrollment_id).await?;
    session.require_student_or_admin(enrollment.student_id)?;

    aula_core::enrollment::delete_enrollment(&conn, enrollment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
