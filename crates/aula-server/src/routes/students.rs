use axum::extract::Path;
use axum::routing::get;
use axum::{Extension, Json, Router};
use chrono::NaiveDate;
use http::StatusCode;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use utoipa::ToSchema;

use aula_core::student::{NewStudent, StudentPatch};
use aula_model::convert::IntoModel;
use aula_model::enrollment::Enrollment;
use aula_model::quiz::result::QuizResult;
use aula_model::student::Student;

use crate::routes::error::ApiError;
use crate::session::Session;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_students).post(create_student))
        .nest(
            "/{student_id}",
            Router::new()
                .route("/", get(get_student).put(update_student).delete(delete_student))
                .route("/enrollments", get(get_student_enrollments))
                .route("/results", get(get_student_results)),
        )
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/students",
    responses(
        (status = OK, body = Vec<Student>, description = "All student profiles"),
    ),
    tag = "v0/students",
    security(("token" = []))
)]
pub(crate) async fn list_students(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Json<Vec<Student>>, ApiError> {
    session.require_admin()?;

    let students = aula_core::student::list_students(&conn).await?;
    Ok(Json(students.into_iter().map(IntoModel::into_model).collect()))
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StudentPayload {
    user_id: i32,
    first_name: String,
    last_name: String,
    date_of_birth: NaiveDate,
    profile_picture: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v0/students",
    request_body = StudentPayload,
    responses(
        (status = CREATED, body = Student, description = "Student profile created"),
        (status = CONFLICT, description = "User already has a student profile"),
        (status = UNPROCESSABLE_ENTITY, description = "Unknown user or wrong role"),
    ),
    tag = "v0/students",
    security(("token" = []))
)]
pub(crate) async fn create_student(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Json(payload): Json<StudentPayload>,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    session.require_self_or_admin(payload.user_id)?;

    let student = aula_core::student::create_student(
        &conn,
        NewStudent {
            user_id: payload.user_id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            date_of_birth: payload.date_of_birth,
            profile_picture: payload.profile_picture,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(student.into_model())))
}

#[utoipa::path(
    get,
    path = "/api/v0/students/{student_id}",
    responses(
        (status = OK, body = Student, description = "The requested student"),
        (status = NOT_FOUND, description = "No such student"),
    ),
    tag = "v0/students",
    security(("token" = []))
)]
pub(crate) async fn get_student(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(student_id): Path<i32>,
) -> Result<Json<Student>, ApiError> {
    session.require_student_or_admin(student_id)?;

    let student = aula_core::student::get_student(&conn, student_id).await?;
    Ok(Json(student.into_model()))
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StudentPatchPayload {
    user_id: Option<i32>,
    first_name: Option<String>,
    last_name: Option<String>,
    date_of_birth: Option<NaiveDate>,
    profile_picture: Option<String>,
}

#[utoipa::path(
    put,
    path = "/api/v0/students/{student_id}",
    request_body = StudentPatchPayload,
    responses(
        (status = OK, body = Student, description = "The updated student"),
    ),
    tag = "v0/students",
    security(("token" = []))
)]
pub(crate) async fn update_student(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(student_id): Path<i32>,
    Json(payload): Json<StudentPatchPayload>,
) -> Result<Json<Student>, ApiError> {
    session.require_student_or_admin(student_id)?;
    // Relinking a profile to a different user account is an admin operation.
    if payload.user_id.is_some() {
        session.require_admin()?;
    }

    let student = aula_core::student::update_student(
        &conn,
        student_id,
        StudentPatch {
            user_id: payload.user_id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            date_of_birth: payload.date_of_birth,
            profile_picture: payload.profile_picture,
        },
    )
    .await?;

    Ok(Json(student.into_model()))
}

#[utoipa::path(
    delete,
    path = "/api/v0/students/{student_id}",
    responses(
        (status = NO_CONTENT, description = "Student profile deleted"),
        (status = CONFLICT, description = "Student still has enrollments or quiz results"),
    ),
    tag = "v0/students",
    security(("token" = []))
)]
pub(crate) async fn delete_student(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(student_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    session.require_admin()?;

    aula_core::student::delete_student(&conn, student_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v0/students/{student_id}/enrollments",
    responses(
        (status = OK, body = Vec<Enrollment>, description = "The student's enrollments"),
    ),
    tag = "v0/students",
    security(("token" = []))
)]
pub(crate) async fn get_student_enrollments(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(student_id): Path<i32>,
) -> Result<Json<Vec<Enrollment>>, ApiError> {
    session.require_student_or_admin(student_id)?;

    let enrollments = aula_core::enrollment::list_enrollments_by_student(&conn, student_id).await?;
    Ok(Json(enrollments.into_iter().map(IntoModel::into_model).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v0/students/{student_id}/results",
    responses(
        (status = OK, body = Vec<QuizResult>, description = "The student's quiz results"),
    ),
    tag = "v0/students",
    security(("token" = []))
)]
pub(crate) async fn get_student_results(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(student_id): Path<i32>,
) -> Result<Json<Vec<QuizResult>>, ApiError> {
    session.require_student_or_admin(student_id)?;

    let results = aula_core::quiz::result::list_results_by_student(&conn, student_id).await?;
    Ok(Json(results.into_iter().map(IntoModel::into_model).collect()))
}
