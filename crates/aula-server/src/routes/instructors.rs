use axum::extract::Path;
use axum::routing::get;
use axum::{Extension, Json, Router};
use http::StatusCode;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use utoipa::ToSchema;

use aula_core::instructor::{InstructorPatch, NewInstructor};
use aula_model::convert::IntoModel;
use aula_model::course::Course;
use aula_model::instructor::Instructor;

use crate::routes::error::ApiError;
use crate::session::Session;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_instructors).post(create_instructor))
        .nest(
            "/{instructor_id}",
            Router::new()
                .route(
                    "/",
                    get(get_instructor).put(update_instructor).delete(delete_instructor),
                )
                .route("/courses", get(get_instructor_courses)),
        )
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/instructors",
    responses(
        (status = OK, body = Vec<Instructor>, description = "All instructor profiles"),
    ),
    tag = "v0/instructors",
    security(("token" = []))
)]
pub(crate) async fn list_instructors(
    _session: Session,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Json<Vec<Instructor>>, ApiError> {
    let instructors = aula_core::instructor::list_instructors(&conn).await?;
    Ok(Json(instructors.into_iter().map(IntoModel::into_model).collect()))
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InstructorPayload {
    user_id: i32,
    first_name: String,
    last_name: String,
    bio: Option<String>,
    profile_picture: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v0/instructors",
    request_body = InstructorPayload,
    responses(
        (status = CREATED, body = Instructor, description = "Instructor profile created"),
        (status = CONFLICT, description = "User already has an instructor profile"),
        (status = UNPROCESSABLE_ENTITY, description = "Unknown user or wrong role"),
    ),
    tag = "v0/instructors",
    security(("token" = []))
)]
pub(crate) async fn create_instructor(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Json(payload): Json<InstructorPayload>,
) -> Result<(StatusCode, Json<Instructor>), ApiError> {
    session.require_self_or_admin(payload.user_id)?;

    let instructor = aula_core::instructor::create_instructor(
        &conn,
        NewInstructor {
            user_id: payload.user_id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            bio: payload.bio,
            profile_picture: payload.profile_picture,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(instructor.into_model())))
}

#[utoipa::path(
    get,
    path = "/api/v0/instructors/{instructor_id}",
    responses(
        (status = OK, body = Instructor, description = "The requested instructor"),
        (status = NOT_FOUND, description = "No such instructor"),
    ),
    tag = "v0/instructors",
    security(("token" = []))
)]
pub(crate) async fn get_instructor(
    _session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(instructor_id): Path<i32>,
) -> Result<Json<Instructor>, ApiError> {
    let instructor = aula_core::instructor::get_instructor(&conn, instructor_id).await?;
    Ok(Json(instructor.into_model()))
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InstructorPatchPayload {
    user_id: Option<i32>,
    first_name: Option<String>,
    last_name: Option<String>,
    bio: Option<String>,
    profile_picture: Option<String>,
}

#[utoipa::path(
    put,
    path = "/api/v0/instructors/{instructor_id}",
    request_body = InstructorPatchPayload,
    responses(
        (status = OK, body = Instructor, description = "The updated instructor"),
    ),
    tag = "v0/instructors",
    security(("token" = []))
)]
pub(crate) async fn update_instructor(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(instructor_id): Path<i32>,
    Json(payload): Json<InstructorPatchPayload>,
) -> Result<Json<Instructor>, ApiError> {
    session.require_instructor_or_admin(instructor_id)?;
    // Relinking a profile to a different user account is an admin operation.
    if payload.user_id.is_some() {
        session.require_admin()?;
    }

    let instructor = aula_core::instructor::update_instructor(
        &conn,
        instructor_id,
        InstructorPatch {
            user_id: payload.user_id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            bio: payload.bio,
            profile_picture: payload.profile_picture,
        },
    )
    .await?;

    Ok(Json(instructor.into_model()))
}

#[utoipa::path(
    delete,
    path = "/api/v0/instructors/{instructor_id}",
    responses(
        (status = NO_CONTENT, description = "Instructor profile deleted"),
        (status = CONFLICT, description = "Instructor still has courses"),
    ),
    tag = "v0/instructors",
    security(("token" = []))
)]
pub(crate) async fn delete_instructor(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(instructor_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    session.require_admin()?;

    aula_core::instructor::delete_instructor(&conn, instructor_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v0/instructors/{instructor_id}/courses",
    responses(
        (status = OK, body = Vec<Course>, description = "The instructor's courses"),
    ),
    tag = "v0/instructors",
    security(("token" = []))
)]
pub(crate) async fn get_instructor_courses(
    _session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(instructor_id): Path<i32>,
) -> Result<Json<Vec<Course>>, ApiError> {
    let courses = aula_core::course::list_courses_by_instructor(&conn, instructor_id).await?;
    Ok(Json(courses.into_iter().map(IntoModel::into_model).collect()))
}
