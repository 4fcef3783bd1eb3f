use axum::extract::Path;
use axum::routing::get;
use axum::{Extension, Json, Router};
use http::StatusCode;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use utoipa::ToSchema;

use aula_core::course::{CoursePatch, NewCourse};
use aula_core::course_material::{MaterialPatch, NewMaterial};
use aula_core::error::ServiceError;
use aula_model::convert::IntoModel;
use aula_model::course::Course;
use aula_model::course_material::CourseMaterial;
use aula_model::enrollment::Enrollment;
use aula_model::quiz::quiz::Quiz;

use crate::routes::error::ApiError;
use crate::session::Session;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .nest(
            "/{course_id}",
            Router::new()
                .route("/", get(get_course).put(update_course).delete(delete_course))
                .route(
                    "/materials",
                    get(get_material)
                        .post(create_material)
                        .put(update_material)
                        .delete(delete_material),
                )
                .route("/enrollments", get(get_course_enrollments))
                .route("/quizzes", get(get_course_quizzes)),
        )
        .with_state(())
}

/// Loads the course and checks that the caller may modify it.
async fn require_course_owner(
    conn: &DatabaseConnection,
    session: &Session,
    course_id: i32,
) -> Result<aula_entity::course::Model, ApiError> {
    let course = aula_core::course::get_course(conn, course_id).await?;
    session.require_instructor_or_admin(course.instructor_id)?;
    Ok(course)
}

#[utoipa::path(
    get,
    path = "/api/v0/courses",
    responses(
        (status = OK, body = Vec<Course>, description = "All courses"),
    ),
    tag = "v0/courses",
    security(("token" = []))
)]
pub(crate) async fn list_courses(
    _session: Session,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Json<Vec<Course>>, ApiError> {
    let courses = aula_core::course::list_courses(&conn).await?;
    Ok(Json(courses.into_iter().map(IntoModel::into_model).collect()))
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CoursePayload {
    instructor_id: i32,
    category_id: i32,
    name: String,
    description: Option<String>,
    image: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v0/courses",
    request_body = CoursePayload,
    responses(
        (status = CREATED, body = Course, description = "Course created"),
        (status = UNPROCESSABLE_ENTITY, description = "Unknown instructor or category"),
    ),
    tag = "v0/courses",
    security(("token" = []))
)]
pub(crate) async fn create_course(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Json(payload): Json<CoursePayload>,
) -> Result<(StatusCode, Json<Course>), ApiError> {
    session.require_instructor_or_admin(payload.instructor_id)?;

    let course = aula_core::course::create_course(
        &conn,
        NewCourse {
            instructor_id: payload.instructor_id,
            category_id: payload.category_id,
            name: payload.name,
            description: payload.description,
            image: payload.image,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(course.into_model())))
}

#[utoipa::path(
    get,
    path = "/api/v0/courses/{course_id}",
    responses(
        (status = OK, body = Course, description = "The requested course"),
        (status = NOT_FOUND, description = "No such course"),
    ),
    tag = "v0/courses",
    security(("token" = []))
)]
pub(crate) async fn get_course(
    _session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<i32>,
) -> Result<Json<Course>, ApiError> {
    let course = aula_core::course::get_course(&conn, course_id).await?;
    Ok(Json(course.into_model()))
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CoursePatchPayload {
    instructor_id: Option<i32>,
    category_id: Option<i32>,
    name: Option<String>,
    description: Option<String>,
    image: Option<String>,
}

#[utoipa::path(
    put,
    path = "/api/v0/courses/{course_id}",
    request_body = CoursePatchPayload,
    responses(
        (status = OK, body = Course, description = "The updated course"),
        (status = UNPROCESSABLE_ENTITY, description = "Unknown instructor or category"),
    ),
    tag = "v0/courses",
    security(("token" = []))
)]
pub(crate) async fn update_course(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<i32>,
    Json(payload): Json<CoursePatchPayload>,
) -> Result<Json<Course>, ApiError> {
    require_course_owner(&conn, &session, course_id).await?;
    // Handing a course to another instructor is an admin operation.
    if payload.instructor_id.is_some() {
        session.require_admin()?;
    }

    let course = aula_core::course::update_course(
        &conn,
        course_id,
        CoursePatch {
            instructor_id: payload.instructor_id,
            category_id: payload.category_id,
            name: payload.name,
            description: payload.description,
            image: payload.image,
        },
    )
    .await?;

    Ok(Json(course.into_model()))
}

#[utoipa::path(
    delete,
    path = "/api/v0/courses/{course_id}",
    responses(
        (status = NO_CONTENT, description = "Course deleted"),
        (status = CONFLICT, description = "Course still has materials, quizzes or enrollments"),
    ),
    tag = "v0/courses",
    security(("token" = []))
)]
pub(crate) async fn delete_course(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    require_course_owner(&conn, &session, course_id).await?;

    aula_core::course::delete_course(&conn, course_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v0/courses/{course_id}/materials",
    responses(
        (status = OK, body = CourseMaterial, description = "The course's material record"),
        (status = NOT_FOUND, description = "Course unknown or no material uploaded yet"),
    ),
    tag = "v0/courses",
    security(("token" = []))
)]
pub(crate) async fn get_material(
    _session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<i32>,
) -> Result<Json<CourseMaterial>, ApiError> {
    let material = aula_core::course_material::get_material_by_course(&conn, course_id)
        .await?
        .ok_or(ServiceError::not_found("course material", course_id))?;

    Ok(Json(material.into_model()))
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MaterialPayload {
    title: String,
    material_type: String,
    file_path: String,
}

#[utoipa::path(
    post,
    path = "/api/v0/courses/{course_id}/materials",
    request_body = MaterialPayload,
    responses(
        (status = CREATED, body = CourseMaterial, description = "Material record created"),
        (status = CONFLICT, description = "The course already has a material record"),
    ),
    tag = "v0/courses",
    security(("token" = []))
)]
pub(crate) async fn create_material(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<i32>,
    Json(payload): Json<MaterialPayload>,
) -> Result<(StatusCode, Json<CourseMaterial>), ApiError> {
    require_course_owner(&conn, &session, course_id).await?;

    let material = aula_core::course_material::create_material(
        &conn,
        NewMaterial {
            course_id,
            title: payload.title,
            material_type: payload.material_type,
            file_path: payload.file_path,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(material.into_model())))
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MaterialPatchPayload {
    title: Option<String>,
    material_type: Option<String>,
    file_path: Option<String>,
}

#[utoipa::path(
    put,
    path = "/api/v0/courses/{course_id}/materials",
    request_body = MaterialPatchPayload,
    responses(
        (status = OK, body = CourseMaterial, description = "The updated material record"),
        (status = NOT_FOUND, description = "Course unknown or no material uploaded yet"),
    ),
    tag = "v0/courses",
    security(("token" = []))
)]
pub(crate) async fn update_material(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<i32>,
    Json(payload): Json<MaterialPatchPayload>,
) -> Result<Json<CourseMaterial>, ApiError> {
    require_course_owner(&conn, &session, course_id).await?;

    let material = aula_core::course_material::get_material_by_course(&conn, course_id)
        .await?
        .ok_or(ServiceError::not_found("course material", course_id))?;

    let material = aula_core::course_material::update_material(
        &conn,
        material.id,
        MaterialPatch {
            title: payload.title,
            material_type: payload.material_type,
            file_path: payload.file_path,
        },
    )
    .await?;

    Ok(Json(material.into_model()))
}

#[utoipa::path(
    delete,
    path = "/api/v0/courses/{course_id}/materials",
    responses(
        (status = NO_CONTENT, description = "Material record deleted"),
        (status = NOT_FOUND, description = "Course unknown or no material uploaded yet"),
    ),
    tag = "v0/courses",
    security(("token" = []))
)]
pub(crate) async fn delete_material(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    require_course_owner(&conn, &session, course_id).await?;

    let material = aula_core::course_material::get_material_by_course(&conn, course_id)
        .await?
        .ok_or(ServiceError::not_found("course material", course_id))?;

    aula_core::course_material::delete_material(&conn, material.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v0/courses/{course_id}/enrollments",
    responses(
        (status = OK, body = Vec<Enrollment>, description = "Enrollments for the course"),
    ),
    tag = "v0/courses",
    security(("token" = []))
)]
pub(crate) async fn get_course_enrollments(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<i32>,
) -> Result<Json<Vec<Enrollment>>, ApiError> {
    require_course_owner(&conn, &session, course_id).await?;

    let enrollments = aula_core::enrollment::list_enrollments_by_course(&conn, course_id).await?;
    Ok(Json(enrollments.into_iter().map(IntoModel::into_model).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v0/courses/{course_id}/quizzes",
    responses(
        (status = OK, body = Vec<Quiz>, description = "Quizzes belonging to the course"),
    ),
    tag = "v0/courses",
    security(("token" = []))
)]
pub(crate) async fn get_course_quizzes(
    _session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<i32>,
) -> Result<Json<Vec<Quiz>>, ApiError> {
    let _ = aula_core::course::get_course(&conn, course_id).await?;

    let quizzes = aula_core::quiz::list_quizzes_by_course(&conn, course_id).await?;
    Ok(Json(quizzes.into_iter().map(IntoModel::into_model).collect()))
}
