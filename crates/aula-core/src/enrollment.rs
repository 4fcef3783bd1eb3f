use aula_db::{course, enrollment, student};
use aula_entity::enrollment::{ActiveModel, Model};
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::DatabaseConnection;

use crate::error::ServiceError;

pub struct NewEnrollment {
    pub student_id: i32,
    pub course_id: i32,
    pub status: String,
}

pub async fn get_enrollment(conn: &DatabaseConnection, id: i32) -> Result<Model, ServiceError> {
    enrollment::Query::find_by_id(conn, id)
        .await?
        .ok_or(ServiceError::not_found("enrollment", id))
}

pub async fn list_enrollments(conn: &DatabaseConnection) -> Result<Vec<Model>, ServiceError> {
    Ok(enrollment::Query::find_all(conn).await?)
}

pub async fn list_enrollments_by_student(conn: &DatabaseConnection, student_id: i32) -> Result<Vec<Model>, ServiceError> {
    Ok(enrollment::Query::find_by_student(conn, student_id).await?)
}

pub async fn list_enrollments_by_course(conn: &DatabaseConnection, course_id: i32) -> Result<Vec<Model>, ServiceError> {
    Ok(enrollment::Query::find_by_course(conn, course_id).await?)
}

pub async fn create_enrollment(conn: &DatabaseConnection, new: NewEnrollment) -> Result<Model, ServiceError> {
    if !student::Query::exists(conn, new.student_id).await? {
        return Err(ServiceError::missing_reference("student", new.student_id));
    }
    if !course::Query::exists(conn, new.course_id).await? {
        return Err(ServiceError::missing_reference("course", new.course_id));
    }

    let enrollment = enrollment::Mutation::create(conn, new.student_id, new.course_id, &new.status)
        .await
        .map_err(|err| {
            ServiceError::on_unique(
                err,
                format!(
                    "student {} is already enrolled in course {}",
                    new.student_id, new.course_id
                ),
            )
        })?;
    tracing::info!(
        enrollment_id = enrollment.id,
        student_id = enrollment.student_id,
        course_id = enrollment.course_id,
        "created enrollment"
    );
    Ok(enrollment)
}

/// The status field is free text and overwritten wholesale; there is no
/// validated transition set.
pub async fn update_enrollment_status(conn: &DatabaseConnection, id: i32, status: String) -> Result<Model, ServiceError> {
    let _ = get_enrollment(conn, id).await?;

    let enrollment = ActiveModel {
        id: Unchanged(id),
        status: Set(status),
        ..Default::default()
    };
    Ok(enrollment::Mutation::update(conn, enrollment).await?)
}

pub async fn delete_enrollment(conn: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let _ = get_enrollment(conn, id).await?;
    enrollment::Mutation::delete(conn, id).await?;
    Ok(())
}
