use aula_db::{category, course, course_material, enrollment, instructor, quiz};
use aula_entity::course::{ActiveModel, Model};
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::DatabaseConnection;

use crate::error::ServiceError;

pub struct NewCourse {
    pub instructor_id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

pub struct CoursePatch {
    pub instructor_id: Option<i32>,
    pub category_id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

pub async fn get_course(conn: &DatabaseConnection, id: i32) -> Result<Model, ServiceError> {
    course::Query::find_by_id(conn, id)
        .await?
        .ok_or(ServiceError::not_found("course", id))
}

pub async fn list_courses(conn: &DatabaseConnection) -> Result<Vec<Model>, ServiceError> {
    Ok(course::Query::find_all(conn).await?)
}

pub async fn list_courses_by_instructor(conn: &DatabaseConnection, instructor_id: i32) -> Result<Vec<Model>, ServiceError> {
    Ok(course::Query::find_by_instructor(conn, instructor_id).await?)
}

pub async fn create_course(conn: &DatabaseConnection, new: NewCourse) -> Result<Model, ServiceError> {
    if !instructor::Query::exists(conn, new.instructor_id).await? {
        return Err(ServiceError::missing_reference("instructor", new.instructor_id));
    }
    if !category::Query::exists(conn, new.category_id).await? {
        return Err(ServiceError::missing_reference("category", new.category_id));
    }

    let course = course::Mutation::create(
        conn,
        new.instructor_id,
        new.category_id,
        &new.name,
        new.description,
        new.image,
    )
    .await?;
    tracing::info!(course_id = course.id, instructor_id = course.instructor_id, "created course");
    Ok(course)
}

pub async fn update_course(conn: &DatabaseConnection, id: i32, patch: CoursePatch) -> Result<Model, ServiceError> {
    let _ = get_course(conn, id).await?;

    let mut course = ActiveModel {
        id: Unchanged(id),
        ..Default::default()
    };
    if let Some(instructor_id) = patch.instructor_id {
        if !instructor::Query::exists(conn, instructor_id).await? {
            return Err(ServiceError::missing_reference("instructor", instructor_id));
        }
        course.instructor_id = Set(instructor_id);
    }
    if let Some(category_id) = patch.category_id {
        if !category::Query::exists(conn, category_id).await? {
            return Err(ServiceError::missing_reference("category", category_id));
        }
        course.category_id = Set(category_id);
    }
    if let Some(name) = patch.name {
        course.name = Set(name);
    }
    if let Some(description) = patch.description {
        course.description = Set(Some(description));
    }
    if let Some(image) = patch.image {
        course.image = Set(Some(image));
    }

    Ok(course::Mutation::update(conn, course).await?)
}

/// Deletes a course only when nothing references it anymore. Materials,
/// quizzes and enrollments have to be removed first; silently orphaning them
/// is not an option.
pub async fn delete_course(conn: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let _ = get_course(conn, id).await?;

    let materials = course_material::Query::count_by_course(conn, id).await?;
    let quizzes = quiz::quiz::Query::count_by_course(conn, id).await?;
    let enrollments = enrollment::Query::count_by_course(conn, id).await?;
    if materials > 0 || quizzes > 0 || enrollments > 0 {
        return Err(ServiceError::Conflict(format!(
            "course {id} still has {materials} material(s), {quizzes} quiz(zes) and {enrollments} enrollment(s)"
        )));
    }

    course::Mutation::delete(conn, id).await?;
    Ok(())
}
