use aula_db::{enrollment, quiz::result, student, user};
use aula_entity::student::{ActiveModel, Model};
use aula_entity::user::Role;
use chrono::NaiveDate;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::DatabaseConnection;

use crate::error::ServiceError;

pub struct NewStudent {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub profile_picture: Option<String>,
}

pub struct StudentPatch {
    pub user_id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub profile_picture: Option<String>,
}

pub async fn get_student(conn: &DatabaseConnection, id: i32) -> Result<Model, ServiceError> {
    student::Query::find_by_id(conn, id)
        .await?
        .ok_or(ServiceError::not_found("student", id))
}

pub async fn list_students(conn: &DatabaseConnection) -> Result<Vec<Model>, ServiceError> {
    Ok(student::Query::find_all(conn).await?)
}

pub async fn create_student(conn: &DatabaseConnection, new: NewStudent) -> Result<Model, ServiceError> {
    check_linkable_user(conn, new.user_id, None).await?;

    let student = student::Mutation::create(
        conn,
        new.user_id,
        &new.first_name,
        &new.last_name,
        new.date_of_birth,
        new.profile_picture,
    )
    .await
    .map_err(|err| {
        ServiceError::on_unique(
            err,
            format!("user {} is already linked to a student profile", new.user_id),
        )
    })?;
    tracing::info!(student_id = student.id, user_id = student.user_id, "created student profile");
    Ok(student)
}

pub async fn update_student(conn: &DatabaseConnection, id: i32, patch: StudentPatch) -> Result<Model, ServiceError> {
    let current = get_student(conn, id).await?;

    let mut student = ActiveModel {
        id: Unchanged(id),
        ..Default::default()
    };
    if let Some(user_id) = patch.user_id {
        if user_id != current.user_id {
            check_linkable_user(conn, user_id, Some(id)).await?;
        }
        student.user_id = Set(user_id);
    }
    if let Some(first_name) = patch.first_name {
        student.first_name = Set(first_name);
    }
    if let Some(last_name) = patch.last_name {
        student.last_name = Set(last_name);
    }
    if let Some(date_of_birth) = patch.date_of_birth {
        student.date_of_birth = Set(date_of_birth);
    }
    if let Some(profile_picture) = patch.profile_picture {
        student.profile_picture = Set(Some(profile_picture));
    }

    student::Mutation::update(conn, student)
        .await
        .map_err(|err| ServiceError::on_unique(err, "that user is already linked to a student profile".to_owned()))
}

pub async fn delete_student(conn: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let _ = get_student(conn, id).await?;

    let enrollments = enrollment::Query::count_by_student(conn, id).await?;
    let results = result::Query::count_by_student(conn, id).await?;
    if enrollments > 0 || results > 0 {
        return Err(ServiceError::Conflict(format!(
            "student {id} still has {enrollments} enrollment(s) and {results} quiz result(s)"
        )));
    }

    student::Mutation::delete(conn, id).await?;
    Ok(())
}

/// A student profile may only be linked to an existing user with the student
/// role that is not already linked to a different profile.
async fn check_linkable_user(
    conn: &DatabaseConnection,
    user_id: i32,
    relinking: Option<i32>,
) -> Result<(), ServiceError> {
    let user = user::Query::find_by_id(conn, user_id)
        .await?
        .ok_or(ServiceError::missing_reference("user", user_id))?;
    if user.role != Role::Student {
        return Err(ServiceError::Validation(format!(
            "user {user_id} does not have the student role"
        )));
    }
    if let Some(linked) = student::Query::find_by_user_id(conn, user_id).await? {
        if relinking != Some(linked.id) {
            return Err(ServiceError::Conflict(format!(
                "user {user_id} is already linked to student {}",
                linked.id
            )));
        }
    }
    Ok(())
}
