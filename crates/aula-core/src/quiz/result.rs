use aula_db::quiz::{quiz, result};
use aula_db::student;
use aula_entity::quiz::result::Model;
use sea_orm::DatabaseConnection;

use crate::error::ServiceError;

pub struct NewResult {
    pub quiz_id: i32,
    pub student_id: i32,
    pub score: i32,
}

pub async fn get_result(conn: &DatabaseConnection, id: i32) -> Result<Model, ServiceError> {
    result::Query::find_by_id(conn, id)
        .await?
        .ok_or(ServiceError::not_found("quiz result", id))
}

pub async fn list_results_by_quiz(conn: &DatabaseConnection, quiz_id: i32) -> Result<Vec<Model>, ServiceError> {
    if !quiz::Query::exists(conn, quiz_id).await? {
        return Err(ServiceError::not_found("quiz", quiz_id));
    }
    Ok(result::Query::find_by_quiz(conn, quiz_id).await?)
}

pub async fn list_results_by_student(conn: &DatabaseConnection, student_id: i32) -> Result<Vec<Model>, ServiceError> {
    Ok(result::Query::find_by_student(conn, student_id).await?)
}

/// Records a completed quiz attempt. A student gets exactly one result per
/// quiz; a second submission is a conflict, not an overwrite.
pub async fn create_result(conn: &DatabaseConnection, new: NewResult) -> Result<Model, ServiceError> {
    if !quiz::Query::exists(conn, new.quiz_id).await? {
        return Err(ServiceError::missing_reference("quiz", new.quiz_id));
    }
    if !student::Query::exists(conn, new.student_id).await? {
        return Err(ServiceError::missing_reference("student", new.student_id));
    }

    result::Mutation::create(conn, new.quiz_id, new.student_id, new.score)
        .await
        .map_err(|err| {
            ServiceError::on_unique(
                err,
                format!(
                    "student {} already has a result for quiz {}",
                    new.student_id, new.quiz_id
                ),
            )
        })
}

pub async fn delete_result(conn: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let _ = get_result(conn, id).await?;
    result::Mutation::delete(conn, id).await?;
    Ok(())
}
