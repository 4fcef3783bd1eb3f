use aula_db::quiz::{answer, question, quiz};
use aula_entity::quiz::question::{ActiveModel, Model};
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::DatabaseConnection;

use crate::error::ServiceError;

pub async fn get_question(conn: &DatabaseConnection, id: i32) -> Result<Model, ServiceError> {
    question::Query::find_by_id(conn, id)
        .await?
        .ok_or(ServiceError::not_found("quiz question", id))
}

pub async fn list_questions_by_quiz(conn: &DatabaseConnection, quiz_id: i32) -> Result<Vec<Model>, ServiceError> {
    if !quiz::Query::exists(conn, quiz_id).await? {
        return Err(ServiceError::not_found("quiz", quiz_id));
    }
    Ok(question::Query::find_by_quiz(conn, quiz_id).await?)
}

pub async fn create_question(conn: &DatabaseConnection, quiz_id: i32, text: &str) -> Result<Model, ServiceError> {
    if !quiz::Query::exists(conn, quiz_id).await? {
        return Err(ServiceError::missing_reference("quiz", quiz_id));
    }
    Ok(question::Mutation::create(conn, quiz_id, text).await?)
}

pub async fn update_question(conn: &DatabaseConnection, id: i32, text: String) -> Result<Model, ServiceError> {
    let _ = get_question(conn, id).await?;

    let question = ActiveModel {
        id: Unchanged(id),
        text: Set(text),
        ..Default::default()
    };
    Ok(question::Mutation::update(conn, question).await?)
}

pub async fn delete_question(conn: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let _ = get_question(conn, id).await?;

    let answers = answer::Query::count_by_question(conn, id).await?;
    if answers > 0 {
        return Err(ServiceError::Conflict(format!(
            "question {id} still has {answers} answer(s)"
        )));
    }

    question::Mutation::delete(conn, id).await?;
    Ok(())
}
