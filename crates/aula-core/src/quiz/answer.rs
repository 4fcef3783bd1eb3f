use aula_db::quiz::{answer, question};
use aula_entity::quiz::answer::{ActiveModel, Model};
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::DatabaseConnection;

use crate::error::ServiceError;

pub struct NewAnswer {
    pub question_id: i32,
    pub text: String,
    pub answer_type: String,
    pub is_correct: bool,
}

pub struct AnswerPatch {
    pub text: Option<String>,
    pub answer_type: Option<String>,
    pub is_correct: Option<bool>,
}

pub async fn get_answer(conn: &DatabaseConnection, id: i32) -> Result<Model, ServiceError> {
    answer::Query::find_by_id(conn, id)
        .await?
        .ok_or(ServiceError::not_found("quiz answer", id))
}

pub async fn list_answers_by_question(conn: &DatabaseConnection, question_id: i32) -> Result<Vec<Model>, ServiceError> {
    if !question::Query::exists(conn, question_id).await? {
        return Err(ServiceError::not_found("quiz question", question_id));
    }
    Ok(answer::Query::find_by_question(conn, question_id).await?)
}

pub async fn create_answer(conn: &DatabaseConnection, new: NewAnswer) -> Result<Model, ServiceError> {
    if !question::Query::exists(conn, new.question_id).await? {
        return Err(ServiceError::missing_reference("quiz question", new.question_id));
    }
    Ok(answer::Mutation::create(conn, new.question_id, &new.text, &new.answer_type, new.is_correct).await?)
}

pub async fn update_answer(conn: &DatabaseConnection, id: i32, patch: AnswerPatch) -> Result<Model, ServiceError> {
    let _ = get_answer(conn, id).await?;

    let mut answer = ActiveModel {
        id: Unchanged(id),
        ..Default::default()
    };
    if let Some(text) = patch.text {
        answer.text = Set(text);
    }
    if let Some(answer_type) = patch.answer_type {
        answer.answer_type = Set(answer_type);
    }
    if let Some(is_correct) = patch.is_correct {
        answer.is_correct = Set(is_correct);
    }

    Ok(answer::Mutation::update(conn, answer).await?)
}

pub async fn delete_answer(conn: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let _ = get_answer(conn, id).await?;
    answer::Mutation::delete(conn, id).await?;
    Ok(())
}
