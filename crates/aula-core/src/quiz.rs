pub mod answer;
pub mod question;
pub mod result;

use aula_db::{course, quiz};
use aula_entity::quiz::quiz::{ActiveModel, Model};
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::DatabaseConnection;

use crate::error::ServiceError;

pub struct NewQuiz {
    pub course_id: i32,
    pub name: String,
    pub description: Option<String>,
}

pub struct QuizPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub async fn get_quiz(conn: &DatabaseConnection, id: i32) -> Result<Model, ServiceError> {
    quiz::quiz::Query::find_by_id(conn, id)
        .await?
        .ok_or(ServiceError::not_found("quiz", id))
}

pub async fn list_quizzes(conn: &DatabaseConnection) -> Result<Vec<Model>, ServiceError> {
    Ok(quiz::quiz::Query::find_all(conn).await?)
}

pub async fn list_quizzes_by_course(conn: &DatabaseConnection, course_id: i32) -> Result<Vec<Model>, ServiceError> {
    Ok(quiz::quiz::Query::find_by_course(conn, course_id).await?)
}

pub async fn create_quiz(conn: &DatabaseConnection, new: NewQuiz) -> Result<Model, ServiceError> {
    if !course::Query::exists(conn, new.course_id).await? {
        return Err(ServiceError::missing_reference("course", new.course_id));
    }

    let quiz = quiz::quiz::Mutation::create(conn, new.course_id, &new.name, new.description).await?;
    tracing::info!(quiz_id = quiz.id, course_id = quiz.course_id, "created quiz");
    Ok(quiz)
}

pub async fn update_quiz(conn: &DatabaseConnection, id: i32, patch: QuizPatch) -> Result<Model, ServiceError> {
    let _ = get_quiz(conn, id).await?;

    let mut quiz = ActiveModel {
        id: Unchanged(id),
        ..Default::default()
    };
    if let Some(name) = patch.name {
        quiz.name = Set(name);
    }
    if let Some(description) = patch.description {
        quiz.description = Set(Some(description));
    }

    Ok(quiz::quiz::Mutation::update(conn, quiz).await?)
}

pub async fn delete_quiz(conn: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let _ = get_quiz(conn, id).await?;

    let questions = quiz::question::Query::count_by_quiz(conn, id).await?;
    let results = quiz::result::Query::count_by_quiz(conn, id).await?;
    if questions > 0 || results > 0 {
        return Err(ServiceError::Conflict(format!(
            "quiz {id} still has {questions} question(s) and {results} result(s)"
        )));
    }

    quiz::quiz::Mutation::delete(conn, id).await?;
    Ok(())
}
