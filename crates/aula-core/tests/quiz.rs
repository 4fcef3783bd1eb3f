mod common;

use crate::common::fixtures::{create_course, create_student};
use crate::common::setup_schema;
use aula_core::error::ServiceError;
use aula_core::quiz::answer::NewAnswer;
use aula_core::quiz::result::NewResult;
use aula_core::quiz::{NewQuiz, QuizPatch};
use sea_orm::Database;
use test_log::test;

async fn create_quiz(db: &sea_orm::DatabaseConnection) -> aula_entity::quiz::quiz::Model {
    let course = create_course(db).await;
    aula_core::quiz::create_quiz(
        db,
        NewQuiz {
            course_id: course.id,
            name: "Ownership basics".to_owned(),
            description: None,
        },
    )
    .await
    .unwrap()
}

#[test(tokio::test)]
async fn test_quiz_rejects_unknown_course() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let err = aula_core::quiz::create_quiz(
        db,
        NewQuiz {
            course_id: 999,
            name: "Ghost quiz".to_owned(),
            description: None,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ServiceError::MissingReference { entity: "course", id: 999 }));
}

#[test(tokio::test)]
async fn test_update_quiz() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let quiz = create_quiz(db).await;

    let updated = aula_core::quiz::update_quiz(
        db,
        quiz.id,
        QuizPatch {
            name: Some("Borrowing basics".to_owned()),
            description: Some("Lifetimes included".to_owned()),
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.name, "Borrowing basics");
    assert_eq!(updated.course_id, quiz.course_id);
}

#[test(tokio::test)]
async fn test_question_and_answer_flow() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let quiz = create_quiz(db).await;
    let question = aula_core::quiz::question::create_question(db, quiz.id, "What is a move?")
        .await
        .unwrap();

    aula_core::quiz::answer::create_answer(
        db,
        NewAnswer {
            question_id: question.id,
            text: "A transfer of ownership".to_owned(),
            answer_type: "single_choice".to_owned(),
            is_correct: true,
        },
    )
    .await
    .unwrap();

    let answers = aula_core::quiz::answer::list_answers_by_question(db, question.id)
        .await
        .unwrap();
    assert_eq!(answers.len(), 1);
    assert!(answers[0].is_correct);
}

#[test(tokio::test)]
async fn test_question_rejects_unknown_quiz() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let err = aula_core::quiz::question::create_question(db, 999, "Orphan question")
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::MissingReference { entity: "quiz", id: 999 }));
}

#[test(tokio::test)]
async fn test_delete_question_with_answers_conflicts() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let quiz = create_quiz(db).await;
    let question = aula_core::quiz::question::create_question(db, quiz.id, "What is a move?")
        .await
        .unwrap();
    aula_core::quiz::answer::create_answer(
        db,
        NewAnswer {
            question_id: question.id,
            text: "A transfer of ownership".to_owned(),
            answer_type: "single_choice".to_owned(),
            is_correct: true,
        },
    )
    .await
    .unwrap();

    let err = aula_core::quiz::question::delete_question(db, question.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[test(tokio::test)]
async fn test_delete_quiz_with_questions_conflicts() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let quiz = create_quiz(db).await;
    aula_core::quiz::question::create_question(db, quiz.id, "What is a move?")
        .await
        .unwrap();

    let err = aula_core::quiz::delete_quiz(db, quiz.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[test(tokio::test)]
async fn test_second_result_conflicts() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let quiz = create_quiz(db).await;
    let student = create_student(db, "ada@example.org").await;

    aula_core::quiz::result::create_result(
        db,
        NewResult {
            quiz_id: quiz.id,
            student_id: student.id,
            score: 80,
        },
    )
    .await
    .unwrap();

    let err = aula_core::quiz::result::create_result(
        db,
        NewResult {
            quiz_id: quiz.id,
            student_id: student.id,
            score: 95,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ServiceError::Conflict(_)));

    let results = aula_core::quiz::result::list_results_by_quiz(db, quiz.id).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].score, 80);
}

#[test(tokio::test)]
async fn test_result_rejects_unknown_student() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let quiz = create_quiz(db).await;

    let err = aula_core::quiz::result::create_result(
        db,
        NewResult {
            quiz_id: quiz.id,
            student_id: 999,
            score: 50,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ServiceError::MissingReference { entity: "student", id: 999 }));
}
