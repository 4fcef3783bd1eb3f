mod common;

use crate::common::fixtures::{create_test_quiz, create_test_student};
use crate::common::setup_schema;
use aula_db::quiz::{answer, question, result};
use sea_orm::{Database, SqlErr};
use test_log::test;

#[test(tokio::test)]
async fn test_questions_and_answers() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let quiz = create_test_quiz(db).await;

    let q1 = question::Mutation::create(db, quiz.id, "What does the borrow checker do?")
        .await
        .unwrap();
    question::Mutation::create(db, quiz.id, "What is a lifetime?").await.unwrap();

    let questions = question::Query::find_by_quiz(db, quiz.id).await.unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(question::Query::count_by_quiz(db, quiz.id).await.unwrap(), 2);

    answer::Mutation::create(db, q1.id, "Tracks aliasing", "single_choice", true)
        .await
        .unwrap();
    answer::Mutation::create(db, q1.id, "Collects garbage", "single_choice", false)
        .await
        .unwrap();

    let answers = answer::Query::find_by_question(db, q1.id).await.unwrap();
    assert_eq!(answers.len(), 2);
    assert_eq!(answers.iter().filter(|a| a.is_correct).count(), 1);
}

#[test(tokio::test)]
async fn test_one_result_per_student_and_quiz() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let quiz = create_test_quiz(db).await;
    let student = create_test_student(db, "ada@example.org").await;

    result::Mutation::create(db, quiz.id, student.id, 80).await.unwrap();
    let err = result::Mutation::create(db, quiz.id, student.id, 95).await.unwrap_err();

    assert!(matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))));

    let recorded = result::Query::find_by_student_and_quiz(db, student.id, quiz.id)
        .await
        .unwrap()
        .unwrap();
    // The first submission stands.
    assert_eq!(recorded.score, 80);
}

#[test(tokio::test)]
async fn test_results_by_quiz_and_student() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let quiz = create_test_quiz(db).await;
    let ada = create_test_student(db, "ada@example.org").await;
    let mary = create_test_student(db, "mary@example.org").await;

    result::Mutation::create(db, quiz.id, ada.id, 70).await.unwrap();
    result::Mutation::create(db, quiz.id, mary.id, 90).await.unwrap();

    let by_quiz = result::Query::find_by_quiz(db, quiz.id).await.unwrap();
    assert_eq!(by_quiz.len(), 2);

    let by_student = result::Query::find_by_student(db, ada.id).await.unwrap();
    assert_eq!(by_student.len(), 1);
    assert_eq!(by_student[0].score, 70);
}

#[test(tokio::test)]
async fn test_delete_question() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let quiz = create_test_quiz(db).await;
    let question = question::Mutation::create(db, quiz.id, "Ephemeral").await.unwrap();

    let affected = question::Mutation::delete(db, question.id).await.unwrap();
    assert_eq!(affected, 1);
    assert_eq!(question::Query::count_by_quiz(db, quiz.id).await.unwrap(), 0);
}
