mod common;

use crate::common::fixtures::{create_test_course, create_test_student};
use crate::common::setup_schema;
use aula_db::enrollment;
use aula_entity::enrollment::ActiveModel as ActiveEnrollmentModel;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{Database, SqlErr};
use test_log::test;

#[test(tokio::test)]
async fn test_enroll_and_list() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let student = create_test_student(db, "ada@example.org").await;
    let course = create_test_course(db).await;

    let enrollment = enrollment::Mutation::create(db, student.id, course.id, "active")
        .await
        .unwrap();
    assert_eq!(enrollment.status, "active");

    let by_student = enrollment::Query::find_by_student(db, student.id).await.unwrap();
    assert_eq!(by_student.len(), 1);

    let by_course = enrollment::Query::find_by_course(db, course.id).await.unwrap();
    assert_eq!(by_course.len(), 1);

    let pair = enrollment::Query::find_by_student_and_course(db, student.id, course.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(pair.id, enrollment.id);
}

#[test(tokio::test)]
async fn test_double_enrollment_is_unique_violation() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let student = create_test_student(db, "ada@example.org").await;
    let course = create_test_course(db).await;

    enrollment::Mutation::create(db, student.id, course.id, "active").await.unwrap();
    let err = enrollment::Mutation::create(db, student.id, course.id, "active")
        .await
        .unwrap_err();

    assert!(matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))));
    assert_eq!(enrollment::Query::count_by_student(db, student.id).await.unwrap(), 1);
}

#[test(tokio::test)]
async fn test_update_enrollment_status() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let student = create_test_student(db, "ada@example.org").await;
    let course = create_test_course(db).await;
    let enrollment = enrollment::Mutation::create(db, student.id, course.id, "active")
        .await
        .unwrap();

    enrollment::Mutation::update(
        db,
        ActiveEnrollmentModel {
            id: Unchanged(enrollment.id),
            status: Set("completed".to_owned()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let enrollment = enrollment::Query::find_by_id(db, enrollment.id).await.unwrap().unwrap();
    assert_eq!(enrollment.status, "completed");
}

#[test(tokio::test)]
async fn test_delete_enrollment() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let student = create_test_student(db, "ada@example.org").await;
    let course = create_test_course(db).await;
    let enrollment = enrollment::Mutation::create(db, student.id, course.id, "active")
        .await
        .unwrap();

    let affected = enrollment::Mutation::delete(db, enrollment.id).await.unwrap();
    assert_eq!(affected, 1);
    assert_eq!(enrollment::Query::count_by_course(db, course.id).await.unwrap(), 0);
}
