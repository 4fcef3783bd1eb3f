mod common;

use crate::common::fixtures::{create_test_course, create_test_instructor};
use crate::common::setup_schema;
use aula_db::{category, course, course_material};
use aula_entity::course::ActiveModel as ActiveCourseModel;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{Database, SqlErr};
use test_log::test;

#[test(tokio::test)]
async fn test_create_and_find_course() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let course = create_test_course(db).await;

    let found = course::Query::find_by_id(db, course.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Rust 101");
    assert_eq!(found.instructor_id, course.instructor_id);
    assert_eq!(found.category_id, course.category_id);
}

#[test(tokio::test)]
async fn test_find_by_instructor() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let instructor = create_test_instructor(db, "grace@example.org").await;
    let category = category::Mutation::create(db, "Programming", None).await.unwrap();
    course::Mutation::create(db, instructor.id, category.id, "Rust 101", None, None)
        .await
        .unwrap();
    course::Mutation::create(db, instructor.id, category.id, "Rust 201", None, None)
        .await
        .unwrap();

    let courses = course::Query::find_by_instructor(db, instructor.id).await.unwrap();
    assert_eq!(courses.len(), 2);

    assert_eq!(course::Query::count_by_instructor(db, instructor.id).await.unwrap(), 2);
    assert_eq!(course::Query::count_by_category(db, category.id).await.unwrap(), 2);
}

#[test(tokio::test)]
async fn test_update_course_name() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let course = create_test_course(db).await;

    course::Mutation::update(
        db,
        ActiveCourseModel {
            id: Unchanged(course.id),
            name: Set("Advanced Rust".to_owned()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let course = course::Query::find_by_id(db, course.id).await.unwrap().unwrap();
    assert_eq!(course.name, "Advanced Rust");
}

#[test(tokio::test)]
async fn test_one_material_per_course() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let course = create_test_course(db).await;

    course_material::Mutation::create(db, course.id, "Slides", "pdf", "/files/slides.pdf")
        .await
        .unwrap();
    let err = course_material::Mutation::create(db, course.id, "More slides", "pdf", "/files/more.pdf")
        .await
        .unwrap_err();

    assert!(matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))));
    assert_eq!(course_material::Query::count_by_course(db, course.id).await.unwrap(), 1);
}

#[test(tokio::test)]
async fn test_find_material_by_course() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let course = create_test_course(db).await;
    assert!(course_material::Query::find_by_course(db, course.id).await.unwrap().is_none());

    let material = course_material::Mutation::create(db, course.id, "Slides", "pdf", "/files/slides.pdf")
        .await
        .unwrap();

    let found = course_material::Query::find_by_course(db, course.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, material.id);
    assert_eq!(found.title, "Slides");
}
