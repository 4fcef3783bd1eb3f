mod common;

use crate::common::fixtures::{create_course, create_instructor};
use crate::common::setup_schema;
use aula_core::category::CategoryPatch;
use aula_core::course::NewCourse;
use aula_core::course_material::NewMaterial;
use aula_core::error::ServiceError;
use aula_entity::course::Entity as Course;
use sea_orm::{Database, EntityTrait};
use test_log::test;

#[test(tokio::test)]
async fn test_course_round_trip() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let created = create_course(db).await;
    let fetched = aula_core::course::get_course(db, created.id).await.unwrap();

    assert_eq!(created, fetched);
}

#[test(tokio::test)]
async fn test_course_create_rejects_unknown_instructor() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let category = aula_core::category::create_category(db, "Programming", None).await.unwrap();

    let err = aula_core::course::create_course(
        db,
        NewCourse {
            instructor_id: 999,
            category_id: category.id,
            name: "Ghost course".to_owned(),
            description: None,
            image: None,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ServiceError::MissingReference { entity: "instructor", id: 999 }));
    // No row was inserted.
    assert!(Course::find().all(db).await.unwrap().is_empty());
}

#[test(tokio::test)]
async fn test_course_create_rejects_unknown_category() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let instructor = create_instructor(db, "grace@example.org").await;

    let err = aula_core::course::create_course(
        db,
        NewCourse {
            instructor_id: instructor.id,
            category_id: 999,
            name: "Ghost course".to_owned(),
            description: None,
            image: None,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ServiceError::MissingReference { entity: "category", id: 999 }));
}

#[test(tokio::test)]
async fn test_second_material_for_course_conflicts() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let course = create_course(db).await;

    aula_core::course_material::create_material(
        db,
        NewMaterial {
            course_id: course.id,
            title: "Slides".to_owned(),
            material_type: "pdf".to_owned(),
            file_path: "/files/slides.pdf".to_owned(),
        },
    )
    .await
    .unwrap();

    let err = aula_core::course_material::create_material(
        db,
        NewMaterial {
            course_id: course.id,
            title: "More slides".to_owned(),
            material_type: "pdf".to_owned(),
            file_path: "/files/more.pdf".to_owned(),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[test(tokio::test)]
async fn test_delete_course_with_material_conflicts() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let course = create_course(db).await;
    aula_core::course_material::create_material(
        db,
        NewMaterial {
            course_id: course.id,
            title: "Slides".to_owned(),
            material_type: "pdf".to_owned(),
            file_path: "/files/slides.pdf".to_owned(),
        },
    )
    .await
    .unwrap();

    let err = aula_core::course::delete_course(db, course.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));
    // The course is still there.
    assert!(aula_core::course::get_course(db, course.id).await.is_ok());
}

#[test(tokio::test)]
async fn test_delete_empty_course() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let course = create_course(db).await;
    aula_core::course::delete_course(db, course.id).await.unwrap();

    let err = aula_core::course::get_course(db, course.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { entity: "course", .. }));
}

#[test(tokio::test)]
async fn test_delete_category_with_courses_conflicts() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let course = create_course(db).await;

    let err = aula_core::category::delete_category(db, course.category_id).await.unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[test(tokio::test)]
async fn test_update_category() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let category = aula_core::category::create_category(db, "Programming", None).await.unwrap();

    let updated = aula_core::category::update_category(
        db,
        category.id,
        CategoryPatch {
            name: Some("Systems programming".to_owned()),
            description: Some("Close to the metal".to_owned()),
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.name, "Systems programming");
    assert_eq!(updated.description.as_deref(), Some("Close to the metal"));
}

#[test(tokio::test)]
async fn test_get_missing_category() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let err = aula_core::category::get_category(db, 42).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { entity: "category", id: 42 }));
}
