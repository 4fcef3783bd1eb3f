mod common;

use crate::common::fixtures::{create_instructor, create_student, create_user};
use crate::common::setup_schema;
use aula_core::error::ServiceError;
use aula_core::instructor::NewInstructor;
use aula_core::student::{NewStudent, StudentPatch};
use aula_core::user::UserPatch;
use aula_entity::user::Role;
use chrono::NaiveDate;
use sea_orm::Database;
use test_log::test;

fn new_student(user_id: i32) -> NewStudent {
    NewStudent {
        user_id,
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        date_of_birth: NaiveDate::from_ymd_opt(2000, 12, 10).unwrap(),
        profile_picture: None,
    }
}

#[test(tokio::test)]
async fn test_student_profile_requires_existing_user() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let err = aula_core::student::create_student(db, new_student(999)).await.unwrap_err();
    assert!(matches!(err, ServiceError::MissingReference { entity: "user", id: 999 }));
}

#[test(tokio::test)]
async fn test_student_profile_requires_student_role() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let user = create_user(db, "grace@example.org", Role::Instructor).await;

    let err = aula_core::student::create_student(db, new_student(user.id)).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[test(tokio::test)]
async fn test_second_student_profile_for_user_conflicts() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let student = create_student(db, "ada@example.org").await;

    let err = aula_core::student::create_student(db, new_student(student.user_id))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[test(tokio::test)]
async fn test_relink_student_to_linked_user_conflicts() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let ada = create_student(db, "ada@example.org").await;
    let mary = create_student(db, "mary@example.org").await;

    let err = aula_core::student::update_student(
        db,
        ada.id,
        StudentPatch {
            user_id: Some(mary.user_id),
            first_name: None,
            last_name: None,
            date_of_birth: None,
            profile_picture: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[test(tokio::test)]
async fn test_instructor_profile_requires_instructor_role() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let user = create_user(db, "ada@example.org", Role::Student).await;

    let err = aula_core::instructor::create_instructor(
        db,
        NewInstructor {
            user_id: user.id,
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            bio: None,
            profile_picture: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[test(tokio::test)]
async fn test_delete_user_with_profile_conflicts() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let student = create_student(db, "ada@example.org").await;

    let err = aula_core::user::delete_user(db, student.user_id).await.unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));
    // Nothing was removed.
    assert!(aula_core::user::get_user(db, student.user_id).await.is_ok());
}

#[test(tokio::test)]
async fn test_role_change_with_linked_profile_conflicts() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let student = create_student(db, "ada@example.org").await;

    let patch = UserPatch {
        email: None,
        password_hash: None,
        role: Some(Role::Instructor),
    };
    let err = aula_core::user::update_user(db, student.user_id, patch).await.unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));

    // The role is unchanged.
    let user = aula_core::user::get_user(db, student.user_id).await.unwrap();
    assert_eq!(user.role, Role::Student);
}

#[test(tokio::test)]
async fn test_role_patch_with_same_role_is_accepted() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let student = create_student(db, "ada@example.org").await;

    let patch = UserPatch {
        email: Some("lovelace@example.org".to_owned()),
        password_hash: None,
        role: Some(Role::Student),
    };
    let user = aula_core::user::update_user(db, student.user_id, patch).await.unwrap();
    assert_eq!(user.email, "lovelace@example.org");
    assert_eq!(user.role, Role::Student);
}

#[test(tokio::test)]
async fn test_delete_student_with_enrollments_conflicts() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let student = create_student(db, "ada@example.org").await;
    let course = crate::common::fixtures::create_course(db).await;
    aula_core::enrollment::create_enrollment(
        db,
        aula_core::enrollment::NewEnrollment {
            student_id: student.id,
            course_id: course.id,
            status: "active".to_owned(),
        },
    )
    .await
    .unwrap();

    let err = aula_core::student::delete_student(db, student.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[test(tokio::test)]
async fn test_delete_instructor_with_courses_conflicts() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let course = crate::common::fixtures::create_course(db).await;

    let err = aula_core::instructor::delete_instructor(db, course.instructor_id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[test(tokio::test)]
async fn test_delete_unlinked_profiles() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let student = create_student(db, "ada@example.org").await;
    let instructor = create_instructor(db, "grace@example.org").await;

    aula_core::student::delete_student(db, student.id).await.unwrap();
    aula_core::instructor::delete_instructor(db, instructor.id).await.unwrap();

    let err = aula_core::student::get_student(db, student.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { entity: "student", .. }));
}
