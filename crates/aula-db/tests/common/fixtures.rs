use aula_db::{category, course, instructor, quiz, student, user};
use aula_entity::user::Role;
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

#[allow(dead_code)]
pub async fn create_test_user(db: &DatabaseConnection, email: &str, role: Role) -> aula_entity::user::Model {
    user::Mutation::create(db, email, "$2b$12$fixture-hash", role).await.unwrap()
}

#[allow(dead_code)]
pub async fn create_test_student(db: &DatabaseConnection, email: &str) -> aula_entity::student::Model {
    let user = create_test_user(db, email, Role::Student).await;
    student::Mutation::create(
        db,
        user.id,
        "Ada",
        "Lovelace",
        NaiveDate::from_ymd_opt(2000, 12, 10).unwrap(),
        None,
    )
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_instructor(db: &DatabaseConnection, email: &str) -> aula_entity::instructor::Model {
    let user = create_test_user(db, email, Role::Instructor).await;
    instructor::Mutation::create(db, user.id, "Grace", "Hopper", Some("Compilers".to_owned()), None)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_course(db: &DatabaseConnection) -> aula_entity::course::Model {
    let instructor = create_test_instructor(db, "course-owner@example.org").await;
    let category = category::Mutation::create(db, "Programming", None).await.unwrap();
    course::Mutation::create(db, instructor.id, category.id, "Rust 101", None, None)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_quiz(db: &DatabaseConnection) -> aula_entity::quiz::quiz::Model {
    let course = create_test_course(db).await;
    quiz::quiz::Mutation::create(db, course.id, "Ownership basics", None)
        .await
        .unwrap()
}
