use aula_core::course::NewCourse;
use aula_core::instructor::NewInstructor;
use aula_core::student::NewStudent;
use aula_entity::user::Role;
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

#[allow(dead_code)]
pub async fn create_user(db: &DatabaseConnection, email: &str, role: Role) -> aula_entity::user::Model {
    aula_core::user::create_user(db, email, "$2b$12$fixture-hash", role).await.unwrap()
}

#[allow(dead_code)]
pub async fn create_student(db: &DatabaseConnection, email: &str) -> aula_entity::student::Model {
    let user = create_user(db, email, Role::Student).await;
    aula_core::student::create_student(
        db,
        NewStudent {
            user_id: user.id,
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            date_of_birth: NaiveDate::from_ymd_opt(2000, 12, 10).unwrap(),
            profile_picture: None,
        },
    )
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_instructor(db: &DatabaseConnection, email: &str) -> aula_entity::instructor::Model {
    let user = create_user(db, email, Role::Instructor).await;
    aula_core::instructor::create_instructor(
        db,
        NewInstructor {
            user_id: user.id,
            first_name: "Grace".to_owned(),
            last_name: "Hopper".to_owned(),
            bio: None,
            profile_picture: None,
        },
    )
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_course(db: &DatabaseConnection) -> aula_entity::course::Model {
    let instructor = create_instructor(db, "course-owner@example.org").await;
    let category = aula_core::category::create_category(db, "Programming", None).await.unwrap();
    aula_core::course::create_course(
        db,
        NewCourse {
            instructor_id: instructor.id,
            category_id: category.id,
            name: "Rust 101".to_owned(),
            description: None,
            image: None,
        },
    )
    .await
    .unwrap()
}
