mod common;

use crate::common::fixtures::{create_test_student, create_test_user};
use crate::common::setup_schema;
use aula_db::{access_tokens, user};
use aula_entity::user::{ActiveModel as ActiveUserModel, Entity as User, Role};
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{Database, EntityTrait, SqlErr};
use test_log::test;

#[test(tokio::test)]
async fn test_create_and_find_user() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let user = create_test_user(db, "ada@example.org", Role::Student).await;

    let found = user::Query::find_by_id(db, user.id).await.unwrap().unwrap();
    assert_eq!(found.email, "ada@example.org");
    assert_eq!(found.role, Role::Student);

    // Stable between writes.
    let again = user::Query::find_by_id(db, user.id).await.unwrap().unwrap();
    assert_eq!(found, again);
}

#[test(tokio::test)]
async fn test_find_by_email() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let user = create_test_user(db, "grace@example.org", Role::Instructor).await;

    let found = user::Query::find_by_email(db, "grace@example.org").await.unwrap().unwrap();
    assert_eq!(found.id, user.id);

    assert!(user::Query::find_by_email(db, "nobody@example.org").await.unwrap().is_none());
}

#[test(tokio::test)]
async fn test_duplicate_email_is_unique_violation() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    create_test_user(db, "ada@example.org", Role::Student).await;
    let err = user::Mutation::create(db, "ada@example.org", "hash", Role::Admin)
        .await
        .unwrap_err();

    assert!(matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))));
    assert_eq!(User::find().all(db).await.unwrap().len(), 1);
}

#[test(tokio::test)]
async fn test_update_user_email() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let user = create_test_user(db, "old@example.org", Role::Student).await;

    user::Mutation::update(
        db,
        ActiveUserModel {
            id: Unchanged(user.id),
            email: Set("new@example.org".to_owned()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let user = user::Query::find_by_id(db, user.id).await.unwrap().unwrap();
    assert_eq!(user.email, "new@example.org");
    // Untouched columns survive the partial update.
    assert_eq!(user.role, Role::Student);
}

#[test(tokio::test)]
async fn test_delete_user() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let user = create_test_user(db, "gone@example.org", Role::Student).await;

    let affected = user::Mutation::delete(db, user.id).await.unwrap();
    assert_eq!(affected, 1);
    assert!(!user::Query::exists(db, user.id).await.unwrap());
}

#[test(tokio::test)]
async fn test_find_by_token() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let user = create_test_user(db, "token@example.org", Role::Student).await;
    let token = access_tokens::Mutation::create_access_token(db, user.id).await.unwrap();

    let found = user::Query::find_by_token(db, &token.access_token).await.unwrap().unwrap();
    assert_eq!(found.id, user.id);

    assert!(user::Query::find_by_token(db, "bogus").await.unwrap().is_none());
}

#[test(tokio::test)]
async fn test_find_student_by_user_id() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let student = create_test_student(db, "linked@example.org").await;

    let found = aula_db::student::Query::find_by_user_id(db, student.user_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, student.id);
}
