use aula_db::{category, user};
use aula_entity::user::Role;
use aula_entity::{category as category_entity, user as user_entity};
use chrono::NaiveDate;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
use test_log::test;

fn sample_user() -> user_entity::Model {
    user_entity::Model {
        id: 1,
        email: "ada@example.org".to_owned(),
        password_hash: "hash".to_owned(),
        role: Role::Student,
        created_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(8, 0, 0).unwrap(),
    }
}

#[test(tokio::test)]
async fn test_find_user_by_email() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[sample_user()]])
        .into_connection();

    let user = user::Query::find_by_email(&db, "ada@example.org").await?;
    assert_eq!(user, Some(sample_user()));

    Ok(())
}

#[test(tokio::test)]
async fn test_find_user_by_id_empty() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<user_entity::Model>::new()])
        .into_connection();

    assert_eq!(user::Query::find_by_id(&db, 42).await?, None);

    Ok(())
}

#[test(tokio::test)]
async fn test_delete_category_rows_affected() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    assert_eq!(category::Mutation::delete(&db, 7).await?, 1);

    Ok(())
}

#[test(tokio::test)]
async fn test_find_all_categories() -> Result<(), DbErr> {
    let models = [
        category_entity::Model {
            id: 1,
            name: "Programming".to_owned(),
            description: None,
        },
        category_entity::Model {
            id: 2,
            name: "Mathematics".to_owned(),
            description: Some("Numbers".to_owned()),
        },
    ];
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([models.clone()])
        .into_connection();

    assert_eq!(category::Query::find_all(&db).await?, Vec::from(models));

    Ok(())
}
