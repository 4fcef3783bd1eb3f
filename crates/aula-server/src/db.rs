use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr};

/// Brings the schema up on startup. The DDL is idempotent, so running it
/// against an already-migrated database is a no-op.
pub(crate) async fn migrate(conn: &DatabaseConnection) -> Result<(), DbErr> {
    let ddl = match conn.get_database_backend() {
        DatabaseBackend::Postgres => include_str!("schema/postgres.sql"),
        DatabaseBackend::Sqlite => include_str!("schema/sqlite.sql"),
        DatabaseBackend::MySql => return Err(DbErr::Custom("mysql is not supported".to_owned())),
    };
    conn.execute_unprepared(ddl).await?;
    Ok(())
}
