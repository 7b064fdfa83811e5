use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

pub mod factory;

pub async fn init_db() -> Result<DbConn, DbErr> {
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());
    // An in-memory SQLite database lives inside a single connection. The default
    // pool opens several connections, each with its own empty database, so
    // migrations and queries can land on different ones. Pin the pool to a
    // single connection so the schema is visible to every query.
    let mut opts = ConnectOptions::new(&database_url);
    opts.max_connections(1);
    let db = Database::connect(opts).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}
