//! Fixtures shared by the integration tests.

use tally_common::config::Config;
use tally_core::database::SqlxQueryExecutor;

/// Opens a fresh in-memory SQLite `users` table holding `names`, inserted in order.
///
/// `None` inserts a SQL `NULL`.
pub async fn users_db(names: &[Option<&str>]) -> anyhow::Result<SqlxQueryExecutor> {
    let mut config = Config::new("sqlite::memory:");
    // Each connection to `sqlite::memory:` gets its own database.
    config.max_connections = 1;

    let executor = SqlxQueryExecutor::connect(&config).await?;
    sqlx::query("CREATE TABLE users (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT)")
        .execute(executor.pool())
        .await?;

    for name in names {
        sqlx::query("INSERT INTO users (name) VALUES (?)")
            .bind(name.map(str::to_string))
            .execute(executor.pool())
            .await?;
    }
    Ok(executor)
}
