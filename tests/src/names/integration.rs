use tally_common::error::{ErrorKind, Operation};
use tally_core::names::NameQueryService;
use tally_integration_tests::users_db;

#[tokio::test]
async fn get_names_reads_every_row() {
    let executor = users_db(&[Some("Alice"), Some("Bob"), Some("Alice")]).await.unwrap();
    let service = NameQueryService::new(&executor);

    let names = service.get_names().await.unwrap();

    assert_eq!(names, vec!["Alice", "Bob", "Alice"]);
}

#[tokio::test]
async fn get_names_single_row() {
    let executor = users_db(&[Some("Alice")]).await.unwrap();
    let service = NameQueryService::new(&executor);

    assert_eq!(service.get_names().await.unwrap(), vec!["Alice"]);
}

#[tokio::test]
async fn get_unique_names_lets_the_database_deduplicate() {
    let executor = users_db(&[Some("Alice"), Some("Bob"), Some("Alice"), Some("Bob")]).await.unwrap();
    let service = NameQueryService::new(&executor);

    let mut names = service.get_unique_names().await.unwrap();
    names.sort();

    assert_eq!(names, vec!["Alice", "Bob"]);
}

#[tokio::test]
async fn empty_table_is_empty_result() {
    let executor = users_db(&[]).await.unwrap();
    let service = NameQueryService::new(&executor);

    assert!(service.get_names().await.unwrap().is_empty());
    assert!(service.get_unique_names().await.unwrap().is_empty());
}

#[tokio::test]
async fn null_name_is_scan_error() {
    let executor = users_db(&[Some("Alice"), None]).await.unwrap();
    let service = NameQueryService::new(&executor);

    let err = service.get_names().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Scan);
    assert_eq!(err.operation(), Operation::GetNames);

    let err = service.get_unique_names().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Scan);
}

#[tokio::test]
async fn connection_is_returned_after_scan_error() {
    // The pool holds a single connection, so a leaked cursor would block the next call.
    let executor = users_db(&[None]).await.unwrap();
    let service = NameQueryService::new(&executor);

    assert!(service.get_names().await.is_err());
    assert!(service.get_names().await.is_err());
}

#[tokio::test]
async fn missing_table_is_query_error() {
    let executor = users_db(&[]).await.unwrap();
    sqlx::query("DROP TABLE users").execute(executor.pool()).await.unwrap();
    let service = NameQueryService::new(&executor);

    let err = service.get_unique_names().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Query);
    assert_eq!(err.operation(), Operation::GetUniqueNames);
}

/// Replaces `users` with a view whose `name` column runs `json()` over `raw` rows.
async fn json_users(raw: &[&str]) -> anyhow::Result<tally_core::database::SqlxQueryExecutor> {
    let executor = users_db(&[]).await?;
    let pool = executor.pool();
    sqlx::query("DROP TABLE users").execute(pool).await?;
    sqlx::query("CREATE TABLE raw (id INTEGER PRIMARY KEY, j TEXT)").execute(pool).await?;
    sqlx::query("CREATE VIEW users AS SELECT json(j) AS name FROM raw ORDER BY id")
        .execute(pool)
        .await?;

    for j in raw {
        sqlx::query("INSERT INTO raw (j) VALUES (?)").bind(*j).execute(pool).await?;
    }
    Ok(executor)
}

#[tokio::test]
async fn fault_on_first_row_is_cursor_error() {
    let executor = json_users(&["{bad"]).await.unwrap();
    let service = NameQueryService::new(&executor);

    let err = service.get_names().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Cursor);
    assert_eq!(err.operation(), Operation::GetNames);
}

#[tokio::test]
async fn fault_on_later_row_is_cursor_error() {
    let executor = json_users(&["\"Alice\"", "{bad"]).await.unwrap();
    let service = NameQueryService::new(&executor);

    let err = service.get_names().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Cursor);

    // The connection went back to the pool, so the next call still runs.
    let err = service.get_names().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Cursor);
}
