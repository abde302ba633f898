//! # Name Query Service
//!
//! Reads the `name` column of the `users` table through a [`QueryExecutor`].

use tally_common::database::{CursorGuard, QueryExecutor};
use tally_common::error::{Operation, ServiceError};
use tracing::debug;

pub const SELECT_NAMES: &str = "SELECT name FROM users";
pub const SELECT_UNIQUE_NAMES: &str = "SELECT DISTINCT name FROM users";

/// Application Service for user names.
///
/// Borrows the executor; closing it stays with whoever created it.
pub struct NameQueryService<'a> {
    executor: &'a dyn QueryExecutor,
}

impl<'a> NameQueryService<'a> {
    pub fn new(executor: &'a dyn QueryExecutor) -> Self {
        Self { executor }
    }

    /// Every name in `users`, in the order the database returns them.
    pub async fn get_names(&self) -> Result<Vec<String>, ServiceError> {
        self.collect(Operation::GetNames, SELECT_NAMES).await
    }

    /// Distinct names in `users`. Deduplication is done by the query.
    pub async fn get_unique_names(&self) -> Result<Vec<String>, ServiceError> {
        self.collect(Operation::GetUniqueNames, SELECT_UNIQUE_NAMES).await
    }

    async fn collect(&self, operation: Operation, query: &str) -> Result<Vec<String>, ServiceError> {
        debug!(%operation, query, "issuing query");

        let cursor = self
            .executor
            .execute(query)
            .await
            .map_err(|e| ServiceError::query(operation, e))?;
        let mut cursor = CursorGuard::new(cursor);

        let mut names: Vec<String> = Vec::new();
        while cursor.advance().await {
            let name = cursor
                .decode_text(0)
                .map_err(|e| ServiceError::scan(operation, names.len(), e))?;
            names.push(name);
        }

        cursor.finish().map_err(|e| ServiceError::cursor(operation, e))?;

        debug!(%operation, rows = names.len(), "query complete");
        Ok(names)
    }
}
