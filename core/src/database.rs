//! Production [`QueryExecutor`](tally_common::database::QueryExecutor) backed by sqlx.

mod sqlx_executor;

pub use sqlx_executor::{SqlxQueryExecutor, SqlxRowCursor};
