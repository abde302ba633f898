use anyhow::Context;
use async_trait::async_trait;
use futures::TryStreamExt;
use futures::stream::BoxStream;
use sqlx::any::{AnyPoolOptions, AnyRow};
use sqlx::{AnyPool, Executor, Row};
use tally_common::config::Config;
use tally_common::database::{QueryExecutor, RowCursor};
use tracing::{debug, trace};

/// Runs statements against an [`AnyPool`], so the same binary serves Postgres and SQLite.
pub struct SqlxQueryExecutor {
    pool: AnyPool,
}

impl SqlxQueryExecutor {
    /// Opens a pool for `config.database_url`.
    pub async fn connect(config: &Config) -> anyhow::Result<Self> {
        sqlx::any::install_default_drivers();

        let pool = AnyPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await
            .context("failed to connect to the users database")?;

        debug!(max_connections = config.max_connections, "database pool ready");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }
}

#[async_trait]
impl QueryExecutor for SqlxQueryExecutor {
    async fn execute<'a>(&'a self, query: &'a str) -> anyhow::Result<Box<dyn RowCursor + 'a>> {
        // Preparing checks the statement against the schema without stepping any
        // row, so every fault raised while stepping stays with the cursor.
        Executor::prepare(&self.pool, query)
            .await
            .with_context(|| format!("failed to prepare `{query}`"))?;

        let stream = sqlx::query(query).fetch(&self.pool);
        Ok(Box::new(SqlxRowCursor::new(stream)))
    }
}

/// Streams rows from an [`AnyPool`] query.
///
/// A stream error ends iteration and is kept as the cursor's deferred fault.
pub struct SqlxRowCursor<'a> {
    stream: Option<BoxStream<'a, Result<AnyRow, sqlx::Error>>>,
    current: Option<AnyRow>,
    fault: Option<sqlx::Error>,
}

impl<'a> SqlxRowCursor<'a> {
    fn new(stream: BoxStream<'a, Result<AnyRow, sqlx::Error>>) -> Self {
        Self {
            stream: Some(stream),
            current: None,
            fault: None,
        }
    }
}

#[async_trait]
impl RowCursor for SqlxRowCursor<'_> {
    async fn advance(&mut self) -> bool {
        self.current = None;

        let Some(stream) = self.stream.as_mut() else {
            return false;
        };

        match stream.try_next().await {
            Ok(Some(row)) => {
                self.current = Some(row);
                true
            }
            Ok(None) => {
                self.stream = None;
                false
            }
            Err(e) => {
                trace!("row stream failed: {e}");
                self.fault = Some(e);
                self.stream = None;
                false
            }
        }
    }

    fn decode_text(&self, column: usize) -> anyhow::Result<String> {
        let row = self.current.as_ref().context("cursor is not positioned on a row")?;
        let value: String = row
            .try_get(column)
            .with_context(|| format!("column {column} is not a text value"))?;
        Ok(value)
    }

    fn final_fault(&mut self) -> Option<anyhow::Error> {
        self.fault
            .take()
            .map(|e| anyhow::Error::new(e).context("row stream ended with an error"))
    }

    fn release(&mut self) -> anyhow::Result<()> {
        self.stream = None;
        self.current = None;
        Ok(())
    }
}
