//! # Database Ports
//!
//! Contracts the name service needs from a relational store.
//!
//! The service never talks to a driver directly: it hands a fixed statement to a
//! [`QueryExecutor`] and walks the returned [`RowCursor`]. Implementations live in
//! `tally-core` (sqlx) and in test fakes.

use std::ops::{Deref, DerefMut};

use async_trait::async_trait;
use tracing::warn;

/// Issues a query and hands back a cursor over its rows.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Starts `query`.
    ///
    /// An `Err` means the statement could not be run at all (connectivity,
    /// malformed SQL, missing table).
    async fn execute<'a>(&'a self, query: &'a str) -> anyhow::Result<Box<dyn RowCursor + 'a>>;
}

/// Forward-only cursor over query results.
#[async_trait]
pub trait RowCursor: Send {
    /// Moves to the next row. Returns `false` once the rows are exhausted or the
    /// cursor hit a fault; the fault is then reported by [`RowCursor::final_fault`].
    async fn advance(&mut self) -> bool;

    /// Decodes `column` of the current row as text. `NULL` is an error.
    fn decode_text(&self, column: usize) -> anyhow::Result<String>;

    /// Takes the fault recorded while advancing, if any.
    fn final_fault(&mut self) -> Option<anyhow::Error>;

    /// Releases the underlying resources. Must tolerate repeated calls.
    fn release(&mut self) -> anyhow::Result<()>;
}

/// Owns a cursor and releases it exactly once.
///
/// [`CursorGuard::finish`] releases on the success path and reports deferred faults.
/// Dropping the guard early (scan failure, `?`) releases it as well.
pub struct CursorGuard<'a> {
    cursor: Box<dyn RowCursor + 'a>,
    released: bool,
}

impl<'a> CursorGuard<'a> {
    pub fn new(cursor: Box<dyn RowCursor + 'a>) -> Self {
        Self { cursor, released: false }
    }

    /// Checks the deferred fault, then releases the cursor.
    ///
    /// A fault found while advancing wins over a release failure.
    pub fn finish(mut self) -> anyhow::Result<()> {
        let fault = self.cursor.final_fault();
        let released = self.release_once();
        match fault {
            Some(fault) => Err(fault),
            None => released,
        }
    }

    fn release_once(&mut self) -> anyhow::Result<()> {
        if self.released {
            return Ok(());
        }
        self.released = true;
        self.cursor.release()
    }
}

impl<'a> Deref for CursorGuard<'a> {
    type Target = dyn RowCursor + 'a;

    fn deref(&self) -> &Self::Target {
        self.cursor.as_ref()
    }
}

impl<'a> DerefMut for CursorGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.cursor.as_mut()
    }
}

impl Drop for CursorGuard<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.release_once() {
            warn!("failed to release cursor: {e:#}");
        }
    }
}
