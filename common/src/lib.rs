//! # Tally Common
//!
//! Shared contracts for the `tally` workspace.
//!
//! * **[`database`]**: The Query Executor and Row Cursor ports used by the name service.
//! * **[`network`]**: Interface records, hardware addresses and the Interface Lister port.
//! * **[`error`]**: The error taxonomy surfaced by every service operation.
//! * **[`config`]**: Runtime configuration assembled by the command line.

pub mod config;
pub mod database;
pub mod error;
pub mod network;
