//! # Tally Core
//!
//! The two query services and the adapters that back them in production.
//!
//! * **[`names`]**: [`names::NameQueryService`], reads user names through a [`QueryExecutor`].
//! * **[`interfaces`]**: [`interfaces::InterfaceQueryService`], projects interface names and
//!   hardware addresses from an [`InterfaceLister`].
//! * **[`database`]**: [`database::SqlxQueryExecutor`], the sqlx-backed executor.
//! * **[`network`]**: [`network::PnetInterfaceLister`], the `pnet::datalink` lister.
//!
//! [`QueryExecutor`]: tally_common::database::QueryExecutor
//! [`InterfaceLister`]: tally_common::network::interface::InterfaceLister

pub mod database;
pub mod interfaces;
pub mod names;
pub mod network;
