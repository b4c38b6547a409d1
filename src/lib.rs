//! `jdbc-conn` - JDBC connection URL resolution
//!
//! This library turns host, port, database and credential properties into
//! vendor-specific JDBC URLs and names the XA helper used for transaction
//! recovery with each vendor.

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    missing_docs,
    rust_2018_idioms
)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

/// Command line interface definition
pub mod cli;
/// Command handlers
pub mod commands;
/// Property sources and configuration files
pub mod config;
pub mod connection;
pub mod db_type;
/// Error types
pub mod error;

pub use config::{ConnectionProperties, EnvProperties, PropertySource};
pub use connection::{ConnectionData, ConnectionDataBuilder};
pub use db_type::{DbType, XaConnectionUtil};
pub use error::{ConnectionDataError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }
}
