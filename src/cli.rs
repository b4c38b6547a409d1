use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI interface for `jdbc-conn`
#[derive(Parser)]
#[command(name = "jdbc-conn")]
#[command(version = crate::VERSION)]
#[command(about = "jdbc-conn - JDBC connection URL resolution")]
#[command(
    long_about = "Resolve vendor JDBC URLs and XA helpers from host, port, database and credential properties"
)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the JDBC URL for a connection
    Url(UrlArgs),
    /// List supported database types
    Types,
}

/// Arguments of the url command
///
/// Flags take precedence over `JDBC_*` environment variables, which take
/// precedence over the configuration file.
#[derive(Args, Debug, Default)]
pub struct UrlArgs {
    /// TOML file with a [connection] table
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Database server host
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,
    /// Database server port
    #[arg(long, value_name = "PORT")]
    pub port: Option<String>,
    /// Database name
    #[arg(long, value_name = "NAME")]
    pub database: Option<String>,
    /// Database user
    #[arg(long, value_name = "USER")]
    pub user: Option<String>,
    /// Database password
    #[arg(long, value_name = "PASSWORD")]
    pub password: Option<String>,
    /// Database type, e.g. postgresql or mssql
    #[arg(long, value_name = "TYPE")]
    pub dbtype: Option<String>,
    /// Print the diagnostic rendering instead of the bare URL
    #[arg(long)]
    pub show: bool,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
