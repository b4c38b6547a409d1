use jdbc_conn::cli::{Cli, Commands};
use jdbc_conn::commands::{types, url};
use std::process;
use tracing_subscriber::EnvFilter;

// Allow println in main CLI binary
#[allow(clippy::disallowed_methods)]
fn main() {
    init_logging();

    let cli = Cli::parse();
    tracing::debug!("jdbc-conn CLI initialized");

    match cli.command {
        Some(Commands::Url(args)) => {
            if let Err(e) = url::handle_url(&args) {
                eprintln!("Error: {e:#}");
                process::exit(1);
            }
        }
        Some(Commands::Types) => types::handle_types(),
        None => {
            println!("jdbc-conn - Use --help for available commands");
        }
    }
}

/// Initialize logging based on environment variables
fn init_logging() {
    // Default to INFO level, can be overridden by RUST_LOG environment variable
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("jdbc_conn=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
