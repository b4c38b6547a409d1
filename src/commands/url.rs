//! Resolve a JDBC URL from layered properties

use crate::cli::UrlArgs;
use crate::config::{ConnectionProperties, EnvProperties, PropertySource};
use crate::connection::{ConnectionData, ConnectionDataBuilder};
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Merge configuration file, environment and flags, flags winning
pub fn resolve_properties(args: &UrlArgs, env: &impl PropertySource) -> Result<ConnectionProperties> {
    let file = match &args.config {
        Some(path) => {
            debug!("Loading connection properties from {}", path.display());
            ConnectionProperties::from_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?
        }
        None => ConnectionProperties::default(),
    };

    let flags = ConnectionProperties {
        host: args.host.clone(),
        port: args.port.clone(),
        database: args.database.clone(),
        user: args.user.clone(),
        password: args.password.clone(),
        dbtype: args.dbtype.clone(),
    };

    Ok(file
        .overlay(ConnectionProperties::from_source(env))
        .overlay(flags))
}

/// Build connection data from resolved properties
pub fn resolve_connection(properties: &ConnectionProperties) -> Result<ConnectionData> {
    let mut builder = ConnectionDataBuilder::new(properties)?;
    if let Some(name) = &properties.dbtype {
        builder = builder.type_name(name)?;
    }
    Ok(builder.build()?)
}

/// Render the command output for the given connection data
#[must_use]
pub fn render(data: &ConnectionData, show: bool) -> String {
    if show {
        format!("{data}\nxa helper: {}", data.xa_connection_util())
    } else {
        data.url().to_string()
    }
}

#[allow(clippy::disallowed_methods)]
/// Handle the url command
pub fn handle_url(args: &UrlArgs) -> Result<()> {
    let properties = resolve_properties(args, &EnvProperties::default())?;
    let data = resolve_connection(&properties)?;
    info!(db_type = %data.db_type(), "Resolved JDBC URL");
    println!("{}", render(&data, args.show));
    Ok(())
}
