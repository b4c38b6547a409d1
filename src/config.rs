use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Property key holding the database server host
pub const SERVER_PARAM: &str = "host";
/// Property key holding the database server port
pub const PORT_PARAM: &str = "port";
/// Property key holding the database name
pub const DATABASE_PARAM: &str = "database";
/// Property key holding the database user
pub const USER_PARAM: &str = "user";
/// Property key holding the database password
pub const PASSWORD_PARAM: &str = "password";
/// Property key holding the database type name
pub const DBTYPE_PARAM: &str = "dbtype";

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error occurred while reading config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error occurred
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Lookup capability for connection properties keyed by name
pub trait PropertySource {
    /// Value of the property, if defined
    fn property(&self, key: &str) -> Option<String>;
}

impl PropertySource for HashMap<String, String> {
    fn property(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Connection properties as found in a configuration file
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ConnectionProperties {
    /// Database host
    pub host: Option<String>,
    /// Database port, written either as a number or a string
    #[serde(default, deserialize_with = "deserialize_port")]
    pub port: Option<String>,
    /// Database name
    pub database: Option<String>,
    /// Database user
    pub user: Option<String>,
    /// Database password
    pub password: Option<String>,
    /// Database type name
    pub dbtype: Option<String>,
}

#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    connection: ConnectionProperties,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PortValue {
    Number(i64),
    Text(String),
}

fn deserialize_port<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<PortValue>::deserialize(deserializer)?;
    Ok(value.map(|port| match port {
        PortValue::Number(n) => n.to_string(),
        PortValue::Text(s) => s,
    }))
}

impl ConnectionProperties {
    /// Load the `[connection]` table from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse the `[connection]` table from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(file.connection)
    }

    /// Capture every known key from another source
    pub fn from_source(source: &impl PropertySource) -> Self {
        Self {
            host: source.property(SERVER_PARAM),
            port: source.property(PORT_PARAM),
            database: source.property(DATABASE_PARAM),
            user: source.property(USER_PARAM),
            password: source.property(PASSWORD_PARAM),
            dbtype: source.property(DBTYPE_PARAM),
        }
    }

    /// Layer `other` on top of `self`; values defined in `other` win
    #[must_use]
    pub fn overlay(self, other: Self) -> Self {
        Self {
            host: other.host.or(self.host),
            port: other.port.or(self.port),
            database: other.database.or(self.database),
            user: other.user.or(self.user),
            password: other.password.or(self.password),
            dbtype: other.dbtype.or(self.dbtype),
        }
    }
}

impl PropertySource for ConnectionProperties {
    fn property(&self, key: &str) -> Option<String> {
        let value = match key {
            SERVER_PARAM => &self.host,
            PORT_PARAM => &self.port,
            DATABASE_PARAM => &self.database,
            USER_PARAM => &self.user,
            PASSWORD_PARAM => &self.password,
            DBTYPE_PARAM => &self.dbtype,
            _ => return None,
        };
        value.clone()
    }
}

/// Properties read from process environment variables
///
/// The key `host` is looked up as `JDBC_HOST` with the default prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvProperties {
    prefix: String,
}

impl EnvProperties {
    /// Default variable name prefix
    pub const DEFAULT_PREFIX: &'static str = "JDBC_";

    /// Create a source using a custom variable prefix
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Environment variable name for a property key
    #[must_use]
    pub fn variable_name(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key.to_uppercase())
    }
}

impl Default for EnvProperties {
    fn default() -> Self {
        Self::with_prefix(Self::DEFAULT_PREFIX)
    }
}

impl PropertySource for EnvProperties {
    fn property(&self, key: &str) -> Option<String> {
        std::env::var(self.variable_name(key)).ok()
    }
}
