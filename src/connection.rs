//! Connection data resolution
//!
//! [`ConnectionDataBuilder`] gathers server, port, credentials and database
//! type from a [`PropertySource`] and caller overrides, then resolves them
//! into an immutable [`ConnectionData`] carrying the vendor JDBC URL.

use crate::config::{
    PropertySource, DATABASE_PARAM, PASSWORD_PARAM, PORT_PARAM, SERVER_PARAM, USER_PARAM,
};
use crate::db_type::{DbType, UrlParts, XaConnectionUtil};
use crate::error::{ConnectionDataError, Result};
use std::fmt;
use tracing::{debug, warn};

/// Fallback for database, user and password when no property is defined
pub const DEFAULT_CREDENTIAL: &str = "crashrec";

const MASK: &str = "***";

/// Resolved connection URL together with the fields it was derived from
#[derive(Debug, PartialEq, Eq)]
pub struct ConnectionData {
    url: String,
    user: String,
    password: String,
    database: String,
    server: String,
    port: String,
    db_type: DbType,
    xa_connection_util: XaConnectionUtil,
}

impl ConnectionData {
    /// Get the connection URL
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the database user
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Get the database password
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Get the database name
    #[must_use]
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Get the server host
    #[must_use]
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Get the port as it was configured
    #[must_use]
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Parse the port as a positive integer
    pub fn port_as_int(&self) -> Result<u16> {
        match self.port.parse::<u16>() {
            Ok(port) if port > 0 => Ok(port),
            _ => Err(ConnectionDataError::ParseError {
                value: self.port.clone(),
                expected: "a positive port number".to_string(),
            }),
        }
    }

    /// Get the database type
    #[must_use]
    pub const fn db_type(&self) -> DbType {
        self.db_type
    }

    /// Get the XA helper associated with the database type
    #[must_use]
    pub const fn xa_connection_util(&self) -> XaConnectionUtil {
        self.xa_connection_util
    }

    /// Resolve the same connection again through a fresh builder
    ///
    /// Only DB2 connection data can be duplicated.
    pub fn try_duplicate(&self) -> Result<Self> {
        if !self.db_type.is_cloneable() {
            return Err(ConnectionDataError::UnsupportedOperation {
                message: format!("duplicating {} connection data", self.db_type),
            });
        }

        ConnectionDataBuilder::from_parts(self.server.clone(), self.port.clone())
            .database(&self.database)
            .user(&self.user)
            .password(&self.password)
            .db_type(self.db_type)
            .build()
    }

    fn masked_url(&self) -> String {
        self.db_type.format_url(&UrlParts {
            server: &self.server,
            port: &self.port,
            database: MASK,
            user: &self.user,
            password: &self.password,
        })
    }
}

impl fmt::Display for ConnectionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "jdbc url: '{}', connection props: {}:{} {}/{}",
            self.masked_url(),
            self.server,
            self.port,
            self.user,
            self.password
        )
    }
}

/// Builder accumulating the fields of a [`ConnectionData`]
#[derive(Debug, Clone)]
pub struct ConnectionDataBuilder {
    server: String,
    port: String,
    database: String,
    user: String,
    password: String,
    db_type: Option<DbType>,
}

impl ConnectionDataBuilder {
    /// Create a builder whose server and port must come from `source`
    ///
    /// # Errors
    ///
    /// Returns `MissingConfiguration` if `host` or `port` is not defined
    pub fn new(source: &impl PropertySource) -> Result<Self> {
        let server = require(source, SERVER_PARAM)?;
        let port = require(source, PORT_PARAM)?;
        Ok(Self::with_credentials(source, server, port))
    }

    /// Create a builder falling back to the given server and port when
    /// `source` does not define them
    pub fn with_defaults(
        source: &impl PropertySource,
        default_server: impl Into<String>,
        default_port: impl Into<String>,
    ) -> Self {
        let server = source
            .property(SERVER_PARAM)
            .unwrap_or_else(|| default_server.into());
        let port = source
            .property(PORT_PARAM)
            .unwrap_or_else(|| default_port.into());
        Self::with_credentials(source, server, port)
    }

    fn with_credentials(source: &impl PropertySource, server: String, port: String) -> Self {
        let credential = |key: &str| {
            source.property(key).unwrap_or_else(|| {
                debug!(key, "Property not defined, using default");
                DEFAULT_CREDENTIAL.to_string()
            })
        };

        let builder = Self {
            database: credential(DATABASE_PARAM),
            user: credential(USER_PARAM),
            password: credential(PASSWORD_PARAM),
            ..Self::from_parts(server, port)
        };
        debug!(server = %builder.server, port = %builder.port, "Connection data builder created");
        builder
    }

    fn from_parts(server: String, port: String) -> Self {
        Self {
            server,
            port,
            database: DEFAULT_CREDENTIAL.to_string(),
            user: DEFAULT_CREDENTIAL.to_string(),
            password: DEFAULT_CREDENTIAL.to_string(),
            db_type: None,
        }
    }

    /// Set the database user
    #[must_use]
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    /// Set the database password
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Set the database name
    #[must_use]
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Set the database type
    #[must_use]
    pub fn db_type(mut self, db_type: DbType) -> Self {
        self.db_type = Some(db_type);
        self
    }

    /// Set the database type by its case-insensitive name
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the name is not a supported type
    pub fn type_name(self, name: &str) -> Result<Self> {
        Ok(self.db_type(name.parse()?))
    }

    /// Resolve the vendor URL and XA helper
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperation` if no database type was set
    pub fn build(&self) -> Result<ConnectionData> {
        let db_type = self
            .db_type
            .ok_or_else(|| ConnectionDataError::UnsupportedOperation {
                message: "building connection data without a database type".to_string(),
            })?;

        let url = db_type.format_url(&UrlParts {
            server: &self.server,
            port: &self.port,
            database: &self.database,
            user: &self.user,
            password: &self.password,
        });
        let xa_connection_util = db_type.xa_connection_util();
        if db_type == DbType::PostgreSql {
            warn!(%xa_connection_util, "PostgreSQL connection data uses the MSSQL XA helper");
        }
        debug!(%db_type, server = %self.server, port = %self.port, "Resolved connection data");

        Ok(ConnectionData {
            url,
            user: self.user.clone(),
            password: self.password.clone(),
            database: self.database.clone(),
            server: self.server.clone(),
            port: self.port.clone(),
            db_type,
            xa_connection_util,
        })
    }
}

fn require(source: &impl PropertySource, key: &str) -> Result<String> {
    source
        .property(key)
        .ok_or_else(|| ConnectionDataError::MissingConfiguration {
            key: key.to_string(),
        })
}
