//! Supported database vendors and their URL templates

use crate::error::{ConnectionDataError, Result};
use std::fmt;
use std::str::FromStr;

/// Database vendor a connection URL is produced for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbType {
    /// PostgreSQL
    PostgreSql,
    /// EnterpriseDB Postgres Plus
    PostgresPlus,
    /// Microsoft SQL Server
    Mssql,
    /// Oracle Database
    Oracle,
    /// SAP Sybase ASE
    Sybase,
    /// IBM DB2
    Db2,
    /// MySQL
    MySql,
    /// MariaDB
    MariaDb,
}

/// Helper used by external XA recovery for a given vendor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XaConnectionUtil {
    /// `MssqlXAConnectionUtil`
    Mssql,
    /// `PostgresPlusXAConnectionUtil`
    PostgresPlus,
    /// `OracleXAConnectionUtil`
    Oracle,
    /// `SybaseXAConnectionUtil`
    Sybase,
    /// `Db2XAConnectionUtil`
    Db2,
    /// `MariaDBXAConnectionUtil`
    MariaDb,
    /// `MySQLXAConnectionUtil`
    MySql,
}

/// Borrowed connection fields a URL template is applied to
#[derive(Debug, Clone, Copy)]
pub(crate) struct UrlParts<'a> {
    pub server: &'a str,
    pub port: &'a str,
    pub database: &'a str,
    pub user: &'a str,
    pub password: &'a str,
}

impl DbType {
    /// Every supported vendor, in declaration order
    pub const ALL: [Self; 8] = [
        Self::PostgreSql,
        Self::PostgresPlus,
        Self::Mssql,
        Self::Oracle,
        Self::Sybase,
        Self::Db2,
        Self::MySql,
        Self::MariaDb,
    ];

    /// Canonical upper-case name of the vendor
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PostgreSql => "POSTGRESQL",
            Self::PostgresPlus => "POSTGRESPLUS",
            Self::Mssql => "MSSQL",
            Self::Oracle => "ORACLE",
            Self::Sybase => "SYBASE",
            Self::Db2 => "DB2",
            Self::MySql => "MYSQL",
            Self::MariaDb => "MARIADB",
        }
    }

    /// XA helper associated with the vendor
    ///
    /// PostgreSQL resolves to the MSSQL helper.
    #[must_use]
    pub const fn xa_connection_util(self) -> XaConnectionUtil {
        match self {
            Self::PostgreSql | Self::Mssql => XaConnectionUtil::Mssql,
            Self::PostgresPlus => XaConnectionUtil::PostgresPlus,
            Self::Oracle => XaConnectionUtil::Oracle,
            Self::Sybase => XaConnectionUtil::Sybase,
            Self::Db2 => XaConnectionUtil::Db2,
            Self::MySql => XaConnectionUtil::MySql,
            Self::MariaDb => XaConnectionUtil::MariaDb,
        }
    }

    /// Whether connection data of this vendor can be duplicated
    #[must_use]
    pub const fn is_cloneable(self) -> bool {
        matches!(self, Self::Db2)
    }

    /// Apply the vendor URL template. Values are concatenated verbatim.
    pub(crate) fn format_url(self, parts: &UrlParts<'_>) -> String {
        let UrlParts {
            server,
            port,
            database,
            user,
            password,
        } = *parts;

        match self {
            Self::PostgreSql => format!("jdbc:postgresql://{server}:{port}/{database}"),
            Self::PostgresPlus => format!("jdbc:edb://{server}:{port}/{database}"),
            Self::Mssql => format!(
                "jdbc:sqlserver://{server}:{port};databaseName={database};user={user};password={password}"
            ),
            Self::Oracle => format!("jdbc:oracle:thin:@{server}:{port}:{database}"),
            Self::Sybase => format!("jdbc:sybase:Tds:{server}:{port}/{database}"),
            Self::Db2 => format!("jdbc:db2://{server}:{port}/{database}"),
            Self::MariaDb => format!("jdbc:mariadb://{server}:{port}/{database}"),
            Self::MySql => format!("jdbc:mysql://{server}:{port}/{database}"),
        }
    }
}

impl fmt::Display for DbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DbType {
    type Err = ConnectionDataError;

    fn from_str(s: &str) -> Result<Self> {
        let upper = s.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|db_type| db_type.name() == upper)
            .ok_or_else(|| ConnectionDataError::InvalidArgument {
                message: format!("unknown database type '{s}'"),
            })
    }
}

impl XaConnectionUtil {
    /// Identifier the XA recovery collaborator resolves the helper by
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mssql => "MssqlXAConnectionUtil",
            Self::PostgresPlus => "PostgresPlusXAConnectionUtil",
            Self::Oracle => "OracleXAConnectionUtil",
            Self::Sybase => "SybaseXAConnectionUtil",
            Self::Db2 => "Db2XAConnectionUtil",
            Self::MariaDb => "MariaDBXAConnectionUtil",
            Self::MySql => "MySQLXAConnectionUtil",
        }
    }
}

impl fmt::Display for XaConnectionUtil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
