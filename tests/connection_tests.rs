use jdbc_conn::{ConnectionDataBuilder, ConnectionDataError, DbType, XaConnectionUtil};
use std::collections::HashMap;

fn empty() -> HashMap<String, String> {
    HashMap::new()
}

fn builder(server: &str, port: &str) -> ConnectionDataBuilder {
    ConnectionDataBuilder::with_defaults(&empty(), server, port)
        .database("D")
        .user("U")
        .password("W")
}

#[test]
fn test_every_vendor_template() {
    let cases = [
        (DbType::PostgreSql, "jdbc:postgresql://S:P/D", XaConnectionUtil::Mssql),
        (DbType::PostgresPlus, "jdbc:edb://S:P/D", XaConnectionUtil::PostgresPlus),
        (
            DbType::Mssql,
            "jdbc:sqlserver://S:P;databaseName=D;user=U;password=W",
            XaConnectionUtil::Mssql,
        ),
        (DbType::Oracle, "jdbc:oracle:thin:@S:P:D", XaConnectionUtil::Oracle),
        (DbType::Sybase, "jdbc:sybase:Tds:S:P/D", XaConnectionUtil::Sybase),
        (DbType::Db2, "jdbc:db2://S:P/D", XaConnectionUtil::Db2),
        (DbType::MariaDb, "jdbc:mariadb://S:P/D", XaConnectionUtil::MariaDb),
        (DbType::MySql, "jdbc:mysql://S:P/D", XaConnectionUtil::MySql),
    ];

    for (db_type, url, xa) in cases {
        let data = builder("S", "P").db_type(db_type).build().unwrap();
        assert_eq!(data.url(), url, "{db_type}");
        assert_eq!(data.xa_connection_util(), xa, "{db_type}");
        assert_eq!(data.db_type(), db_type);
    }
}

#[test]
fn test_values_are_not_escaped() {
    let data = builder("h;x=1", "1/2")
        .database("a b?c")
        .db_type(DbType::MySql)
        .build()
        .unwrap();
    assert_eq!(data.url(), "jdbc:mysql://h;x=1:1/2/a b?c");
}

#[test]
fn test_postgresql_example() {
    let data = ConnectionDataBuilder::with_defaults(&empty(), "db1", "5432")
        .database("sales")
        .db_type(DbType::PostgreSql)
        .build()
        .unwrap();
    assert_eq!(data.url(), "jdbc:postgresql://db1:5432/sales");
    assert_eq!(data.port_as_int().unwrap(), 5432);
}

#[test]
fn test_mssql_example() {
    let data = ConnectionDataBuilder::with_defaults(&empty(), "db2", "1433")
        .database("hr")
        .user("admin")
        .password("secret")
        .type_name("mssql")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(
        data.url(),
        "jdbc:sqlserver://db2:1433;databaseName=hr;user=admin;password=secret"
    );
}

#[test]
fn test_build_without_type_fails() {
    let err = builder("S", "P").build().unwrap_err();
    assert!(matches!(err, ConnectionDataError::UnsupportedOperation { .. }));
}

#[test]
fn test_type_name_case_insensitive() {
    for name in ["mysql", "MYSQL", "MySQL"] {
        let data = builder("S", "P").type_name(name).unwrap().build().unwrap();
        assert_eq!(data.db_type(), DbType::MySql);
    }
}

#[test]
fn test_unknown_type_name_fails() {
    let err = builder("S", "P").type_name("informix").unwrap_err();
    assert!(matches!(err, ConnectionDataError::InvalidArgument { .. }));
}

#[test]
fn test_new_without_configuration_fails() {
    let err = ConnectionDataBuilder::new(&empty()).unwrap_err();
    assert!(matches!(
        err,
        ConnectionDataError::MissingConfiguration { .. }
    ));
}

#[test]
fn test_with_defaults_uses_supplied_values() {
    let data = ConnectionDataBuilder::with_defaults(&empty(), "fallback", "3306")
        .db_type(DbType::MariaDb)
        .build()
        .unwrap();
    assert_eq!(data.server(), "fallback");
    assert_eq!(data.port(), "3306");
}

#[test]
fn test_non_numeric_port() {
    let data = builder("S", "abc").db_type(DbType::Sybase).build().unwrap();
    let err = data.port_as_int().unwrap_err();
    assert_eq!(
        err,
        ConnectionDataError::ParseError {
            value: "abc".to_string(),
            expected: "a positive port number".to_string(),
        }
    );
}

#[test]
fn test_display_omits_database_name() {
    for db_type in DbType::ALL {
        let data = ConnectionDataBuilder::with_defaults(&empty(), "db1", "5432")
            .database("payroll")
            .user("app")
            .password("pw")
            .db_type(db_type)
            .build()
            .unwrap();

        assert!(data.url().contains("payroll"));
        let rendered = data.to_string();
        assert!(!rendered.contains("payroll"), "{rendered}");
        assert!(rendered.ends_with("connection props: db1:5432 app/pw"), "{rendered}");
    }
}

#[test]
fn test_duplicate_db2() {
    let original = builder("S", "50000").db_type(DbType::Db2).build().unwrap();
    let copy = original.try_duplicate().unwrap();
    assert_eq!(copy, original);
}

#[test]
fn test_duplicate_other_types_unsupported() {
    for db_type in DbType::ALL.into_iter().filter(|t| *t != DbType::Db2) {
        let data = builder("S", "P").db_type(db_type).build().unwrap();
        assert!(matches!(
            data.try_duplicate(),
            Err(ConnectionDataError::UnsupportedOperation { .. })
        ));
    }
}

#[test]
fn test_connection_data_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<jdbc_conn::ConnectionData>();
}
