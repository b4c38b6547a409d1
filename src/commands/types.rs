use crate::db_type::DbType;

/// Render one line per supported database type with its XA helper
#[must_use]
pub fn render_types() -> String {
    DbType::ALL
        .iter()
        .map(|db_type| format!("{:<14}{}\n", db_type.name(), db_type.xa_connection_util()))
        .collect()
}

#[allow(clippy::disallowed_methods)]
/// Handle the types command
pub fn handle_types() {
    print!("{}", render_types());
}
