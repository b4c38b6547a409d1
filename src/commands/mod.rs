/// Types command functionality
pub mod types;
/// Url command functionality
pub mod url;
