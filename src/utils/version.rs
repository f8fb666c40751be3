//! Version information

/// Crate version as recorded by Cargo
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn get_version() -> &'static str {
    VERSION
}
