//! Configuration management for geonames imports
//!
//! This module reads host settings, merges them with the built-in defaults
//! and produces the [`Settings`] the importer runs with.

pub mod host;
pub mod loader;
pub mod settings;

pub use host::{FileOverride, HostSettings};
pub use loader::ConfigLoader;
pub use settings::Settings;
