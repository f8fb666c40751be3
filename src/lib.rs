//! Geonames import configuration
//!
//! Static reference data and settings resolution for importing geonames dump
//! files: where each file lives, which columns it has, which country codes
//! and feature codes matter, and which host plugins run at each hook.
//!
//! # Architecture
//!
//! - [`geonames`]: built-in file schemas, country codes and feature codes
//! - [`config`]: host settings, merging, and the resolved [`Settings`]
//! - [`plugin`]: hook names, the [`PluginRegistry`] and the [`HookTable`]
//!
//! The importer itself lives elsewhere and receives a [`Settings`] value.
//!
//! # Examples
//!
//! ```rust
//! use geonames_conf::{HostSettings, PluginRegistry, Settings};
//!
//! # fn example() -> geonames_conf::Result<()> {
//! let host = HostSettings::from_toml(r#"
//! locales = ["en", "de"]
//! postal_codes = ["at"]
//! "#)?;
//! let settings = Settings::resolve(&host, &PluginRegistry::new())?;
//! assert!(settings.imports_postal_codes_for("AT"));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod geonames;
pub mod plugin;
pub mod types;
pub mod utils;

pub use config::{ConfigLoader, HostSettings, Settings};
pub use error::{Error, Result};
pub use plugin::{Hook, HookTable, Plugin, PluginRegistry, SkipRecord};
pub use types::{Dataset, ImportStage, Record};
