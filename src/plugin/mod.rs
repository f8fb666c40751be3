//! Plugin hooks and registration
//!
//! Plugins are plain Rust values implementing [`Plugin`]. They are looked up
//! by identifier in a [`PluginRegistry`] the host fills at startup, then
//! grouped by hook into a [`HookTable`] the importer dispatches through.

pub mod hook;
pub mod registry;

pub use hook::{Hook, Phase, SkipRecord};
pub use registry::{HookTable, Plugin, PluginFactory, PluginRegistry};
