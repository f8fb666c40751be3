//! Plugin registry and hook dispatch table
//!
//! Host applications register a factory per plugin identifier at startup.
//! Settings resolution then builds, in host order, one instance per
//! configured identifier and files it under every hook it implements.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::plugin::hook::{Hook, SkipRecord};
use crate::types::Record;
use crate::{Error, Result};

/// A host-supplied extension run during import
pub trait Plugin: Send + Sync {
    /// Name shown in logs and in serialized settings
    fn name(&self) -> &str;

    /// Hooks this plugin implements
    ///
    /// A plugin is only called for the hooks listed here. An empty list is
    /// legal and means the plugin is never called.
    fn hooks(&self) -> &[Hook];

    /// Run `hook` against one record
    ///
    /// Return [`SkipRecord`] to drop the record from the import.
    fn call(&self, hook: Hook, record: &mut Record) -> std::result::Result<(), SkipRecord>;
}

/// Builds a fresh plugin instance with no arguments
pub type PluginFactory = Box<dyn Fn() -> anyhow::Result<Box<dyn Plugin>> + Send + Sync>;

/// Startup table from plugin identifier to factory
#[derive(Default)]
pub struct PluginRegistry {
    factories: HashMap<String, PluginFactory>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under `path`, replacing any previous one
    pub fn register<F>(&mut self, path: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> anyhow::Result<Box<dyn Plugin>> + Send + Sync + 'static,
    {
        self.factories.insert(path.into(), Box::new(factory));
        self
    }

    /// Register a plugin type built through its `Default` impl
    pub fn register_default<P>(&mut self, path: impl Into<String>) -> &mut Self
    where
        P: Plugin + Default + 'static,
    {
        self.register(path, || Ok(Box::new(P::default()) as Box<dyn Plugin>))
    }

    pub fn contains(&self, path: &str) -> bool {
        self.factories.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Instantiate one plugin by identifier
    pub fn instantiate(&self, path: &str) -> Result<Arc<dyn Plugin>> {
        validate_plugin_path(path)?;

        let factory = self
            .factories
            .get(path)
            .ok_or_else(|| Error::plugin_not_found(path))?;
        let plugin = factory().map_err(|e| Error::plugin_init(path, format!("{:#}", e)))?;

        Ok(Arc::from(plugin))
    }

    /// Build the hook table for the configured plugin identifiers
    ///
    /// Plugins keep host order within every hook. Failures propagate on the
    /// first bad identifier; nothing is partially registered.
    pub fn resolve<S: AsRef<str>>(&self, paths: &[S]) -> Result<HookTable> {
        let mut table = HookTable::new();

        for path in paths {
            let path = path.as_ref();
            let plugin = self.instantiate(path)?;

            let mut registered = 0;
            for hook in Hook::ALL {
                if plugin.hooks().contains(&hook) {
                    table.register(hook, Arc::clone(&plugin));
                    registered += 1;
                }
            }

            debug!(
                "Registered plugin {} ({}) for {} hook(s)",
                plugin.name(),
                path,
                registered
            );
        }

        Ok(table)
    }
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut paths: Vec<_> = self.factories.keys().collect();
        paths.sort();
        f.debug_struct("PluginRegistry")
            .field("paths", &paths)
            .finish()
    }
}

/// Identifiers take the form `module.path.Name`
fn validate_plugin_path(path: &str) -> Result<()> {
    match path.rsplit_once('.') {
        Some((module, class)) if !module.is_empty() && !class.is_empty() => Ok(()),
        _ => Err(Error::invalid_plugin_path(path)),
    }
}

/// Plugins to call for each hook, in host order
#[derive(Clone, Default)]
pub struct HookTable {
    hooks: BTreeMap<Hook, Vec<Arc<dyn Plugin>>>,
}

impl HookTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, hook: Hook, plugin: Arc<dyn Plugin>) {
        self.hooks.entry(hook).or_default().push(plugin);
    }

    /// Plugins registered for `hook`; empty when none are
    pub fn plugins(&self, hook: Hook) -> &[Arc<dyn Plugin>] {
        self.hooks.get(&hook).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Hooks with at least one plugin
    pub fn hooks(&self) -> impl Iterator<Item = Hook> + '_ {
        self.hooks.keys().copied()
    }

    /// Run every plugin registered for `hook`, stopping at the first skip
    pub fn dispatch(&self, hook: Hook, record: &mut Record) -> std::result::Result<(), SkipRecord> {
        for plugin in self.plugins(hook) {
            plugin.call(hook, record)?;
        }
        Ok(())
    }
}

impl fmt::Debug for HookTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.hooks.iter().map(|(hook, plugins)| {
                let names: Vec<&str> = plugins.iter().map(|plugin| plugin.name()).collect();
                (hook, names)
            }))
            .finish()
    }
}

impl Serialize for HookTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.hooks.len()))?;
        for (hook, plugins) in &self.hooks {
            let names: Vec<&str> = plugins.iter().map(|plugin| plugin.name()).collect();
            map.serialize_entry(hook, &names)?;
        }
        map.end()
    }
}
