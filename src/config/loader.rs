//! Configuration loading utilities
//!
//! Provides helper functions for loading configuration from various sources
//! with proper error handling and validation.

use crate::{
    Result,
    config::{HostSettings, Settings},
    plugin::PluginRegistry,
};
use std::path::Path;
use tracing::{debug, info, warn};

/// Configuration loader with multiple source support
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Plugins the host makes available by identifier
    registry: PluginRegistry,
}

impl ConfigLoader {
    /// Create new configuration loader with no plugins available
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader that resolves plugins against `registry`
    pub fn with_registry(registry: PluginRegistry) -> Self {
        Self { registry }
    }

    /// Load configuration with precedence order:
    /// 1. Environment variables (highest priority)
    /// 2. Configuration file
    /// 3. Default values (lowest priority)
    pub fn load(&self, config_file: Option<&Path>) -> Result<Settings> {
        let mut host = HostSettings::default();

        if let Some(path) = config_file {
            if path.exists() {
                info!("Loading configuration from file: {:?}", path);
                host = HostSettings::from_file(path)?;
            } else {
                warn!("Configuration file not found: {:?}, using defaults", path);
            }
        }

        debug!("Applying environment variable overrides");
        host = host.merge_with_env()?;

        self.resolve(&host)
    }

    /// Resolve already-collected host settings
    pub fn resolve(&self, host: &HostSettings) -> Result<Settings> {
        let settings = Settings::resolve(host, &self.registry)?;
        settings.validate()?;

        info!(
            "Configuration loaded: {} dataset(s), {} locale(s), {} postal code countries",
            settings.files.len(),
            settings.locales.len(),
            settings.postal_codes.len()
        );
        debug!("Final configuration: {:?}", settings);

        Ok(settings)
    }

    /// Plugins available to this loader
    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }
}
