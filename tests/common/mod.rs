//! Common test utilities and helpers
//!
//! This module provides shared plugins and settings builders for integration tests.

#![allow(dead_code)]

/// Test helper functions
pub mod helpers {
    use geonames_conf::{HostSettings, PluginRegistry};

    use super::plugins::{AltNameFilter, CityRenamer, Inert, PopulationFilter};

    /// Registry with every test plugin under `tests.plugins.<Name>`
    pub fn create_test_registry() -> PluginRegistry {
        let mut registry = PluginRegistry::new();
        registry
            .register_default::<CityRenamer>("tests.plugins.CityRenamer")
            .register_default::<PopulationFilter>("tests.plugins.PopulationFilter")
            .register_default::<AltNameFilter>("tests.plugins.AltNameFilter")
            .register_default::<Inert>("tests.plugins.Inert");
        registry
    }

    /// Host settings listing the given plugin identifiers
    pub fn create_test_host(plugins: &[&str]) -> HostSettings {
        HostSettings {
            plugins: Some(plugins.iter().map(|p| p.to_string()).collect()),
            ..Default::default()
        }
    }
}

/// Plugins used by the integration tests
pub mod plugins {
    use geonames_conf::{Hook, Plugin, Record, SkipRecord};

    /// Rewrites city names before and after import
    #[derive(Default)]
    pub struct CityRenamer;

    impl Plugin for CityRenamer {
        fn name(&self) -> &str {
            "city_renamer"
        }

        fn hooks(&self) -> &[Hook] {
            &[Hook::CityPost, Hook::CityPre]
        }

        fn call(&self, _hook: Hook, record: &mut Record) -> Result<(), SkipRecord> {
            if record.get("name") == Some("Wien") {
                record.set("name", "Vienna");
            }
            Ok(())
        }
    }

    /// Skips populated places under 500 inhabitants
    #[derive(Default)]
    pub struct PopulationFilter;

    impl Plugin for PopulationFilter {
        fn name(&self) -> &str {
            "population_filter"
        }

        fn hooks(&self) -> &[Hook] {
            &[Hook::CityPre, Hook::DistrictPre]
        }

        fn call(&self, _hook: Hook, record: &mut Record) -> Result<(), SkipRecord> {
            let population: u64 = record
                .get("population")
                .and_then(|p| p.parse().ok())
                .unwrap_or(0);
            if population < 500 {
                return Err(SkipRecord::new("population too small"));
            }
            Ok(())
        }
    }

    /// Drops historic alternate names
    #[derive(Default)]
    pub struct AltNameFilter;

    impl Plugin for AltNameFilter {
        fn name(&self) -> &str {
            "alt_name_filter"
        }

        fn hooks(&self) -> &[Hook] {
            &[Hook::AltNamePre]
        }

        fn call(&self, _hook: Hook, record: &mut Record) -> Result<(), SkipRecord> {
            match record.get("isHistoric") {
                Some("1") => Err(SkipRecord::new("historic name")),
                _ => Ok(()),
            }
        }
    }

    /// Implements no hooks at all
    #[derive(Default)]
    pub struct Inert;

    impl Plugin for Inert {
        fn name(&self) -> &str {
            "inert"
        }

        fn hooks(&self) -> &[Hook] {
            &[]
        }

        fn call(&self, _hook: Hook, _record: &mut Record) -> Result<(), SkipRecord> {
            Ok(())
        }
    }
}
