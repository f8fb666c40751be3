//! Resolved import settings
//!
//! Built once at startup from the built-in defaults and the host's
//! [`HostSettings`], then handed to the importer by value or reference.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use tracing::debug;
use url::Url;

use crate::config::host::{FileOverride, HostSettings};
use crate::geonames::countries::NO_LONGER_EXISTENT_COUNTRY_CODES;
use crate::geonames::files::{FileSchema, Filenames, default_files};
use crate::plugin::{HookTable, PluginRegistry};
use crate::types::{Dataset, ImportStage};
use crate::{Error, Result};

/// Locales kept when the host does not configure any
pub const DEFAULT_LOCALES: &[&str] = &["en", "und"];

/// Locale entry replaced by the host's language codes
pub const LANGUAGES_SENTINEL: &str = "LANGUAGES";

/// Settings consumed by the import pipeline
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    /// Lowercase locales to keep alternate names for
    pub locales: BTreeSet<String>,
    /// Directory downloaded files are stored in
    pub data_dir: PathBuf,
    /// Uppercase country codes to import postal codes for; empty imports none
    pub postal_codes: BTreeSet<String>,
    /// Skip regions that end up without any city
    pub ignore_empty_regions: bool,
    /// Withdrawn country codes still accepted in source data
    pub no_longer_existent_country_codes: Vec<String>,
    /// File schema per dataset
    pub files: BTreeMap<Dataset, FileSchema>,
    /// Plugins per hook
    pub plugins: HookTable,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            files: default_files(),
            locales: Self::resolve_locales::<&str>(None, &[]),
            data_dir: default_data_dir(),
            postal_codes: BTreeSet::new(),
            plugins: HookTable::new(),
            ignore_empty_regions: false,
            no_longer_existent_country_codes: NO_LONGER_EXISTENT_COUNTRY_CODES
                .iter()
                .map(|code| code.to_string())
                .collect(),
        }
    }
}

impl Settings {
    /// Merge host settings over the defaults and build the plugin table
    pub fn resolve(host: &HostSettings, registry: &PluginRegistry) -> Result<Self> {
        let files = Self::resolve_files(host.files.as_ref())?;
        let locales = Self::resolve_locales(host.locales.as_deref(), &host.languages);

        let data_dir = host.data_dir.clone().unwrap_or_else(default_data_dir);

        let postal_codes = host
            .postal_codes
            .iter()
            .flatten()
            .map(|code| code.to_uppercase())
            .collect();

        let plugins = match &host.plugins {
            Some(paths) => registry.resolve(paths)?,
            None => HookTable::new(),
        };

        let no_longer_existent_country_codes = match &host.no_longer_existent_country_codes {
            Some(codes) => codes.clone(),
            None => NO_LONGER_EXISTENT_COUNTRY_CODES
                .iter()
                .map(|code| code.to_string())
                .collect(),
        };

        Ok(Self {
            files,
            locales,
            data_dir,
            postal_codes,
            plugins,
            ignore_empty_regions: host.ignore_empty_regions.unwrap_or(false),
            no_longer_existent_country_codes,
        })
    }

    /// Apply per-dataset overrides to a fresh copy of the default schemas
    pub fn resolve_files(
        overrides: Option<&BTreeMap<String, FileOverride>>,
    ) -> Result<BTreeMap<Dataset, FileSchema>> {
        let mut files = default_files();

        for (name, file_override) in overrides.into_iter().flatten() {
            let dataset: Dataset = name.parse()?;
            if file_override.filename.is_some() && file_override.filenames.is_some() {
                return Err(Error::config(format!(
                    "Only one key should be specified for '{}': 'filename' or 'filenames'. Both specified instead",
                    dataset
                )));
            }

            let schema = files
                .get_mut(&dataset)
                .ok_or_else(|| Error::config(format!("Unknown dataset: {}", dataset)))?;

            if let Some(filename) = &file_override.filename {
                schema.filenames = Filenames::Single(filename.clone());
            }
            if let Some(filenames) = &file_override.filenames {
                schema.filenames = Filenames::Multiple(filenames.clone());
            }
            if let Some(urls) = &file_override.urls {
                schema.urls = urls.clone();
            }
            if let Some(fields) = &file_override.fields {
                schema.fields = fields.clone();
            }

            debug!("Applied file override for {}: {:?}", dataset, schema.filenames);
        }

        Ok(files)
    }

    /// Build the lowercase locale set
    ///
    /// The first `LANGUAGES` entry, if any, is replaced by the codes of the
    /// host language list.
    pub fn resolve_locales<S: AsRef<str>>(
        locales: Option<&[S]>,
        languages: &[(String, String)],
    ) -> BTreeSet<String> {
        let mut locales: Vec<String> = match locales {
            Some(locales) => locales.iter().map(|l| l.as_ref().to_string()).collect(),
            None => DEFAULT_LOCALES.iter().map(|l| l.to_string()).collect(),
        };

        if let Some(position) = locales.iter().position(|l| l == LANGUAGES_SENTINEL) {
            locales.remove(position);
            locales.extend(languages.iter().map(|(code, _)| code.clone()));
        }

        locales.into_iter().map(|l| l.to_lowercase()).collect()
    }

    pub fn schema(&self, dataset: Dataset) -> Option<&FileSchema> {
        self.files.get(&dataset)
    }

    /// Download URLs for one dataset
    pub fn download_urls(&self, dataset: Dataset) -> Result<Vec<Url>> {
        let schema = self
            .schema(dataset)
            .ok_or_else(|| Error::config(format!("No file schema for {}", dataset)))?;
        schema
            .download_urls()
            .map_err(|e| Error::url(dataset.as_str(), e))
    }

    /// Download URLs for every dataset the given stages read, deduplicated
    pub fn stage_urls(&self, stages: &[ImportStage]) -> Result<Vec<(Dataset, Url)>> {
        let mut datasets: Vec<Dataset> = Vec::new();
        for dataset in ImportStage::expand(stages).into_iter().filter_map(ImportStage::dataset) {
            if !datasets.contains(&dataset) {
                datasets.push(dataset);
            }
        }

        let mut urls = Vec::new();
        for dataset in datasets {
            for url in self.download_urls(dataset)? {
                urls.push((dataset, url));
            }
        }
        Ok(urls)
    }

    /// Whether alternate names in `locale` should be kept
    pub fn keeps_locale(&self, locale: &str) -> bool {
        self.locales.contains(&locale.to_lowercase())
    }

    /// Whether postal codes of `country_code` should be imported
    pub fn imports_postal_codes_for(&self, country_code: &str) -> bool {
        self.postal_codes.contains(&country_code.to_uppercase())
    }

    pub fn is_no_longer_existent_country(&self, country_code: &str) -> bool {
        self.no_longer_existent_country_codes
            .iter()
            .any(|code| code == country_code)
    }

    /// Check that every dataset expands to valid download URLs
    pub fn validate(&self) -> Result<()> {
        for dataset in self.files.keys() {
            self.download_urls(*dataset)?;
        }
        Ok(())
    }
}

/// `<platform data dir>/geonames`, or `./data` where there is none
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("geonames"))
        .unwrap_or_else(|| PathBuf::from("data"))
}
