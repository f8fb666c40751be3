//! Remote file locations and column layouts for the geonames dumps
//!
//! Every dataset maps to one or more files, the URLs they are fetched from and
//! the ordered list of tab-separated columns each line carries.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;

use crate::types::{Dataset, Record};

/// Placeholder substituted with each filename when building download URLs
pub const FILENAME_PLACEHOLDER: &str = "{filename}";

/// Base URL of the main geonames dump directory
pub const GEONAMES_DUMP_URL: &str = "http://download.geonames.org/export/dump/";

/// Base URL of the geonames postal code directory
pub const GEONAMES_ZIP_URL: &str = "http://download.geonames.org/export/zip/";

pub const COUNTRY_FIELDS: &[&str] = &[
    "code",
    "code3",
    "codeNum",
    "fips",
    "name",
    "capital",
    "area",
    "population",
    "continent",
    "tld",
    "currencyCode",
    "currencyName",
    "phone",
    "postalCodeFormat",
    "postalCodeRegex",
    "languages",
    "geonameid",
    "neighbours",
    "equivalentFips",
];

/// Shared by admin1 (region) and admin2 (subregion) files
pub const ADMIN_CODE_FIELDS: &[&str] = &["code", "name", "asciiName", "geonameid"];

pub const CITY_FIELDS: &[&str] = &[
    "geonameid",
    "name",
    "asciiName",
    "alternateNames",
    "latitude",
    "longitude",
    "featureClass",
    "featureCode",
    "countryCode",
    "cc2",
    "admin1Code",
    "admin2Code",
    "admin3Code",
    "admin4Code",
    "population",
    "elevation",
    "gtopo30",
    "timezone",
    "modificationDate",
];

pub const HIERARCHY_FIELDS: &[&str] = &["parent", "child"];

pub const ALT_NAME_FIELDS: &[&str] = &[
    "nameid",
    "geonameid",
    "language",
    "name",
    "isPreferred",
    "isShort",
    "isColloquial",
    "isHistoric",
];

pub const POSTAL_CODE_FIELDS: &[&str] = &[
    "countryCode",
    "postalCode",
    "placeName",
    "admin1Name",
    "admin1Code",
    "admin2Name",
    "admin2Code",
    "admin3Name",
    "admin3Code",
    "latitude",
    "longitude",
    "accuracy",
];

/// The file or files a dataset is read from
///
/// A dataset names either one file or several, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filenames {
    #[serde(rename = "filename")]
    Single(String),
    #[serde(rename = "filenames")]
    Multiple(Vec<String>),
}

/// Location and layout of one dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSchema {
    #[serde(flatten)]
    pub filenames: Filenames,
    /// URL templates; `{filename}` is replaced by each filename
    pub urls: Vec<String>,
    /// Column names in file order
    pub fields: Vec<String>,
}

impl FileSchema {
    fn geonames(base: &str, filename: &str, fields: &[&str]) -> Self {
        Self {
            filenames: Filenames::Single(filename.to_string()),
            urls: vec![format!("{}{}", base, FILENAME_PLACEHOLDER)],
            fields: fields.iter().map(|field| field.to_string()).collect(),
        }
    }

    /// The single filename, if the dataset is not split across files
    pub fn filename(&self) -> Option<&str> {
        match &self.filenames {
            Filenames::Single(name) => Some(name),
            Filenames::Multiple(_) => None,
        }
    }

    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        let names: &[String] = match &self.filenames {
            Filenames::Single(name) => std::slice::from_ref(name),
            Filenames::Multiple(names) => names,
        };
        names.iter().map(String::as_str)
    }

    /// Expand every URL template against every filename
    ///
    /// Ordering is filename-major: all URLs for the first file come first.
    pub fn download_urls(&self) -> Result<Vec<Url>, url::ParseError> {
        self.filenames()
            .flat_map(|filename| {
                self.urls
                    .iter()
                    .map(move |template| Url::parse(&template.replace(FILENAME_PLACEHOLDER, filename)))
            })
            .collect()
    }

    /// Split one tab-separated line into a record keyed by this schema's fields
    pub fn parse_line(&self, line: &str) -> Record {
        let line = line.trim_end_matches(['\r', '\n']);
        Record::from_fields(self.fields.iter().map(String::as_str), line.split('\t'))
    }
}

/// Built-in schema table
///
/// Returns a fresh copy on every call, so callers may mutate the result freely.
pub fn default_files() -> BTreeMap<Dataset, FileSchema> {
    BTreeMap::from([
        (
            Dataset::Country,
            FileSchema::geonames(GEONAMES_DUMP_URL, "countryInfo.txt", COUNTRY_FIELDS),
        ),
        (
            Dataset::Region,
            FileSchema::geonames(GEONAMES_DUMP_URL, "admin1CodesASCII.txt", ADMIN_CODE_FIELDS),
        ),
        (
            Dataset::Subregion,
            FileSchema::geonames(GEONAMES_DUMP_URL, "admin2Codes.txt", ADMIN_CODE_FIELDS),
        ),
        (
            Dataset::City,
            FileSchema::geonames(GEONAMES_DUMP_URL, "cities5000.zip", CITY_FIELDS),
        ),
        (
            Dataset::Hierarchy,
            FileSchema::geonames(GEONAMES_DUMP_URL, "hierarchy.zip", HIERARCHY_FIELDS),
        ),
        (
            Dataset::AltName,
            FileSchema::geonames(GEONAMES_DUMP_URL, "alternateNames.zip", ALT_NAME_FIELDS),
        ),
        (
            Dataset::PostalCode,
            FileSchema::geonames(GEONAMES_ZIP_URL, "allCountries.zip", POSTAL_CODE_FIELDS),
        ),
    ])
}
