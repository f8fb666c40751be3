//! Hook names and the record-skip signal

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::types::ImportStage;

/// Whether a hook runs before or after a record is processed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Pre,
    Post,
}

/// Extension points a plugin may implement
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hook {
    CountryPre,
    CountryPost,
    RegionPre,
    RegionPost,
    SubregionPre,
    SubregionPost,
    CityPre,
    CityPost,
    DistrictPre,
    DistrictPost,
    AltNamePre,
    AltNamePost,
    PostalCodePre,
    PostalCodePost,
}

impl Hook {
    /// All hooks in registration order
    pub const ALL: [Hook; 14] = [
        Hook::CountryPre,
        Hook::CountryPost,
        Hook::RegionPre,
        Hook::RegionPost,
        Hook::SubregionPre,
        Hook::SubregionPost,
        Hook::CityPre,
        Hook::CityPost,
        Hook::DistrictPre,
        Hook::DistrictPost,
        Hook::AltNamePre,
        Hook::AltNamePost,
        Hook::PostalCodePre,
        Hook::PostalCodePost,
    ];

    /// Hook for a stage and phase; `all` has no hooks of its own
    pub fn new(stage: ImportStage, phase: Phase) -> Option<Self> {
        use Phase::{Post, Pre};

        let hook = match (stage, phase) {
            (ImportStage::All, _) => return None,
            (ImportStage::Country, Pre) => Hook::CountryPre,
            (ImportStage::Country, Post) => Hook::CountryPost,
            (ImportStage::Region, Pre) => Hook::RegionPre,
            (ImportStage::Region, Post) => Hook::RegionPost,
            (ImportStage::Subregion, Pre) => Hook::SubregionPre,
            (ImportStage::Subregion, Post) => Hook::SubregionPost,
            (ImportStage::City, Pre) => Hook::CityPre,
            (ImportStage::City, Post) => Hook::CityPost,
            (ImportStage::District, Pre) => Hook::DistrictPre,
            (ImportStage::District, Post) => Hook::DistrictPost,
            (ImportStage::AltName, Pre) => Hook::AltNamePre,
            (ImportStage::AltName, Post) => Hook::AltNamePost,
            (ImportStage::PostalCode, Pre) => Hook::PostalCodePre,
            (ImportStage::PostalCode, Post) => Hook::PostalCodePost,
        };
        Some(hook)
    }

    pub fn stage(self) -> ImportStage {
        match self {
            Hook::CountryPre | Hook::CountryPost => ImportStage::Country,
            Hook::RegionPre | Hook::RegionPost => ImportStage::Region,
            Hook::SubregionPre | Hook::SubregionPost => ImportStage::Subregion,
            Hook::CityPre | Hook::CityPost => ImportStage::City,
            Hook::DistrictPre | Hook::DistrictPost => ImportStage::District,
            Hook::AltNamePre | Hook::AltNamePost => ImportStage::AltName,
            Hook::PostalCodePre | Hook::PostalCodePost => ImportStage::PostalCode,
        }
    }

    pub fn phase(self) -> Phase {
        match self {
            Hook::CountryPre
            | Hook::RegionPre
            | Hook::SubregionPre
            | Hook::CityPre
            | Hook::DistrictPre
            | Hook::AltNamePre
            | Hook::PostalCodePre => Phase::Pre,
            _ => Phase::Post,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Hook::CountryPre => "country_pre",
            Hook::CountryPost => "country_post",
            Hook::RegionPre => "region_pre",
            Hook::RegionPost => "region_post",
            Hook::SubregionPre => "subregion_pre",
            Hook::SubregionPost => "subregion_post",
            Hook::CityPre => "city_pre",
            Hook::CityPost => "city_post",
            Hook::DistrictPre => "district_pre",
            Hook::DistrictPost => "district_post",
            Hook::AltNamePre => "alt_name_pre",
            Hook::AltNamePost => "alt_name_post",
            Hook::PostalCodePre => "postal_code_pre",
            Hook::PostalCodePost => "postal_code_post",
        }
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Hook {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hook::ALL
            .into_iter()
            .find(|hook| hook.as_str() == s)
            .ok_or_else(|| crate::Error::config(format!("Unknown plugin hook: {}", s)))
    }
}

/// Returned from a hook to drop the current line of data
///
/// The importer logs the message and moves on to the next record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SkipRecord {
    pub message: String,
}

impl SkipRecord {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
