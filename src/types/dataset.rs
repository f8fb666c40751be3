//! Dataset and import stage identifiers
//!
//! A dataset is one category of geonames source file. An import stage is one
//! step a collaborator may run; several stages can read the same dataset.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One category of geonames source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    Country,
    Region,
    Subregion,
    City,
    Hierarchy,
    AltName,
    PostalCode,
}

impl Dataset {
    /// Every dataset in declaration order
    pub const ALL: [Dataset; 7] = [
        Dataset::Country,
        Dataset::Region,
        Dataset::Subregion,
        Dataset::City,
        Dataset::Hierarchy,
        Dataset::AltName,
        Dataset::PostalCode,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Dataset::Country => "country",
            Dataset::Region => "region",
            Dataset::Subregion => "subregion",
            Dataset::City => "city",
            Dataset::Hierarchy => "hierarchy",
            Dataset::AltName => "alt_name",
            Dataset::PostalCode => "postal_code",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dataset {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dataset::ALL
            .into_iter()
            .find(|dataset| dataset.as_str() == s)
            .ok_or_else(|| crate::Error::config(format!("Unknown dataset: {}", s)))
    }
}

/// Command-line import option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportStage {
    All,
    Country,
    Region,
    Subregion,
    City,
    District,
    AltName,
    PostalCode,
}

impl ImportStage {
    /// Every import option, `all` included
    pub const OPTIONS: [ImportStage; 8] = [
        ImportStage::All,
        ImportStage::Country,
        ImportStage::Region,
        ImportStage::Subregion,
        ImportStage::City,
        ImportStage::District,
        ImportStage::AltName,
        ImportStage::PostalCode,
    ];

    /// What `all` expands to, in run order
    pub const ALL_STAGES: [ImportStage; 7] = [
        ImportStage::Country,
        ImportStage::Region,
        ImportStage::Subregion,
        ImportStage::City,
        ImportStage::District,
        ImportStage::AltName,
        ImportStage::PostalCode,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ImportStage::All => "all",
            ImportStage::Country => "country",
            ImportStage::Region => "region",
            ImportStage::Subregion => "subregion",
            ImportStage::City => "city",
            ImportStage::District => "district",
            ImportStage::AltName => "alt_name",
            ImportStage::PostalCode => "postal_code",
        }
    }

    /// Dataset file read by this stage
    ///
    /// Districts are populated places too, so they come out of the city file.
    /// `all` reads nothing by itself.
    pub fn dataset(self) -> Option<Dataset> {
        match self {
            ImportStage::All => None,
            ImportStage::Country => Some(Dataset::Country),
            ImportStage::Region => Some(Dataset::Region),
            ImportStage::Subregion => Some(Dataset::Subregion),
            ImportStage::City | ImportStage::District => Some(Dataset::City),
            ImportStage::AltName => Some(Dataset::AltName),
            ImportStage::PostalCode => Some(Dataset::PostalCode),
        }
    }

    /// Replace `all` with every concrete stage, dropping repeats
    pub fn expand(stages: &[ImportStage]) -> Vec<ImportStage> {
        let mut expanded = Vec::with_capacity(Self::ALL_STAGES.len());
        for stage in stages {
            let concrete: &[ImportStage] = match stage {
                ImportStage::All => &Self::ALL_STAGES,
                other => std::slice::from_ref(other),
            };
            for stage in concrete {
                if !expanded.contains(stage) {
                    expanded.push(*stage);
                }
            }
        }
        expanded
    }
}

impl fmt::Display for ImportStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImportStage {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImportStage::OPTIONS
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| crate::Error::config(format!("Unknown import stage: {}", s)))
    }
}
