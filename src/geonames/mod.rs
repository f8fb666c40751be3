//! Static geonames reference data
//!
//! File schemas, country codes and feature codes. None of this changes at
//! runtime; host overrides are applied on top of copies during resolution.

pub mod countries;
pub mod features;
pub mod files;

pub use countries::{COUNTRY_CODES, NO_LONGER_EXISTENT_COUNTRY_CODES, all_country_codes};
pub use features::{CITY_TYPES, DISTRICT_TYPES};
pub use files::{FileSchema, Filenames, default_files};
