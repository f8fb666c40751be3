//! Geonames feature codes the importer treats as places
//!
//! See <http://www.geonames.org/export/codes.html>.

/// Populated-place codes imported as cities
pub const CITY_TYPES: &[&str] = &["PPL", "PPLA", "PPLC", "PPLA2", "PPLA3", "PPLA4", "PPLG"];

/// Populated-place codes imported as districts of a city
pub const DISTRICT_TYPES: &[&str] = &["PPLX"];

pub fn is_city_type(feature_code: &str) -> bool {
    CITY_TYPES.contains(&feature_code)
}

pub fn is_district_type(feature_code: &str) -> bool {
    DISTRICT_TYPES.contains(&feature_code)
}
