//! Value parsers for clap arguments

use campus_core::catalog::{CatalogKind, Difficulty};
use campus_core::compass::CompassMode;
use campus_core::format::OutputFormat;
use campus_core::query::SortMode;

pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

pub fn parse_catalog(s: &str) -> std::result::Result<CatalogKind, String> {
    s.parse::<CatalogKind>().map_err(|e| e.to_string())
}

pub fn parse_difficulty(s: &str) -> std::result::Result<Difficulty, String> {
    s.parse::<Difficulty>().map_err(|e| e.to_string())
}

pub fn parse_sort(s: &str) -> std::result::Result<SortMode, String> {
    s.parse::<SortMode>().map_err(|e| e.to_string())
}

pub fn parse_compass_mode(s: &str) -> std::result::Result<CompassMode, String> {
    s.parse::<CompassMode>().map_err(|e| e.to_string())
}
