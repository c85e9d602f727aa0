//! Extraction services.
//!
//! - `city`: City page extractor
//! - `directory`: Directory page extractor
//! - `sanitize`: Description cleanup
//! - `dom`: Read-only page view used by the extractors

pub mod city;
pub mod directory;
pub mod dom;
pub mod sanitize;

pub use city::{CityExtractor, extract_city};
pub use directory::{DirectoryExtractor, extract_directory};

use crate::models::{CityEntry, RiskLevel};
use crate::services::dom::Node;
use crate::utils::url::resolve;

/// Read a city link; links without text or href are dropped.
pub(crate) fn anchor_to_city(anchor: Node<'_>, origin: &str) -> Option<CityEntry> {
    let name = anchor.text();
    if name.is_empty() {
        return None;
    }
    let url = resolve(anchor.attr("href"), origin)?;

    Some(CityEntry {
        name,
        url,
        risk_level: RiskLevel::from_class(anchor.attr("class")),
    })
}
