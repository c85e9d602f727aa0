// src/models/selectors.rs

//! CSS selectors for the marker regions of the source site.

use scraper::Selector;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Selectors for a single city page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitySelectors {
    /// Primary heading ("Is Rome, Italy Safe?")
    #[serde(default = "defaults::heading")]
    pub heading: String,

    /// Safety index number
    #[serde(default = "defaults::safety_index")]
    pub safety_index: String,

    /// User sentiment percentage
    #[serde(default = "defaults::sentiment_score")]
    pub sentiment_score: String,

    /// Review count; the last match is used
    #[serde(default = "defaults::review_count")]
    pub review_count: String,

    /// Main content region holding the prose
    #[serde(default = "defaults::content_root")]
    pub content_root: String,

    /// Regions inside the content root that are not prose
    #[serde(default = "defaults::excluded")]
    pub excluded: String,

    /// "More cities" box
    #[serde(default = "defaults::related_region")]
    pub related_region: String,

    /// Anchors inside the "more cities" box
    #[serde(default = "defaults::related_anchor")]
    pub related_anchor: String,
}

impl Default for CitySelectors {
    fn default() -> Self {
        Self {
            heading: defaults::heading(),
            safety_index: defaults::safety_index(),
            sentiment_score: defaults::sentiment_score(),
            review_count: defaults::review_count(),
            content_root: defaults::content_root(),
            excluded: defaults::excluded(),
            related_region: defaults::related_region(),
            related_anchor: defaults::related_anchor(),
        }
    }
}

impl CitySelectors {
    fn all(&self) -> [&str; 8] {
        [
            self.heading.as_str(),
            self.safety_index.as_str(),
            self.sentiment_score.as_str(),
            self.review_count.as_str(),
            self.content_root.as_str(),
            self.excluded.as_str(),
            self.related_region.as_str(),
            self.related_anchor.as_str(),
        ]
    }
}

/// Selectors for the directory page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectorySelectors {
    /// One element per country section
    #[serde(default = "defaults::section")]
    pub section: String,

    /// Country title block inside a section
    #[serde(default = "defaults::country_title")]
    pub country_title: String,

    /// Country link inside a section
    #[serde(default = "defaults::country_anchor")]
    pub country_anchor: String,

    /// Heading inside the country title
    #[serde(default = "defaults::country_heading")]
    pub country_heading: String,

    /// City links inside a section
    #[serde(default = "defaults::city_anchor")]
    pub city_anchor: String,
}

impl Default for DirectorySelectors {
    fn default() -> Self {
        Self {
            section: defaults::section(),
            country_title: defaults::country_title(),
            country_anchor: defaults::country_anchor(),
            country_heading: defaults::country_heading(),
            city_anchor: defaults::city_anchor(),
        }
    }
}

impl DirectorySelectors {
    fn all(&self) -> [&str; 5] {
        [
            self.section.as_str(),
            self.country_title.as_str(),
            self.country_anchor.as_str(),
            self.country_heading.as_str(),
            self.city_anchor.as_str(),
        ]
    }
}

/// Both selector sets, as they appear in the config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageSelectors {
    #[serde(default)]
    pub city: CitySelectors,

    #[serde(default)]
    pub directory: DirectorySelectors,
}

impl PageSelectors {
    /// Check that every selector parses.
    pub fn validate(&self) -> Result<()> {
        for s in self.city.all().into_iter().chain(self.directory.all()) {
            parse_selector(s)?;
        }
        Ok(())
    }
}

/// Compile a selector string.
pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

mod defaults {
    pub fn heading() -> String {
        "h1.entry-title, .entry-title h1".into()
    }
    pub fn safety_index() -> String {
        "#progress #percent".into()
    }
    pub fn sentiment_score() -> String {
        ".user-sentiment-percent".into()
    }
    pub fn review_count() -> String {
        ".total-reviews-line span".into()
    }
    pub fn content_root() -> String {
        ".entry-content".into()
    }
    pub fn excluded() -> String {
        ".safety-index-box, .user-sentiment-box, .more-cities, script, style".into()
    }
    pub fn related_region() -> String {
        ".more-cities".into()
    }
    pub fn related_anchor() -> String {
        "ul li a".into()
    }

    pub fn section() -> String {
        ".pages-list .list-country".into()
    }
    pub fn country_title() -> String {
        ".country-title".into()
    }
    pub fn country_anchor() -> String {
        ".country-title a".into()
    }
    pub fn country_heading() -> String {
        "h2".into()
    }
    pub fn city_anchor() -> String {
        "ul li a".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selectors_parse() {
        assert!(PageSelectors::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_selector_rejected() {
        let mut selectors = PageSelectors::default();
        selectors.city.safety_index = "[[invalid".to_string();
        let err = selectors.validate().unwrap_err();
        assert!(err.to_string().contains("[[invalid"));
    }

    #[test]
    fn test_partial_table_keeps_defaults() {
        let selectors: PageSelectors =
            toml::from_str("[city]\nheading = \"h1\"\n").unwrap();
        assert_eq!(selectors.city.heading, "h1");
        assert_eq!(selectors.city.content_root, ".entry-content");
        assert_eq!(selectors.directory.section, ".pages-list .list-country");
    }
}
