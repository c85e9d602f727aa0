// src/services/directory.rs

//! Directory page extractor.
//!
//! Reads every country section of the top-level listing, in page order.
//! Sections without a name are dropped, as are city links without a name or
//! href.

use scraper::Selector;

use crate::error::Result;
use crate::models::{CountryEntry, Directory, DirectorySelectors, RiskLevel, parse_selector};
use crate::services::anchor_to_city;
use crate::services::dom::{Node, Page};
use crate::utils::slug;
use crate::utils::url::resolve;

/// Extractor for the directory page, built from a selector set.
#[derive(Debug)]
pub struct DirectoryExtractor {
    origin: String,
    section: Selector,
    country_title: Selector,
    country_anchor: Selector,
    country_heading: Selector,
    city_anchor: Selector,
}

impl DirectoryExtractor {
    /// Compile `selectors`; relative links resolve against `origin`.
    pub fn new(origin: impl Into<String>, selectors: &DirectorySelectors) -> Result<Self> {
        Ok(Self {
            origin: origin.into(),
            section: parse_selector(&selectors.section)?,
            country_title: parse_selector(&selectors.country_title)?,
            country_anchor: parse_selector(&selectors.country_anchor)?,
            country_heading: parse_selector(&selectors.country_heading)?,
            city_anchor: parse_selector(&selectors.city_anchor)?,
        })
    }

    /// Extract all country sections.
    pub fn extract(&self, html: &str) -> Result<Directory> {
        let page = Page::parse(html)?;

        let mut countries = Vec::new();
        let mut skipped = 0usize;
        for section in page.root().find_all(&self.section) {
            match self.country(section) {
                Some(entry) => countries.push(entry),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            log::warn!("Skipped {skipped} directory sections without a country name");
        }
        log::debug!("Extracted {} country sections", countries.len());
        Ok(Directory::new(countries))
    }

    fn country(&self, section: Node<'_>) -> Option<CountryEntry> {
        let anchor = section.find_first(&self.country_anchor);
        let name = self.country_name(section, anchor)?;

        let url = resolve(anchor.and_then(|a| a.attr("href")), &self.origin)
            .unwrap_or_else(|| self.origin.clone());
        let risk_level = RiskLevel::from_class(anchor.and_then(|a| a.attr("class")));
        let cities = section
            .find_all(&self.city_anchor)
            .filter_map(|a| anchor_to_city(a, &self.origin))
            .collect();

        Some(CountryEntry {
            slug: slug::normalize(&name),
            country: name,
            url,
            risk_level,
            cities,
        })
    }

    /// Heading text inside the title block, else the anchor text.
    fn country_name(&self, section: Node<'_>, anchor: Option<Node<'_>>) -> Option<String> {
        let heading = section
            .find_first(&self.country_title)
            .and_then(|title| title.find_first(&self.country_heading))
            .map(|h| h.text())
            .filter(|t| !t.is_empty());

        heading
            .or_else(|| anchor.map(|a| a.text()).filter(|t| !t.is_empty()))
    }
}

/// Extract the directory page with the default selectors and origin.
pub fn extract_directory(html: &str) -> Result<Directory> {
    DirectoryExtractor::new(crate::DEFAULT_ORIGIN, &DirectorySelectors::default())?.extract(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory_page() -> &'static str {
        r#"<html><body><div class="pages-list">
            <div class="list-country">
                <div class="country-title">
                    <a class="cell-color-orange" href="/italy/"><h2>Italy</h2></a>
                </div>
                <ul>
                    <li><a class="cell-color-green" href="/italy/rome/">Rome</a></li>
                    <li><a class="cell-color-red" href="italy/naples/">Naples</a></li>
                    <li><a href="/italy/ghost/"></a></li>
                    <li><a>Nameless link</a></li>
                </ul>
            </div>
            <div class="list-country">
                <div class="country-title"><a href="/nowhere/"><h2> </h2></a></div>
                <ul><li><a href="/nowhere/city/">City</a></li></ul>
            </div>
            <div class="list-country">
                <div class="country-title"><a href="https://www.travelsafe-abroad.com/costa-rica/">Costa Rica</a></div>
                <ul><li><a class="cell-color-gray" href="/costa-rica/san-jose/">San Jose</a></li></ul>
            </div>
            <div class="list-country">
                <div class="country-title"><h2>Atlantis Adjacent</h2></div>
            </div>
        </div></body></html>"#
    }

    #[test]
    fn test_extracts_sections_in_order() {
        let directory = extract_directory(directory_page()).unwrap();
        assert_eq!(directory.len(), 3);

        let italy = &directory.countries[0];
        assert_eq!(italy.country, "Italy");
        assert_eq!(italy.slug, "italy");
        assert_eq!(italy.url, "https://www.travelsafe-abroad.com/italy/");
        assert_eq!(italy.risk_level, RiskLevel::Medium);
        assert_eq!(italy.cities.len(), 2);
        assert_eq!(italy.cities[0].url, "https://www.travelsafe-abroad.com/italy/rome/");
        assert_eq!(italy.cities[0].risk_level, RiskLevel::Low);
        assert_eq!(italy.cities[1].url, "https://www.travelsafe-abroad.com/italy/naples/");
        assert_eq!(italy.cities[1].risk_level, RiskLevel::High);

        let costa_rica = &directory.countries[1];
        assert_eq!(costa_rica.country, "Costa Rica");
        assert_eq!(costa_rica.slug, "costa-rica");
        assert_eq!(costa_rica.risk_level, RiskLevel::Unclassified);
        assert_eq!(costa_rica.cities[0].risk_level, RiskLevel::Unknown);
    }

    #[test]
    fn test_section_without_anchor_defaults_to_origin() {
        let directory = extract_directory(directory_page()).unwrap();

        let adjacent = &directory.countries[2];
        assert_eq!(adjacent.country, "Atlantis Adjacent");
        assert_eq!(adjacent.url, "https://www.travelsafe-abroad.com");
        assert_eq!(adjacent.risk_level, RiskLevel::Unclassified);
        assert!(adjacent.cities.is_empty());
    }

    #[test]
    fn test_nameless_section_is_skipped() {
        let html = r#"<div class="pages-list">
            <div class="list-country">
                <div class="country-title"><a href="/italy/"><h2>Italy</h2></a></div>
            </div>
            <div class="list-country">
                <div class="country-title"><a href="/unnamed/"></a></div>
                <ul><li><a href="/unnamed/town/">Town</a></li></ul>
            </div>
        </div>"#;

        let directory = extract_directory(html).unwrap();
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.countries[0].slug, "italy");
    }

    #[test]
    fn test_filter_by_slug_on_extracted_directory() {
        let directory = extract_directory(directory_page()).unwrap();
        assert_eq!(directory.filter_by_slug("Italy").unwrap().slug, "italy");
        assert_eq!(directory.filter_by_slug("costa rica").unwrap().cities.len(), 1);
        assert!(directory.filter_by_slug("Atlantis").is_none());
    }

    #[test]
    fn test_page_without_sections_is_empty() {
        let directory = extract_directory("<p>Maintenance</p>").unwrap();
        assert!(directory.is_empty());
    }

    #[test]
    fn test_empty_document_fails() {
        assert!(extract_directory("").is_err());
    }
}
