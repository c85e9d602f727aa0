// src/services/city.rs

//! City page extractor.
//!
//! Turns one city page ("Is Rome, Italy Safe?") into a [`CityDetails`].
//! Missing widgets become `None`; only an empty document fails.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Selector;

use crate::error::Result;
use crate::models::{CityDetails, CityEntry, CitySelectors, RiskLevel, UserSentiment, parse_selector};
use crate::services::anchor_to_city;
use crate::services::dom::{Node, Page};
use crate::services::sanitize::extract_description;
use crate::utils::text::{parse_leading_int, title_case_slug};
use crate::utils::url::{last_path_segment, resolve};

/// Headings longer than this were taken from the wrong element.
pub const MAX_HEADING_CHARS: usize = 50;

static HEADING_PREFIX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)^is\s+").ok());
static HEADING_SUFFIX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?is)\s+safe\?.*$").ok());

/// Extractor for city pages, built from a selector set.
#[derive(Debug)]
pub struct CityExtractor {
    origin: String,
    heading: Selector,
    safety_index: Selector,
    sentiment_score: Selector,
    review_count: Selector,
    content_root: Selector,
    excluded: Selector,
    related_region: Selector,
    related_anchor: Selector,
}

impl CityExtractor {
    /// Compile `selectors`; relative links resolve against `origin`.
    pub fn new(origin: impl Into<String>, selectors: &CitySelectors) -> Result<Self> {
        Ok(Self {
            origin: origin.into(),
            heading: parse_selector(&selectors.heading)?,
            safety_index: parse_selector(&selectors.safety_index)?,
            sentiment_score: parse_selector(&selectors.sentiment_score)?,
            review_count: parse_selector(&selectors.review_count)?,
            content_root: parse_selector(&selectors.content_root)?,
            excluded: parse_selector(&selectors.excluded)?,
            related_region: parse_selector(&selectors.related_region)?,
            related_anchor: parse_selector(&selectors.related_anchor)?,
        })
    }

    /// Extract a city from the page at `page_url`.
    ///
    /// A path-only `page_url` is resolved against the origin first.
    pub fn extract(&self, html: &str, page_url: &str) -> Result<CityDetails> {
        let page = Page::parse(html)?;
        let root = page.root();
        let page_url = resolve(Some(page_url), &self.origin).unwrap_or_default();

        let heading = root.find_first(&self.heading).map(|h| h.text()).unwrap_or_default();
        let (mut name, country) = split_heading(&heading);
        if name.is_empty() || name.chars().count() > MAX_HEADING_CHARS {
            if let Some(segment) = last_path_segment(&page_url) {
                log::debug!("Heading {heading:?} unusable, naming city from {page_url}");
                name = title_case_slug(&segment);
            }
        }

        let safety_index = self
            .read_int(root, &self.safety_index, false)
            .and_then(|v| u8::try_from(v).ok())
            .filter(|v| *v <= 100);
        let user_sentiment = UserSentiment {
            score: self
                .read_int(root, &self.sentiment_score, false)
                .and_then(|v| i32::try_from(v).ok()),
            total_reviews: self
                .read_int(root, &self.review_count, true)
                .and_then(|v| u32::try_from(v).ok()),
        };

        let content = root.find_first(&self.content_root);
        let description = content.and_then(|c| extract_description(c, &self.excluded));
        let related = self.related_cities(root, content);

        Ok(CityDetails {
            name,
            country,
            url: page_url,
            safety_index,
            user_sentiment,
            description,
            risk_level: safety_index.map(RiskLevel::from_safety_index),
            related_cities: (!related.is_empty()).then_some(related),
        })
    }

    fn read_int(&self, root: Node<'_>, selector: &Selector, last: bool) -> Option<i64> {
        let node = if last {
            root.find_last(selector)
        } else {
            root.find_first(selector)
        };
        node.and_then(|n| parse_leading_int(&n.text()))
    }

    /// Related cities from the content root's box, else from anywhere.
    fn related_cities(&self, root: Node<'_>, content: Option<Node<'_>>) -> Vec<CityEntry> {
        if let Some(region) = content.and_then(|c| c.find_first(&self.related_region)) {
            return region
                .find_all(&self.related_anchor)
                .filter_map(|a| anchor_to_city(a, &self.origin))
                .collect();
        }

        log::debug!("No related-cities box in content root, searching whole page");
        root.find_all(&self.related_region)
            .flat_map(|region| region.find_all(&self.related_anchor))
            .filter_map(|a| anchor_to_city(a, &self.origin))
            .collect()
    }
}

/// Extract a city page with the default selectors and origin.
pub fn extract_city(html: &str, page_url: &str) -> Result<CityDetails> {
    CityExtractor::new(crate::DEFAULT_ORIGIN, &CitySelectors::default())?.extract(html, page_url)
}

/// Split "Is Rome, Italy Safe?" into ("Rome", "Italy").
fn split_heading(heading: &str) -> (String, String) {
    let mut title = heading.trim().to_string();
    if let Some(re) = HEADING_PREFIX.as_ref() {
        title = re.replace(&title, "").into_owned();
    }
    if let Some(re) = HEADING_SUFFIX.as_ref() {
        title = re.replace(&title, "").into_owned();
    }

    match title.trim().split_once(',') {
        Some((name, country)) => (name.trim().to_string(), country.trim().to_string()),
        None => (title.trim().to_string(), String::new()),
    }
}
