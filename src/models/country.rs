// src/models/country.rs

//! Country entries and the directory that lists them.

use serde::{Deserialize, Serialize};

use crate::models::{CityEntry, RiskLevel};
use crate::utils::slug;

/// A country section of the directory page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CountryEntry {
    /// Country display name
    pub country: String,

    /// Normalized lookup key derived from `country`
    pub slug: String,

    /// Absolute URL of the country page
    pub url: String,

    pub risk_level: RiskLevel,

    /// Cities listed under the country, in page order
    pub cities: Vec<CityEntry>,
}

/// All country sections of the directory page, in document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Directory {
    pub countries: Vec<CountryEntry>,
}

impl Directory {
    pub fn new(countries: Vec<CountryEntry>) -> Self {
        Self { countries }
    }

    /// Find the country whose slug equals the normalized `name`.
    ///
    /// When two sections share a slug the later one wins.
    pub fn filter_by_slug(&self, name: &str) -> Option<&CountryEntry> {
        let target = slug::normalize(name);
        self.countries.iter().rev().find(|entry| entry.slug == target)
    }

    /// Total number of cities across all countries.
    pub fn city_count(&self) -> usize {
        self.countries.iter().map(|c| c.cities.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}
