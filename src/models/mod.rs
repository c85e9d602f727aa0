// src/models/mod.rs

//! Domain models for the scraper.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod city;
mod config;
mod country;
mod risk;
mod selectors;

// Re-export all public types
pub use city::{CityDetails, CityEntry, UserSentiment};
pub use config::{Config, HttpConfig, OutputConfig, SourceConfig};
pub use country::{CountryEntry, Directory};
pub use risk::RiskLevel;
pub use selectors::{CitySelectors, DirectorySelectors, PageSelectors, parse_selector};
