// src/lib.rs

//! Travel Safe - Abroad scraper library
//!
//! Turns city pages and the country directory of the travel-safety site
//! into structured records. The extractors in [`services`] are pure
//! functions of their input markup; [`pipeline`] adds fetching and the
//! JSON envelope on top.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;

pub use services::{extract_city, extract_directory};

/// Site origin used when none is configured.
pub const DEFAULT_ORIGIN: &str = "https://www.travelsafe-abroad.com";
