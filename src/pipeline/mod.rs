//! Retrieval shell: fetching pages and wrapping results for callers.
//!
//! - `fetch`: page fetcher trait and its HTTP implementation
//! - `scraper`: URL checks, fetch, extract
//! - `envelope`: JSON response envelope

pub mod envelope;
pub mod fetch;
pub mod scraper;

pub use envelope::{Envelope, Payload, Status};
pub use fetch::{HttpFetcher, PageFetcher};
pub use scraper::{BatchFailure, BatchOutcome, SafetyScraper};
