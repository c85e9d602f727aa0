// src/pipeline/scraper.rs

//! Retrieval shell around the extractors.
//!
//! Validates requested URLs, fetches pages through a [`PageFetcher`] and
//! hands the markup to the city or directory extractor.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::{CityDetails, Config, CountryEntry, Directory};
use crate::pipeline::fetch::{HttpFetcher, PageFetcher};
use crate::services::{CityExtractor, DirectoryExtractor};
use crate::utils::url::belongs_to;

/// A city page that could not be scraped in a batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchFailure {
    pub url: String,
    pub status: u16,
    pub message: String,
}

/// Summary of a batch of city fetches.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchOutcome {
    pub cities: Vec<CityDetails>,
    pub failures: Vec<BatchFailure>,
}

/// Scrapes city and directory pages from the configured source.
pub struct SafetyScraper<F = HttpFetcher> {
    config: Arc<Config>,
    fetcher: F,
    city: CityExtractor,
    directory: DirectoryExtractor,
}

impl SafetyScraper<HttpFetcher> {
    /// Create a scraper that fetches over HTTP.
    pub fn from_config(config: Arc<Config>) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config.http)?;
        Self::new(config, fetcher)
    }
}

impl<F: PageFetcher> SafetyScraper<F> {
    /// Create a scraper with a custom fetcher.
    pub fn new(config: Arc<Config>, fetcher: F) -> Result<Self> {
        let origin = config.source.origin.clone();
        let city = CityExtractor::new(origin.clone(), &config.selectors.city)?;
        let directory = DirectoryExtractor::new(origin, &config.selectors.directory)?;

        Ok(Self {
            config,
            fetcher,
            city,
            directory,
        })
    }

    /// Origin every response is attributed to.
    pub fn source(&self) -> &str {
        &self.config.source.origin
    }

    /// Fetch and extract a single city page.
    pub async fn city(&self, url: &str) -> Result<CityDetails> {
        let url = self.check_city_url(url)?;
        log::info!("Fetching city page {url}");

        let html = self.fetcher.fetch(url).await?;
        self.parse_city(&html, url)
    }

    /// Fetch and extract the directory page.
    pub async fn directory(&self) -> Result<Directory> {
        log::info!("Fetching directory {}", self.source());

        let html = self.fetcher.fetch(self.source()).await?;
        let directory = self.parse_directory(&html)?;
        log::info!(
            "Directory lists {} countries with {} cities",
            directory.len(),
            directory.city_count()
        );
        Ok(directory)
    }

    /// Fetch the directory and pick one country by name.
    pub async fn country(&self, name: &str) -> Result<CountryEntry> {
        let directory = self.directory().await?;
        directory.filter_by_slug(name).cloned().ok_or_else(|| {
            AppError::not_found(format!(
                "Could not find country \"{name}\" on {}",
                self.source()
            ))
        })
    }

    /// Fetch several city pages with bounded concurrency.
    ///
    /// Results keep the input order. A failing page is reported in
    /// `failures` and does not stop the batch.
    pub async fn cities(&self, urls: Vec<String>) -> BatchOutcome {
        let concurrency = self.config.http.max_concurrent.max(1);
        let total = urls.len();

        let results: Vec<_> = stream::iter(urls)
            .map(|url| async move {
                let result = self.city(&url).await;
                (url, result)
            })
            .buffered(concurrency)
            .collect()
            .await;

        let mut outcome = BatchOutcome::default();
        for (url, result) in results {
            match result {
                Ok(city) => outcome.cities.push(city),
                Err(error) => {
                    log::warn!("Failed to scrape {url}: {error}");
                    outcome.failures.push(BatchFailure {
                        url,
                        status: error.status_code(),
                        message: error.to_string(),
                    });
                }
            }
        }

        log::info!(
            "Scraped {}/{} city pages ({} failed)",
            outcome.cities.len(),
            total,
            outcome.failures.len()
        );
        outcome
    }

    /// Run the city extractor on markup that is already at hand.
    pub fn parse_city(&self, html: &str, page_url: &str) -> Result<CityDetails> {
        self.city.extract(html, page_url)
    }

    /// Run the directory extractor on markup that is already at hand.
    pub fn parse_directory(&self, html: &str) -> Result<Directory> {
        self.directory.extract(html)
    }

    fn check_city_url<'u>(&self, url: &'u str) -> Result<&'u str> {
        let url = url.trim();
        if url.is_empty() {
            return Err(AppError::invalid_request("Missing required parameter: url"));
        }
        if !belongs_to(url, &self.config.source.allowed_host) {
            return Err(AppError::invalid_request(format!(
                "URL must be from {}",
                self.config.source.allowed_host
            )));
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::models::RiskLevel;

    const ORIGIN: &str = "https://www.travelsafe-abroad.com";

    /// Serves canned pages and records requested URLs.
    #[derive(Default)]
    struct StaticFetcher {
        pages: HashMap<String, String>,
        requested: Mutex<Vec<String>>,
    }

    impl StaticFetcher {
        fn with(mut self, url: &str, html: &str) -> Self {
            self.pages.insert(url.to_string(), html.to_string());
            self
        }
    }

    #[async_trait]
    impl PageFetcher for StaticFetcher {
        async fn fetch(&self, url: &str) -> Result<String> {
            if let Ok(mut requested) = self.requested.lock() {
                requested.push(url.to_string());
            }
            self.pages.get(url).cloned().ok_or_else(|| AppError::Upstream {
                url: url.to_string(),
                status: 404,
            })
        }
    }

    fn scraper(fetcher: StaticFetcher) -> SafetyScraper<StaticFetcher> {
        SafetyScraper::new(Arc::new(Config::default()), fetcher).unwrap()
    }

    const DIRECTORY: &str = r#"<div class="pages-list">
        <div class="list-country">
            <div class="country-title"><a class="cell-color-green" href="/italy/"><h2>Italy</h2></a></div>
            <ul><li><a class="cell-color-green" href="/italy/rome/">Rome</a></li></ul>
        </div>
        <div class="list-country"><div class="country-title"><a href="/x/"></a></div></div>
    </div>"#;

    const ROME: &str = r#"<h1 class="entry-title">Is Rome, Italy Safe?</h1>
        <div class="entry-content">
            <div class="safety-index-box"><div id="progress"><div id="percent">72</div></div></div>
            <p>Mostly safe.</p>
        </div>"#;

    #[tokio::test]
    async fn test_city_end_to_end() {
        let url = "https://www.travelsafe-abroad.com/italy/rome/";
        let scraper = scraper(StaticFetcher::default().with(url, ROME));

        let city = scraper.city(url).await.unwrap();
        assert_eq!(city.name, "Rome");
        assert_eq!(city.country, "Italy");
        assert_eq!(city.safety_index, Some(72));
        assert_eq!(city.risk_level, Some(RiskLevel::Low));
    }

    #[tokio::test]
    async fn test_city_rejects_foreign_and_missing_urls() {
        let fetcher = StaticFetcher::default();
        let scraper = scraper(fetcher);

        let err = scraper.city("https://example.com/italy/rome/").await.unwrap_err();
        assert_eq!(err.status_code(), 400);
        let err = scraper.city("  ").await.unwrap_err();
        assert_eq!(err.status_code(), 400);

        assert!(scraper.fetcher.requested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_status_is_kept() {
        let scraper = scraper(StaticFetcher::default());
        let err = scraper
            .city("https://www.travelsafe-abroad.com/italy/missing/")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Upstream { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_directory_and_country_lookup() {
        let scraper = scraper(StaticFetcher::default().with(ORIGIN, DIRECTORY));

        let directory = scraper.directory().await.unwrap();
        assert_eq!(directory.len(), 1);

        let italy = scraper.country("Italy").await.unwrap();
        assert_eq!(italy.slug, "italy");
        assert_eq!(italy.cities[0].url, "https://www.travelsafe-abroad.com/italy/rome/");

        let err = scraper.country("Atlantis").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_cities_batch_keeps_order_and_failures() {
        let rome = "https://www.travelsafe-abroad.com/italy/rome/";
        let milan = "https://www.travelsafe-abroad.com/italy/milan/";
        let scraper = scraper(
            StaticFetcher::default()
                .with(rome, ROME)
                .with(milan, r#"<h1 class="entry-title">Is Milan, Italy Safe?</h1>"#),
        );

        let outcome = scraper
            .cities(vec![
                milan.to_string(),
                "https://www.travelsafe-abroad.com/italy/gone/".to_string(),
                rome.to_string(),
                "https://elsewhere.org/rome/".to_string(),
            ])
            .await;

        let names: Vec<_> = outcome.cities.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Milan", "Rome"]);
        assert_eq!(outcome.failures.len(), 2);
        assert_eq!(outcome.failures[0].status, 404);
        assert_eq!(outcome.failures[1].status, 400);
    }

    #[test]
    fn test_new_rejects_bad_selector() {
        let mut config = Config::default();
        config.selectors.directory.section = "[[".to_string();
        assert!(SafetyScraper::new(Arc::new(config), StaticFetcher::default()).is_err());
    }
}
