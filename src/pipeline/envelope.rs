// src/pipeline/envelope.rs

//! JSON envelope wrapped around every shell response.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::{CityDetails, CountryEntry, Directory};
use crate::pipeline::BatchOutcome;

/// Envelope status tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok,
    Error,
    NotFound,
}

/// Body of a successful response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Payload {
    City(CityDetails),
    Country(CountryEntry),
    Countries(Directory),
    Cities(BatchOutcome),
}

/// Response envelope: a status tag, the source origin, a timestamp, and
/// either a payload or an error message.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub status: Status,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    pub scraped_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(flatten)]
    pub payload: Option<Payload>,

    /// Transport status code for the shell's caller
    #[serde(skip)]
    pub code: u16,
}

impl Envelope {
    pub fn ok(source: impl Into<String>, payload: Payload) -> Self {
        Self {
            status: Status::Ok,
            source: Some(source.into()),
            scraped_at: Utc::now(),
            message: None,
            payload: Some(payload),
            code: 200,
        }
    }

    pub fn error(err: &AppError) -> Self {
        let status = if err.is_not_found() {
            Status::NotFound
        } else {
            Status::Error
        };
        Self {
            status,
            source: None,
            scraped_at: Utc::now(),
            message: Some(err.to_string()),
            payload: None,
            code: err.status_code(),
        }
    }

    /// Wrap an operation result, logging failures.
    pub fn from_result(source: &str, result: Result<Payload>) -> Self {
        match result {
            Ok(payload) => Self::ok(source, payload),
            Err(err) => {
                if err.is_not_found() {
                    log::info!("{err}");
                } else {
                    log::error!("Scrape failed: {err}");
                }
                Self::error(&err)
            }
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
