// src/models/city.rs

//! City data structures.

use serde::{Deserialize, Serialize};

use crate::models::RiskLevel;

/// A link to a city page as listed on the directory or a related-cities box.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CityEntry {
    /// Display name (anchor text)
    pub name: String,

    /// Absolute URL of the city page
    pub url: String,

    /// Risk level from the anchor's color class
    pub risk_level: RiskLevel,
}

/// Visitor sentiment widget values.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSentiment {
    pub score: Option<i32>,
    pub total_reviews: Option<u32>,
}

/// Everything extracted from a single city page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CityDetails {
    /// City name
    pub name: String,

    /// Country name (empty when the heading carries none)
    pub country: String,

    /// Page URL the details were extracted from
    pub url: String,

    /// Safety index in 0..=100
    pub safety_index: Option<u8>,

    pub user_sentiment: UserSentiment,

    /// Cleaned page prose, bounded in length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Derived from `safety_index`; absent when the index is
    pub risk_level: Option<RiskLevel>,

    /// Never an empty list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_cities: Option<Vec<CityEntry>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_city() -> CityDetails {
        CityDetails {
            name: "Rome".to_string(),
            country: "Italy".to_string(),
            url: "https://www.travelsafe-abroad.com/italy/rome/".to_string(),
            safety_index: Some(72),
            user_sentiment: UserSentiment {
                score: Some(64),
                total_reviews: None,
            },
            description: None,
            risk_level: Some(RiskLevel::Low),
            related_cities: None,
        }
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(sample_city()).unwrap();
        assert_eq!(json["safetyIndex"], 72);
        assert_eq!(json["riskLevel"], "low");
        assert_eq!(json["userSentiment"]["score"], 64);
        assert!(json["userSentiment"]["totalReviews"].is_null());
    }

    #[test]
    fn test_absent_optional_sections_are_omitted() {
        let json = serde_json::to_value(sample_city()).unwrap();
        assert!(json.get("description").is_none());
        assert!(json.get("relatedCities").is_none());
    }
}
