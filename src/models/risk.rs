// src/models/risk.rs

//! Risk levels and the two ways the source site signals them.

use serde::{Deserialize, Serialize};

/// Class-token markers in priority order.
const CLASS_MARKERS: [(&str, RiskLevel); 4] = [
    ("cell-color-red", RiskLevel::High),
    ("cell-color-orange", RiskLevel::Medium),
    ("cell-color-green", RiskLevel::Low),
    ("cell-color-gray", RiskLevel::Unknown),
];

/// Risk category of a country or city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    /// The source marked the entry gray.
    Unknown,
    /// No marker was present at all.
    #[serde(rename = "none")]
    Unclassified,
}

impl RiskLevel {
    /// Classify a CSS class attribute.
    ///
    /// Markers are matched by substring, so unrelated class names mixed into
    /// the token are ignored. Red wins over orange, orange over green, green
    /// over gray.
    pub fn from_class(token: Option<&str>) -> Self {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return Self::Unclassified;
        };

        CLASS_MARKERS
            .iter()
            .find(|(marker, _)| token.contains(marker))
            .map_or(Self::Unclassified, |(_, level)| *level)
    }

    /// Derive a risk level from a 0-100 safety index.
    pub fn from_safety_index(index: u8) -> Self {
        match index {
            70.. => Self::Low,
            50..=69 => Self::Medium,
            _ => Self::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Unknown => "unknown",
            Self::Unclassified => "none",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
