//! The fixed interest vocabulary a trip request draws from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An interest tag the traveller can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Interest {
    /// Hiking, water sports, wildlife.
    #[serde(rename = "Adventure & Outdoors")]
    AdventureOutdoors,
    /// Monuments, museums, heritage walks.
    #[serde(rename = "History & Culture")]
    HistoryCulture,
    /// Spas, beaches, slow days.
    #[serde(rename = "Relaxation & Wellness")]
    RelaxationWellness,
    /// Local food, markets, cooking.
    #[serde(rename = "Food & Culinary")]
    FoodCulinary,
    /// Markets and malls.
    #[serde(rename = "Shopping")]
    Shopping,
    /// Bars, clubs, live music.
    #[serde(rename = "Nightlife")]
    Nightlife,
}

/// Returned when a label is not part of the interest vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown interest {label:?}; expected one of: {}", Interest::labels().join(", "))]
pub struct UnknownInterest {
    /// The label that failed to parse.
    pub label: String,
}

impl Interest {
    /// Every interest, in display order.
    pub const ALL: [Interest; 6] = [
        Interest::AdventureOutdoors,
        Interest::HistoryCulture,
        Interest::RelaxationWellness,
        Interest::FoodCulinary,
        Interest::Shopping,
        Interest::Nightlife,
    ];

    /// Human-readable label, as shown to users and sent to the model.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Interest::AdventureOutdoors => "Adventure & Outdoors",
            Interest::HistoryCulture => "History & Culture",
            Interest::RelaxationWellness => "Relaxation & Wellness",
            Interest::FoodCulinary => "Food & Culinary",
            Interest::Shopping => "Shopping",
            Interest::Nightlife => "Nightlife",
        }
    }

    /// All labels, in display order.
    #[must_use]
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|i| i.label()).collect()
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Interest {
    type Err = UnknownInterest;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|i| i.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownInterest { label: wanted.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_label_case_insensitively() {
        assert_eq!("food & culinary".parse::<Interest>().unwrap(), Interest::FoodCulinary);
        assert_eq!(" Nightlife ".parse::<Interest>().unwrap(), Interest::Nightlife);
    }

    #[test]
    fn unknown_label_lists_vocabulary() {
        let err = "Skydiving".parse::<Interest>().unwrap_err();
        assert_eq!(err.label, "Skydiving");
        assert!(err.to_string().contains("History & Culture"));
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&Interest::AdventureOutdoors).unwrap();
        assert_eq!(json, "\"Adventure & Outdoors\"");
    }
}
