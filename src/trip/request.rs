//! The normalized trip request.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::geo::GeoPoint;
use super::interest::Interest;

/// Default party size for a new request.
pub const DEFAULT_PERSON_COUNT: u32 = 2;
/// Default search radius around pinned locations, in kilometers.
pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 10.0;

/// Everything the user asked for when requesting an itinerary.
///
/// Date ordering (`end_date >= start_date`) is checked by the caller that
/// builds the request (see [`TripRequest::check`]); generation itself
/// trusts the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    /// Free-text place name, e.g. "Goa, India".
    pub destination: String,
    /// First day of the trip.
    pub start_date: NaiveDate,
    /// Last day of the trip (inclusive).
    pub end_date: NaiveDate,
    /// Number of travellers, at least 1.
    pub person_count: u32,
    /// Selected interests.
    #[serde(default)]
    pub activities: BTreeSet<Interest>,
    /// Pinned points of interest, in the order the user placed them.
    #[serde(default)]
    pub map_pins: Vec<GeoPoint>,
    /// Total budget in INR; `0` means no budget constraint.
    #[serde(default)]
    pub budget: f64,
    /// Radius in kilometers around the pins; only used when pins exist.
    pub search_radius: f64,
}

impl TripRequest {
    /// Creates a request with default party size, no interests, no pins,
    /// no budget, and the default search radius.
    #[must_use]
    pub fn new(destination: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            destination: destination.into(),
            start_date,
            end_date,
            person_count: DEFAULT_PERSON_COUNT,
            activities: BTreeSet::new(),
            map_pins: Vec::new(),
            budget: 0.0,
            search_radius: DEFAULT_SEARCH_RADIUS_KM,
        }
    }

    /// Number of calendar days covered, counting both ends.
    #[must_use]
    pub fn trip_length_days(&self) -> u32 {
        let days = (self.end_date - self.start_date).num_days() + 1;
        u32::try_from(days).unwrap_or(0)
    }

    /// Returns `true` when a budget constraint applies.
    #[must_use]
    pub fn has_budget(&self) -> bool {
        self.budget > 0.0
    }

    /// Checks the invariants the input form is responsible for.
    ///
    /// # Errors
    ///
    /// Returns a message when the end date precedes the start date, the party
    /// is empty, the budget is negative, or the radius is not positive.
    pub fn check(&self) -> Result<(), String> {
        if self.end_date < self.start_date {
            return Err(format!(
                "end date {} is before start date {}",
                self.end_date, self.start_date
            ));
        }
        if self.person_count == 0 {
            return Err("party size must be at least 1".to_string());
        }
        if self.budget < 0.0 || !self.budget.is_finite() {
            return Err(format!("budget must be a non-negative amount, got {}", self.budget));
        }
        if self.search_radius <= 0.0 || !self.search_radius.is_finite() {
            return Err(format!("search radius must be positive, got {}", self.search_radius));
        }
        Ok(())
    }
}
