//! Generated itinerary types.
//!
//! Everything below the plan's `title` and `days` decodes leniently: a
//! field that is missing or has the wrong shape takes its default, and a
//! day or activity that is not an object becomes an empty one. A plan that
//! passed the top-level shape check therefore always decodes; see
//! `validate::deep_check` for the optional stricter pass.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::geo::GeoPoint;

/// What kind of booking an activity can be turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingType {
    /// A place to stay.
    Hotel,
    /// A table reservation.
    Restaurant,
    /// A ticketed or guided activity.
    Activity,
    /// A ride.
    Taxi,
}

impl BookingType {
    /// Every booking type, in schema order.
    pub const ALL: [BookingType; 4] =
        [BookingType::Hotel, BookingType::Restaurant, BookingType::Activity, BookingType::Taxi];

    /// Wire name used in the response schema.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BookingType::Hotel => "hotel",
            BookingType::Restaurant => "restaurant",
            BookingType::Activity => "activity",
            BookingType::Taxi => "taxi",
        }
    }
}

impl fmt::Display for BookingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single scheduled item within a day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Display time such as "9:00 AM"; never parsed.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub time: String,
    /// Name of the place, meal, or activity.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub title: String,
    /// Short description.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub description: String,
    /// Travel time to the next activity, e.g. "20 minutes".
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub travel_time_to_next: Option<String>,
    /// Booking kind, if the activity is bookable.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub booking_type: Option<BookingType>,
    /// Coordinates for physically situated activities.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub location: Option<GeoPoint>,
}

impl Activity {
    /// Returns `true` if the activity carries a booking type.
    #[must_use]
    pub fn is_bookable(&self) -> bool {
        self.booking_type.is_some()
    }
}

/// One day of an itinerary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day number.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub day: u32,
    /// Calendar date, normally `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub date: String,
    /// Activities in chronological order.
    #[serde(default, deserialize_with = "lenient::each_or_default")]
    pub activities: Vec<Activity>,
}

impl DayPlan {
    /// Locations of this day's activities in visiting order.
    ///
    /// Activities without a location (free time and the like) are skipped.
    /// This is the point list handed to the map/directions collaborator.
    #[must_use]
    pub fn route_points(&self) -> Vec<GeoPoint> {
        self.activities.iter().filter_map(|a| a.location).collect()
    }
}

/// A validated, immutable travel plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryPlan {
    /// Short human-readable summary.
    pub title: String,
    /// Days in order.
    #[serde(deserialize_with = "lenient::each_or_default")]
    pub days: Vec<DayPlan>,
}

impl ItineraryPlan {
    /// Total number of activities across all days.
    #[must_use]
    pub fn activity_count(&self) -> usize {
        self.days.iter().map(|d| d.activities.len()).sum()
    }

    /// Date of the first day, if any.
    #[must_use]
    pub fn first_date(&self) -> Option<&str> {
        self.days.first().map(|d| d.date.as_str())
    }

    /// Date of the last day, if any.
    #[must_use]
    pub fn last_date(&self) -> Option<&str> {
        self.days.last().map(|d| d.date.as_str())
    }

    /// Looks up a day by its day number.
    #[must_use]
    pub fn day(&self, number: u32) -> Option<&DayPlan> {
        self.days.iter().find(|d| d.day == number)
    }

    /// File name for an exported copy: spaces become underscores, and an
    /// empty title falls back to `Trip-Plan`.
    #[must_use]
    pub fn export_file_name(&self) -> String {
        let stem = if self.title.is_empty() { "Trip-Plan" } else { self.title.as_str() };
        format!("{}.pdf", stem.replace(' ', "_"))
    }
}

mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Decodes a field, taking its default when the value has the wrong shape.
    pub(super) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(T::deserialize(value).unwrap_or_default())
    }

    /// Decodes a list item by item; items with the wrong shape take their
    /// default and keep their position. A non-list decodes as empty.
    pub(super) fn each_or_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let Value::Array(items) = Value::deserialize(deserializer)? else {
            return Ok(Vec::new());
        };
        Ok(items.into_iter().map(|item| T::deserialize(item).unwrap_or_default()).collect())
    }
}
