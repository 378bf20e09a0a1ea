//! The response schema sent alongside the instructions.
//!
//! Uses the OpenAPI-style subset accepted by structured-output endpoints
//! (`type`, `properties`, `items`, `required`, `nullable`, `enum`).

use serde_json::{json, Value};

use crate::trip::BookingType;

/// Returns the structural contract for an itinerary response.
#[must_use]
pub fn itinerary_schema() -> Value {
    let booking_types: Vec<&str> = BookingType::ALL.iter().map(|b| b.as_str()).collect();

    let activity = json!({
        "type": "OBJECT",
        "properties": {
            "time": {
                "type": "STRING",
                "description": "Suggested time for the activity, e.g. '9:00 AM'."
            },
            "title": {
                "type": "STRING",
                "description": "Name of the activity or meal."
            },
            "description": {
                "type": "STRING",
                "description": "A short, engaging description."
            },
            "travel_time_to_next": {
                "type": "STRING",
                "description": "Estimated travel time to the next activity, e.g. '20 minutes'. Null for the last activity.",
                "nullable": true
            },
            "booking_type": {
                "type": "STRING",
                "description": "Kind of booking needed, or null.",
                "enum": booking_types,
                "nullable": true
            },
            "location": {
                "type": "OBJECT",
                "description": "Coordinates of the physical location, or null when not applicable.",
                "properties": {
                    "lat": { "type": "NUMBER", "description": "Latitude" },
                    "lng": { "type": "NUMBER", "description": "Longitude" }
                },
                "required": ["lat", "lng"],
                "nullable": true
            }
        },
        "required": ["time", "title", "description"]
    });

    let day = json!({
        "type": "OBJECT",
        "properties": {
            "day": { "type": "INTEGER", "description": "Day number starting at 1." },
            "date": { "type": "STRING", "description": "Date of this day in YYYY-MM-DD format." },
            "activities": {
                "type": "ARRAY",
                "description": "Activities for the day, in order.",
                "items": activity
            }
        },
        "required": ["day", "date", "activities"]
    });

    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING", "description": "A catchy, short title for the trip." },
            "days": { "type": "ARRAY", "description": "Daily plans in order.", "items": day }
        },
        "required": ["title", "days"]
    })
}
