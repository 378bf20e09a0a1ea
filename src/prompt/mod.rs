//! Prompt construction for itinerary generation.
//!
//! [`build`] is pure: the same request always yields the same schema and
//! instruction text, which keeps recorded cassettes stable.

mod schema;

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::trip::TripRequest;

pub use schema::itinerary_schema;

/// Clause used when the request carries no budget.
pub const NO_BUDGET_CLAUSE: &str = "No specific budget provided.";
/// Clause used when the request carries no pinned locations.
pub const NO_PINS_CLAUSE: &str = "None specified.";
/// Clause used when the radius does not apply.
pub const NO_RADIUS_CLAUSE: &str = "Not applicable.";

/// The structured-output contract plus the instruction text for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    /// Response schema the model output must conform to.
    pub schema: serde_json::Value,
    /// Natural-language instructions embedding the trip parameters.
    pub instructions: String,
}

/// Builds the schema and instructions for a trip request.
#[must_use]
pub fn build(request: &TripRequest) -> Prompt {
    Prompt { schema: itinerary_schema(), instructions: build_instructions(request) }
}

fn build_instructions(request: &TripRequest) -> String {
    let mut text = String::new();
    text.push_str(
        "You are an expert travel planner for India. Create a detailed, day-by-day \
         itinerary for the trip described below. The plan must follow the provided JSON schema.\n\n",
    );

    text.push_str("Planning rules:\n");
    for rule in PLANNING_RULES {
        let _ = writeln!(text, "- {rule}");
    }

    let interests = if request.activities.is_empty() {
        "No particular preference".to_string()
    } else {
        request.activities.iter().map(|i| i.label()).collect::<Vec<_>>().join(", ")
    };

    text.push_str("\nTrip details:\n");
    let _ = writeln!(text, "- Destination: {}", request.destination);
    let _ = writeln!(
        text,
        "- Dates: from {} to {} ({} days)",
        request.start_date,
        request.end_date,
        request.trip_length_days()
    );
    let _ = writeln!(text, "- Travelers: {}", request.person_count);
    let _ = writeln!(text, "- Preferred activities: {interests}");
    let _ = writeln!(text, "- Budget: {}", budget_clause(request));
    let _ = writeln!(text, "- Pinned locations: {}", pins_clause(request));
    let _ = writeln!(text, "- Search radius: {}", radius_clause(request));

    text.push_str(
        "\nReturn ONLY the JSON object that adheres to the schema, with no surrounding text or markdown.\n",
    );
    text
}

const PLANNING_RULES: [&str; 8] = [
    "Start Day 1 with a 'hotel' suggestion.",
    "Give coordinates in 'location' for every entry with a physical place (hotel, restaurant, \
     landmark). Use null for general entries such as free time.",
    "Include breakfast, lunch, and dinner, each with booking type 'restaurant'.",
    "Order activities from morning to night.",
    "Give every activity a time, a title, and a short, engaging description.",
    "Estimate the travel time to the next activity; use null for the last one of the day.",
    "Set 'booking_type' to 'hotel', 'restaurant', 'activity', or 'taxi' for bookable items, \
     otherwise null.",
    "Give the whole trip a catchy, short title.",
];

fn budget_clause(request: &TripRequest) -> String {
    if request.has_budget() {
        format!(
            "The total budget for {} people is approximately {} INR. Suggest hotels, activities, \
             and dining that respect this budget, mixing options or favouring value for money.",
            request.person_count, request.budget
        )
    } else {
        NO_BUDGET_CLAUSE.to_string()
    }
}

fn pins_clause(request: &TripRequest) -> String {
    if request.map_pins.is_empty() {
        return NO_PINS_CLAUSE.to_string();
    }
    let coords = request.map_pins.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
    format!(
        "The traveller pinned these points of interest (latitude, longitude): {coords}. \
         Include these places or suggest activities near them."
    )
}

fn radius_clause(request: &TripRequest) -> String {
    if !request.map_pins.is_empty() && request.search_radius > 0.0 {
        format!(
            "Keep activities near the pins within {} km of at least one pin.",
            request.search_radius
        )
    } else {
        NO_RADIUS_CLAUSE.to_string()
    }
}
