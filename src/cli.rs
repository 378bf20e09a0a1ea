//! CLI argument definitions.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::trip::{
    GeoPoint, Interest, TripRequest, DEFAULT_PERSON_COUNT, DEFAULT_SEARCH_RADIUS_KM,
};

/// Top-level CLI parser for `tripweaver`.
#[derive(Debug, Parser)]
#[command(name = "tripweaver", version, about = "Generate day-by-day travel itineraries")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a new itinerary and save it to history.
    Generate(GenerateArgs),
    /// List saved itineraries, newest first.
    History,
    /// Print a saved itinerary.
    Show {
        /// History index (0 = newest).
        index: usize,
    },
    /// Simulate booking an activity of a saved itinerary.
    Book {
        /// History index (0 = newest).
        index: usize,
        /// Day number, starting at 1.
        #[arg(long)]
        day: u32,
        /// Activity position within the day, starting at 1.
        #[arg(long)]
        activity: usize,
    },
    /// Print the map points of one day.
    Route {
        /// History index (0 = newest).
        index: usize,
        /// Day number, starting at 1.
        #[arg(long)]
        day: u32,
    },
    /// Print the file name an exported itinerary would get.
    ExportName {
        /// History index (0 = newest).
        index: usize,
    },
}

/// Trip parameters for `generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Where the trip goes.
    #[arg(long)]
    pub destination: String,
    /// First day (YYYY-MM-DD).
    #[arg(long)]
    pub start: NaiveDate,
    /// Last day (YYYY-MM-DD), inclusive.
    #[arg(long)]
    pub end: NaiveDate,
    /// Party size.
    #[arg(long, default_value_t = DEFAULT_PERSON_COUNT)]
    pub people: u32,
    /// Interest such as "Food & Culinary"; repeatable.
    #[arg(long = "interest")]
    pub interests: Vec<Interest>,
    /// Location to include as LAT,LNG; repeatable.
    #[arg(long = "pin", allow_hyphen_values = true)]
    pub pins: Vec<GeoPoint>,
    /// Total budget in INR; 0 means none.
    #[arg(long, default_value_t = 0.0)]
    pub budget: f64,
    /// Search radius around pins, in km.
    #[arg(long, default_value_t = DEFAULT_SEARCH_RADIUS_KM)]
    pub radius: f64,
    /// Check the generated plan field by field.
    #[arg(long)]
    pub strict: bool,
}

impl GenerateArgs {
    /// Converts the arguments into a trip request.
    #[must_use]
    pub fn to_request(&self) -> TripRequest {
        let mut request = TripRequest::new(self.destination.clone(), self.start, self.end);
        request.person_count = self.people;
        request.activities = self.interests.iter().copied().collect();
        request.map_pins.clone_from(&self.pins);
        request.budget = self.budget;
        request.search_radius = self.radius;
        request
    }
}
