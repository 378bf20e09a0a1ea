//! Trip domain types.
//!
//! `TripRequest` is what the user asks for; `ItineraryPlan` is what the
//! generative model hands back once it has passed validation. Both are
//! plain data and serialize with the field names used on the wire and in
//! the history blob.

mod geo;
mod interest;
mod itinerary;
mod request;

pub use geo::GeoPoint;
pub use interest::{Interest, UnknownInterest};
pub use itinerary::{Activity, BookingType, DayPlan, ItineraryPlan};
pub use request::{TripRequest, DEFAULT_PERSON_COUNT, DEFAULT_SEARCH_RADIUS_KM};
