//! Simulated booking actions.
//!
//! Nothing is reserved or paid for. A booking produces the notice a user
//! would see before being handed to a real provider.

use crate::trip::{Activity, BookingType};

/// What the user is shown when they book an activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingNotice {
    /// e.g. `Book Your hotel`.
    pub heading: String,
    /// Explains what would happen.
    pub body: String,
    /// Label of the action button for this booking type.
    pub action_label: &'static str,
}

/// Button label for a booking type.
#[must_use]
pub fn action_label(kind: BookingType) -> &'static str {
    match kind {
        BookingType::Hotel => "Book Hotel",
        BookingType::Restaurant => "Reserve Table",
        BookingType::Activity => "Book Activity",
        BookingType::Taxi => "Book Ride",
    }
}

/// Builds the booking notice for `activity`.
///
/// # Errors
///
/// Returns an error if the activity has no booking type.
pub fn simulate(activity: &Activity) -> Result<BookingNotice, String> {
    let kind = activity
        .booking_type
        .ok_or_else(|| format!("\"{}\" is not bookable", activity.title))?;

    Ok(BookingNotice {
        heading: format!("Book Your {kind}"),
        body: format!(
            "You are about to book for \"{}\". The platform would normally compare offers \
             from several booking providers to find the best deal. For now, this is a demonstration.",
            activity.title
        ),
        action_label: action_label(kind),
    })
}
