//! Example plans written to empty storage so a new user's history is not blank.

use crate::trip::{Activity, BookingType, DayPlan, GeoPoint, ItineraryPlan};

fn stop(
    time: &str,
    title: &str,
    description: &str,
    travel_time_to_next: Option<&str>,
    booking_type: BookingType,
    (lat, lng): (f64, f64),
) -> Activity {
    Activity {
        time: time.into(),
        title: title.into(),
        description: description.into(),
        travel_time_to_next: travel_time_to_next.map(Into::into),
        booking_type: Some(booking_type),
        location: Some(GeoPoint::new(lat, lng)),
    }
}

/// The fixed example history, newest first.
#[must_use]
pub fn seed_plans() -> Vec<ItineraryPlan> {
    vec![
        ItineraryPlan {
            title: "Historical Journey through Delhi".into(),
            days: vec![DayPlan {
                day: 1,
                date: "2024-08-15".into(),
                activities: vec![
                    stop(
                        "2:00 PM",
                        "Check-in: The Imperial Hotel",
                        "Settle in at one of the city's landmark colonial-era hotels.",
                        Some("30 minutes"),
                        BookingType::Hotel,
                        (28.6273, 77.2167),
                    ),
                    stop(
                        "4:00 PM",
                        "India Gate",
                        "Walk the lawns around the war memorial as the evening cools.",
                        Some("20 minutes"),
                        BookingType::Activity,
                        (28.6129, 77.2295),
                    ),
                    stop(
                        "7:00 PM",
                        "Dinner at Bukhara",
                        "North-West Frontier cooking from the tandoor.",
                        None,
                        BookingType::Restaurant,
                        (28.5969, 77.1764),
                    ),
                ],
            }],
        },
        ItineraryPlan {
            title: "Mumbai Film City Exploration".into(),
            days: vec![DayPlan {
                day: 1,
                date: "2024-07-20".into(),
                activities: vec![
                    stop(
                        "1:00 PM",
                        "Check-in: Taj Lands End",
                        "Sea-facing rooms over the Arabian Sea in Bandra.",
                        Some("45 minutes"),
                        BookingType::Hotel,
                        (19.043, 72.822),
                    ),
                    stop(
                        "3:00 PM",
                        "Film City Tour",
                        "A guided tour through working studio sets.",
                        Some("30 minutes"),
                        BookingType::Activity,
                        (19.162, 72.871),
                    ),
                    stop(
                        "8:00 PM",
                        "Dinner at Wasabi by Morimoto",
                        "Japanese dining inside The Taj Mahal Palace.",
                        None,
                        BookingType::Restaurant,
                        (18.921, 72.833),
                    ),
                ],
            }],
        },
    ]
}
