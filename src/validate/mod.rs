//! Response validation.
//!
//! [`validate`] is the default, shallow contract: the text must decode as
//! JSON and the top level must carry a string `title` and an array `days`.
//! Everything below that is trusted to the schema the model was given.
//!
//! [`deep_check`] is an opt-in hardening pass for callers who do not want to
//! rely on upstream schema enforcement.

use std::fmt;
use std::fmt::Write as _;

use chrono::{Days, NaiveDate};
use serde_json::Value;

use crate::error::GenerationError;
use crate::trip::{ItineraryPlan, TripRequest};

/// Decodes raw model output into a plan, checking only the top-level shape.
///
/// # Errors
///
/// - [`GenerationError::Parse`] if `raw` is not JSON.
/// - [`GenerationError::SchemaViolation`] if the top level is not an object,
///   `title` is missing, empty, or not a string, or `days` is missing or not
///   an array.
///
/// Anything inside `days` is accepted as is; wrongly shaped fields take
/// their defaults (see [`crate::trip`]).
pub fn validate(raw: &str) -> Result<ItineraryPlan, GenerationError> {
    let value: Value =
        serde_json::from_str(raw.trim()).map_err(|e| GenerationError::Parse(e.to_string()))?;

    let Value::Object(map) = value else {
        return Err(GenerationError::SchemaViolation(format!(
            "top-level value is {}, expected an object",
            kind_of(&value)
        )));
    };

    match map.get("title") {
        Some(Value::String(title)) if !title.is_empty() => {}
        Some(Value::String(_)) => {
            return Err(GenerationError::SchemaViolation("`title` is empty".into()));
        }
        Some(other) => {
            return Err(GenerationError::SchemaViolation(format!(
                "`title` is {}, expected a string",
                kind_of(other)
            )));
        }
        None => return Err(GenerationError::SchemaViolation("`title` is missing".into())),
    }

    match map.get("days") {
        Some(Value::Array(_)) => {}
        Some(other) => {
            return Err(GenerationError::SchemaViolation(format!(
                "`days` is {}, expected an array",
                kind_of(other)
            )));
        }
        None => return Err(GenerationError::SchemaViolation("`days` is missing".into())),
    }

    serde_json::from_value(Value::Object(map)).map_err(|e| {
        GenerationError::SchemaViolation(format!("itinerary content could not be decoded: {e}"))
    })
}

/// Runs [`validate`] and then [`deep_check`], failing on the first findings.
///
/// # Errors
///
/// Returns the errors of [`validate`], or [`GenerationError::SchemaViolation`]
/// listing the deep-check findings.
pub fn validate_strict(raw: &str, request: &TripRequest) -> Result<ItineraryPlan, GenerationError> {
    let plan = validate(raw)?;
    let findings = deep_check(&plan, request);
    if findings.is_empty() {
        return Ok(plan);
    }
    let listed: Vec<String> = findings.iter().take(5).map(ToString::to_string).collect();
    let more = findings.len().saturating_sub(listed.len());
    let mut message = listed.join("; ");
    if more > 0 {
        let _ = write!(message, "; and {more} more");
    }
    Err(GenerationError::SchemaViolation(message))
}

/// A problem found by [`deep_check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Where in the plan, e.g. `days[1].activities[0].title`.
    pub path: String,
    /// What is wrong.
    pub problem: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.problem)
    }
}

/// Checks a decoded plan field by field against the request it answers.
///
/// Covers day count, day numbering from 1, dates following the request's
/// start date, non-empty activity text, and coordinate ranges.
#[must_use]
pub fn deep_check(plan: &ItineraryPlan, request: &TripRequest) -> Vec<Finding> {
    let mut findings = Vec::new();
    let expected_days = request.trip_length_days() as usize;

    if plan.days.len() != expected_days {
        findings.push(Finding {
            path: "days".into(),
            problem: format!("has {} days, expected {expected_days}", plan.days.len()),
        });
    }

    for (i, day) in plan.days.iter().enumerate() {
        let path = format!("days[{i}]");
        let expected_number = i + 1;
        if day.day as usize != expected_number {
            findings.push(Finding {
                path: format!("{path}.day"),
                problem: format!("is {}, expected {expected_number}", day.day),
            });
        }

        match NaiveDate::parse_from_str(&day.date, "%Y-%m-%d") {
            Ok(date) => {
                match request.start_date.checked_add_days(Days::new(i as u64)) {
                    Some(expected) if date != expected => findings.push(Finding {
                        path: format!("{path}.date"),
                        problem: format!("is {date}, expected {expected}"),
                    }),
                    Some(_) => {}
                    None => findings.push(Finding {
                        path: format!("{path}.date"),
                        problem: format!(
                            "is {date}, but day {} of a trip starting {} is past the calendar's end",
                            i + 1,
                            request.start_date
                        ),
                    }),
                }
            }
            Err(_) => findings.push(Finding {
                path: format!("{path}.date"),
                problem: format!("{:?} is not a YYYY-MM-DD date", day.date),
            }),
        }

        for (j, activity) in day.activities.iter().enumerate() {
            let path = format!("{path}.activities[{j}]");
            for (field, text) in [
                ("time", &activity.time),
                ("title", &activity.title),
                ("description", &activity.description),
            ] {
                if text.trim().is_empty() {
                    findings.push(Finding {
                        path: format!("{path}.{field}"),
                        problem: "is empty".into(),
                    });
                }
            }
            if let Some(location) = activity.location {
                if !location.in_range() {
                    findings.push(Finding {
                        path: format!("{path}.location"),
                        problem: format!("{location} is out of range"),
                    });
                }
            }
        }
    }

    findings
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
