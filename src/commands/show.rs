//! `tripweaver show` command.

use super::saved_plan;
use crate::context::ServiceContext;
use crate::trip::{Activity, ItineraryPlan};

/// Execute the `show` command.
///
/// # Errors
///
/// Returns an error string if there is no plan at `index`.
pub fn run(ctx: &ServiceContext, index: usize) -> Result<(), String> {
    let plan = saved_plan(ctx, index)?;
    print_plan(&plan);
    Ok(())
}

pub(crate) fn print_plan(plan: &ItineraryPlan) {
    println!("{}", plan.title);

    for day in &plan.days {
        println!("\nDay {} ({})", day.day, day.date);
        for (i, activity) in day.activities.iter().enumerate() {
            print_activity(i + 1, activity);
        }
    }
}

fn print_activity(position: usize, activity: &Activity) {
    match activity.booking_type {
        Some(kind) => println!("  {position}. {}  {} [{kind}]", activity.time, activity.title),
        None => println!("  {position}. {}  {}", activity.time, activity.title),
    }
    if !activity.description.is_empty() {
        println!("     {}", activity.description);
    }
    if let Some(location) = activity.location {
        println!("     at {location}");
    }
    if let Some(travel) = &activity.travel_time_to_next {
        println!("     next: {travel}");
    }
}
