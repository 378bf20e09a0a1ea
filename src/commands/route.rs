//! `tripweaver route` command.

use super::saved_plan;
use crate::context::ServiceContext;

/// Execute the `route` command: print one day's map points as JSON.
///
/// # Errors
///
/// Returns an error string if the plan or day does not exist.
pub fn run(ctx: &ServiceContext, index: usize, day: u32) -> Result<(), String> {
    let plan = saved_plan(ctx, index)?;
    let day_plan = plan.day(day).ok_or_else(|| format!("\"{}\" has no day {day}", plan.title))?;
    let json = serde_json::to_string_pretty(&day_plan.route_points())
        .map_err(|e| format!("Failed to encode route: {e}"))?;
    println!("{json}");
    Ok(())
}
