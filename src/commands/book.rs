//! `tripweaver book` command.

use super::saved_plan;
use crate::booking;
use crate::context::ServiceContext;

/// Execute the `book` command for one activity of a saved plan.
///
/// # Errors
///
/// Returns an error string if the plan, day, or activity does not exist, or
/// the activity is not bookable.
pub fn run(ctx: &ServiceContext, index: usize, day: u32, activity: usize) -> Result<(), String> {
    let plan = saved_plan(ctx, index)?;
    let day_plan = plan.day(day).ok_or_else(|| format!("\"{}\" has no day {day}", plan.title))?;
    let item = activity
        .checked_sub(1)
        .and_then(|i| day_plan.activities.get(i))
        .ok_or_else(|| format!("Day {day} has no activity {activity}"))?;

    let notice = booking::simulate(item)?;
    println!("{}", notice.heading);
    println!("{}", notice.body);
    println!("[{}]", notice.action_label);
    Ok(())
}
