//! `tripweaver history` command.

use crate::context::ServiceContext;

/// Execute the `history` command: list saved plans, newest first.
///
/// # Errors
///
/// Never fails; unreadable history is shown as empty.
pub fn run(ctx: &ServiceContext) -> Result<(), String> {
    let summaries = ctx.history().summaries();
    if summaries.is_empty() {
        println!("No saved itineraries.");
        return Ok(());
    }

    println!("Saved itineraries:");
    for s in &summaries {
        let dates = match (&s.first_date, &s.last_date) {
            (Some(first), Some(last)) if first == last => first.clone(),
            (Some(first), Some(last)) => format!("{first} to {last}"),
            _ => "no dates".to_string(),
        };
        println!(
            "  [{}] {} ({} days, {dates}, {} activities)",
            s.index, s.title, s.day_count, s.activity_count
        );
    }
    println!("\nUse `tripweaver show <INDEX>` to view details.");
    Ok(())
}
