//! `tripweaver export-name` command.

use super::saved_plan;
use crate::context::ServiceContext;

/// Execute the `export-name` command.
///
/// # Errors
///
/// Returns an error string if there is no plan at `index`.
pub fn run(ctx: &ServiceContext, index: usize) -> Result<(), String> {
    println!("{}", saved_plan(ctx, index)?.export_file_name());
    Ok(())
}
