//! Command dispatch and handlers.

pub mod book;
pub mod export_name;
pub mod generate;
pub mod history;
pub mod route;
pub mod show;

use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::trip::ItineraryPlan;

/// Dispatch a parsed command to its handler.
///
/// With `TRIPWEAVER_REPLAY` set, both ports are served from that cassette.
/// With `TRIPWEAVER_RECORD` set to a directory, every port interaction is
/// recorded to per-port cassettes under it.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub async fn dispatch(command: &Command, config: &Config) -> Result<(), String> {
    if let Some(path) = &config.replay {
        let ctx = ServiceContext::replaying(path)?;
        return dispatch_with_context(command, &ctx, config).await;
    }

    let (ctx, session) = if let Some(dir) = &config.record_dir {
        let session = RecordingSession::new(dir)?;
        (ServiceContext::recording(config, &session), Some(session))
    } else {
        (ServiceContext::live(config), None)
    };

    let result = dispatch_with_context(command, &ctx, config).await;

    // Recorders are only released once the context is gone.
    if let Some(session) = session {
        drop(ctx);
        finish_recording(session)?;
    }

    result
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub async fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    config: &Config,
) -> Result<(), String> {
    match command {
        Command::Generate(args) => generate::run(ctx, config, args).await,
        Command::History => history::run(ctx),
        Command::Show { index } => show::run(ctx, *index),
        Command::Book { index, day, activity } => book::run(ctx, *index, *day, *activity),
        Command::Route { index, day } => route::run(ctx, *index, *day),
        Command::ExportName { index } => export_name::run(ctx, *index),
    }
}

/// Finish a recording session and print the output directory.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}

/// Looks up a saved plan by history index.
fn saved_plan(ctx: &ServiceContext, index: usize) -> Result<ItineraryPlan, String> {
    ctx.history().get(index).ok_or_else(|| {
        format!("No itinerary at history index {index}. Run `tripweaver history` to list them.")
    })
}
