//! `tripweaver generate` command.

use tracing::error;

use super::show::print_plan;
use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::generate::{GenerationOptions, GenerationOrchestrator};

/// Execute the `generate` command.
///
/// Prints the new plan on success. Every generation failure is reported
/// with the same user-facing message; the cause goes to the log.
///
/// # Errors
///
/// Returns an error string if the request is invalid or generation fails.
pub async fn run(ctx: &ServiceContext, config: &Config, args: &GenerateArgs) -> Result<(), String> {
    let request = args.to_request();
    request.check()?;

    let options = GenerationOptions {
        model: config.model.clone(),
        strict: config.strict || args.strict,
    };
    let orchestrator = GenerationOrchestrator::new(ctx.llm.clone(), ctx.history(), options);

    match orchestrator.generate(&request).await {
        Ok(plan) => {
            print_plan(&plan);
            Ok(())
        }
        Err(err) => {
            error!(kind = err.kind(), error = %err, "generate command failed");
            Err(err.user_message().to_string())
        }
    }
}
