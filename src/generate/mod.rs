//! Generation orchestrator: request → prompt → model → validation → history.
//!
//! `generate` is the single entry point. Each invocation walks
//! `Idle → Building → AwaitingModel → Validating → Persisting → Done`, or
//! stops in `Failed`. Nothing is retried, cancelled, or timed out here; the
//! caller keeps one invocation in flight and calls [`GenerationOrchestrator::reset`]
//! before the next attempt.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info, warn};

use crate::error::GenerationError;
use crate::history::HistoryStore;
use crate::ports::{CompletionRequest, GenerativeClient};
use crate::prompt;
use crate::trip::{ItineraryPlan, TripRequest};
use crate::validate;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Where the current (or last) invocation is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationState {
    /// No invocation has started since the last reset.
    Idle,
    /// Building the prompt.
    Building,
    /// Waiting on the generative service.
    AwaitingModel,
    /// Checking the raw response.
    Validating,
    /// Saving the plan to history.
    Persisting,
    /// The plan was returned.
    Done,
    /// The invocation failed; terminal until reset.
    Failed(GenerationError),
}

impl GenerationState {
    /// Returns `true` while an invocation is between `Building` and `Persisting`.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self,
            GenerationState::Building
                | GenerationState::AwaitingModel
                | GenerationState::Validating
                | GenerationState::Persisting
        )
    }
}

/// Tunables for the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Model identifier passed to the client.
    pub model: String,
    /// Run the deep plan check after the shallow contract.
    pub strict: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self { model: DEFAULT_MODEL.to_string(), strict: false }
    }
}

/// Composes prompt building, the generative client, validation, and history.
pub struct GenerationOrchestrator {
    client: Arc<dyn GenerativeClient>,
    history: HistoryStore,
    options: GenerationOptions,
    state: Mutex<GenerationState>,
}

impl GenerationOrchestrator {
    /// Creates an orchestrator in the `Idle` state.
    #[must_use]
    pub fn new(
        client: Arc<dyn GenerativeClient>,
        history: HistoryStore,
        options: GenerationOptions,
    ) -> Self {
        Self { client, history, options, state: Mutex::new(GenerationState::Idle) }
    }

    /// The history store plans are saved to.
    #[must_use]
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> GenerationState {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Returns `true` while a `generate` call is running.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.state().is_in_flight()
    }

    /// Puts the orchestrator back in `Idle` after `Done` or `Failed`.
    pub fn reset(&self) {
        self.transition(GenerationState::Idle);
    }

    /// Generates an itinerary for `request`, saves it to history, and returns it.
    ///
    /// Saving is best-effort: if the history write fails the plan is still
    /// returned.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::Generation`] if the client call fails.
    /// - [`GenerationError::Parse`] if the response is not JSON.
    /// - [`GenerationError::SchemaViolation`] if the response lacks the
    ///   required shape (or fails the deep check in strict mode).
    ///
    /// History is untouched on error.
    pub async fn generate(&self, request: &TripRequest) -> Result<ItineraryPlan, GenerationError> {
        match self.run(request).await {
            Ok(plan) => {
                self.transition(GenerationState::Done);
                info!(title = %plan.title, days = plan.days.len(), "itinerary generated");
                Ok(plan)
            }
            Err(err) => {
                warn!(kind = err.kind(), error = %err, destination = %request.destination, "itinerary generation failed");
                self.transition(GenerationState::Failed(err.clone()));
                Err(err)
            }
        }
    }

    async fn run(&self, request: &TripRequest) -> Result<ItineraryPlan, GenerationError> {
        self.transition(GenerationState::Building);
        let prompt = prompt::build(request);
        let completion = CompletionRequest {
            model: self.options.model.clone(),
            schema: prompt.schema,
            instructions: prompt.instructions,
        };

        self.transition(GenerationState::AwaitingModel);
        let response = self
            .client
            .complete(&completion)
            .await
            .map_err(|e| GenerationError::Generation(e.to_string()))?;
        debug!(
            prompt_tokens = response.prompt_tokens,
            completion_tokens = response.completion_tokens,
            "model responded"
        );

        self.transition(GenerationState::Validating);
        let plan = if self.options.strict {
            validate::validate_strict(&response.text, request)?
        } else {
            validate::validate(&response.text)?
        };

        self.transition(GenerationState::Persisting);
        self.history.append(plan.clone());

        Ok(plan)
    }

    fn transition(&self, next: GenerationState) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        debug!(from = ?*state, to = ?next, "generation state");
        *state = next;
    }
}
