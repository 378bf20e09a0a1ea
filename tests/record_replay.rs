//! Record-replay round-trip integration test.
//!
//! 1. Run a generation against in-process fakes wrapped in recording adapters.
//! 2. Replay the per-port cassettes with `ServiceContext::replaying_from()`.
//! 3. Assert the replayed run returns the same plan and history.

use std::sync::Arc;

use chrono::NaiveDate;

use tripweaver::adapters::memory::MemoryKeyValueStore;
use tripweaver::adapters::recording::{RecordingGenerativeClient, RecordingKeyValueStore};
use tripweaver::cassette::config::CassetteConfig;
use tripweaver::cassette::session::RecordingSession;
use tripweaver::context::ServiceContext;
use tripweaver::generate::{GenerationOptions, GenerationOrchestrator};
use tripweaver::ports::{CompletionFuture, CompletionRequest, CompletionResponse, GenerativeClient};
use tripweaver::trip::{ItineraryPlan, TripRequest};

struct CannedClient;

impl GenerativeClient for CannedClient {
    fn complete(&self, _request: &CompletionRequest) -> CompletionFuture<'_> {
        Box::pin(async {
            Ok(CompletionResponse {
                text: r#"{"title":"Jaipur in Pink","days":[{"day":1,"date":"2024-03-01","activities":[{"time":"9:00 AM","title":"Hawa Mahal","description":"Palace of winds","booking_type":"activity","location":{"lat":26.9239,"lng":75.8267}}]}]}"#.into(),
                prompt_tokens: 812,
                completion_tokens: 240,
            })
        })
    }
}

fn jaipur() -> TripRequest {
    let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    TripRequest::new("Jaipur", day, day)
}

async fn generate_and_list(ctx: &ServiceContext) -> (ItineraryPlan, Vec<ItineraryPlan>) {
    let orchestrator =
        GenerationOrchestrator::new(ctx.llm.clone(), ctx.history(), GenerationOptions::default());
    let plan = orchestrator.generate(&jaipur()).await.unwrap();
    (plan, ctx.history().load())
}

#[tokio::test]
async fn record_then_replay_produces_identical_outputs() {
    let base = std::env::temp_dir().join("tripweaver_record_replay_test");
    let _ = std::fs::remove_dir_all(&base);

    // --- Phase 1: record ---
    let session = RecordingSession::new(&base).unwrap();
    let recorded_ctx = ServiceContext {
        llm: Arc::new(RecordingGenerativeClient::new(Arc::new(CannedClient), Arc::clone(&session.llm))),
        storage: Arc::new(RecordingKeyValueStore::new(
            Arc::new(MemoryKeyValueStore::new()),
            Arc::clone(&session.kv),
        )),
    };
    let (recorded_plan, recorded_history) = generate_and_list(&recorded_ctx).await;
    drop(recorded_ctx);
    let dir = session.finish().expect("recording should succeed");

    assert_eq!(recorded_plan.title, "Jaipur in Pink");
    assert_eq!(recorded_history[0], recorded_plan);

    // --- Phase 2: replay ---
    let config = CassetteConfig {
        llm: Some(dir.join("llm.cassette.yaml")),
        kv: Some(dir.join("kv.cassette.yaml")),
    };
    let replayed_ctx = ServiceContext::replaying_from(&config).unwrap();
    let (replayed_plan, replayed_history) = generate_and_list(&replayed_ctx).await;

    assert_eq!(replayed_plan, recorded_plan, "plan differs between record and replay");
    assert_eq!(replayed_history, recorded_history, "history differs between record and replay");

    // --- Phase 3: replay again for determinism ---
    let again = ServiceContext::replaying_from(&config).unwrap();
    let (plan_again, history_again) = generate_and_list(&again).await;
    assert_eq!(plan_again, replayed_plan);
    assert_eq!(history_again, replayed_history);

    let _ = std::fs::remove_dir_all(&base);
}
