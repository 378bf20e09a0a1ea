//! Recording adapters that capture interactions to cassettes.

pub mod llm;
pub mod storage;

pub use llm::RecordingGenerativeClient;
pub use storage::RecordingKeyValueStore;

use serde::Serialize;

use crate::cassette::session::SharedRecorder;

/// Records a fallible call using the `{"ok": v}` / `{"err": "msg"}` convention
/// understood by `replaying::replay_result`.
///
/// # Panics
///
/// Panics if the input or output cannot be represented as JSON, or the
/// recorder lock is poisoned.
pub(crate) fn record_result<T, E, I>(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let input_json = serde_json::to_value(input).expect("failed to serialize recording input");

    let output_json = match result {
        Ok(v) => {
            let inner = serde_json::to_value(v).expect("failed to serialize Ok value");
            serde_json::json!({ "ok": inner })
        }
        Err(e) => serde_json::json!({ "err": e.to_string() }),
    };

    let mut guard = recorder.lock().expect("recorder lock poisoned");
    guard.record(port, method, input_json, output_json);
}
