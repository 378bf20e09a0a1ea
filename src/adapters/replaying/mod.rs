//! Replaying adapters that serve recorded interactions.

pub mod llm;
pub mod storage;

pub use llm::ReplayingGenerativeClient;
pub use storage::ReplayingKeyValueStore;

use std::sync::Mutex;

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::PortError;

/// Takes the output of the next recorded call for `port`/`method`.
///
/// # Panics
///
/// Panics if the replayer lock is poisoned or the cassette has no matching
/// interaction left.
pub(crate) fn next_output(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> serde_json::Value {
    let mut guard = replayer.lock().expect("replayer lock poisoned");
    guard.next_interaction(port, method).output
}

/// Turns a recorded `{"ok": v}` / `{"err": "msg"}` output back into a `Result`.
///
/// A bare value without either key is treated as `ok`.
pub(crate) fn replay_result<T: DeserializeOwned>(
    output: serde_json::Value,
    context: &str,
) -> Result<T, PortError> {
    if let Some(err) = output.get("err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(msg.into());
    }
    let value = match output {
        serde_json::Value::Object(mut map) if map.contains_key("ok") => {
            map.remove("ok").unwrap_or(serde_json::Value::Null)
        }
        other => other,
    };
    serde_json::from_value(value)
        .map_err(|e| format!("{context}: failed to deserialize recorded output: {e}").into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_wrapper_is_unwrapped() {
        let value: Option<String> = replay_result(json!({"ok": "[]"}), "kv::get").unwrap();
        assert_eq!(value.as_deref(), Some("[]"));
    }

    #[test]
    fn ok_null_decodes_to_none_or_unit() {
        let value: Option<String> = replay_result(json!({"ok": null}), "kv::get").unwrap();
        assert!(value.is_none());
        assert!(replay_result::<()>(json!({"ok": null}), "kv::set").is_ok());
    }

    #[test]
    fn err_wrapper_becomes_error() {
        let result: Result<(), _> = replay_result(json!({"err": "disk full"}), "kv::set");
        assert_eq!(result.unwrap_err().to_string(), "disk full");
    }
}
