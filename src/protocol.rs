//! JSON wire helpers.
//!
//! Actions cross the transport boundary as `{ "type": ..., "payload": ... }`
//! objects and whole games as JSON arrays of them. These helpers are thin
//! wrappers over serde used by the replay binary and the session layer.

use crate::action::Action;

/// Encodes one action to its wire form.
pub fn encode_action(action: &Action) -> serde_json::Result<String> {
    serde_json::to_string(action)
}

/// Decodes one action from its wire form.
pub fn decode_action(input: &str) -> serde_json::Result<Action> {
    serde_json::from_str(input)
}

/// Encodes a whole log as a JSON array.
pub fn encode_log(log: &[Action]) -> serde_json::Result<String> {
    serde_json::to_string(log)
}

/// Decodes a whole log from a JSON array.
pub fn decode_log(input: &str) -> serde_json::Result<Vec<Action>> {
    serde_json::from_str(input)
}
