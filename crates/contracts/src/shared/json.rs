use serde_json::{Map, Value};

/// Analytics document whose fields are owned by the backend.
///
/// Only the top-level shape (a JSON object) is checked when decoding.
pub type JsonObject = Map<String, Value>;
