use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use uuid::Uuid;

/// Classification scores attached to every notification. The upstream
/// service reports them as percentages, sometimes number-typed and
/// sometimes string-typed; both coerce the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub drawings: f64,
    pub hentai: f64,
    pub neutral: f64,
    pub porn: f64,
    pub sexy: f64,
}

impl CategoryScores {
    /// Coerce the five fixed scores out of a raw `metadata` value. A
    /// missing sub-key, a non-numeric value, or a non-object `metadata`
    /// all zero-fill rather than reject.
    pub fn from_value(metadata: &JsonValue) -> Self {
        let score = |key: &str| metadata.get(key).map(coerce_score).unwrap_or(0.0);

        Self {
            drawings: score("drawings"),
            hentai: score("hentai"),
            neutral: score("neutral"),
            porn: score("porn"),
            sexy: score("sexy"),
        }
    }
}

/// Best-effort numeric coercion: numbers pass through, numeric strings
/// parse, anything else is 0.0. This never fails; the zero default is the
/// contract, not an error fallback.
pub fn coerce_score(value: &JsonValue) -> f64 {
    match value {
        JsonValue::Number(n) => n.as_f64().unwrap_or(0.0),
        JsonValue::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// The record handed to the sink after a notification is acknowledged.
///
/// The scalar payload fields stay raw JSON values: validation only checks
/// that the keys are present, so a null `status` or a string `post_id`
/// must still be acknowledged and recorded as-is.
#[derive(Debug, Clone, Serialize)]
pub struct AcknowledgedRecord {
    pub id: Uuid,
    pub media_id: JsonValue,
    pub new_media_id: JsonValue,
    pub status: JsonValue,
    pub post_id: JsonValue,
    pub metadata: CategoryScores,
    pub received_at: DateTime<Utc>,
}

impl AcknowledgedRecord {
    /// Build the record from a payload that already passed the
    /// required-key check.
    pub fn from_payload(payload: &Map<String, JsonValue>) -> Self {
        let field = |key: &str| payload.get(key).cloned().unwrap_or(JsonValue::Null);

        Self {
            id: Uuid::new_v4(),
            media_id: field("media_id"),
            new_media_id: field("new_media_id"),
            status: field("status"),
            post_id: field("post_id"),
            metadata: CategoryScores::from_value(
                payload.get("metadata").unwrap_or(&JsonValue::Null),
            ),
            received_at: Utc::now(),
        }
    }
}
