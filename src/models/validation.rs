use serde_json::{Map, Value as JsonValue};

/// Required top-level payload keys, in the order missing ones are reported.
pub const REQUIRED_KEYS: [&str; 5] = ["media_id", "new_media_id", "status", "post_id", "metadata"];

/// Presence check only: a key with a null or empty value still counts.
/// Returns the first missing key in enumeration order.
pub fn validate_required_keys(payload: &Map<String, JsonValue>) -> Result<(), &'static str> {
    for key in REQUIRED_KEYS {
        if !payload.contains_key(key) {
            return Err(key);
        }
    }

    Ok(())
}
