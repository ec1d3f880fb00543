use serde::{Deserialize, Serialize};

/// Every receiver response is a single-field JSON object. The accepted
/// path uses the literal "accepted"; rejection paths carry a short
/// human-readable reason, never internal detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn accepted() -> Self {
        Self {
            status: "accepted".to_string(),
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            status: reason.into(),
        }
    }
}
