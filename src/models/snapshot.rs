use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Aggregate status snapshot as served by the stats endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub title: String,
    pub version: String,

    #[serde(default)]
    pub debug: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openapi_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_url: Option<String>,

    /// Legend mapping status names to counts. Carried through for
    /// display; nothing here interprets it.
    #[serde(default)]
    pub status: HashMap<String, u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<NaiveDateTime>,

    pub release: NaiveDateTime,
    pub started_time: NaiveDateTime,

    #[serde(default)]
    pub latest_media: Vec<MediaSnapshot>,
}

/// One entry of `latest_media`. Score values arrive number- or
/// string-typed depending on the notifier, so they stay raw until the
/// presenter coerces them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaSnapshot {
    pub media_id: String,

    #[serde(default)]
    pub new_media_id: Option<String>,

    pub status: String,
    pub post_id: i64,

    #[serde(default)]
    pub metadata: BTreeMap<String, JsonValue>,
}

/// Display-ready fields for one media row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRow {
    pub post_id: i64,
    pub media_id: String,
    pub status: String,
    pub categories: String,
    pub media_id_link: String,
}

/// Header strings derived from a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppSummary {
    pub title: String,
    pub subtitle: String,
}
