use anyhow::{Error, Result};
use chrono::Utc;
use tracing::{debug, warn};

use crate::{
    config::Config,
    models::snapshot::{AppSummary, StatsSnapshot},
    presenter::summarize,
};

/// Snapshot served in debug mode so the dashboard can be worked on
/// without a live receiver behind it.
const SAMPLE_SNAPSHOT: &str = r#"{
    "title": "Media Receiver",
    "debug": false,
    "version": "0.1.0",
    "status": {
        "NOTIFIED": 3,
        "UPLOADED": 1
    },
    "last_update": "2022-06-14T11:21:32",
    "release": "2022-06-14T11:21:39",
    "started_time": "2022-06-20T11:23:24.731214",
    "latest_media": [
        {
            "media_id": "videos/2022/06/profile_1faf29080d270a0d126a4e6737bf058b.mp4",
            "new_media_id": "videos/2022/06/profile_1faf29080d270a0d126a4e6737bf058b.mp4",
            "status": "NOTIFIED",
            "post_id": 1,
            "metadata": {
                "drawings": 22.9652,
                "hentai": 1.026,
                "neutral": 71.34230000000001,
                "porn": 3.1109,
                "sexy": 1.5556
            }
        },
        {
            "media_id": "videos/2022/06/profile_1faf29080d270a0d126a4e6737bf058b.mp4",
            "new_media_id": "videos/2022/06/profile_1faf29080d270a0d126a4e6737bf058b.webm",
            "status": "NOTIFIED",
            "post_id": 2,
            "metadata": {
                "drawings": 20.9652,
                "hentai": 1.026,
                "neutral": 31.34230000000001,
                "porn": 3.1109,
                "sexy": 1.5556
            }
        }
    ]
}"#;

/// Client for the aggregate status endpoint consumed by the dashboard.
pub struct StatsClient {
    http: reqwest::Client,
    stats_url: String,
    debug: bool,
}

impl StatsClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            stats_url: config.stats_url.clone(),
            debug: config.debug,
        }
    }

    pub async fn fetch_snapshot(&self) -> Result<StatsSnapshot, Error> {
        if self.debug {
            debug!("Serving sample snapshot");
            return Ok(serde_json::from_str(SAMPLE_SNAPSHOT)?);
        }

        let snapshot = self
            .http
            .get(&self.stats_url)
            .send()
            .await?
            .error_for_status()?
            .json::<StatsSnapshot>()
            .await?;

        Ok(snapshot)
    }

    /// Fetch a snapshot and derive the dashboard header strings. Fetch
    /// and decode failures collapse to `None`; the dashboard renders
    /// empty instead of propagating the error.
    pub async fn fetch_summary(&self) -> Option<AppSummary> {
        match self.fetch_snapshot().await {
            Ok(snapshot) => Some(summarize(&snapshot, Utc::now().naive_utc())),
            Err(e) => {
                warn!(error = %e, "Stats snapshot fetch failed");
                None
            }
        }
    }
}
