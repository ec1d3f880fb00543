use anyhow::{Error, Result};
use tracing::info;

use crate::models::notification::AcknowledgedRecord;

/// Seam to the system of record that durably stores accepted
/// notifications. Writes are one-shot; retry policy, if any, belongs to
/// the implementation behind the seam.
pub trait NotificationSink: Send + Sync {
    fn record(&self, record: &AcknowledgedRecord) -> Result<(), Error>;
}

/// Default sink: emits the accepted record as a structured log line for
/// the downstream collector to pick up.
pub struct LogSink;

impl NotificationSink for LogSink {
    fn record(&self, record: &AcknowledgedRecord) -> Result<(), Error> {
        info!(
            record_id = %record.id,
            media_id = %record.media_id,
            new_media_id = %record.new_media_id,
            status = %record.status,
            post_id = %record.post_id,
            drawings = record.metadata.drawings,
            hentai = record.metadata.hentai,
            neutral = record.metadata.neutral,
            porn = record.metadata.porn,
            sexy = record.metadata.sexy,
            received_at = %record.received_at,
            "Received media notification"
        );

        Ok(())
    }
}
