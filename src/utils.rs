use std::sync::Arc;

use tokio::time::{Duration, sleep};
use tracing::{debug, warn};

use crate::{clients::sink::NotificationSink, models::notification::AcknowledgedRecord};

/// Deferred phase of the receiver. Runs detached after the 202 response:
/// waits out the processing lag, then hands the record to the sink. The
/// caller already has its response, so failures here are
/// observability-only and never retried.
pub async fn process_accepted(
    record: AcknowledgedRecord,
    sink: Arc<dyn NotificationSink>,
    delay: Duration,
) {
    sleep(delay).await;

    debug!(record_id = %record.id, "Processing acknowledged notification");

    if let Err(e) = sink.record(&record) {
        warn!(
            error = %e,
            record_id = %record.id,
            media_id = %record.media_id,
            "Failed to write notification record to sink"
        );
    }
}
