use chrono::{DateTime, Utc};

use crate::config::QueueSettings;
use crate::domain::models::queue::{OutgoingMessage, QueueError};
use crate::infra::queue::Queue;
use crate::utils::time::deduplication_id;

/// Sends `message` to the shared message group, deduplicated on the current time.
pub async fn send_message(
    queue: &dyn Queue,
    settings: &QueueSettings,
    message: &str,
) -> Result<Option<String>, QueueError> {
    send_message_at(queue, settings, message, Utc::now()).await
}

pub async fn send_message_at(
    queue: &dyn Queue,
    settings: &QueueSettings,
    message: &str,
    at: DateTime<Utc>,
) -> Result<Option<String>, QueueError> {
    let deduplication_id = deduplication_id(at);
    let message_id = queue
        .send_message(OutgoingMessage {
            body: message,
            group_id: &settings.message_group_id,
            deduplication_id: &deduplication_id,
        })
        .await?;

    tracing::info!("Sent message {:?} with deduplication id {}", message_id, deduplication_id);
    Ok(message_id)
}
