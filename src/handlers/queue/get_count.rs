use crate::constants::sqs::APPROXIMATE_NUMBER_OF_MESSAGES;
use crate::domain::models::queue::QueueError;
use crate::infra::queue::Queue;

/// Approximate number of visible messages. Eventually consistent, never exact.
pub async fn get_count(queue: &dyn Queue) -> Result<u64, QueueError> {
    let value = queue
        .approximate_message_count()
        .await?
        .ok_or_else(|| QueueError::MissingAttribute(APPROXIMATE_NUMBER_OF_MESSAGES.to_string()))?;

    value.trim().parse::<u64>().map_err(|_| QueueError::InvalidAttribute {
        name: APPROXIMATE_NUMBER_OF_MESSAGES.to_string(),
        value,
    })
}
