use std::sync::Arc;

use futures_util::future::join_all;

use crate::config::QueueSettings;
use crate::constants::sqs::RECEIVE_BATCH_SIZE;
use crate::domain::models::queue::{QueueError, ReceivedMessage};
use crate::infra::queue::Queue;

/// Receives at most one message and deletes it.
///
/// The message is returned even when deleting it failed, in which case the queue
/// will hand them out again once their visibility timeout expires.
pub async fn receive_message(
    queue: Arc<dyn Queue>,
    settings: &QueueSettings,
) -> Result<Vec<ReceivedMessage>, QueueError> {
    let messages = queue.receive_messages(RECEIVE_BATCH_SIZE, settings.wait_time_seconds).await?;
    tracing::info!("Received {} message(s)", messages.len());

    if !messages.is_empty() {
        acknowledge(queue, &messages).await;
    }

    Ok(messages)
}

/// Deletes each message on its own task and waits for all of them to finish.
pub(crate) async fn acknowledge(queue: Arc<dyn Queue>, messages: &[ReceivedMessage]) {
    let tasks = messages.iter().map(|message| {
        let queue = Arc::clone(&queue);
        let receipt_handle = message.receipt_handle.clone();
        tokio::spawn(async move {
            match receipt_handle {
                Some(receipt_handle) => queue.delete_message(&receipt_handle).await,
                None => Err(QueueError::MissingReceiptHandle),
            }
        })
    });

    for (message, result) in messages.iter().zip(join_all(tasks).await) {
        match result.map_err(QueueError::from).and_then(|deleted| deleted) {
            Ok(()) => tracing::debug!("Deleted message {:?}", message.message_id),
            Err(e) => tracing::error!("Failed to delete message {:?}: {}", message.message_id, e),
        }
    }
}
