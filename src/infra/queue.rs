use std::sync::Arc;

use axum::async_trait;
use aws_sdk_sqs::types::{Message, QueueAttributeName};
use aws_sdk_sqs::Client as SqsClient;

use crate::constants::env::REGION;
use crate::domain::models::queue::{OutgoingMessage, QueueError, ReceivedMessage};
use crate::infra::client::SqsClientProvider;
use crate::utils::env::get_optional_environment_variable;

/// The four primitives the service needs from a FIFO queue.
#[async_trait]
pub trait Queue: Send + Sync {
    /// Submits a message and returns the id the queue assigned to it, if any.
    async fn send_message(&self, message: OutgoingMessage<'_>) -> Result<Option<String>, QueueError>;
    /// Raw `ApproximateNumberOfMessages` attribute, `None` when the queue did not report it.
    async fn approximate_message_count(&self) -> Result<Option<String>, QueueError>;
    async fn receive_messages(
        &self,
        max_messages: i32,
        wait_time_seconds: i32,
    ) -> Result<Vec<ReceivedMessage>, QueueError>;
    async fn delete_message(&self, receipt_handle: &str) -> Result<(), QueueError>;
}

pub struct SqsQueue {
    provider: Arc<SqsClientProvider>,
    queue_url: String,
}

impl SqsQueue {
    pub fn new(provider: Arc<SqsClientProvider>, queue_url: String) -> Self {
        Self { provider, queue_url }
    }

    pub fn queue_url(&self) -> &str {
        &self.queue_url
    }

    /// Client for the region currently configured in the environment.
    pub async fn client(&self) -> SqsClient {
        let region = get_optional_environment_variable(REGION);
        self.provider.client(region.as_deref()).await
    }
}

impl From<&Message> for ReceivedMessage {
    fn from(message: &Message) -> Self {
        Self {
            message_id: message.message_id().map(ToOwned::to_owned),
            body: message.body().unwrap_or_default().to_owned(),
            receipt_handle: message.receipt_handle().map(ToOwned::to_owned),
        }
    }
}

#[async_trait]
impl Queue for SqsQueue {
    async fn send_message(&self, message: OutgoingMessage<'_>) -> Result<Option<String>, QueueError> {
        let output = self
            .client()
            .await
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(message.body)
            .message_group_id(message.group_id)
            .message_deduplication_id(message.deduplication_id)
            .send()
            .await
            .map_err(aws_sdk_sqs::Error::from)?;

        Ok(output.message_id().map(ToOwned::to_owned))
    }

    async fn approximate_message_count(&self) -> Result<Option<String>, QueueError> {
        let output = self
            .client()
            .await
            .get_queue_attributes()
            .queue_url(&self.queue_url)
            .attribute_names(QueueAttributeName::ApproximateNumberOfMessages)
            .send()
            .await
            .map_err(aws_sdk_sqs::Error::from)?;

        let count = output
            .attributes()
            .and_then(|attributes| attributes.get(&QueueAttributeName::ApproximateNumberOfMessages))
            .cloned();

        Ok(count)
    }

    async fn receive_messages(
        &self,
        max_messages: i32,
        wait_time_seconds: i32,
    ) -> Result<Vec<ReceivedMessage>, QueueError> {
        let output = self
            .client()
            .await
            .receive_message()
            .queue_url(&self.queue_url)
            .max_number_of_messages(max_messages)
            .wait_time_seconds(wait_time_seconds)
            .send()
            .await
            .map_err(aws_sdk_sqs::Error::from)?;

        Ok(output.messages().unwrap_or_default().iter().map(ReceivedMessage::from).collect())
    }

    async fn delete_message(&self, receipt_handle: &str) -> Result<(), QueueError> {
        self.client()
            .await
            .delete_message()
            .queue_url(&self.queue_url)
            .receipt_handle(receipt_handle)
            .send()
            .await
            .map_err(aws_sdk_sqs::Error::from)?;

        Ok(())
    }
}
