use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use aws_sdk_sqs::error::DisplayErrorContext;

use crate::domain::models::types::ApiResponse;

/// A message handed out by the queue, together with the receipt needed to acknowledge it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceivedMessage {
    pub message_id: Option<String>,
    pub body: String,
    pub receipt_handle: Option<String>,
}

/// A message about to be submitted to a FIFO queue.
#[derive(Clone, Copy, Debug)]
pub struct OutgoingMessage<'a> {
    pub body: &'a str,
    pub group_id: &'a str,
    pub deduplication_id: &'a str,
}

#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    /// Rendered with its whole source chain, the bare SDK error only says "unhandled error" for
    /// dispatch failures and undeclared service codes.
    #[error("{}", DisplayErrorContext(.0))]
    Sqs(#[from] aws_sdk_sqs::Error),
    #[error("queue did not return the {0} attribute")]
    MissingAttribute(String),
    #[error("queue returned a non numeric {name} attribute: {value}")]
    InvalidAttribute { name: String, value: String },
    #[error("received message has no receipt handle and cannot be deleted")]
    MissingReceiptHandle,
    #[error("acknowledge task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

impl IntoResponse for QueueError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("Queue operation failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ApiResponse::new(self.to_string()))).into_response()
    }
}
