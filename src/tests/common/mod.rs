use std::collections::{HashMap, HashSet, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::async_trait;
use axum::body::Body;
use axum::extract::connect_info::MockConnectInfo;
use axum::http::{self, Request, StatusCode};
use axum::Router;
use aws_sdk_sqs::error::SdkError;
use aws_sdk_sqs::operation::get_queue_attributes::GetQueueAttributesError;
use aws_sdk_sqs::types::error::{QueueDoesNotExist, ReceiptHandleIsInvalid};
use tokio::sync::Barrier;
use tower::ServiceExt;

use crate::config::QueueSettings;
use crate::domain::models::queue::{OutgoingMessage, QueueError, ReceivedMessage};
use crate::domain::models::types::ApiResponse;
use crate::infra::queue::Queue;
use crate::routes::app_router;
use crate::AppState;

pub const MESSAGE_GROUP_ID: &str = "test-group";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentMessage {
    pub body: String,
    pub group_id: String,
    pub deduplication_id: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Calls {
    pub send: usize,
    pub count: usize,
    pub receive: usize,
    pub delete: usize,
}

#[derive(Clone, Debug)]
enum Failure {
    /// A declared service error with its own SDK variant.
    NoSuchQueue(String),
    /// The request never reached the service.
    Unreachable(String),
}

impl Failure {
    fn to_error(&self) -> QueueError {
        match self {
            Self::NoSuchQueue(message) => queue_does_not_exist(message),
            Self::Unreachable(message) => unreachable_service(message),
        }
    }
}

#[derive(Default)]
struct MockQueueState {
    visible: VecDeque<ReceivedMessage>,
    in_flight: HashMap<String, ReceivedMessage>,
    deduplication_ids: HashSet<String>,
    sent: Vec<SentMessage>,
    next_id: usize,
    calls: Calls,
    last_receive: Option<(i32, i32)>,
    failure: Option<Failure>,
    fail_deletes: bool,
    omit_receipt_handles: bool,
    count_attribute: Option<Option<String>>,
}

/// In-memory FIFO queue with SQS-like deduplication and receipt handles.
#[derive(Default)]
pub struct MockQueue {
    state: Mutex<MockQueueState>,
    delete_barrier: Option<Arc<Barrier>>,
}

impl MockQueue {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_messages(bodies: &[&str]) -> Arc<Self> {
        let queue = Self::default();
        for body in bodies {
            queue.push(body);
        }
        Arc::new(queue)
    }

    /// Every call fails with a service error carrying `message`.
    pub fn failing(message: &str) -> Arc<Self> {
        let queue = Self::default();
        queue.lock().failure = Some(Failure::NoSuchQueue(message.to_string()));
        Arc::new(queue)
    }

    /// Every call fails before reaching the service, the SDK reports it as an unhandled error.
    pub fn unreachable(message: &str) -> Arc<Self> {
        let queue = Self::default();
        queue.lock().failure = Some(Failure::Unreachable(message.to_string()));
        Arc::new(queue)
    }

    /// Deletes block until `parties` of them are in flight at the same time.
    pub fn with_delete_barrier(bodies: &[&str], parties: usize) -> Arc<Self> {
        let queue = Self { delete_barrier: Some(Arc::new(Barrier::new(parties))), ..Self::default() };
        for body in bodies {
            queue.push(body);
        }
        Arc::new(queue)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockQueueState> {
        self.state.lock().unwrap()
    }

    fn push(&self, body: &str) {
        let mut state = self.lock();
        let id = state.next_id;
        state.next_id += 1;
        state.visible.push_back(ReceivedMessage {
            message_id: Some(format!("message-{}", id)),
            body: body.to_string(),
            receipt_handle: None,
        });
    }

    pub fn fail_deletes(&self) {
        self.lock().fail_deletes = true;
    }

    pub fn omit_receipt_handles(&self) {
        self.lock().omit_receipt_handles = true;
    }

    pub fn set_count_attribute(&self, value: Option<&str>) {
        self.lock().count_attribute = Some(value.map(ToOwned::to_owned));
    }

    pub fn calls(&self) -> Calls {
        self.lock().calls
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.lock().sent.clone()
    }

    pub fn visible_bodies(&self) -> Vec<String> {
        self.lock().visible.iter().map(|message| message.body.clone()).collect()
    }

    pub fn in_flight(&self) -> usize {
        self.lock().in_flight.len()
    }

    pub fn last_receive(&self) -> Option<(i32, i32)> {
        self.lock().last_receive
    }
}

fn queue_does_not_exist(message: &str) -> QueueError {
    QueueError::Sqs(aws_sdk_sqs::Error::QueueDoesNotExist(QueueDoesNotExist::builder().message(message).build()))
}

fn unreachable_service(message: &str) -> QueueError {
    let error: SdkError<GetQueueAttributesError, ()> = SdkError::construction_failure(message.to_string());
    QueueError::Sqs(aws_sdk_sqs::Error::from(error))
}

fn receipt_handle_is_invalid(receipt_handle: &str) -> QueueError {
    QueueError::Sqs(aws_sdk_sqs::Error::ReceiptHandleIsInvalid(
        ReceiptHandleIsInvalid::builder().message(format!("receipt handle {} is invalid", receipt_handle)).build(),
    ))
}

#[async_trait]
impl Queue for MockQueue {
    async fn send_message(&self, message: OutgoingMessage<'_>) -> Result<Option<String>, QueueError> {
        let mut state = self.lock();
        state.calls.send += 1;
        if let Some(failure) = &state.failure {
            return Err(failure.to_error());
        }

        state.sent.push(SentMessage {
            body: message.body.to_string(),
            group_id: message.group_id.to_string(),
            deduplication_id: message.deduplication_id.to_string(),
        });

        // a duplicate is acknowledged but never enqueued
        if !state.deduplication_ids.insert(message.deduplication_id.to_string()) {
            return Ok(None);
        }

        let id = state.next_id;
        state.next_id += 1;
        let message_id = format!("message-{}", id);
        state.visible.push_back(ReceivedMessage {
            message_id: Some(message_id.clone()),
            body: message.body.to_string(),
            receipt_handle: None,
        });
        Ok(Some(message_id))
    }

    async fn approximate_message_count(&self) -> Result<Option<String>, QueueError> {
        let mut state = self.lock();
        state.calls.count += 1;
        if let Some(failure) = &state.failure {
            return Err(failure.to_error());
        }

        match &state.count_attribute {
            Some(value) => Ok(value.clone()),
            None => Ok(Some(state.visible.len().to_string())),
        }
    }

    async fn receive_messages(
        &self,
        max_messages: i32,
        wait_time_seconds: i32,
    ) -> Result<Vec<ReceivedMessage>, QueueError> {
        let mut state = self.lock();
        state.calls.receive += 1;
        state.last_receive = Some((max_messages, wait_time_seconds));
        if let Some(failure) = &state.failure {
            return Err(failure.to_error());
        }

        let mut received = Vec::new();
        while received.len() < max_messages as usize {
            let Some(mut message) = state.visible.pop_front() else {
                break;
            };
            let receipt_handle = format!("receipt-{}", state.next_id);
            state.next_id += 1;
            message.receipt_handle = Some(receipt_handle.clone());
            state.in_flight.insert(receipt_handle, message.clone());
            if state.omit_receipt_handles {
                message.receipt_handle = None;
            }
            received.push(message);
        }
        Ok(received)
    }

    async fn delete_message(&self, receipt_handle: &str) -> Result<(), QueueError> {
        self.lock().calls.delete += 1;
        if let Some(barrier) = &self.delete_barrier {
            barrier.wait().await;
        }

        let mut state = self.lock();
        if state.fail_deletes {
            return Err(receipt_handle_is_invalid(receipt_handle));
        }
        match state.in_flight.remove(receipt_handle) {
            Some(_) => Ok(()),
            None => Err(receipt_handle_is_invalid(receipt_handle)),
        }
    }
}

pub fn settings() -> QueueSettings {
    QueueSettings::new(MESSAGE_GROUP_ID)
}

pub fn app(queue: Arc<MockQueue>) -> Router {
    let state = AppState::new(queue, settings());
    app_router(state.clone()).with_state(state).layer(MockConnectInfo(SocketAddr::from(([127, 0, 0, 1], 3000))))
}

/// Posts `body` to the queue endpoint and decodes the response envelope.
pub async fn post_action(app: Router, body: &str) -> (StatusCode, ApiResponse) {
    let response = app
        .oneshot(
            Request::builder()
                .method(http::Method::POST)
                .uri("/")
                .header(http::header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}
