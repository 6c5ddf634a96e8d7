use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{ConnectInfo, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::constants::responses::{EMPTY_QUEUE, SEND_SUCCESS};
use crate::domain::models::action::{decode_request, QueueRequest};
use crate::domain::models::queue::QueueError;
use crate::domain::models::types::ApiResponse;
use crate::handlers::queue::get_count::get_count;
use crate::handlers::queue::receive_message::receive_message;
use crate::handlers::queue::send_message::send_message;
use crate::AppState;

const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

pub async fn handle_action(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let source = source_ip(&headers, peer);
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::warn!("Request from {} rejected: {}", source, rejection.body_text());
            return (rejection.status(), Json(ApiResponse::new(rejection.body_text()))).into_response();
        }
    };

    let request = decode_request(&body);
    tracing::info!("Request from {} for action {:?}", source, request.action());

    match dispatch(&state, request).await {
        Ok(message) => Json(ApiResponse::new(message)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Runs the operation selected by `request` and renders its result as the response message.
pub async fn dispatch(state: &AppState, request: QueueRequest) -> Result<String, QueueError> {
    match request {
        QueueRequest::SendMessage { message } => {
            send_message(state.queue.as_ref(), &state.settings, &message).await?;
            Ok(SEND_SUCCESS.to_string())
        }
        QueueRequest::GetCount => Ok(get_count(state.queue.as_ref()).await?.to_string()),
        QueueRequest::ReceiveMessage => {
            let messages = receive_message(Arc::clone(&state.queue), &state.settings).await?;
            Ok(messages.into_iter().next().map(|message| message.body).unwrap_or_else(|| EMPTY_QUEUE.to_string()))
        }
        QueueRequest::Skipped(reason) => {
            tracing::debug!("Nothing to do: {}", reason);
            Ok(String::new())
        }
    }
}

/// Caller address, preferring the first hop recorded by a proxy in front of the service.
pub fn source_ip(headers: &HeaderMap, peer: SocketAddr) -> IpAddr {
    headers
        .get(FORWARDED_FOR_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .and_then(|value| value.trim().parse::<IpAddr>().ok())
        .unwrap_or_else(|| peer.ip())
}
