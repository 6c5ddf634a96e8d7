use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use strum_macros::{Display, EnumString};

pub const ACTION_FIELD: &str = "action";
pub const MESSAGE_FIELD: &str = "message";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumString, Display)]
pub enum Action {
    #[strum(serialize = "sendmessage")]
    SendMessage,
    #[strum(serialize = "getcount")]
    GetCount,
    #[strum(serialize = "receivemessage")]
    ReceiveMessage,
}

/// Why a request body did not select any operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    MalformedBody,
    MissingAction,
    UnknownAction(String),
    MissingMessage,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedBody => write!(f, "body is not a JSON object"),
            Self::MissingAction => write!(f, "no {} field", ACTION_FIELD),
            Self::UnknownAction(action) => write!(f, "unknown action {:?}", action),
            Self::MissingMessage => write!(f, "{} without a {}", Action::SendMessage, MESSAGE_FIELD),
        }
    }
}

/// Decoded request body.
///
/// `Skipped` requests run no operation and are answered with an empty success envelope, which is
/// the behaviour existing clients rely on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueueRequest {
    SendMessage { message: String },
    GetCount,
    ReceiveMessage,
    Skipped(SkipReason),
}

impl QueueRequest {
    pub fn action(&self) -> Option<Action> {
        match self {
            Self::SendMessage { .. } => Some(Action::SendMessage),
            Self::GetCount => Some(Action::GetCount),
            Self::ReceiveMessage => Some(Action::ReceiveMessage),
            Self::Skipped(_) => None,
        }
    }
}

/// Decodes a raw request body as a flat map of string fields.
///
/// Fields holding anything other than a string are ignored as if they were absent.
pub fn decode_request(body: &[u8]) -> QueueRequest {
    let fields = match serde_json::from_slice::<HashMap<String, Value>>(body) {
        Ok(fields) => fields
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(value) => Some((key, value)),
                _ => None,
            })
            .collect::<HashMap<String, String>>(),
        Err(_) => return QueueRequest::Skipped(SkipReason::MalformedBody),
    };

    let Some(action) = fields.get(ACTION_FIELD) else {
        return QueueRequest::Skipped(SkipReason::MissingAction);
    };

    match Action::from_str(action) {
        Ok(Action::SendMessage) => match fields.get(MESSAGE_FIELD) {
            Some(message) if !message.is_empty() => QueueRequest::SendMessage { message: message.clone() },
            _ => QueueRequest::Skipped(SkipReason::MissingMessage),
        },
        Ok(Action::GetCount) => QueueRequest::GetCount,
        Ok(Action::ReceiveMessage) => QueueRequest::ReceiveMessage,
        Err(_) => QueueRequest::Skipped(SkipReason::UnknownAction(action.clone())),
    }
}
