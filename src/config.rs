use std::sync::Arc;

use dotenvy::dotenv;
use tokio::sync::OnceCell;

use crate::constants::env::{ENDPOINT_URL, HOST, MESSAGE_GROUP_ID, PORT, QUEUE_URL, RECEIVE_WAIT_TIME_SECONDS, REGION};
use crate::constants::server::{DEFAULT_HOST, DEFAULT_PORT};
use crate::constants::sqs::{DEFAULT_WAIT_TIME_SECONDS, MAX_WAIT_TIME_SECONDS};
use crate::infra::client::SqsClientProvider;
use crate::infra::queue::SqsQueue;
use crate::utils::env::{
    get_environment_variable_or_warn, get_optional_environment_variable, parse_environment_variable,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value}")]
    InvalidValue { name: &'static str, value: String },
    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange { name: &'static str, value: i32, min: i32, max: i32 },
}

#[derive(Debug)]
struct ServerConfig {
    host: String,
    port: u16,
}

/// Settings the queue operations need on top of the queue itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueueSettings {
    /// Ordering group shared by every message this service sends.
    pub message_group_id: String,
    pub wait_time_seconds: i32,
}

impl QueueSettings {
    pub fn new(message_group_id: impl Into<String>) -> Self {
        Self { message_group_id: message_group_id.into(), wait_time_seconds: DEFAULT_WAIT_TIME_SECONDS }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let wait_time_seconds = parse_environment_variable(RECEIVE_WAIT_TIME_SECONDS, DEFAULT_WAIT_TIME_SECONDS)?;

        Ok(Self {
            message_group_id: get_environment_variable_or_warn(MESSAGE_GROUP_ID),
            wait_time_seconds: check_range(RECEIVE_WAIT_TIME_SECONDS, wait_time_seconds, 0, MAX_WAIT_TIME_SECONDS)?,
        })
    }
}

fn check_range(name: &'static str, value: i32, min: i32, max: i32) -> Result<i32, ConfigError> {
    if (min..=max).contains(&value) { Ok(value) } else { Err(ConfigError::OutOfRange { name, value, min, max }) }
}

pub struct Config {
    server: ServerConfig,
    queue_settings: QueueSettings,
    sqs_queue: Arc<SqsQueue>,
}

impl Config {
    pub fn server_host(&self) -> &str {
        &self.server.host
    }

    pub fn server_port(&self) -> u16 {
        self.server.port
    }

    pub fn queue_settings(&self) -> &QueueSettings {
        &self.queue_settings
    }

    pub fn sqs_queue(&self) -> &Arc<SqsQueue> {
        &self.sqs_queue
    }
}

pub static CONFIG: OnceCell<Config> = OnceCell::const_new();

async fn init_config() -> Result<Config, ConfigError> {
    dotenv().ok();
    // init server config
    let server = ServerConfig {
        host: get_optional_environment_variable(HOST).unwrap_or_else(|| String::from(DEFAULT_HOST)),
        port: parse_environment_variable(PORT, DEFAULT_PORT)?,
    };

    let queue_settings = QueueSettings::from_env()?;

    // init AWS SQS
    let provider = Arc::new(SqsClientProvider::new(get_optional_environment_variable(ENDPOINT_URL)));
    let region = get_optional_environment_variable(REGION);
    if region.is_none() {
        tracing::warn!("{} is not set, falling back to the default AWS region chain", REGION);
    }
    // build the first client now so credential and region problems show up in the startup logs
    provider.client(region.as_deref()).await;
    let sqs_queue = Arc::new(SqsQueue::new(provider, get_environment_variable_or_warn(QUEUE_URL)));

    Ok(Config { server, queue_settings, sqs_queue })
}

pub async fn config() -> Result<&'static Config, ConfigError> {
    CONFIG.get_or_try_init(init_config).await
}
