use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::QueueSettings;
use crate::infra::queue::Queue;

pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod handlers;
pub mod infra;
pub mod routes;
pub mod utils;


#[derive(Clone)]
pub struct AppState {
    pub queue: Arc<dyn Queue>,
    pub settings: QueueSettings,
}

impl AppState {
    pub fn new(queue: Arc<dyn Queue>, settings: QueueSettings) -> Self {
        Self { queue, settings }
    }
}

/// Installs the global subscriber, filtered by `RUST_LOG` and defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
