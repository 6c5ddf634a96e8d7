use std::net::SocketAddr;
use std::process;
use std::sync::Arc;

use fifo_queue_service::config::config;
use fifo_queue_service::infra::queue::Queue;
use fifo_queue_service::routes::app_router;
use fifo_queue_service::{init_tracing, AppState};

#[tokio::main]
async fn main() {
    init_tracing();

    let config = match config().await {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            process::exit(1);
        }
    };

    let queue: Arc<dyn Queue> = config.sqs_queue().clone();
    let state = AppState::new(queue, config.queue_settings().clone());

    let app = app_router(state.clone()).with_state(state);

    let address = format!("{}:{}", config.server_host(), config.server_port());
    let socket_addr: SocketAddr = match address.parse() {
        Ok(socket_addr) => socket_addr,
        Err(e) => {
            tracing::error!("Invalid listen address {}: {}", address, e);
            process::exit(1);
        }
    };

    tracing::info!("forwarding to queue {}", config.sqs_queue().queue_url());
    tracing::info!("listening on http://{}", socket_addr);
    if let Err(e) = axum::Server::bind(&socket_addr).serve(app.into_make_service_with_connect_info::<SocketAddr>()).await
    {
        tracing::error!("Server error: {}", e);
        process::exit(1);
    }
}
