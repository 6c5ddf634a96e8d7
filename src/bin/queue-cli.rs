use std::process;
use std::sync::Arc;

use clap::Parser;
use fifo_queue_service::cli::Cli;
use fifo_queue_service::config::config;
use fifo_queue_service::infra::queue::Queue;
use fifo_queue_service::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();
    tracing::info!("[ SQS Management ]");

    let config = match config().await {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            process::exit(1);
        }
    };

    tracing::info!("Queue: {}", config.sqs_queue().queue_url());
    let queue: Arc<dyn Queue> = config.sqs_queue().clone();
    if let Err(e) = cli.run(queue, config.queue_settings()).await {
        tracing::error!("{}", e);
        process::exit(1);
    }
}
