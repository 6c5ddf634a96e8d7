use std::sync::Arc;

use chrono::Utc;
use clap::{Parser, ValueEnum};

use crate::config::QueueSettings;
use crate::constants::sqs::APPROXIMATE_NUMBER_OF_MESSAGES;
use crate::domain::models::queue::QueueError;
use crate::handlers::queue::get_count::get_count;
use crate::handlers::queue::receive_message::receive_message;
use crate::handlers::queue::send_message::send_message_at;
use crate::infra::queue::Queue;
use crate::utils::time::deduplication_id;

#[derive(Debug, Parser)]
#[command(name = "queue-cli")]
#[command(about = "Send, count and receive messages on the FIFO queue", long_about = None)]
pub struct Cli {
    #[arg(value_enum)]
    pub command: Command,

    /// Body of the message to send, defaults to `Message:<timestamp>`
    #[arg(long)]
    pub message: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Command {
    Send,
    Count,
    Receive,
}

impl Cli {
    pub async fn run(&self, queue: Arc<dyn Queue>, settings: &QueueSettings) -> Result<(), QueueError> {
        match self.command {
            Command::Send => {
                let now = Utc::now();
                let body = match &self.message {
                    Some(message) => message.clone(),
                    None => format!("Message:{}", deduplication_id(now)),
                };
                let message_id = send_message_at(queue.as_ref(), settings, &body, now).await?;
                tracing::info!("SQSMessageID {}", message_id.as_deref().unwrap_or("unknown"));
            }
            Command::Count => {
                let count = get_count(queue.as_ref()).await?;
                tracing::info!("{}: {}", APPROXIMATE_NUMBER_OF_MESSAGES, count);
            }
            Command::Receive => {
                let messages = receive_message(queue, settings).await?;
                tracing::info!("Messages count: {}", messages.len());
                if messages.is_empty() {
                    tracing::info!("Empty queue.");
                }
                for message in &messages {
                    tracing::info!("{}", message.body);
                }
            }
        }

        Ok(())
    }
}
