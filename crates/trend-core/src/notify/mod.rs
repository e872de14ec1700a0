//! Delivery of paper announcements to a chat channel.
//!
//! Delivery is fire-and-forget from the pipeline's point of view: the status
//! is logged and reported, never used to retry or to undo cache updates.

mod message;
mod slack;

pub use message::{display_name, paper_message, SlackMessage};
pub use slack::SlackNotifier;

use crate::Result;
use async_trait::async_trait;
use tracing::info;

/// A sink for formatted messages.
#[async_trait]
pub trait Notifier: Send + Sync {
    fn name(&self) -> &'static str;

    /// Send one message and return the delivery status code.
    async fn post_message(&self, message: &SlackMessage) -> Result<u16>;
}

/// Writes messages to the log instead of sending them.
#[derive(Debug, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn post_message(&self, message: &SlackMessage) -> Result<u16> {
        info!(
            channel = %message.channel,
            username = %message.username,
            "Dry run, not sending:\n{}",
            message.text
        );
        Ok(200)
    }
}
