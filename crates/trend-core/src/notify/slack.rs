//! Slack incoming-webhook notifier.

use super::{Notifier, SlackMessage};
use crate::config::env_keys;
use crate::network::HttpClient;
use crate::{Result, TrendError};
use async_trait::async_trait;
use tracing::{info, warn};

const SERVICE: &str = "Slack";

/// Posts messages to a Slack incoming webhook.
pub struct SlackNotifier {
    http: HttpClient,
    webhook_url: Option<String>,
}

impl SlackNotifier {
    pub fn new(http: HttpClient, webhook_url: Option<String>) -> Self {
        Self { http, webhook_url }
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    fn name(&self) -> &'static str {
        SERVICE
    }

    /// Deliver one message; the status is returned, not checked.
    async fn post_message(&self, message: &SlackMessage) -> Result<u16> {
        let url = self
            .webhook_url
            .as_deref()
            .ok_or_else(|| TrendError::MissingCredential {
                service: SERVICE.to_string(),
                name: env_keys::SLACK_WEBHOOK.to_string(),
            })?;

        let response = self.http.post_json(url, message).await?;
        let status = response.status();
        if status.is_success() {
            info!("Posted to {} as {}", message.channel, message.username);
        } else {
            warn!("Slack webhook answered HTTP {}", status.as_u16());
        }
        Ok(status.as_u16())
    }
}
