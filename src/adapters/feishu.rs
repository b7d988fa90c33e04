//! Feishu (Lark) webhook notifications
//!
//! Alternative channel for run reports.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use super::notifier::Notifier;
use crate::error::{ClawError, Result};

/// Feishu notification client
#[derive(Clone)]
pub struct FeishuNotifier {
    client: Client,
    webhook_url: String,
}

#[derive(Serialize)]
struct FeishuMessage {
    msg_type: String,
    content: FeishuContent,
}

#[derive(Serialize)]
struct FeishuContent {
    text: String,
}

impl FeishuNotifier {
    /// Create a new Feishu notifier with explicit URL
    pub fn new(webhook_url: String) -> Arc<Self> {
        info!("Feishu notifications enabled");
        Arc::new(Self {
            client: Client::new(),
            webhook_url,
        })
    }
}

#[async_trait]
impl Notifier for FeishuNotifier {
    fn channel(&self) -> &'static str {
        "feishu"
    }

    async fn post_message(&self, text: &str) -> Result<()> {
        let message = FeishuMessage {
            msg_type: "text".to_string(),
            content: FeishuContent {
                text: text.to_string(),
            },
        };

        let resp = self
            .client
            .post(&self.webhook_url)
            .json(&message)
            .send()
            .await?;

        if resp.status().is_success() {
            debug!("Feishu notification sent successfully");
            Ok(())
        } else {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            Err(ClawError::Notification(format!("HTTP {}: {}", status, body)))
        }
    }
}
