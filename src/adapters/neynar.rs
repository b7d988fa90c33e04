//! Farcaster casts through the Neynar API

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

use super::notifier::Notifier;
use crate::error::{ClawError, Result};

pub const NEYNAR_CAST_URL: &str = "https://api.neynar.com/v2/farcaster/cast";

/// Posts casts on behalf of a Neynar managed signer
#[derive(Clone)]
pub struct NeynarNotifier {
    client: Client,
    api_url: String,
    api_key: String,
    signer_uuid: String,
}

#[derive(Serialize)]
struct CastRequest<'a> {
    signer_uuid: &'a str,
    text: &'a str,
}

#[derive(Deserialize, Default)]
struct CastResponse {
    #[serde(default)]
    cast: Option<CastInfo>,
}

#[derive(Deserialize)]
struct CastInfo {
    hash: String,
}

impl NeynarNotifier {
    pub fn new(api_url: &str, api_key: String, signer_uuid: String) -> Arc<Self> {
        Arc::new(Self {
            client: Client::new(),
            api_url: api_url.to_string(),
            api_key,
            signer_uuid,
        })
    }

    /// Build from optional credentials. Returns `None` when either is missing or blank.
    pub fn from_parts(
        api_url: &str,
        api_key: Option<String>,
        signer_uuid: Option<String>,
    ) -> Option<Arc<Self>> {
        let api_key = non_empty(api_key)?;
        let signer_uuid = non_empty(signer_uuid)?;

        info!("Farcaster notifications enabled");
        Some(Self::new(api_url, api_key, signer_uuid))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[async_trait]
impl Notifier for NeynarNotifier {
    fn channel(&self) -> &'static str {
        "farcaster"
    }

    async fn post_message(&self, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ClawError::Notification("empty cast text".to_string()));
        }

        let request = CastRequest {
            signer_uuid: &self.signer_uuid,
            text,
        };

        let resp = self
            .client
            .post(&self.api_url)
            .header("accept", "application/json")
            .header("api_key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClawError::Notification(format!("HTTP {}: {}", status, body)));
        }

        let parsed: CastResponse = resp.json().await.unwrap_or_default();
        match parsed.cast {
            Some(cast) => info!("Cast posted: {}", cast.hash),
            None => debug!("Cast posted (no hash in response)"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_requires_both_credentials() {
        assert!(NeynarNotifier::from_parts(NEYNAR_CAST_URL, Some("key".into()), None).is_none());
        assert!(NeynarNotifier::from_parts(NEYNAR_CAST_URL, None, Some("uuid".into())).is_none());
        assert!(
            NeynarNotifier::from_parts(NEYNAR_CAST_URL, Some(" ".into()), Some("uuid".into()))
                .is_none()
        );
        assert!(
            NeynarNotifier::from_parts(NEYNAR_CAST_URL, Some("key".into()), Some("uuid".into()))
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_empty_text_is_rejected_without_request() {
        let notifier = NeynarNotifier::new("http://127.0.0.1:9", "key".into(), "uuid".into());
        let err = notifier.post_message("   ").await.unwrap_err();
        assert!(matches!(err, ClawError::Notification(_)));
    }
}
