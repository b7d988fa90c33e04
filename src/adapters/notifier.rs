//! Notification channel seam

use async_trait::async_trait;

use crate::error::Result;

/// Delivers a text payload to an external channel.
///
/// Failures are returned, never panicked; callers log them and move on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Channel name for log lines
    fn channel(&self) -> &'static str;

    async fn post_message(&self, text: &str) -> Result<()>;
}
