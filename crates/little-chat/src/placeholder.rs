use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::time::Duration;

use little_chat_model::{
    ErrorKind, GenerateRequest, GenerateResponse, ModelProvider,
    ModelProviderError,
};
use tokio::time::sleep;

/// The text every placeholder reply carries.
pub const PLACEHOLDER_REPLY: &str =
    "This is a placeholder response. Soon I'll be powered by AI!";

/// A provider that answers every prompt with [`PLACEHOLDER_REPLY`] after a
/// short pause. It never fails.
#[derive(Clone, Debug)]
pub struct PlaceholderProvider {
    delay: Duration,
}

impl PlaceholderProvider {
    /// Sets how long each reply takes.
    #[inline]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for PlaceholderProvider {
    #[inline]
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(1),
        }
    }
}

/// Error type for [`PlaceholderProvider`], which has no values.
#[derive(Debug)]
pub enum PlaceholderError {}

impl Display for PlaceholderError {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl StdError for PlaceholderError {}

impl ModelProviderError for PlaceholderError {
    fn kind(&self) -> ErrorKind {
        match *self {}
    }
}

impl ModelProvider for PlaceholderProvider {
    type Error = PlaceholderError;

    fn generate(
        &self,
        req: &GenerateRequest,
    ) -> impl Future<Output = Result<GenerateResponse, Self::Error>> + Send + 'static
    {
        trace!("placeholder reply for {} bytes of prompt", req.prompt.len());
        let delay = self.delay;
        async move {
            sleep(delay).await;
            Ok(GenerateResponse::new(PLACEHOLDER_REPLY))
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_reply_after_delay() {
        let provider = PlaceholderProvider::default();
        let started = Instant::now();
        let resp = provider
            .generate(&GenerateRequest::new("Hi"))
            .await
            .unwrap();
        assert_eq!(resp.generated_text, PLACEHOLDER_REPLY);
        assert!(started.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_delay() {
        let provider = PlaceholderProvider::default()
            .with_delay(Duration::from_millis(10));
        let started = Instant::now();
        provider.generate(&GenerateRequest::new("Hi")).await.unwrap();
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
