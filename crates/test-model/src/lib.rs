//! A local fake model for testing purpose.

mod preset;

use std::collections::VecDeque;
use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use little_chat_model::{
    ErrorKind, GenerateRequest, GenerateResponse, ModelProvider,
    ModelProviderError,
};
use tokio::time::sleep;

pub use preset::*;

#[derive(Debug)]
pub struct Error {
    #[allow(dead_code)]
    message: &'static str,
    kind: ErrorKind,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl StdError for Error {}

impl ModelProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

#[derive(Default)]
struct Script {
    responses: VecDeque<PresetResponse>,
    prompts: Vec<String>,
}

/// A local fake model for testing purpose.
///
/// Before sending requests, you need to setup the script, which is how the
/// model should respond to each request. Requests consume the script in
/// order. If there are no enough steps in the script, an error will be
/// returned.
///
/// Clones share the same script, so a test can keep one clone around to
/// inspect the prompts after handing the other one to a session.
#[derive(Clone, Default)]
pub struct TestModelProvider {
    script: Arc<Mutex<Script>>,
    delay: Option<Duration>,
}

impl TestModelProvider {
    /// Appends a response to the script.
    #[inline]
    pub fn add_response(&mut self, preset: PresetResponse) {
        self.lock_script().responses.push_back(preset);
    }

    /// Makes every request wait for `duration` before it settles.
    #[inline]
    pub fn set_delay(&mut self, duration: Duration) {
        self.delay = Some(duration);
    }

    /// Returns the prompts received so far, in order.
    pub fn received_prompts(&self) -> Vec<String> {
        self.lock_script().prompts.clone()
    }

    fn lock_script(&self) -> std::sync::MutexGuard<'_, Script> {
        // A panicking test thread must not hide the script from others.
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ModelProvider for TestModelProvider {
    type Error = crate::Error;

    fn generate(
        &self,
        req: &GenerateRequest,
    ) -> impl Future<Output = Result<GenerateResponse, Self::Error>> + Send + 'static
    {
        let preset = {
            let mut script = self.lock_script();
            script.prompts.push(req.prompt.clone());
            script.responses.pop_front()
        };
        let delay = self.delay.unwrap_or(Duration::from_millis(1));

        async move {
            sleep(delay).await;
            match preset {
                Some(PresetResponse::Text(text)) => {
                    Ok(GenerateResponse::new(text))
                }
                Some(PresetResponse::Failure(kind)) => Err(Error {
                    message: "preset failure",
                    kind,
                }),
                None => Err(Error {
                    message: "no enough steps",
                    kind: ErrorKind::Other,
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_generate() {
        let mut provider = TestModelProvider::default();
        provider.add_response(PresetResponse::text("Hello, world!"));
        provider.add_response(PresetResponse::failure(ErrorKind::Rejected));

        let resp = provider
            .generate(&GenerateRequest::new("Hi"))
            .await
            .unwrap();
        assert_eq!(resp.generated_text, "Hello, world!");

        let err = provider
            .generate(&GenerateRequest::new("Again"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Rejected);

        let err = provider
            .generate(&GenerateRequest::new("Once more"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);

        assert_eq!(
            provider.received_prompts(),
            ["Hi", "Again", "Once more"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay() {
        let mut provider = TestModelProvider::default();
        provider.set_delay(Duration::from_secs(5));
        provider.add_response(PresetResponse::text("late"));

        let started = tokio::time::Instant::now();
        let resp = provider.generate(&GenerateRequest::new("Hi")).await;
        assert!(resp.is_ok());
        assert!(started.elapsed() >= Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_clones_share_script() {
        let mut provider = TestModelProvider::default();
        let observer = provider.clone();
        provider.add_response(PresetResponse::text("shared"));

        let resp = observer
            .generate(&GenerateRequest::new("Hi"))
            .await
            .unwrap();
        assert_eq!(resp.generated_text, "shared");
        assert_eq!(provider.received_prompts(), ["Hi"]);
    }
}
