use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use little_chat_model::{
    ErrorKind, GenerateRequest, ModelProvider, ModelProviderError,
};
use tokio::time;
use tracing::Instrument;

/// How long a request may stay in flight unless configured otherwise.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Why a request didn't produce a reply.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The provider returned an error.
    #[error("model provider failed ({kind:?}): {message}")]
    Provider {
        /// The kind reported by the provider.
        kind: ErrorKind,
        /// The provider's description of the failure.
        message: String,
    },
    /// The provider didn't settle in time.
    #[error("no reply within {0:?}")]
    Timeout(Duration),
}

type GenerateResult = Result<String, RequestError>;
type BoxedGenerateFuture =
    Pin<Box<dyn Future<Output = GenerateResult> + Send>>;
#[rustfmt::skip]
type HandlerFn = Arc<
    dyn Fn(GenerateRequest) -> BoxedGenerateFuture + Send + Sync
>;

/// A wrapper around a model provider that bounds every request with a
/// timeout and provides a type-erased interface for the other modules.
#[derive(Clone)]
pub struct ModelClient {
    handler_fn: HandlerFn,
    timeout: Duration,
}

impl ModelClient {
    #[inline]
    pub fn new<P: ModelProvider + 'static>(provider: P) -> Self {
        // We have to erase the type `P`, since `ModelClient` doesn't have a
        // generic parameter and we don't want it either.
        let handler_fn: HandlerFn = Arc::new(move |req| {
            let fut = provider.generate(&req);
            Box::pin(async move {
                match fut.await {
                    Ok(resp) => Ok(resp.generated_text),
                    Err(err) => Err(RequestError::Provider {
                        kind: err.kind(),
                        message: err.to_string(),
                    }),
                }
            })
        });
        Self {
            handler_fn,
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    #[inline]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sends the prompt and returns the generated text.
    ///
    /// # Cancel safety
    ///
    /// This method is cancel safe. Dropping the future drops the provider's
    /// pending request with it.
    pub async fn generate(&self, prompt: String) -> GenerateResult {
        let req = GenerateRequest::new(prompt);
        let timeout = self.timeout;
        let fut = (self.handler_fn)(req);
        async move {
            trace!("sending request");
            let text = match time::timeout(timeout, fut).await {
                Ok(Ok(text)) => text,
                Ok(Err(err)) => {
                    error!("got an error: {err}");
                    return Err(err);
                }
                Err(_) => {
                    error!("request timed out after {timeout:?}");
                    return Err(RequestError::Timeout(timeout));
                }
            };
            trace!("finished a request");
            Ok(text)
        }
        .instrument(trace_span!("model client req"))
        .await
    }
}
