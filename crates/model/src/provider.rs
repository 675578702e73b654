use std::error::Error;

use crate::error::ErrorKind;
use crate::request::GenerateRequest;
use crate::response::GenerateResponse;

/// The error type for a model provider.
pub trait ModelProviderError: Error + Send + Sync + 'static {
    /// Returns the kind of this error.
    fn kind(&self) -> ErrorKind;
}

/// A type that represents a text generation backend.
///
/// Once the provider is created, it should behave like a stateless object.
/// It can still have internal state, but callers should not rely on it,
/// and the provider should be prepared for being dropped anytime.
pub trait ModelProvider: Send + Sync {
    /// The error type that may be returned by the provider.
    type Error: ModelProviderError;

    /// Sends a prompt and resolves with the generated text.
    ///
    /// The returned future must not borrow from `self`, since callers may
    /// drive it on another task.
    fn generate(
        &self,
        req: &GenerateRequest,
    ) -> impl Future<Output = Result<GenerateResponse, Self::Error>> + Send + 'static;
}
