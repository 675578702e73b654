use serde::{Deserialize, Serialize};

/// A request to be sent to the generation service.
///
/// Serializes as `{"prompt": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// The user-authored prompt.
    pub prompt: String,
}

impl GenerateRequest {
    /// Creates a request for the given prompt.
    #[inline]
    pub fn new<S: Into<String>>(prompt: S) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}
