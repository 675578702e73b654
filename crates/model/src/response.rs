use serde::{Deserialize, Serialize};

/// A successful response from the generation service.
///
/// Serializes as `{"generatedText": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The text generated for the prompt.
    #[serde(rename = "generatedText")]
    pub generated_text: String,
}

impl GenerateResponse {
    /// Creates a response carrying the given text.
    #[inline]
    pub fn new<S: Into<String>>(generated_text: S) -> Self {
        Self {
            generated_text: generated_text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GenerateRequest;

    #[test]
    fn test_wire_field_names() {
        let req = serde_json::to_value(GenerateRequest::new("Hi")).unwrap();
        assert_eq!(req, serde_json::json!({ "prompt": "Hi" }));

        let resp: GenerateResponse =
            serde_json::from_str(r#"{"generatedText":"Hello back"}"#)
                .unwrap();
        assert_eq!(resp.generated_text, "Hello back");
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let resp = serde_json::from_str::<GenerateResponse>(r#"{"text":"x"}"#);
        assert!(resp.is_err());
    }
}
