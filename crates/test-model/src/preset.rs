use little_chat_model::ErrorKind;
use serde::{Deserialize, Serialize};

/// The preset outcome of one request.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PresetResponse {
    /// Respond with the generated text.
    #[serde(rename = "text")]
    Text(String),
    /// Fail with an error of the given kind.
    #[serde(rename = "failure")]
    Failure(ErrorKind),
}

impl PresetResponse {
    /// Creates a successful preset.
    #[inline]
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self::Text(text.into())
    }

    /// Creates a failing preset.
    #[inline]
    pub fn failure(kind: ErrorKind) -> Self {
        Self::Failure(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_deserialize() {
        let script = vec![
            PresetResponse::text("Hello back"),
            PresetResponse::failure(ErrorKind::Transport),
        ];

        let serialized = serde_json::to_string(&script).unwrap();
        assert_eq!(
            serialized,
            r#"[{"type":"text","data":"Hello back"},{"type":"failure","data":"transport"}]"#
        );
        let deserialized: Vec<PresetResponse> =
            serde_json::from_str(&serialized).unwrap();

        assert_eq!(script, deserialized);
    }
}
