use little_chat_model::{ErrorKind, GenerateResponse};
use serde::Deserialize;

use crate::Error;

/// The body the service answers with. A well-behaved service sets exactly
/// one of the two fields.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
struct ReplyBody {
    #[serde(rename = "generatedText")]
    generated_text: Option<String>,
    error: Option<String>,
}

/// Interprets a JSON body received from the service.
///
/// An `error` field wins over everything else, even when the status code
/// says the request succeeded.
pub fn parse_reply(body: &[u8]) -> Result<GenerateResponse, Error> {
    let body: ReplyBody = serde_json::from_slice(body).map_err(|err| {
        Error::new(format!("invalid reply body: {err}"), ErrorKind::Malformed)
    })?;
    if let Some(error) = body.error {
        return Err(Error::new(error, ErrorKind::Rejected));
    }
    match body.generated_text {
        Some(text) => Ok(GenerateResponse::new(text)),
        None => Err(Error::new(
            "reply has no generated text",
            ErrorKind::Malformed,
        )),
    }
}

/// Extracts the service's own error message from a failed response, if it
/// sent one.
pub fn parse_error(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ReplyBody>(body).ok()?.error
}
