use serde::{Deserialize, Serialize};

/// The kind of error that occurred.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The service could not be reached, or the connection broke before a
    /// response was received.
    Transport,
    /// The service answered, but reported an error of its own.
    Rejected,
    /// The service answered with something that is not a valid response.
    Malformed,
    /// Any other errors.
    Other,
}
