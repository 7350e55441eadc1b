use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

/// Reasons a request payload could not be turned into the declared
/// request type.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseError {
    /// The request did not carry a JSON `Content-Type` header.
    #[error("the request did not have a valid `Content-Type` header")]
    InvalidContentType,

    /// The request body is empty.
    #[error("the request body is empty")]
    EmptyBody,

    /// An error was returned from hyper while reading the body.
    #[error("hyper error: {0}")]
    Hyper(#[from] hyper::Error),

    /// Serde json error.
    #[error("serde json error: {0}")]
    SerdeJson(#[from] serde_json::error::Error),
}
