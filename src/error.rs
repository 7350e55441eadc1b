use thiserror::Error;

use crate::http::ParseError;

pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("hyper error: {0}")]
    Hyper(#[from] hyper::Error),
    #[error("http parse error: {0}")]
    HttpParse(#[from] ParseError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(BoxedError),
}

impl Error {
    pub fn other(error: impl Into<BoxedError>) -> Self {
        Error::Other(error.into())
    }
}
