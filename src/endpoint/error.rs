use std::fmt;

use serde::Serialize;

use crate::http::Response;
use crate::reply::{Json, Reply};

pub type ApiResult<T> = Result<T, ApiError>;

/// A business-level failure returned by a dispatch operation.
///
/// Distinguishable from success in the dispatch signature, but carried on
/// the wire as the conventional `{Error, ErrorCode}` envelope under a
/// `200 OK` status: the codes are application codes, not transport codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    #[serde(rename = "Error")]
    message: String,
    #[serde(rename = "ErrorCode")]
    code: i32,
}

impl ApiError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        ApiError {
            message: message.into(),
            code,
        }
    }
    pub fn code(&self) -> i32 {
        self.code
    }
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for ApiError {}

impl Reply for ApiError {
    fn render(self, res: &mut Response) {
        res.render(Json(self));
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::ApiError;

    #[test]
    fn test_wire_envelope() {
        let err = ApiError::new(101, "The search term is missing. Please resubmit with search term");
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({
                "Error": "The search term is missing. Please resubmit with search term",
                "ErrorCode": 101
            })
        );
    }

    #[test]
    fn test_accessors() {
        let err = ApiError::new(7, "nope");
        assert_eq!(err.code(), 7);
        assert_eq!(err.message(), "nope");
        assert_eq!(err.to_string(), "nope (code 7)");
    }
}
