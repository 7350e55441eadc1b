use std::fmt;

use hyper::StatusCode;

/// A transport-level failure carried on the response until a catcher
/// renders it as a body.
#[derive(Debug, Clone)]
pub struct StatusError {
    pub code: StatusCode,
    pub name: String,
    pub summary: Option<String>,
    pub detail: Option<String>,
}

macro_rules! default_errors {
    ($($sname:ident, $code:expr, $name:expr, $summary:expr);+) => {
        $(
            pub fn $sname() -> StatusError {
                StatusError {
                    code: $code,
                    name: $name.into(),
                    summary: Some($summary.into()),
                    detail: None,
                }
            }
        )+
    };
}

impl StatusError {
    /// Maps a bare error status onto a renderable `StatusError`. Only the
    /// statuses this crate emits are covered.
    pub fn from_code(code: StatusCode) -> Option<StatusError> {
        match code {
            StatusCode::BAD_REQUEST => Some(StatusError::bad_request()),
            StatusCode::NOT_FOUND => Some(StatusError::not_found()),
            StatusCode::INTERNAL_SERVER_ERROR => Some(StatusError::internal_server_error()),
            _ => None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    default_errors! {
        bad_request, StatusCode::BAD_REQUEST, "Bad Request", "The request could not be understood by the server.";
        not_found, StatusCode::NOT_FOUND, "Not Found", "The requested resource could not be found.";
        internal_server_error, StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", "The server encountered an internal error."
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.as_u16(), self.name)
    }
}

impl std::error::Error for StatusError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_covers_emitted_statuses() {
        assert_eq!(
            StatusError::from_code(StatusCode::NOT_FOUND).unwrap().code,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            StatusError::from_code(StatusCode::BAD_REQUEST).unwrap().code,
            StatusCode::BAD_REQUEST
        );
        assert!(StatusError::from_code(StatusCode::IM_A_TEAPOT).is_none());
    }

    #[test]
    fn test_builders_replace_summary_and_detail() {
        let err = StatusError::bad_request()
            .with_summary("invalid request payload")
            .with_detail("body was not JSON");
        assert_eq!(err.summary.as_deref(), Some("invalid request payload"));
        assert_eq!(err.detail.as_deref(), Some("body was not JSON"));
    }
}
