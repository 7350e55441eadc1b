pub mod errors;
pub mod request;
pub mod response;

pub use errors::{ParseError, StatusError};
pub use hyper::{header, Method, StatusCode, Uri, Version};
pub use mime::{self, Mime};
pub use request::Request;
pub use response::{ResBody, Response};

/// Picks the response format the client asked for, falling back to JSON.
pub(crate) fn guess_accept_mime(req: &Request, default_type: Option<Mime>) -> Mime {
    let dmime = default_type.unwrap_or(mime::APPLICATION_JSON);
    let accept = req.accept();
    accept
        .first()
        .unwrap_or(&dmime)
        .to_string()
        .parse()
        .unwrap_or(dmime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::TestClient;

    #[test]
    fn test_accept_mime_defaults_to_json() {
        let req = TestClient::get("http://127.0.0.1:7878/api/us/states").build();
        assert_eq!(guess_accept_mime(&req, None), mime::APPLICATION_JSON);
    }

    #[test]
    fn test_accept_mime_honors_header() {
        let req = TestClient::get("http://127.0.0.1:7878/api/us/states")
            .add_header("accept", "text/plain")
            .build();
        assert_eq!(guess_accept_mime(&req, None), mime::TEXT_PLAIN);
    }
}
