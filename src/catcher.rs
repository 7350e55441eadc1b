use hyper::{header, StatusCode};
use mime::Mime;
use once_cell::sync::Lazy;

use crate::http::{errors::StatusError, guess_accept_mime, Request, Response};

static SUPPORTED_FORMATS: Lazy<Vec<mime::Name>> = Lazy::new(|| vec![mime::JSON, mime::PLAIN]);
const EMPTY_DETAIL_MSG: &str = "there is no more detailed explanation";

/// Writes a body for a response that finished with an error status and
/// no payload. Returns `false` to let the next catcher try.
pub trait Catcher: Send + Sync + 'static {
    fn catch(&self, req: &Request, res: &mut Response) -> bool;
}

fn status_error_json(
    code: StatusCode,
    name: &str,
    summary: Option<&str>,
    detail: Option<&str>,
) -> String {
    format!(
        r#"{{"error":{{"code":{},"name":"{}","summary":"{}","detail":"{}"}}}}"#,
        code.as_u16(),
        name,
        summary.unwrap_or(name),
        detail.unwrap_or(EMPTY_DETAIL_MSG)
    )
}

fn status_error_plain(
    code: StatusCode,
    name: &str,
    summary: Option<&str>,
    detail: Option<&str>,
) -> String {
    format!(
        "code:{},\nname:{},\nsummary:{},\ndetail:{}",
        code.as_u16(),
        name,
        summary.unwrap_or(name),
        detail.unwrap_or(EMPTY_DETAIL_MSG)
    )
}

pub fn status_error_bytes(err: &StatusError, prefer_format: &Mime) -> (Mime, Vec<u8>) {
    let supported = SUPPORTED_FORMATS
        .iter()
        .any(|name| *name == prefer_format.subtype());
    let format = if supported {
        prefer_format.clone()
    } else {
        mime::APPLICATION_JSON
    };
    let content = match format.subtype().as_ref() {
        "plain" => status_error_plain(
            err.code,
            &err.name,
            err.summary.as_deref(),
            err.detail.as_deref(),
        ),
        _ => status_error_json(
            err.code,
            &err.name,
            err.summary.as_deref(),
            err.detail.as_deref(),
        ),
    };
    (format, content.into_bytes())
}

/// Fallback catcher: renders the response's `StatusError` (or one derived
/// from the bare status code) in the format the client accepts.
pub struct DefaultCatcher;

impl Catcher for DefaultCatcher {
    fn catch(&self, req: &Request, res: &mut Response) -> bool {
        let status = res.status_code().unwrap_or(StatusCode::NOT_FOUND);
        if !status.is_server_error() && !status.is_client_error() {
            return false;
        }
        let format = guess_accept_mime(req, None);
        let (format, data) = match res.status_error() {
            Some(err) => status_error_bytes(err, &format),
            None => match StatusError::from_code(status) {
                Some(err) => status_error_bytes(&err, &format),
                None => return false,
            },
        };
        match format.to_string().parse() {
            Ok(ctype) => {
                res.headers_mut().insert(header::CONTENT_TYPE, ctype);
            }
            Err(e) => {
                tracing::error!(error = ?e, "invalid content type for error body");
            }
        }
        res.write_body(data);
        true
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use hyper::StatusCode;

    use super::*;
    use crate::handler::Handler;
    use crate::routing::Router;
    use crate::service::Service;
    use crate::test::{ResponseExt, TestClient};

    struct Teapot;

    #[async_trait]
    impl Handler for Teapot {
        async fn handle(&self, _req: &mut Request, res: &mut Response) {
            res.set_status_code(StatusCode::IM_A_TEAPOT);
        }
    }

    struct Handle404;
    impl Catcher for Handle404 {
        fn catch(&self, _req: &Request, res: &mut Response) -> bool {
            if let Some(StatusCode::NOT_FOUND) = res.status_code() {
                res.render("Custom 404 Error Page");
                true
            } else {
                false
            }
        }
    }

    #[tokio::test]
    async fn test_default_catcher_renders_json() {
        let service = Service::new(Router::new());
        let mut res = TestClient::get("http://127.0.0.1:7878/missing")
            .send(&service)
            .await;
        assert_eq!(res.status_code(), Some(StatusCode::NOT_FOUND));
        let body = res.take_string().await.unwrap();
        assert!(body.contains(r#""code":404"#));
        assert!(body.contains("Not Found"));
    }

    #[tokio::test]
    async fn test_default_catcher_renders_plain_text_on_request() {
        let service = Service::new(Router::new());
        let mut res = TestClient::get("http://127.0.0.1:7878/missing")
            .add_header("accept", "text/plain")
            .send(&service)
            .await;
        let body = res.take_string().await.unwrap();
        assert!(body.starts_with("code:404"));
    }

    #[tokio::test]
    async fn test_default_catcher_skips_uncovered_status() {
        let service = Service::new(Router::new().push(Router::with_path("tea").get(Teapot)));
        let mut res = TestClient::get("http://127.0.0.1:7878/tea")
            .send(&service)
            .await;
        assert_eq!(res.status_code(), Some(StatusCode::IM_A_TEAPOT));
        assert_eq!(res.take_string().await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_custom_catcher() {
        let catchers: Vec<Box<dyn Catcher>> = vec![Box::new(Handle404)];
        let service = Service::new(Router::new()).with_catchers(catchers);
        let mut res = TestClient::get("http://127.0.0.1:7878/notfound")
            .send(&service)
            .await;
        assert_eq!(res.take_string().await.unwrap(), "Custom 404 Error Page");
    }
}
