use hyper::{header::CONTENT_TYPE, http::HeaderValue};
use serde::Serialize;

use crate::http::errors::StatusError;
use crate::http::Response;

use super::Reply;

/// Renders any serializable value as an `application/json` body.
pub struct Json<T>(pub T);

impl<T> Reply for Json<T>
where
    T: Serialize + Send,
{
    fn render(self, res: &mut Response) {
        match serde_json::to_vec(&self.0) {
            Ok(bytes) => {
                res.headers_mut().insert(
                    CONTENT_TYPE,
                    HeaderValue::from_static("application/json; charset=utf-8"),
                );
                res.write_body(bytes);
            }
            Err(e) => {
                tracing::error!(error = ?e, "Json content write error");
                res.set_status_error(StatusError::internal_server_error());
            }
        }
    }
}
