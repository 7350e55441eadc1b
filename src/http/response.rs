use std::collections::VecDeque;
use std::error::Error as StdError;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures_util::Stream;
use hyper::header::IntoHeaderName;
use hyper::http::HeaderValue;
use hyper::{HeaderMap, StatusCode, Version};

use crate::error::Error;
use crate::http::errors::StatusError;
use crate::reply::Reply;

#[non_exhaustive]
pub enum ResBody {
    /// No body has been written yet.
    None,
    /// A single contiguous body.
    Once(Bytes),
    /// A body assembled from several writes.
    Chunks(VecDeque<Bytes>),
}

impl ResBody {
    pub fn is_none(&self) -> bool {
        matches!(*self, ResBody::None)
    }
    pub fn is_once(&self) -> bool {
        matches!(*self, ResBody::Once(_))
    }
    pub fn is_chunks(&self) -> bool {
        matches!(*self, ResBody::Chunks(_))
    }
    pub fn size(&self) -> u64 {
        match self {
            ResBody::None => 0,
            ResBody::Once(bytes) => bytes.len() as u64,
            ResBody::Chunks(chunks) => chunks.iter().map(|bytes| bytes.len() as u64).sum(),
        }
    }
}

impl Stream for ResBody {
    type Item = Result<Bytes, Box<dyn StdError + Send + Sync>>;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        match self.get_mut() {
            ResBody::None => Poll::Ready(None),
            ResBody::Once(bytes) => {
                if bytes.is_empty() {
                    Poll::Ready(None)
                } else {
                    let bytes = std::mem::replace(bytes, Bytes::new());
                    Poll::Ready(Some(Ok(bytes)))
                }
            }
            ResBody::Chunks(chunks) => Poll::Ready(chunks.pop_front().map(Ok)),
        }
    }
}

/// The outgoing side of one dispatch: status, headers and an accumulated
/// body, converted into a hyper response once handling finishes.
pub struct Response {
    status_code: Option<StatusCode>,
    pub(crate) status_error: Option<StatusError>,
    headers: HeaderMap,
    version: Version,
    pub(crate) body: ResBody,
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}

impl Response {
    pub fn new() -> Response {
        Response {
            status_code: None,
            status_error: None,
            headers: HeaderMap::new(),
            version: Version::default(),
            body: ResBody::None,
        }
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
    pub fn set_headers(&mut self, headers: HeaderMap) {
        self.headers = headers;
    }
    pub fn add_header<N, V>(&mut self, name: N, value: V, overwrite: bool) -> crate::Result<()>
    where
        N: IntoHeaderName,
        V: TryInto<HeaderValue>,
    {
        let value = value
            .try_into()
            .map_err(|_| Error::other("invalid header value"))?;
        if overwrite {
            self.headers.insert(name, value);
        } else {
            self.headers.append(name, value);
        }
        Ok(())
    }

    pub fn version(&self) -> Version {
        self.version
    }
    pub fn version_mut(&mut self) -> &mut Version {
        &mut self.version
    }

    pub fn body(&self) -> &ResBody {
        &self.body
    }
    pub fn set_body(&mut self, body: ResBody) {
        self.body = body;
    }
    pub fn replace_body(&mut self, body: ResBody) -> ResBody {
        std::mem::replace(&mut self.body, body)
    }

    pub fn status_code(&self) -> Option<StatusCode> {
        self.status_code
    }
    pub fn set_status_code(&mut self, code: StatusCode) {
        self.status_code = Some(code);
    }

    pub fn status_error(&self) -> Option<&StatusError> {
        self.status_error.as_ref()
    }
    /// Stamps the response with an error status and keeps the structured
    /// error around for the catcher to render.
    pub fn set_status_error(&mut self, err: StatusError) {
        self.status_code = Some(err.code);
        self.status_error = Some(err);
    }

    /// Lets `reply` write itself into this response.
    pub fn render(&mut self, reply: impl Reply) {
        reply.render(self);
    }

    /// Appends `data` to the body.
    pub fn write_body(&mut self, data: impl Into<Bytes>) {
        let data = data.into();
        match &mut self.body {
            ResBody::None => {
                self.body = ResBody::Once(data);
            }
            ResBody::Once(bytes) => {
                let mut chunks = VecDeque::new();
                chunks.push_back(std::mem::replace(bytes, Bytes::new()));
                chunks.push_back(data);
                self.body = ResBody::Chunks(chunks);
            }
            ResBody::Chunks(chunks) => {
                chunks.push_back(data);
            }
        }
    }

    pub(crate) fn write_back(self, res: &mut hyper::Response<hyper::Body>) {
        let Response {
            status_code,
            headers,
            version,
            body,
            ..
        } = self;
        *res.headers_mut() = headers;
        *res.version_mut() = version;
        *res.status_mut() = status_code.unwrap_or(StatusCode::NOT_FOUND);
        match body {
            ResBody::None => {}
            ResBody::Once(bytes) => {
                *res.body_mut() = hyper::Body::from(bytes);
            }
            ResBody::Chunks(chunks) => {
                *res.body_mut() = hyper::Body::wrap_stream(ResBody::Chunks(chunks));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use hyper::StatusCode;

    use super::{ResBody, Response};
    use crate::http::StatusError;
    use crate::test::ResponseExt;

    #[tokio::test]
    async fn test_write_body_accumulates_chunks() {
        let mut res = Response::new();
        res.write_body("Hello");
        assert!(res.body().is_once());
        res.write_body(", world!");
        assert!(res.body().is_chunks());
        assert_eq!(res.body().size(), 13);
        assert_eq!(res.take_string().await.unwrap(), "Hello, world!");
    }

    #[test]
    fn test_status_error_stamps_code() {
        let mut res = Response::new();
        res.set_status_error(StatusError::bad_request());
        assert_eq!(res.status_code(), Some(StatusCode::BAD_REQUEST));
        assert!(res.status_error().is_some());
    }

    #[test]
    fn test_empty_body_has_no_size() {
        assert_eq!(ResBody::None.size(), 0);
    }
}
