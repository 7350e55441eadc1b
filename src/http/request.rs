use std::fmt;

use bytes::Bytes;
use hyper::{header, Body as ReqBody, HeaderMap, Method, Uri, Version};
use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;

use crate::addr::SocketAddr;
use crate::http::errors::{ParseError, ParseResult};
use crate::http::{mime, Mime};

/// An incoming request, wrapped so handlers can read its parts and
/// collect the payload once.
pub struct Request {
    uri: Uri,
    headers: HeaderMap,
    body: Option<ReqBody>,
    method: Method,
    payload: OnceCell<Bytes>,
    version: Version,
    pub(crate) remote_addr: Option<SocketAddr>,
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("uri", &self.uri)
            .field("version", &self.version)
            .finish()
    }
}

impl Default for Request {
    fn default() -> Self {
        Self::new()
    }
}

impl From<hyper::Request<ReqBody>> for Request {
    fn from(req: hyper::Request<ReqBody>) -> Self {
        let (parts, body) = req.into_parts();
        Request {
            uri: parts.uri,
            headers: parts.headers,
            body: Some(body),
            method: parts.method,
            payload: OnceCell::new(),
            version: parts.version,
            remote_addr: None,
        }
    }
}

impl Request {
    pub fn new() -> Request {
        Request {
            uri: Uri::default(),
            headers: HeaderMap::new(),
            body: Some(ReqBody::default()),
            method: Method::default(),
            payload: OnceCell::new(),
            version: Version::default(),
            remote_addr: None,
        }
    }
    pub fn uri(&self) -> &Uri {
        &self.uri
    }
    pub fn uri_mut(&mut self) -> &mut Uri {
        &mut self.uri
    }
    pub fn method(&self) -> &Method {
        &self.method
    }
    pub fn method_mut(&mut self) -> &mut Method {
        &mut self.method
    }
    pub fn version(&self) -> Version {
        self.version
    }
    pub fn remote_addr(&self) -> Option<&SocketAddr> {
        self.remote_addr.as_ref()
    }
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
    pub fn set_body(&mut self, body: ReqBody) {
        self.body = Some(body);
    }
    pub fn take_body(&mut self) -> Option<ReqBody> {
        self.body.take()
    }

    pub fn content_type(&self) -> Option<Mime> {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
    }

    /// Media types from the `Accept` header, in the order they appear.
    pub fn accept(&self) -> Vec<Mime> {
        let mut list: Vec<Mime> = vec![];
        if let Some(accept) = self.headers.get(header::ACCEPT).and_then(|h| h.to_str().ok()) {
            for part in accept.split(',') {
                if let Some(item) = part.split(';').next() {
                    if let Ok(mime) = item.trim().parse() {
                        list.push(mime);
                    }
                }
            }
        }
        list
    }

    /// Collects the whole body. The bytes are cached, so repeated calls
    /// return the same payload.
    pub async fn payload(&mut self) -> ParseResult<&Bytes> {
        let body = self.body.take();
        self.payload
            .get_or_try_init(|| async {
                match body {
                    Some(body) => hyper::body::to_bytes(body).await.map_err(ParseError::Hyper),
                    None => Err(ParseError::EmptyBody),
                }
            })
            .await
    }

    /// Deserializes the JSON body into `T`. A non-JSON `Content-Type` is
    /// rejected; a missing one is tolerated.
    pub async fn parse_json<T: DeserializeOwned>(&mut self) -> ParseResult<T> {
        if let Some(ctype) = self.content_type() {
            if ctype.subtype() != mime::JSON {
                return Err(ParseError::InvalidContentType);
            }
        }
        let payload = self.payload().await?;
        if payload.is_empty() {
            return Err(ParseError::EmptyBody);
        }
        Ok(serde_json::from_slice(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use crate::test::TestClient;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default, rename_all = "PascalCase")]
    struct Probe {
        term: String,
        items_per_page: u32,
    }

    #[tokio::test]
    async fn test_parse_json() {
        let mut req = TestClient::post("http://127.0.0.1:7878/api/search")
            .raw_json(r#"{"Term":"cats","ItemsPerPage":7}"#)
            .build();
        let probe = req.parse_json::<Probe>().await.unwrap();
        assert_eq!(
            probe,
            Probe {
                term: "cats".into(),
                items_per_page: 7
            }
        );
    }

    #[tokio::test]
    async fn test_parse_json_missing_fields_default() {
        let mut req = TestClient::post("http://127.0.0.1:7878/api/search")
            .raw_json("{}")
            .build();
        let probe = req.parse_json::<Probe>().await.unwrap();
        assert_eq!(probe, Probe::default());
    }

    #[tokio::test]
    async fn test_parse_json_rejects_empty_body() {
        let mut req = TestClient::post("http://127.0.0.1:7878/api/search").build();
        assert!(req.parse_json::<Probe>().await.is_err());
    }

    #[tokio::test]
    async fn test_parse_json_rejects_wrong_content_type() {
        let mut req = TestClient::post("http://127.0.0.1:7878/api/search")
            .text(r#"{"Term":"cats"}"#)
            .build();
        assert!(req.parse_json::<Probe>().await.is_err());
    }

    #[tokio::test]
    async fn test_payload_is_cached() {
        let mut req = TestClient::post("http://127.0.0.1:7878/api/search")
            .raw_json("{}")
            .build();
        let first = req.payload().await.unwrap().clone();
        let second = req.payload().await.unwrap().clone();
        assert_eq!(first, second);
    }
}
