//! Dispatch shapes for route handlers.
//!
//! An endpoint declares how much of its contract is statically known:
//! request and response types both fixed ([`Endpoint`]), request fixed
//! with a free-form response ([`FlexibleEndpoint`]), or no request
//! payload at all ([`BodylessEndpoint`]). Each shape exposes exactly one
//! dispatch operation; the matching adapter is chosen when the route is
//! registered and bridges the endpoint onto [`Handler`].
//!
//! The shapes define no retry, timeout or cancellation semantics, and no
//! validation beyond deserializing the declared request type. A concrete
//! endpoint checks its own inputs and reports business failures through
//! [`ApiError`].

mod error;

pub use error::{ApiError, ApiResult};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::handler::Handler;
use crate::http::errors::{ParseError, StatusError};
use crate::http::{Request, Response};
use crate::reply::Json;

/// Use when the request type and response type are both known and the
/// response needs no flexibility.
#[async_trait]
pub trait Endpoint: Send + Sync + 'static {
    type Request: DeserializeOwned + Send;
    type Response: Serialize + Send;

    async fn dispatch(&self, req: Self::Request) -> ApiResult<Self::Response>;
}

/// Use when the request type is known but the response shape is not: the
/// dispatch may return any serializable value, ad hoc error objects
/// included.
#[async_trait]
pub trait FlexibleEndpoint: Send + Sync + 'static {
    type Request: DeserializeOwned + Send;

    async fn dispatch(&self, req: Self::Request) -> ApiResult<Value>;
}

/// Use when there is no request payload.
#[async_trait]
pub trait BodylessEndpoint: Send + Sync + 'static {
    async fn dispatch(&self) -> ApiResult<Value>;
}

/// Binds an [`Endpoint`] to a route.
pub fn typed<E: Endpoint>(endpoint: E) -> Typed<E> {
    Typed(endpoint)
}

/// Binds a [`FlexibleEndpoint`] to a route.
pub fn flexible<E: FlexibleEndpoint>(endpoint: E) -> Flexible<E> {
    Flexible(endpoint)
}

/// Binds a [`BodylessEndpoint`] to a route.
pub fn bodyless<E: BodylessEndpoint>(endpoint: E) -> Bodyless<E> {
    Bodyless(endpoint)
}

pub struct Typed<E>(E);
pub struct Flexible<E>(E);
pub struct Bodyless<E>(E);

#[async_trait]
impl<E: Endpoint> Handler for Typed<E> {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<E>()
    }
    async fn handle(&self, req: &mut Request, res: &mut Response) {
        let payload = match req.parse_json::<E::Request>().await {
            Ok(payload) => payload,
            Err(e) => return reject_payload(req, res, &e),
        };
        match self.0.dispatch(payload).await {
            Ok(out) => res.render(Json(out)),
            Err(err) => res.render(err),
        }
    }
}

#[async_trait]
impl<E: FlexibleEndpoint> Handler for Flexible<E> {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<E>()
    }
    async fn handle(&self, req: &mut Request, res: &mut Response) {
        let payload = match req.parse_json::<E::Request>().await {
            Ok(payload) => payload,
            Err(e) => return reject_payload(req, res, &e),
        };
        match self.0.dispatch(payload).await {
            Ok(out) => res.render(Json(out)),
            Err(err) => res.render(err),
        }
    }
}

#[async_trait]
impl<E: BodylessEndpoint> Handler for Bodyless<E> {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<E>()
    }
    async fn handle(&self, _req: &mut Request, res: &mut Response) {
        match self.0.dispatch().await {
            Ok(out) => res.render(Json(out)),
            Err(err) => res.render(err),
        }
    }
}

fn reject_payload(req: &Request, res: &mut Response, err: &ParseError) {
    tracing::debug!(
        method = req.method().as_str(),
        path = req.uri().path(),
        error = %err,
        "rejecting request with unreadable payload"
    );
    res.set_status_error(StatusError::bad_request().with_summary("invalid request payload"));
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use hyper::StatusCode;
    use serde::{Deserialize, Serialize};
    use serde_json::{json, Value};

    use super::*;
    use crate::routing::Router;
    use crate::service::Service;
    use crate::test::{ResponseExt, TestClient};

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct DoubleRequest {
        value: i64,
    }

    #[derive(Debug, Serialize)]
    struct DoubleResponse {
        value: i64,
    }

    struct Doubler;

    #[async_trait]
    impl Endpoint for Doubler {
        type Request = DoubleRequest;
        type Response = DoubleResponse;

        async fn dispatch(&self, req: DoubleRequest) -> ApiResult<DoubleResponse> {
            Ok(DoubleResponse {
                value: req.value * 2,
            })
        }
    }

    struct Picky;

    #[async_trait]
    impl FlexibleEndpoint for Picky {
        type Request = DoubleRequest;

        async fn dispatch(&self, req: DoubleRequest) -> ApiResult<Value> {
            if req.value < 0 {
                return Err(ApiError::new(7, "negative values are not accepted"));
            }
            Ok(json!({ "Accepted": req.value }))
        }
    }

    fn service() -> Service {
        Service::new(
            Router::new()
                .push(Router::with_path("double").post(typed(Doubler)))
                .push(Router::with_path("picky").post(flexible(Picky))),
        )
    }

    #[tokio::test]
    async fn test_typed_adapter_round_trip() {
        let service = service();
        let mut res = TestClient::post("http://127.0.0.1:7878/double")
            .json(&json!({"value": 21}))
            .send(&service)
            .await;
        assert_eq!(res.status_code(), Some(StatusCode::OK));
        let body: Value = res.take_json().await.unwrap();
        assert_eq!(body, json!({"value": 42}));
    }

    #[tokio::test]
    async fn test_typed_adapter_rejects_malformed_payload() {
        let service = service();
        let res = TestClient::post("http://127.0.0.1:7878/double")
            .raw_json("{not json")
            .send(&service)
            .await;
        assert_eq!(res.status_code(), Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_flexible_adapter_keeps_error_envelope_on_ok_status() {
        let service = service();
        let mut res = TestClient::post("http://127.0.0.1:7878/picky")
            .json(&json!({"value": -3}))
            .send(&service)
            .await;
        assert_eq!(res.status_code(), Some(StatusCode::OK));
        let body: Value = res.take_json().await.unwrap();
        assert_eq!(
            body,
            json!({"Error": "negative values are not accepted", "ErrorCode": 7})
        );
    }
}
