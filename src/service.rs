use std::future::Future;
use std::io::Error as IoError;
use std::pin::Pin;
use std::sync::Arc;

use futures_util::future;
use hyper::header::CONTENT_TYPE;
use hyper::StatusCode;

use crate::addr::SocketAddr;
use crate::catcher::{Catcher, DefaultCatcher};
use crate::http::{Request, Response};
use crate::listener::Transport;
use crate::routing::{PathState, Router};

/// Ties a route tree and its catchers together and speaks hyper on the
/// outside.
pub struct Service {
    pub(crate) router: Arc<Router>,
    pub(crate) catchers: Arc<Vec<Box<dyn Catcher>>>,
}

impl Service {
    pub fn new<T>(router: T) -> Service
    where
        T: Into<Arc<Router>>,
    {
        Service {
            router: router.into(),
            catchers: Arc::new(vec![]),
        }
    }

    pub fn router(&self) -> Arc<Router> {
        self.router.clone()
    }

    pub fn with_catchers<T>(mut self, catchers: T) -> Self
    where
        T: Into<Arc<Vec<Box<dyn Catcher>>>>,
    {
        self.catchers = catchers.into();
        self
    }
    pub fn catchers(&self) -> Arc<Vec<Box<dyn Catcher>>> {
        self.catchers.clone()
    }

    pub fn hyper_handler(&self, remote_addr: Option<SocketAddr>) -> HyperHandler {
        HyperHandler {
            remote_addr,
            router: self.router.clone(),
            catchers: self.catchers.clone(),
        }
    }

    /// Runs one request through the full dispatch flow without a socket.
    pub async fn handle(&self, request: impl Into<Request>) -> Response {
        self.hyper_handler(None).handle(request.into()).await
    }
}

impl From<Router> for Service {
    fn from(router: Router) -> Self {
        Service::new(router)
    }
}

#[derive(Clone)]
pub struct HyperHandler {
    pub(crate) remote_addr: Option<SocketAddr>,
    pub(crate) router: Arc<Router>,
    pub(crate) catchers: Arc<Vec<Box<dyn Catcher>>>,
}

impl HyperHandler {
    pub fn handle(&self, mut req: Request) -> impl Future<Output = Response> {
        let catchers = self.catchers.clone();
        let router = self.router.clone();
        req.remote_addr = self.remote_addr.clone();
        let mut res = Response::new();
        let mut path_state = PathState::new(req.uri().path());

        async move {
            if let Some(handler) = router.detect(&mut req, &mut path_state) {
                handler.handle(&mut req, &mut res).await;
            } else {
                res.set_status_code(StatusCode::NOT_FOUND);
            }

            if res.status_code().is_none() {
                if res.body().is_none() {
                    res.set_status_code(StatusCode::NOT_FOUND);
                } else {
                    res.set_status_code(StatusCode::OK);
                }
            }

            let status = res.status_code().unwrap_or(StatusCode::NOT_FOUND);
            let has_error = status.is_client_error() || status.is_server_error();
            if !has_error && res.body().is_none() && res.headers().get(CONTENT_TYPE).is_none() {
                tracing::warn!(
                    uri = ?req.uri(),
                    method = req.method().as_str(),
                    "response content type header not set"
                );
            }
            if res.body().is_none() && has_error {
                let mut caught = false;
                for catcher in catchers.iter() {
                    if catcher.catch(&req, &mut res) {
                        caught = true;
                        break;
                    }
                }
                if !caught {
                    DefaultCatcher.catch(&req, &mut res);
                }
            }
            tracing::debug!(
                method = req.method().as_str(),
                path = req.uri().path(),
                status = status.as_u16(),
                "request handled"
            );
            res
        }
    }
}

impl hyper::service::Service<hyper::Request<hyper::Body>> for HyperHandler {
    type Response = hyper::Response<hyper::Body>;
    type Error = hyper::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(
        &mut self,
        _cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        std::task::Poll::Ready(Ok(()))
    }
    fn call(&mut self, req: hyper::Request<hyper::Body>) -> Self::Future {
        let response = self.handle(req.into());
        let fut = async move {
            let mut hyper_response = hyper::Response::new(hyper::Body::empty());
            response.await.write_back(&mut hyper_response);
            Ok(hyper_response)
        };
        Box::pin(fut)
    }
}

impl<'t, T> hyper::service::Service<&'t T> for Service
where
    T: Transport,
{
    type Response = HyperHandler;
    type Error = IoError;
    type Future = future::Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &mut self,
        _cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        Ok(()).into()
    }
    fn call(&mut self, req: &'t T) -> Self::Future {
        future::ok(self.hyper_handler(req.remote_addr()))
    }
}
