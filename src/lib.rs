pub mod addr;
pub mod catcher;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod reply;
pub mod test;

pub mod api;
pub mod handler;
pub mod listener;
pub mod routing;
pub mod server;
pub mod service;

use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use async_trait::async_trait;

    pub use crate::endpoint::{
        bodyless, flexible, typed, ApiError, ApiResult, BodylessEndpoint, Endpoint,
        FlexibleEndpoint,
    };
    pub use crate::handler::Handler;
    pub use crate::http::{Request, Response, StatusError};
    pub use crate::listener::TcpListener;
    pub use crate::reply::{Json, Reply, Text};
    pub use crate::routing::Router;
    pub use crate::server::Server;
    pub use crate::service::Service;
}
