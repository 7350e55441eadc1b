//! In-process testing utilities: build a [`Request`](crate::http::Request)
//! piece by piece and run it through a [`Service`](crate::service::Service)
//! without opening a socket.


pub use client::TestClient;
pub use request::RequestBuilder;
pub use response::ResponseExt;
