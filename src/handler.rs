use async_trait::async_trait;

use crate::http::{Request, Response};

/// The framework-facing dispatch surface: one handler serves one route
/// and is invoked once per matching request.
#[async_trait]
pub trait Handler: Send + Sync + 'static {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
    async fn handle(&self, req: &mut Request, res: &mut Response);
}
