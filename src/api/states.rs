use async_trait::async_trait;
use serde_json::{json, Value};

use crate::endpoint::{ApiResult, BodylessEndpoint};

/// Sample data only: the list stops partway through the alphabet and is
/// not a complete set of states.
const US_STATES: [&str; 8] = [
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Delaware",
    "Florida",
];

/// Lists the sample US states. Takes no request payload.
pub struct UsStates;

#[async_trait]
impl BodylessEndpoint for UsStates {
    async fn dispatch(&self) -> ApiResult<Value> {
        Ok(json!(US_STATES))
    }
}
