//! Sample API surface: one endpoint per dispatch shape.

pub mod search;
pub mod states;
pub mod user;

use crate::endpoint::{bodyless, flexible, typed};
use crate::routing::Router;

/// Builds the sample route table. Each route picks its dispatch shape
/// when it is registered.
pub fn routes() -> Router {
    Router::new()
        .push(Router::with_path("api/user/save").post(typed(user::SaveUser)))
        .push(Router::with_path("api/search").post(flexible(search::PetSearch)))
        .push(Router::with_path("api/us/states").get(bodyless(states::UsStates)))
}
