use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::endpoint::{ApiResult, Endpoint};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UserDetailsRequest {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserDetailsResponse {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
}

/// Saves the user details. Persistence is stubbed: the submitted names
/// come back under a fixed sample user id.
pub struct SaveUser;

#[async_trait]
impl Endpoint for SaveUser {
    type Request = UserDetailsRequest;
    type Response = UserDetailsResponse;

    async fn dispatch(&self, req: UserDetailsRequest) -> ApiResult<UserDetailsResponse> {
        Ok(UserDetailsResponse {
            user_id: 2,
            first_name: req.first_name,
            last_name: req.last_name,
            middle_name: req.middle_name,
        })
    }
}
