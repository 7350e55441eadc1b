use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::endpoint::{ApiError, ApiResult, FlexibleEndpoint};

/// Most common pets, per the sample corpus.
const COMMON_PETS: [&str; 5] = ["Cat", "Dog", "Fish", "Chickens", "Hamsters"];

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SearchRequest {
    pub term: String,
    pub items_per_page: u32,
}

/// Searches the fixed pet corpus. A missing term is a business failure,
/// reported through the error envelope rather than an HTTP status.
pub struct PetSearch;

#[async_trait]
impl FlexibleEndpoint for PetSearch {
    type Request = SearchRequest;

    async fn dispatch(&self, req: SearchRequest) -> ApiResult<Value> {
        if req.term.is_empty() {
            return Err(ApiError::new(
                101,
                "The search term is missing. Please resubmit with search term",
            ));
        }
        tracing::debug!(
            term = %req.term,
            items_per_page = req.items_per_page,
            "searching pets; paging is not implemented"
        );
        Ok(json!({ "Results": COMMON_PETS }))
    }
}

#[cfg(test)]
mod tests {
    use hyper::StatusCode;
    use serde_json::{json, Value};

    use crate::api;
    use crate::service::Service;
    use crate::test::{ResponseExt, TestClient};

    async fn search(payload: Value) -> (Option<StatusCode>, Value) {
        let service = Service::new(api::routes());
        let mut res = TestClient::post("http://127.0.0.1:7878/api/search")
            .json(&payload)
            .send(&service)
            .await;
        let body = res.take_json().await.unwrap();
        (res.status_code(), body)
    }

    #[tokio::test]
    async fn test_search_returns_fixed_results_for_any_term() {
        let expected = json!({ "Results": ["Cat", "Dog", "Fish", "Chickens", "Hamsters"] });
        let (status, body) = search(json!({"Term": "hamster", "ItemsPerPage": 3})).await;
        assert_eq!(status, Some(StatusCode::OK));
        assert_eq!(body, expected);

        // Neither the term nor the page size changes the outcome.
        let (_, body) = search(json!({"Term": "zebra", "ItemsPerPage": 9000})).await;
        assert_eq!(body, expected);
    }

    #[tokio::test]
    async fn test_search_with_empty_term_yields_error_envelope() {
        let (status, body) = search(json!({"Term": "", "ItemsPerPage": 5})).await;
        assert_eq!(status, Some(StatusCode::OK));
        assert_eq!(
            body,
            json!({
                "Error": "The search term is missing. Please resubmit with search term",
                "ErrorCode": 101
            })
        );
    }

    #[tokio::test]
    async fn test_search_with_absent_term_yields_error_envelope() {
        let (_, body) = search(json!({})).await;
        assert_eq!(
            body,
            json!({
                "Error": "The search term is missing. Please resubmit with search term",
                "ErrorCode": 101
            })
        );
    }
}
