// Return HTTP routes
//
// Design Decision: The workflow policy lives in returns-core; these handlers
// only translate between HTTP and ReturnService. List and detail responses
// are plain JSON (array / object) rather than wrapped envelopes.
//
// PUT and DELETE exist for route-surface completeness and do nothing.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use returns_core::{ReturnDetail, ReturnRecord};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use super::common::{error_response, ErrorResponse};
use crate::services::ReturnService;

/// App state for return routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ReturnService>,
}

impl AppState {
    pub fn new(service: Arc<ReturnService>) -> Self {
        Self { service }
    }
}

/// Request to apply an action to a return
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApplyActionRequest {
    /// Action code: 1 = Offer Partial Refund, 2 = Send Shipping Labels,
    /// 3 = Approve Full Refund, 4 = Void.
    #[schema(example = 2)]
    pub action: i64,
}

/// Create return routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/returns/pending", get(list_pending))
        .route(
            "/returns/pending/:marketplace",
            get(list_pending_for_marketplace),
        )
        .route("/returns/completed", get(list_completed))
        .route(
            "/returns/completed/:marketplace",
            get(list_completed_for_marketplace),
        )
        .route(
            "/returns/:id",
            get(get_return)
                .post(apply_action)
                .put(update_return)
                .delete(delete_return),
        )
        .with_state(state)
}

/// GET /returns/pending - List open returns across all marketplaces
#[utoipa::path(
    get,
    path = "/returns/pending",
    responses(
        (status = 200, description = "Pending returns", body = Vec<ReturnRecord>),
    ),
    tag = "returns"
)]
pub async fn list_pending(State(state): State<AppState>) -> Json<Vec<ReturnRecord>> {
    Json(state.service.list_pending(None).await)
}

/// GET /returns/pending/{marketplace} - List open returns for one marketplace
#[utoipa::path(
    get,
    path = "/returns/pending/{marketplace}",
    params(
        ("marketplace" = String, Path, description = "Exact marketplace name, e.g. Amazon")
    ),
    responses(
        (status = 200, description = "Pending returns for the marketplace", body = Vec<ReturnRecord>),
    ),
    tag = "returns"
)]
pub async fn list_pending_for_marketplace(
    State(state): State<AppState>,
    Path(marketplace): Path<String>,
) -> Json<Vec<ReturnRecord>> {
    Json(state.service.list_pending(Some(&marketplace)).await)
}

/// GET /returns/completed - List completed returns across all marketplaces
#[utoipa::path(
    get,
    path = "/returns/completed",
    responses(
        (status = 200, description = "Completed returns", body = Vec<ReturnRecord>),
    ),
    tag = "returns"
)]
pub async fn list_completed(State(state): State<AppState>) -> Json<Vec<ReturnRecord>> {
    Json(state.service.list_completed(None).await)
}

/// GET /returns/completed/{marketplace} - List completed returns for one marketplace
#[utoipa::path(
    get,
    path = "/returns/completed/{marketplace}",
    params(
        ("marketplace" = String, Path, description = "Exact marketplace name, e.g. Amazon")
    ),
    responses(
        (status = 200, description = "Completed returns for the marketplace", body = Vec<ReturnRecord>),
    ),
    tag = "returns"
)]
pub async fn list_completed_for_marketplace(
    State(state): State<AppState>,
    Path(marketplace): Path<String>,
) -> Json<Vec<ReturnRecord>> {
    Json(state.service.list_completed(Some(&marketplace)).await)
}

/// GET /returns/{id} - Get a return and the actions currently available
#[utoipa::path(
    get,
    path = "/returns/{id}",
    params(
        ("id" = Uuid, Path, description = "Return ID")
    ),
    responses(
        (status = 200, description = "Return detail; `return` is null for unknown ids", body = ReturnDetail),
        (status = 400, description = "Malformed return ID"),
    ),
    tag = "returns"
)]
pub async fn get_return(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Json<ReturnDetail> {
    Json(state.service.get_detail(id).await)
}

/// POST /returns/{id} - Apply an action to a return
#[utoipa::path(
    post,
    path = "/returns/{id}",
    params(
        ("id" = Uuid, Path, description = "Return ID")
    ),
    request_body = ApplyActionRequest,
    responses(
        (status = 204, description = "Action applied"),
        (status = 400, description = "Unknown action code", body = ErrorResponse),
        (status = 404, description = "Return not found", body = ErrorResponse),
        (status = 409, description = "Action not available for this return", body = ErrorResponse),
    ),
    tag = "returns"
)]
pub async fn apply_action(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ApplyActionRequest>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    state
        .service
        .apply_action(id, req.action)
        .map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /returns/{id} - Accepted and ignored
#[utoipa::path(
    put,
    path = "/returns/{id}",
    params(
        ("id" = String, Path, description = "Return ID")
    ),
    responses(
        (status = 204, description = "No-op"),
    ),
    tag = "returns"
)]
pub async fn update_return(Path(id): Path<String>) -> StatusCode {
    tracing::debug!(return_id = %id, "Ignoring return update");
    StatusCode::NO_CONTENT
}

/// DELETE /returns/{id} - Accepted and ignored
#[utoipa::path(
    delete,
    path = "/returns/{id}",
    params(
        ("id" = String, Path, description = "Return ID")
    ),
    responses(
        (status = 204, description = "No-op"),
    ),
    tag = "returns"
)]
pub async fn delete_return(Path(id): Path<String>) -> StatusCode {
    tracing::debug!(return_id = %id, "Ignoring return delete");
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResponseDelays;
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use returns_core::ReturnStore;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app(records: Vec<ReturnRecord>) -> Router {
        let store = Arc::new(ReturnStore::from_records(records));
        let service = ReturnService::new(store, ResponseDelays::NONE, true);
        routes(AppState::new(Arc::new(service)))
    }

    fn record(id: u128, marketplace: &str, completed: bool) -> ReturnRecord {
        let mut r = ReturnRecord::new(Uuid::from_u128(id), marketplace);
        r.is_completed = completed;
        r
    }

    async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()))
        };
        (status, value)
    }

    async fn post_action(app: &Router, id: Uuid, body: Value) -> StatusCode {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/returns/{}", id))
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_list_pending_filters_by_marketplace() {
        let app = app(vec![
            record(1, "Amazon", false),
            record(2, "EBay", false),
            record(3, "Amazon", true),
        ]);

        let (status, body) = get_json(&app, "/returns/pending/Amazon").await;
        assert_eq!(status, StatusCode::OK);
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["marketplaceName"], "Amazon");
        assert_eq!(items[0]["isCompleted"], false);

        let (_, body) = get_json(&app, "/returns/pending").await;
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_list_completed() {
        let app = app(vec![record(1, "Amazon", false), record(3, "Amazon", true)]);
        let (status, body) = get_json(&app, "/returns/completed").await;
        assert_eq!(status, StatusCode::OK);
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], Uuid::from_u128(3).to_string());

        let (_, body) = get_json(&app, "/returns/completed/EBay").await;
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_detail_for_unknown_id() {
        let app = app(vec![]);
        let (status, body) = get_json(&app, &format!("/returns/{}", Uuid::from_u128(9))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"return": null, "availableActions": []}));
    }

    #[tokio::test]
    async fn test_detail_with_malformed_id() {
        let app = app(vec![]);
        let (status, _) = get_json(&app, "/returns/not-a-uuid").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_action_workflow_over_http() {
        let id = Uuid::from_u128(1);
        let app = app(vec![record(1, "EBay", false)]);
        let uri = format!("/returns/{}", id);

        let (_, body) = get_json(&app, &uri).await;
        let codes: Vec<i64> = body["availableActions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["code"].as_i64().unwrap())
            .collect();
        assert_eq!(codes, vec![1, 2, 3, 4]);

        assert_eq!(
            post_action(&app, id, json!({"action": 2})).await,
            StatusCode::NO_CONTENT
        );
        let (_, body) = get_json(&app, &uri).await;
        assert_eq!(
            body["availableActions"],
            json!([
                {"code": 3, "name": "Approve Full Refund"},
                {"code": 4, "name": "Void"}
            ])
        );

        assert_eq!(
            post_action(&app, id, json!({"action": 4})).await,
            StatusCode::NO_CONTENT
        );
        let (_, body) = get_json(&app, &uri).await;
        assert_eq!(body["availableActions"], json!([]));
        assert_eq!(body["return"]["isCompleted"], true);
        assert_eq!(body["return"]["isVoided"], true);
    }

    #[tokio::test]
    async fn test_action_errors() {
        let id = Uuid::from_u128(1);
        let app = app(vec![record(1, "EBay", false), record(2, "EBay", true)]);

        assert_eq!(
            post_action(&app, Uuid::from_u128(99), json!({"action": 4})).await,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            post_action(&app, id, json!({"action": 9})).await,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            post_action(&app, Uuid::from_u128(2), json!({"action": 4})).await,
            StatusCode::CONFLICT
        );
    }

    #[tokio::test]
    async fn test_put_and_delete_are_noops() {
        let id = Uuid::from_u128(1);
        let app = app(vec![record(1, "EBay", false)]);
        let uri = format!("/returns/{}", id);

        for method in ["PUT", "DELETE"] {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method(method)
                        .uri(&uri)
                        .header("content-type", "application/json")
                        .body(Body::from("\"value\""))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NO_CONTENT);
        }

        let (_, body) = get_json(&app, &uri).await;
        assert_eq!(body["return"]["id"], id.to_string());
        assert_eq!(body["availableActions"].as_array().unwrap().len(), 4);
    }
}
