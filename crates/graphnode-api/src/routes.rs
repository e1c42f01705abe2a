//! Route table and request handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use graphnode_query::{find_by_criteria, get_all, get_by_id, NodeQuery};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::{ApiError, ApiResult};
use crate::response::{HealthResponse, NodeListResponse};
use crate::server::AppState;

/// Raw `?by=&value=` parameters, validated by the handler
#[derive(Debug, Default, PartialEq, Eq)]
pub struct NodeQueryParams {
    pub by: Option<String>,
    pub value: Option<String>,
}

impl NodeQueryParams {
    /// Collect `by` and `value` from decoded query pairs.
    ///
    /// A repeated key keeps its last value. Unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "by" => params.by = Some(value),
                "value" => params.value = Some(value),
                _ => {}
            }
        }
        params
    }
}

/// Build the API router.
///
/// Node routes answer with and without a trailing slash.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.settings.allowed_origins);

    Router::new()
        .route("/api/nodes", get(query_nodes))
        .route("/api/nodes/", get(query_nodes))
        .route("/api/nodes/all", get(all_nodes))
        .route("/api/nodes/all/", get(all_nodes))
        .route("/api/nodes/:node_id", get(node_by_id))
        .route("/api/nodes/:node_id/", get(node_by_id))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let values: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Trimmed, non-blank parameter value
fn require(value: Option<String>, name: &'static str) -> ApiResult<String> {
    let value = value.ok_or(ApiError::MissingParam(name))?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::BlankParam(name));
    }
    Ok(trimmed.to_string())
}

/// `GET /api/nodes/?by=<field>&value=<value>`
async fn query_nodes(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Response> {
    let params = NodeQueryParams::from_pairs(pairs);
    let by = require(params.by, "by")?;
    let value = require(params.value, "value")?;
    let query = NodeQuery::parse(&state.allow_list, &by, value)?;

    let nodes = find_by_criteria(&state.store, &query);
    let mut body = NodeListResponse::filtered(&query, nodes);

    let status = if !body.is_empty() {
        StatusCode::OK
    } else if state.settings.empty_match_is_not_found {
        StatusCode::NOT_FOUND
    } else {
        body.message = None;
        StatusCode::OK
    };

    Ok((status, Json(body)).into_response())
}

/// `GET /api/nodes/all/`
async fn all_nodes(State(state): State<Arc<AppState>>) -> Response {
    Json(NodeListResponse::all(get_all(&state.store))).into_response()
}

/// `GET /api/nodes/<node_id>/`
async fn node_by_id(
    State(state): State<Arc<AppState>>,
    Path(node_id): Path<String>,
) -> ApiResult<Response> {
    match get_by_id(&state.store, &node_id) {
        Some(record) => Ok(Json(record).into_response()),
        None => Err(ApiError::NodeNotFound(node_id)),
    }
}

/// Health check endpoint
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        server: "graphnode",
        version: env!("CARGO_PKG_VERSION"),
        nodes: state.store.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::ApiSettings;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use graphnode_query::AllowList;
    use graphnode_storage::SeedSource;
    use serde_json::Value;
    use tower::ServiceExt;

    fn router_with(settings: ApiSettings) -> Router {
        let store = SeedSource::new().build().unwrap();
        create_router(Arc::new(AppState::new(store, AllowList::default(), settings)))
    }

    fn router() -> Router {
        router_with(ApiSettings::default())
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_query_by_node_id() {
        let (status, body) = get_json(router(), "/api/nodes/?by=node_id&value=n001").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);
        assert_eq!(body["query_params"], serde_json::json!({"by": "node_id", "value": "n001"}));
        assert_eq!(body["nodes"][0]["node_id"], "n001");
        assert_eq!(body["nodes"][0]["properties"]["age"], 28);
        assert_eq!(body["nodes"][0]["created_at"], "2023-01-15T10:30:00Z");
        assert!(body.get("message").is_none());
    }

    #[tokio::test]
    async fn test_query_by_name_with_space() {
        let (status, body) = get_json(router(), "/api/nodes?by=name&value=Alice%20Johnson").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);
        assert_eq!(body["nodes"][0]["properties"]["name"], "Alice Johnson");
    }

    #[tokio::test]
    async fn test_query_by_label_and_status() {
        let (status, body) = get_json(router(), "/api/nodes/?by=label&value=Person").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 5);

        let (_, body) = get_json(router(), "/api/nodes/?by=status&value=active").await;
        let ids: Vec<&str> = body["nodes"]
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["node_id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["n001", "n002", "n003", "n005", "n006"]);
    }

    #[tokio::test]
    async fn test_value_is_trimmed() {
        let (status, body) = get_json(router(), "/api/nodes/?by=city&value=%20chicago%20").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["query_params"]["value"], "chicago");
        assert_eq!(body["nodes"][0]["node_id"], "n003");
    }

    #[tokio::test]
    async fn test_no_match_is_404_envelope() {
        let (status, body) = get_json(router(), "/api/nodes/?by=name&value=NonExistent").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            serde_json::json!({
                "count": 0,
                "query_params": {"by": "name", "value": "NonExistent"},
                "nodes": [],
                "message": "No nodes found matching the specified criteria"
            })
        );
    }

    #[tokio::test]
    async fn test_no_match_can_be_200() {
        let settings = ApiSettings {
            empty_match_is_not_found: false,
            ..ApiSettings::default()
        };
        let (status, body) = get_json(router_with(settings), "/api/nodes/?by=city&value=Paris").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 0);
        assert!(body.get("message").is_none());
    }

    #[tokio::test]
    async fn test_invalid_field_is_400() {
        let (status, body) = get_json(router(), "/api/nodes/?by=foo&value=bar").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "Invalid field 'foo'. Allowed fields are: node_id, name, label, type, email, age, city, status"
        );
        assert_eq!(body["allowed_fields"].as_array().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_missing_and_blank_params() {
        let (status, body) = get_json(router(), "/api/nodes/?value=n001").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required parameter: by");

        let (status, body) = get_json(router(), "/api/nodes/?by=node_id&value=%20").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Parameter may not be blank: value");
    }

    #[tokio::test]
    async fn test_repeated_param_uses_last_value() {
        let uri = "/api/nodes/?by=city&by=name&value=Chicago&value=Bob%20Smith";
        let (status, body) = get_json(router(), uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["query_params"], serde_json::json!({"by": "name", "value": "Bob Smith"}));
        assert_eq!(body["nodes"][0]["node_id"], "n002");

        let (status, body) = get_json(router(), "/api/nodes/?by=node_id&by=city&value=Chicago&page=2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["nodes"][0]["node_id"], "n003");
    }

    #[test]
    fn test_params_from_pairs() {
        let pairs = vec![
            ("value".to_string(), "x".to_string()),
            ("by".to_string(), "label".to_string()),
            ("by".to_string(), "type".to_string()),
        ];
        assert_eq!(
            NodeQueryParams::from_pairs(pairs),
            NodeQueryParams {
                by: Some("type".to_string()),
                value: Some("x".to_string()),
            }
        );
        assert_eq!(NodeQueryParams::from_pairs(Vec::new()), NodeQueryParams::default());
    }

    #[tokio::test]
    async fn test_all_nodes() {
        let (status, body) = get_json(router(), "/api/nodes/all/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 6);
        assert_eq!(body["nodes"].as_array().unwrap().len(), 6);
        assert!(body.get("query_params").is_none());
        assert_eq!(body["nodes"][5]["node_id"], "n006");
    }

    #[tokio::test]
    async fn test_node_by_id() {
        let (status, body) = get_json(router(), "/api/nodes/n005/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["node_id"], "n005");
        assert_eq!(body["labels"], serde_json::json!(["Organization", "Company"]));
        assert_eq!(body["degree"]["total"], 15);

        let (status, _) = get_json(router(), "/api/nodes/n002").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_node_by_id_not_found() {
        let (status, body) = get_json(router(), "/api/nodes/n999/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"error": "Node with ID 'n999' not found"}));
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(router(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["nodes"], 6);
    }
}
