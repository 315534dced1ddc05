mod api_tests;

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use http_body_util::BodyExt;
use tower::ServiceExt;

use pagekit::render::Renderer;
use pagekit::{Error, PaginationConfig, PaginationResult, QueryParams, paginate_with};

/// Shared state for the test list endpoints.
#[derive(Clone)]
pub struct TestState {
    pub config: Arc<PaginationConfig>,
    pub total_items: i64,
    pub renderer: Arc<Renderer>,
}

async fn list_json(State(state): State<TestState>, params: QueryParams) -> PaginationResult {
    paginate_with(&params, state.total_items, &state.config)
}

async fn list_html(
    State(state): State<TestState>,
    params: QueryParams,
) -> Result<Html<String>, Error> {
    let result = paginate_with(&params, state.total_items, &state.config);
    Ok(Html(state.renderer.render(&result)?))
}

/// Router exposing `/items` (JSON) and `/items.html` over a list of
/// `total_items` entries.
pub fn test_router(config: PaginationConfig, total_items: i64) -> Router {
    let state = TestState {
        config: Arc::new(config),
        total_items,
        renderer: Arc::new(Renderer::new().expect("templates should load")),
    };
    Router::new()
        .route("/items", get(list_json))
        .route("/items.html", get(list_html))
        .with_state(state)
}

/// Send a GET request and return the response.
pub async fn get_response(app: Router, path: &str) -> axum::response::Response {
    let req = axum::http::Request::builder()
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(req).await.unwrap()
}

/// Read the full response body as a UTF-8 string.
pub async fn body_string(resp: axum::response::Response) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// GET a JSON endpoint and parse the body.
pub async fn get_json(app: Router, path: &str) -> serde_json::Value {
    let resp = get_response(app, path).await;
    assert_eq!(resp.status(), 200);
    serde_json::from_str(&body_string(resp).await).expect("response should be JSON")
}
