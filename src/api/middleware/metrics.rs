//! HTTP metrics middleware for recording request/response metrics

use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::infrastructure::observability::record_http_request;

/// Path label for requests that matched no route
pub const UNMATCHED_PATH: &str = "unmatched";

/// Middleware to record HTTP request metrics
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = metric_path(&request);

    let response = next.run(request).await;

    record_http_request(
        method.as_str(),
        &path,
        response.status().as_u16(),
        start.elapsed(),
    );

    response
}

/// Route template of the request, so label cardinality stays bounded by the
/// route table.
fn metric_path(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{HeaderValue, StatusCode},
        middleware,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    async fn echo_metric_path(request: Request<Body>, next: Next) -> Response {
        let path = metric_path(&request);
        let mut response = next.run(request).await;
        if let Ok(value) = HeaderValue::from_str(&path) {
            response.headers_mut().insert("x-metric-path", value);
        }
        response
    }

    fn app() -> Router {
        Router::new()
            .route("/users/{id}", get(|| async { StatusCode::OK }))
            .layer(middleware::from_fn(echo_metric_path))
    }

    async fn label_for(uri: &str) -> String {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();

        response.headers()["x-metric-path"]
            .to_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_unrouted_request_uses_constant_label() {
        let request = Request::builder()
            .uri("/x1?page=1")
            .body(Body::empty())
            .unwrap();

        assert_eq!(metric_path(&request), UNMATCHED_PATH);
    }

    #[tokio::test]
    async fn test_matched_route_uses_template() {
        assert_eq!(label_for("/users/42").await, "/users/{id}");
        assert_eq!(label_for("/users/43").await, "/users/{id}");
    }

    #[tokio::test]
    async fn test_unknown_paths_share_one_label() {
        assert_eq!(label_for("/x1").await, UNMATCHED_PATH);
        assert_eq!(label_for("/x2/y").await, UNMATCHED_PATH);
    }
}
