use crate::app::dto::*;
use crate::app::engine::VizEngine;
use anyhow::Result;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::spawn_blocking;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[derive(Clone)]
pub struct HttpState {
    pub engine: VizEngine,
}

#[derive(Debug, Clone, Deserialize)]
struct GraphQuery {
    /// Overrides the engine's toggle for this request only.
    show_cold_edges: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
struct ColdEdgesBody {
    show_cold_edges: bool,
}

#[derive(Debug, Clone, serde::Serialize)]
struct ApiErrorBody {
    error: String,
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> impl IntoResponse {
    (status, Json(ApiErrorBody { error: msg.into() }))
}

pub fn build_router(engine: VizEngine) -> Router {
    let state = Arc::new(HttpState { engine });

    Router::new()
        .route("/health", get(health))
        .route("/graph", get(graph))
        .route("/graph.dot", get(graph_dot))
        .route("/stats", get(stats))
        .route("/cold-edges", post(cold_edges))
        .route("/reload", post(reload))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub async fn serve(engine: VizEngine, addr: SocketAddr) -> Result<()> {
    let app = build_router(engine);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health(State(state): State<Arc<HttpState>>) -> impl IntoResponse {
    Json(state.engine.health())
}

async fn reload(State(state): State<Arc<HttpState>>) -> impl IntoResponse {
    let engine = state.engine.clone();
    match spawn_blocking(move || engine.load()).await {
        Ok(Ok(res)) => Json(res).into_response(),
        Ok(Err(e)) => {
            api_error(StatusCode::INTERNAL_SERVER_ERROR, format!("{e:#}")).into_response()
        }
        Err(e) => api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("task join error: {e}"),
        )
        .into_response(),
    }
}

async fn cold_edges(
    State(state): State<Arc<HttpState>>,
    Json(body): Json<ColdEdgesBody>,
) -> impl IntoResponse {
    state.engine.set_show_cold_edges(body.show_cold_edges);
    Json(state.engine.threshold())
}

async fn graph(
    State(state): State<Arc<HttpState>>,
    Query(q): Query<GraphQuery>,
) -> impl IntoResponse {
    let engine = state.engine.clone();
    let threshold = q
        .show_cold_edges
        .map_or(engine.threshold(), |show| engine.threshold().with_show_cold_edges(show));

    match spawn_blocking(move || engine.graph(threshold)).await {
        Ok(Ok(res)) => Json(res).into_response(),
        Ok(Err(e)) => api_error(StatusCode::CONFLICT, e.to_string()).into_response(),
        Err(e) => api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("task join error: {e}"),
        )
        .into_response(),
    }
}

async fn graph_dot(
    State(state): State<Arc<HttpState>>,
    Query(q): Query<GraphQuery>,
) -> impl IntoResponse {
    let engine = state.engine.clone();
    let threshold = q
        .show_cold_edges
        .map_or(engine.threshold(), |show| engine.threshold().with_show_cold_edges(show));

    match spawn_blocking(move || engine.render(threshold, OutputFormat::Dot)).await {
        Ok(Ok(dot)) => ([(header::CONTENT_TYPE, "text/vnd.graphviz")], dot).into_response(),
        Ok(Err(e)) => api_error(StatusCode::CONFLICT, e.to_string()).into_response(),
        Err(e) => api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("task join error: {e}"),
        )
        .into_response(),
    }
}

async fn stats(State(state): State<Arc<HttpState>>) -> impl IntoResponse {
    let engine = state.engine.clone();
    match spawn_blocking(move || engine.stats()).await {
        Ok(Ok(res)) => Json(res).into_response(),
        Ok(Err(e)) => api_error(StatusCode::CONFLICT, e.to_string()).into_response(),
        Err(e) => api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("task join error: {e}"),
        )
        .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::edge::{EdgeRecord, EdgeSet};
    use crate::domain::filter::VisibilityThreshold;
    use crate::domain::ports::EdgeSource;
    use crate::domain::style::HeatScale;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    struct MockSource;
    impl EdgeSource for MockSource {
        fn load(&self) -> anyhow::Result<EdgeSet> {
            Ok([("a", "b", 10), ("b", "c", 100), ("c", "d", 2)]
                .into_iter()
                .map(|(f, t, c)| EdgeRecord::new(f, t, c).unwrap())
                .collect())
        }

        fn describe(&self) -> String {
            "mock".into()
        }
    }

    fn make_engine() -> VizEngine {
        VizEngine::new(
            Arc::new(MockSource),
            VisibilityThreshold::default(),
            HeatScale::default(),
        )
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let res = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_graph_before_load_is_conflict() {
        let app = build_router(make_engine());
        let (status, body) = get_json(app, "/graph").await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body["error"].as_str().unwrap().contains("No edges"));
    }

    #[tokio::test]
    async fn test_http_reload_and_graph() {
        let app = build_router(make_engine());

        let res = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/reload")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let (status, body) = get_json(app.clone(), "/graph").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["edges"].as_array().unwrap().len(), 2);

        let (_, body) = get_json(app.clone(), "/graph?show_cold_edges=true").await;
        assert_eq!(body["edges"].as_array().unwrap().len(), 3);
        assert_eq!(body["edges"][2]["style"]["stroke"], "#050000");

        let (_, body) = get_json(app, "/stats").await;
        assert_eq!(body["count_max"], 100);
        assert_eq!(body["cold_edges"], 1);
    }

    #[tokio::test]
    async fn test_toggle_persists_across_requests() {
        let engine = make_engine();
        engine.load().unwrap();
        let app = build_router(engine);

        let res = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/cold-edges")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"show_cold_edges": true}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let (_, body) = get_json(app.clone(), "/graph").await;
        assert_eq!(body["edges"].as_array().unwrap().len(), 3);

        let res = app
            .oneshot(
                Request::builder()
                    .uri("/graph.dot")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let dot = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(dot.contains("\"c\" -> \"d\""));
    }
}
