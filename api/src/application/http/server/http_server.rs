use std::sync::Arc;

use axum::Router;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, LOCATION};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use cookable_core::application::create_service;
use cookable_core::domain::common::CookableConfig;
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::http::analysis::router::analysis_routes;
use crate::application::http::captions::router::captions_routes;
use crate::application::http::health::health_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::args::Args;

pub fn state(args: Arc<Args>) -> AppState {
    let config = CookableConfig::from(args.as_ref().clone());
    let service = create_service(config);

    AppState::new(args, service)
}

/// Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, CONTENT_LENGTH, ACCEPT, LOCATION]);

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let root_path = state.args.server.root_path.clone();

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();
    openapi.paths = paths;

    let api_docs_url = format!("{root_path}/api-docs/openapi.json");

    let router = axum::Router::new()
        .merge(SwaggerUi::new(format!("{root_path}/swagger-ui")).url(api_docs_url, openapi))
        .merge(analysis_routes(state.clone()))
        .merge(captions_routes(state.clone()))
        .merge(health_routes(&root_path))
        .route(
            &format!("{root_path}/metrics"),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);

    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{CaptionsArgs, LlmArgs, ServerArgs};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{Value, json};

    fn test_args() -> Args {
        Args {
            server: ServerArgs {
                host: "127.0.0.1".to_string(),
                port: 0,
                root_path: String::new(),
                allowed_origins: vec!["http://localhost:3000".to_string()],
                log_json: false,
            },
            llm: LlmArgs {
                openrouter_api_key: "test-key".to_string(),
                openrouter_model: "openai/gpt-4o-mini".to_string(),
                referer: "http://localhost".to_string(),
                app_title: "Cookable".to_string(),
            },
            captions: CaptionsArgs {
                rapidapi_key: "test-key".to_string(),
                rapidapi_host: "youtubetranscript.p.rapidapi.com".to_string(),
            },
        }
    }

    fn test_server() -> TestServer {
        let state = state(Arc::new(test_args()));
        TestServer::try_new(router(state).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn status_route_reports_ok() {
        let server = test_server();

        let response = server.get("/").await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn captions_without_video_id_is_bad_request() {
        let server = test_server();

        let response = server.get("/api/youtube-captions").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": "Missing videoId" }));
    }

    #[tokio::test]
    async fn captions_with_empty_video_id_is_bad_request() {
        let server = test_server();

        let response = server
            .get("/api/youtube-captions")
            .add_query_param("videoId", "")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": "Missing videoId" }));
    }

    #[tokio::test]
    async fn analyze_without_video_url_is_bad_request() {
        let server = test_server();

        let response = server
            .post("/analyze")
            .json(&json!({ "video_url": "", "pantry": ["salt"] }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "video_url is required");
    }

    #[tokio::test]
    async fn analyze_with_non_list_pantry_is_bad_request() {
        let server = test_server();

        let response = server
            .post("/analyze")
            .json(&json!({ "video_url": "https://youtu.be/dQw4w9WgXcQ", "pantry": "salt" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn extraction_without_url_is_bad_request() {
        let server = test_server();

        let response = server.post("/api/main").json(&json!({})).await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
