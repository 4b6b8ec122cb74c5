use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::Json as ResponseJson,
    routing::post,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::{AppState, error::ApiError, response::ApiEnvelope};

#[derive(Debug, Serialize, Deserialize, TS)]
pub struct RunRequest {
    #[serde(default, alias = "topic")]
    pub prompt: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/run", post(run_prompt))
}

pub async fn run_prompt(
    State(state): State<AppState>,
    payload: Result<Json<RunRequest>, JsonRejection>,
) -> Result<ResponseJson<ApiEnvelope<Value>>, ApiError> {
    let Json(request) = payload?;
    let prompt = request.prompt.trim().to_string();
    if prompt.is_empty() {
        return Err(ApiError::BadRequest(
            "Please enter a topic/title first".to_string(),
        ));
    }

    let generator = state.generator();
    tracing::info!("Running {} generator for: {}", generator.name(), prompt);

    let result = tokio::task::spawn_blocking(move || generator.generate(&prompt))
        .await?
        .map_err(ApiError::Generation)?;

    Ok(ResponseJson(ApiEnvelope::success(result)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use anyhow::anyhow;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use mystro::{Library, MystroBrain, MystroConfig};
    use tempfile::TempDir;
    use tower::ServiceExt;

    use super::*;
    use crate::{
        generator::{Generator, PLACEHOLDER_TITLE, PipelineGenerator, PlaceholderGenerator},
        routes,
    };

    struct FailingGenerator;

    impl Generator for FailingGenerator {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn generate(&self, _prompt: &str) -> anyhow::Result<Value> {
            Err(anyhow!("disk full").context("Organizer save failed"))
        }
    }

    fn app_with(generator: Arc<dyn Generator>, tmp: &TempDir) -> Router {
        routes::router(AppState::new(generator, Library::new(tmp.path())), true)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn envelope(response: axum::response::Response) -> ApiEnvelope<Value> {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_run_pipeline_success() {
        let tmp = TempDir::new().unwrap();
        let brain = MystroBrain::new(&MystroConfig::default().with_outputs_dir(tmp.path()));
        let app = app_with(Arc::new(PipelineGenerator::new(brain)), &tmp);

        let response = app
            .oneshot(post_json("/api/run", r#"{"prompt": "Mystery of X"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = envelope(response).await;
        assert!(body.ok);
        let result = body.result.unwrap();
        for key in ["topic_info", "script_hindi", "shorts", "seo_pack", "thumbnail_concept"] {
            assert!(result.get(key).is_some(), "missing {key}");
        }
        let folder = result["_saved_folder"].as_str().unwrap();
        assert!(std::path::Path::new(folder).join("manifest.json").exists());
    }

    #[tokio::test]
    async fn test_run_accepts_topic_alias_on_legacy_route() {
        let tmp = TempDir::new().unwrap();
        let app = app_with(Arc::new(PlaceholderGenerator), &tmp);

        let response = app
            .oneshot(post_json("/run", r#"{"topic": "Area 51"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = envelope(response).await;
        let result = body.result.unwrap();
        assert_eq!(result["title"], PLACEHOLDER_TITLE);
        assert_eq!(result["text"], "Processed prompt (placeholder): Area 51");
    }

    #[tokio::test]
    async fn test_run_rejects_empty_prompt() {
        let tmp = TempDir::new().unwrap();
        let app = app_with(Arc::new(PlaceholderGenerator), &tmp);

        let response = app
            .oneshot(post_json("/api/run", r#"{"prompt": "   "}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = envelope(response).await;
        assert!(!body.ok);
        assert!(body.error.is_some());
        assert!(body.trace.is_none());
    }

    #[tokio::test]
    async fn test_run_rejects_malformed_json() {
        let tmp = TempDir::new().unwrap();
        let app = app_with(Arc::new(PlaceholderGenerator), &tmp);

        let response = app.oneshot(post_json("/api/run", "{not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(!envelope(response).await.ok);
    }

    #[tokio::test]
    async fn test_run_generator_failure_is_500_with_trace() {
        let tmp = TempDir::new().unwrap();
        let app = app_with(Arc::new(FailingGenerator), &tmp);

        let response = app
            .oneshot(post_json("/api/run", r#"{"prompt": "Mystery of X"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = envelope(response).await;
        assert!(!body.ok);
        assert!(body.result.is_none());
        assert!(body.error.unwrap().contains("Organizer save failed"));
        assert!(body.trace.unwrap().contains("disk full"));
    }
}
