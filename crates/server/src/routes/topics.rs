use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::get,
};
use mystro::SavedTopic;

use crate::{AppState, error::ApiError, response::ApiEnvelope};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/topics", get(list_topics))
        .route("/topics/{slug}", get(get_topic))
}

pub async fn list_topics(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiEnvelope<Vec<String>>>, ApiError> {
    let topics = state.library().list_topics()?;
    Ok(ResponseJson(ApiEnvelope::success(topics)))
}

pub async fn get_topic(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<ResponseJson<ApiEnvelope<SavedTopic>>, ApiError> {
    let saved = state
        .library()
        .load(&slug)?
        .ok_or_else(|| ApiError::NotFound(format!("No saved topic named '{}'", slug)))?;
    Ok(ResponseJson(ApiEnvelope::success(saved)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use mystro::{Library, MystroBrain, MystroConfig};
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use super::*;
    use crate::{generator::PlaceholderGenerator, routes};

    fn app(tmp: &TempDir) -> Router {
        routes::router(
            AppState::new(Arc::new(PlaceholderGenerator), Library::new(tmp.path())),
            false,
        )
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_list_and_get_saved_topic() {
        let tmp = TempDir::new().unwrap();
        MystroBrain::new(&MystroConfig::default().with_outputs_dir(tmp.path()))
            .run_pipeline("Loch Ness")
            .unwrap();

        let (status, body) = get_json(app(&tmp), "/api/topics").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], serde_json::json!(["loch_ness"]));

        let (status, body) = get_json(app(&tmp), "/api/topics/loch_ness").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
        assert_eq!(body["result"]["topic_info"]["title"], "Loch Ness");
        assert_eq!(body["result"]["manifest"]["items"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_unknown_topic_is_404() {
        let tmp = TempDir::new().unwrap();
        let (status, body) = get_json(app(&tmp), "/api/topics/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["ok"], false);
    }

    #[tokio::test]
    async fn test_dot_dot_slug_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let (status, _) = get_json(app(&tmp), "/api/topics/..").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health_reports_generator() {
        let tmp = TempDir::new().unwrap();
        let (status, body) = get_json(app(&tmp), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["generator"], "placeholder");
    }
}
