use axum::{extract::State, response::Json as ResponseJson};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{AppState, response::ApiEnvelope};

#[derive(Debug, Serialize, Deserialize, TS)]
pub struct HealthStatus {
    pub status: String,
    pub generator: String,
}

pub async fn health_check(State(state): State<AppState>) -> ResponseJson<ApiEnvelope<HealthStatus>> {
    ResponseJson(ApiEnvelope::success(HealthStatus {
        status: "ok".to_string(),
        generator: state.generator().name().to_string(),
    }))
}
