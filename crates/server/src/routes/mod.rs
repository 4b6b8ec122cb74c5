use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::{AppState, middleware::request_id_middleware};

pub mod health;
pub mod run;
pub mod topics;

pub fn router(state: AppState, cors: bool) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health::health_check))
        .merge(run::router())
        .merge(topics::router());

    let app = Router::new()
        // Older dashboards post straight to /run
        .route("/run", post(run::run_prompt))
        .nest("/api", api_routes)
        .with_state(state)
        .layer(middleware::from_fn(request_id_middleware));

    if cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}
