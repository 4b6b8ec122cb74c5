//! HTTP boundary for the MystroGPT pipeline
//!
//! `POST /api/run` drives the pipeline; `/api/topics` exposes the saved
//! folders to dashboards.

pub mod config;
pub mod error;
pub mod generator;
pub mod middleware;
pub mod response;
pub mod routes;

use std::sync::Arc;

use anyhow::{Context, Result};
use mystro::Library;

use crate::{
    config::ServerConfig,
    generator::{Generator, negotiate},
};

#[derive(Clone)]
pub struct AppState {
    generator: Arc<dyn Generator>,
    library: Arc<Library>,
}

impl AppState {
    pub fn new(generator: Arc<dyn Generator>, library: Library) -> Self {
        Self {
            generator,
            library: Arc::new(library),
        }
    }

    /// Negotiate the generator once and point the library at the outputs dir
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(negotiate(config), Library::new(config.outputs_dir.clone()))
    }

    pub fn generator(&self) -> Arc<dyn Generator> {
        Arc::clone(&self.generator)
    }

    pub fn library(&self) -> &Library {
        &self.library
    }
}

pub async fn serve(config: ServerConfig) -> Result<()> {
    let state = AppState::from_config(&config);
    let app = routes::router(state, config.cors);

    let listener = tokio::net::TcpListener::bind(config.addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.addr()))?;
    let local_addr = listener.local_addr()?;

    tracing::info!("Server running on http://{local_addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
