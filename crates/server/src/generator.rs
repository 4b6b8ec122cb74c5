//! Generators behind the `/run` endpoint
//!
//! The server is handed one generator at startup. [`negotiate`] decides which
//! one, once, and the choice lives in `AppState` for the life of the process.

use std::sync::Arc;

use anyhow::Result;
use mystro::MystroBrain;
use serde_json::{Value, json};

use crate::config::{GeneratorKind, ServerConfig};

pub const PLACEHOLDER_TITLE: &str = "MystroGPT (local - placeholder)";

pub trait Generator: Send + Sync {
    fn name(&self) -> &'static str;

    fn generate(&self, prompt: &str) -> Result<Value>;
}

/// Runs the full MystroGPT pipeline
pub struct PipelineGenerator {
    brain: MystroBrain,
}

impl PipelineGenerator {
    pub fn new(brain: MystroBrain) -> Self {
        Self { brain }
    }
}

impl Generator for PipelineGenerator {
    fn name(&self) -> &'static str {
        "pipeline"
    }

    fn generate(&self, prompt: &str) -> Result<Value> {
        let payload = self.brain.run_pipeline(prompt)?;
        Ok(serde_json::to_value(payload)?)
    }
}

/// Stand-in used when the pipeline is disabled or its outputs are unwritable
#[derive(Debug, Default)]
pub struct PlaceholderGenerator;

impl Generator for PlaceholderGenerator {
    fn name(&self) -> &'static str {
        "placeholder"
    }

    fn generate(&self, prompt: &str) -> Result<Value> {
        Ok(json!({
            "title": PLACEHOLDER_TITLE,
            "text": format!("Processed prompt (placeholder): {}", prompt),
        }))
    }
}

/// Pick the generator for this process
///
/// The pipeline needs a writable outputs directory; if it cannot be created
/// the server still starts, serving the placeholder.
pub fn negotiate(config: &ServerConfig) -> Arc<dyn Generator> {
    match config.generator {
        GeneratorKind::Placeholder => {
            tracing::info!("Run endpoint configured with placeholder generator");
            Arc::new(PlaceholderGenerator)
        }
        GeneratorKind::Pipeline => match std::fs::create_dir_all(&config.outputs_dir) {
            Ok(()) => {
                tracing::info!(
                    "Run endpoint using MystroGPT pipeline, outputs in {}",
                    config.outputs_dir.display()
                );
                Arc::new(PipelineGenerator::new(MystroBrain::new(&config.mystro_config())))
            }
            Err(e) => {
                tracing::warn!(
                    "Outputs directory {} not writable ({}), falling back to placeholder generator",
                    config.outputs_dir.display(),
                    e
                );
                Arc::new(PlaceholderGenerator)
            }
        },
    }
}
