//! Server configuration
//!
//! Built once in `main` from an optional TOML file plus command-line/env
//! overrides, then passed explicitly into [`crate::serve`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mystro::MystroConfig;
use serde::{Deserialize, Serialize};

/// Which generator the `/run` endpoint uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    /// Full MystroGPT pipeline, persisting to the outputs directory
    #[default]
    Pipeline,
    /// Echo-style placeholder, no filesystem access
    Placeholder,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_outputs_dir")]
    pub outputs_dir: PathBuf,

    #[serde(default)]
    pub generator: GeneratorKind,

    /// Permissive CORS for browser dashboards
    #[serde(default = "default_true")]
    pub cors: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_outputs_dir() -> PathBuf {
    MystroConfig::default().outputs_dir
}

fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            outputs_dir: default_outputs_dir(),
            generator: GeneratorKind::default(),
            cors: true,
        }
    }
}

impl ServerConfig {
    /// Load from a TOML file, or return defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: ServerConfig = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn mystro_config(&self) -> MystroConfig {
        MystroConfig::default().with_outputs_dir(self.outputs_dir.clone())
    }
}

/// Command-line/env overrides layered on top of the file config
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigOverrides {
    /// Address to bind
    #[arg(long, env = "MYSTRO_HOST")]
    pub host: Option<String>,

    /// Port to bind
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Base directory for generated topic folders
    #[arg(long, env = "MYSTRO_OUTPUTS_DIR")]
    pub outputs_dir: Option<PathBuf>,

    /// Generator behind the run endpoint
    #[arg(long, env = "MYSTRO_GENERATOR", value_enum)]
    pub generator: Option<GeneratorKind>,

    /// Disable CORS headers
    #[arg(long)]
    pub no_cors: bool,
}

impl ConfigOverrides {
    pub fn apply(self, config: &mut ServerConfig) {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(outputs_dir) = self.outputs_dir {
            config.outputs_dir = outputs_dir;
        }
        if let Some(generator) = self.generator {
            config.generator = generator;
        }
        if self.no_cors {
            config.cors = false;
        }
    }
}
