//! # MystroGPT - topic to content bundle
//!
//! Turns a short topic string into a voiceover script, short-clip
//! suggestions, an SEO pack and a thumbnail brief, then files everything
//! under a per-topic folder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐     ┌─────────────────┐
//! │  TopicAnalyzer  │────▶│   ScriptWriter   │────▶│ ShortExtractor  │
//! │  (TopicRecord)  │     │     (Script)     │     │    (Shorts)     │
//! └───────┬─────────┘     └──────────────────┘     └────────┬────────┘
//!         │                                                 │
//!         ├──────▶ SeoPackager ──────┐                      │
//!         └──────▶ ThumbnailConceptor┴──▶ Organizer ◀───────┘
//!                                        (outputs/<slug>/)
//! ```
//!
//! [`MystroBrain`] sequences the stages; [`Library`] reads saved folders back.

pub mod brain;
pub mod library;
pub mod organizer;
pub mod script;
pub mod seo;
pub mod shorts;
pub mod thumbnail;
pub mod topic;


use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use brain::{Artifacts, MystroBrain, PipelineStage, RunPayload};
pub use library::{Library, SavedTopic};
pub use organizer::{slugify, Manifest, Organizer};
pub use script::{Script, ScriptWriter};
pub use seo::{SeoPack, SeoPackager};
pub use shorts::{ShortExtractor, ShortSuggestion};
pub use thumbnail::{ThumbnailConcept, ThumbnailConceptor};
pub use topic::{TopicAnalyzer, TopicRecord};

/// Configuration for the MystroGPT pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MystroConfig {
    /// Base directory that holds one folder per topic
    pub outputs_dir: PathBuf,
}

impl Default for MystroConfig {
    fn default() -> Self {
        Self {
            outputs_dir: PathBuf::from("outputs"),
        }
    }
}

impl MystroConfig {
    pub fn with_outputs_dir(mut self, outputs_dir: impl Into<PathBuf>) -> Self {
        self.outputs_dir = outputs_dir.into();
        self
    }
}

/// Main error types for MystroGPT
#[derive(Debug, thiserror::Error)]
pub enum MystroError {
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid topic folder name: {0}")]
    InvalidSlug(String),
}

impl MystroError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MystroError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, MystroError>;

/// Take at most `max` characters, never splitting a code point
pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
