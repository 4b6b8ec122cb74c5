//! Organizer - Files a run's artifacts under a topic folder
//!
//! Layout under the base directory:
//! ```text
//! outputs/
//! └── <slug>/
//!     ├── topic_info.json
//!     ├── script_hindi.json
//!     ├── shorts.json
//!     ├── seo_pack.json
//!     ├── thumbnail_concept.json
//!     └── manifest.json
//! ```
//!
//! Saving the same topic again overwrites the folder's files in place. There
//! is no rollback: a failure midway leaves old and new files side by side.

use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};
use ts_rs::TS;

use crate::{MystroError, Result};

pub const MANIFEST_FILE: &str = "manifest.json";
pub const SLUG_MAX_CHARS: usize = 120;
/// Folder name used when a title has no filesystem-safe characters
pub const UNTITLED_SLUG: &str = "untitled_topic";

/// What was saved for a run and when
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct Manifest {
    pub topic: String,
    /// RFC 3339, UTC
    pub timestamp_utc: String,
    pub items: Vec<String>,
}

/// Filesystem-safe folder name for a topic title
///
/// Lowercases, keeps only `a-z`, `0-9`, `-`, `_` and spaces, turns spaces
/// into underscores and caps the length.
pub fn slugify(title: &str) -> String {
    let slug: String = title
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | ' '))
        .map(|c| if c == ' ' { '_' } else { c })
        .take(SLUG_MAX_CHARS)
        .collect();

    if slug.is_empty() {
        UNTITLED_SLUG.to_string()
    } else {
        slug
    }
}

#[derive(Debug, Clone)]
pub struct Organizer {
    base_dir: PathBuf,
}

impl Organizer {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Folder a topic title is saved under
    pub fn folder_for(&self, topic_title: &str) -> PathBuf {
        self.base_dir.join(slugify(topic_title))
    }

    /// Write every item as `<key>.json`, then the manifest. Returns the folder.
    pub fn save(&self, topic_title: &str, items: &[(&str, Value)]) -> Result<PathBuf> {
        ensure_dir(&self.base_dir)?;
        let folder = self.folder_for(topic_title);
        ensure_dir(&folder)?;

        let timestamp_utc = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

        for (key, value) in items {
            let path = folder.join(format!("{key}.json"));
            write_json(&path, value)?;
            debug!("Wrote {}", path.display());
        }

        let manifest = Manifest {
            topic: topic_title.to_string(),
            timestamp_utc,
            items: items.iter().map(|(key, _)| key.to_string()).collect(),
        };
        write_json(&folder.join(MANIFEST_FILE), &manifest)?;

        info!(
            "Saved {} items for '{}' to {}",
            manifest.items.len(),
            topic_title,
            folder.display()
        );

        Ok(folder)
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| MystroError::io(path, e))
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value)?;
    std::fs::write(path, bytes).map_err(|e| MystroError::io(path, e))
}
