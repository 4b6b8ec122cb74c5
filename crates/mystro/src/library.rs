//! Library - Read side of the outputs folder
//!
//! Dashboards browse previously generated topics through this. A missing
//! artifact file means "not generated yet" and is reported as `None`.

use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::{
    brain::{
        SCRIPT_KEY, SEO_PACK_KEY, SHORTS_KEY, THUMBNAIL_CONCEPT_KEY, TOPIC_INFO_KEY,
    },
    organizer::{Manifest, MANIFEST_FILE},
    seo::SeoPack,
    shorts::ShortSuggestion,
    thumbnail::ThumbnailConcept,
    topic::TopicRecord,
    MystroError, Result,
};

/// Everything found in one topic folder
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct SavedTopic {
    pub slug: String,
    pub manifest: Option<Manifest>,
    pub topic_info: Option<TopicRecord>,
    pub script_hindi: Option<String>,
    pub shorts: Option<Vec<ShortSuggestion>>,
    pub seo_pack: Option<SeoPack>,
    pub thumbnail_concept: Option<ThumbnailConcept>,
    /// File names present in the folder, sorted
    pub files: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Library {
    base_dir: PathBuf,
}

impl Library {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Sorted topic folder names; empty if nothing has been generated yet
    pub fn list_topics(&self) -> Result<Vec<String>> {
        let entries = match std::fs::read_dir(&self.base_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(MystroError::io(&self.base_dir, e)),
        };

        let mut topics = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| MystroError::io(&self.base_dir, e))?;
            if entry.path().is_dir() {
                topics.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        topics.sort();
        Ok(topics)
    }

    pub fn load(&self, slug: &str) -> Result<Option<SavedTopic>> {
        validate_slug(slug)?;

        let folder = self.base_dir.join(slug);
        if !folder.is_dir() {
            debug!("No saved folder for '{}'", slug);
            return Ok(None);
        }

        Ok(Some(SavedTopic {
            slug: slug.to_string(),
            manifest: read_optional(&folder.join(MANIFEST_FILE))?,
            topic_info: read_item(&folder, TOPIC_INFO_KEY)?,
            script_hindi: read_item(&folder, SCRIPT_KEY)?,
            shorts: read_item(&folder, SHORTS_KEY)?,
            seo_pack: read_item(&folder, SEO_PACK_KEY)?,
            thumbnail_concept: read_item(&folder, THUMBNAIL_CONCEPT_KEY)?,
            files: list_files(&folder)?,
        }))
    }
}

fn validate_slug(slug: &str) -> Result<()> {
    let invalid = slug.is_empty()
        || slug == "."
        || slug == ".."
        || slug.contains('/')
        || slug.contains('\\');
    if invalid {
        return Err(MystroError::InvalidSlug(slug.to_string()));
    }
    Ok(())
}

fn read_item<T: DeserializeOwned>(folder: &Path, key: &str) -> Result<Option<T>> {
    read_optional(&folder.join(format!("{key}.json")))
}

fn read_optional<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(MystroError::io(path, e)),
    }
}

fn list_files(folder: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder).map_err(|e| MystroError::io(folder, e))? {
        let entry = entry.map_err(|e| MystroError::io(folder, e))?;
        if entry.path().is_file() {
            files.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    files.sort();
    Ok(files)
}
