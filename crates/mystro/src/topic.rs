//! Topic Analyzer - Normalizes raw input into a topic record
//!
//! Heuristic for now: the title is the trimmed input cut to a fixed length,
//! and every topic gets the same set of narrative angles.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::truncate_chars;

/// Maximum title length in characters
pub const TITLE_MAX_CHARS: usize = 200;

/// Narrative angles attached to every topic, in presentation order
pub const NARRATIVE_ANGLES: [&str; 4] = [
    "Case/Timeline",
    "Controversy",
    "Uncovered Facts",
    "What they don't want you to know",
];

/// Normalized topic, created once per run and shared by the later stages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct TopicRecord {
    pub title: String,
    /// Same as `title` until a real canonicalization step exists
    pub canonical_topic: String,
    pub angles: Vec<String>,
    pub raw_text: String,
}

#[derive(Debug, Clone, Default)]
pub struct TopicAnalyzer;

impl TopicAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, raw_text: &str) -> TopicRecord {
        let raw_text = raw_text.trim();
        let title = truncate_chars(raw_text, TITLE_MAX_CHARS);

        TopicRecord {
            canonical_topic: title.clone(),
            title,
            angles: NARRATIVE_ANGLES.iter().map(|a| a.to_string()).collect(),
            raw_text: raw_text.to_string(),
        }
    }
}
