//! SEO Packager - Title variants, description and tags tuned for YouTube

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::topic::TopicRecord;

const FIXED_TAGS: [&str; 3] = ["mystrogpt", "mystery", "explainers"];

/// Tag used when the title has no first word
pub const FALLBACK_TAG: &str = "topic";

/// Anything that is not a letter, number or underscore. Combining marks count
/// as non-word, so Devanagari matras and viramas are stripped.
static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}_]+").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct SeoPack {
    pub titles: Vec<String>,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SeoPackager;

impl SeoPackager {
    pub fn new() -> Self {
        Self
    }

    pub fn make_seo_pack(&self, topic: &TopicRecord) -> SeoPack {
        let title = topic.title.as_str();

        let titles = vec![
            format!("{title} — सच क्या है?"),
            format!("{title} Explained: Timeline और सच"),
            format!("क्या {title} सच है? (Deep Dive)"),
        ];
        let description =
            format!("वीडियो में हम {title} की पूरी timeline और विवादों का खुलासा करते हैं.");

        let mut tags: Vec<String> = FIXED_TAGS.iter().map(|t| t.to_string()).collect();
        tags.push(derived_tag(title));

        SeoPack {
            titles,
            description,
            tags,
        }
    }
}

/// First word of the title, lowercased, with non-word characters removed
fn derived_tag(title: &str) -> String {
    title
        .split_whitespace()
        .next()
        .map(|word| NON_WORD.replace_all(&word.to_lowercase(), "").into_owned())
        .unwrap_or_else(|| FALLBACK_TAG.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topic::TopicAnalyzer;

    fn pack_for(raw: &str) -> SeoPack {
        SeoPackager::new().make_seo_pack(&TopicAnalyzer::new().analyze(raw))
    }

    #[test]
    fn test_three_title_variants_contain_title() {
        let pack = pack_for("Bermuda Triangle");
        assert_eq!(pack.titles.len(), 3);
        assert!(pack.titles.iter().all(|t| t.contains("Bermuda Triangle")));
        assert!(pack.description.contains("Bermuda Triangle"));
    }

    #[test]
    fn test_tags_end_with_derived_first_word() {
        let pack = pack_for("Area-51's Secrets revealed");
        assert_eq!(&pack.tags[..3], &["mystrogpt", "mystery", "explainers"]);
        assert_eq!(pack.tags.last().map(String::as_str), Some("area51s"));
    }

    #[test]
    fn test_empty_title_falls_back() {
        let pack = pack_for("");
        assert_eq!(pack.tags.last().map(String::as_str), Some("topic"));
    }

    #[test]
    fn test_whitespace_title_falls_back() {
        let topic = TopicRecord {
            title: "   ".to_string(),
            canonical_topic: "   ".to_string(),
            angles: vec![],
            raw_text: "   ".to_string(),
        };
        let pack = SeoPackager::new().make_seo_pack(&topic);
        assert_eq!(pack.tags.last().map(String::as_str), Some(FALLBACK_TAG));
    }

    #[test]
    fn test_punctuation_only_word_gives_empty_tag() {
        let pack = pack_for("!!! what happened");
        assert_eq!(pack.tags.len(), 4);
        assert_eq!(pack.tags.last().map(String::as_str), Some(""));
    }

    #[test]
    fn test_devanagari_keeps_letters_drops_marks() {
        let pack = pack_for("रहस्य की कहानी");
        assert_eq!(pack.tags.last().map(String::as_str), Some("रहसय"));

        let pack = pack_for("कहानी");
        assert_eq!(pack.tags.last().map(String::as_str), Some("कहन"));
    }

    #[test]
    fn test_underscores_and_digits_survive() {
        let pack = pack_for("MH_370: lost");
        assert_eq!(pack.tags.last().map(String::as_str), Some("mh_370"));
    }
}
