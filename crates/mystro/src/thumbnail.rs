//! Thumbnail Conceptor - Creative direction and text overlays for a thumbnail

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::topic::TopicRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct ThumbnailConcept {
    pub headline: String,
    pub composition: String,
    pub text_overlay: Vec<String>,
    pub color_direction: String,
}

#[derive(Debug, Clone, Default)]
pub struct ThumbnailConceptor;

impl ThumbnailConceptor {
    pub fn new() -> Self {
        Self
    }

    /// The brief does not depend on the topic yet; trend analysis will feed it later.
    pub fn concept(&self, _topic: &TopicRecord) -> ThumbnailConcept {
        ThumbnailConcept {
            headline: "सच सामने आया?".to_string(),
            composition:
                "बाएँ: चौकाने वाली इमेज (close-up), दायाँ: बड़ा टेक्स्ट, नीचे-छोड़ा ब्रांडिंग"
                    .to_string(),
            text_overlay: vec!["सच क्या है?".to_string(), "Timeline Revealed".to_string()],
            color_direction: "high-contrast, bold text, cinematic shadows".to_string(),
        }
    }
}
