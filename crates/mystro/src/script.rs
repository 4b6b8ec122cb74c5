//! Script Writer - Voiceover script in simple everyday Hindi
//!
//! Template based: a hook that names the topic, a fixed background and
//! timeline body, and a closing call to action. Sections are separated by a
//! blank line so downstream stages can work line by line.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::topic::TopicRecord;

const SECTION_SEPARATOR: &str = "\n\n";

const BODY: &str = "पृष्ठभूमि: मैं आपको संक्षेप में बताऊंगा कि ये है क्या और इसके बड़े खिलाड़ी कौन हैं.

Timeline:
- शुरुआत: मुख्य घटनाएँ और समयसीमा।
- विवाद: किन बिंदुओं पर मतभेद हैं।
- खुलासे: जिन रिपोर्ट्स की बात कर रहा हूँ, उनका सार।

निष्कर्ष: क्या अब हमें क्या समझना चाहिए और आगे क्या देखने वाली चीज़ें हैं?";

const OUTRO: &str =
    "अगर आप चाहते हैं कि मैं इस्के ऊपर और गहराई से जाँच करूँ, तो बताइये।";

/// Full voiceover script, persisted as a bare JSON string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(type = "string")]
pub struct Script {
    pub text: String,
}

impl Script {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScriptWriter;

impl ScriptWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn generate_script(&self, topic: &TopicRecord) -> Script {
        let hook = hook_line(&topic.title);
        let text = [hook.as_str(), BODY, OUTRO].join(SECTION_SEPARATOR);
        Script { text }
    }
}

fn hook_line(title: &str) -> String {
    format!(
        "देखिए... {} — क्या सच सामने आया है या अभी भी पर्दा बाकी है?",
        title
    )
}
