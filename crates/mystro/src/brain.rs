//! MystroBrain - Runs the stages in order and files the result
//!
//! analyze → script → shorts → SEO pack → thumbnail → save. Strictly linear:
//! the first failure aborts the run and nothing is written before the save
//! stage.

use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};
use ts_rs::TS;

use crate::{
    organizer::{Organizer, UNTITLED_SLUG},
    script::{Script, ScriptWriter},
    seo::{SeoPack, SeoPackager},
    shorts::{ShortExtractor, ShortSuggestion},
    thumbnail::{ThumbnailConcept, ThumbnailConceptor},
    topic::{TopicAnalyzer, TopicRecord},
    MystroConfig, Result,
};

pub const TOPIC_INFO_KEY: &str = "topic_info";
pub const SCRIPT_KEY: &str = "script_hindi";
pub const SHORTS_KEY: &str = "shorts";
pub const SEO_PACK_KEY: &str = "seo_pack";
pub const THUMBNAIL_CONCEPT_KEY: &str = "thumbnail_concept";
/// Reserved key for the folder annotation; never persisted
pub const SAVED_FOLDER_KEY: &str = "_saved_folder";

/// Pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Analyze,
    Script,
    Shorts,
    SeoPack,
    Thumbnail,
    Save,
}

impl PipelineStage {
    pub const ALL: [PipelineStage; 6] = [
        PipelineStage::Analyze,
        PipelineStage::Script,
        PipelineStage::Shorts,
        PipelineStage::SeoPack,
        PipelineStage::Thumbnail,
        PipelineStage::Save,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Analyze => "analyze",
            PipelineStage::Script => "script",
            PipelineStage::Shorts => "shorts",
            PipelineStage::SeoPack => "seo_pack",
            PipelineStage::Thumbnail => "thumbnail",
            PipelineStage::Save => "save",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PipelineStage::Analyze => "Topic Analysis",
            PipelineStage::Script => "Script Writing",
            PipelineStage::Shorts => "Short Extraction",
            PipelineStage::SeoPack => "SEO Packaging",
            PipelineStage::Thumbnail => "Thumbnail Concept",
            PipelineStage::Save => "Save",
        }
    }

    pub fn order(&self) -> u32 {
        match self {
            PipelineStage::Analyze => 1,
            PipelineStage::Script => 2,
            PipelineStage::Shorts => 3,
            PipelineStage::SeoPack => 4,
            PipelineStage::Thumbnail => 5,
            PipelineStage::Save => 6,
        }
    }
}

/// The five artifacts of one run, in persistence order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct Artifacts {
    pub topic_info: TopicRecord,
    pub script_hindi: Script,
    pub shorts: Vec<ShortSuggestion>,
    pub seo_pack: SeoPack,
    pub thumbnail_concept: ThumbnailConcept,
}

impl Artifacts {
    /// Named items as handed to the organizer
    pub fn items(&self) -> Result<Vec<(&'static str, Value)>> {
        Ok(vec![
            (TOPIC_INFO_KEY, serde_json::to_value(&self.topic_info)?),
            (SCRIPT_KEY, serde_json::to_value(&self.script_hindi)?),
            (SHORTS_KEY, serde_json::to_value(&self.shorts)?),
            (SEO_PACK_KEY, serde_json::to_value(&self.seo_pack)?),
            (THUMBNAIL_CONCEPT_KEY, serde_json::to_value(&self.thumbnail_concept)?),
        ])
    }
}

/// Result of `run_pipeline`: the artifacts plus where they were saved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct RunPayload {
    #[serde(flatten)]
    pub artifacts: Artifacts,
    #[serde(rename = "_saved_folder")]
    pub saved_folder: String,
}

impl RunPayload {
    pub fn saved_folder(&self) -> &Path {
        Path::new(&self.saved_folder)
    }
}

pub struct MystroBrain {
    analyzer: TopicAnalyzer,
    writer: ScriptWriter,
    shorter: ShortExtractor,
    seo: SeoPackager,
    thumb: ThumbnailConceptor,
    organizer: Organizer,
}

impl MystroBrain {
    pub fn new(config: &MystroConfig) -> Self {
        Self {
            analyzer: TopicAnalyzer::new(),
            writer: ScriptWriter::new(),
            shorter: ShortExtractor::new(),
            seo: SeoPackager::new(),
            thumb: ThumbnailConceptor::new(),
            organizer: Organizer::new(config.outputs_dir.clone()),
        }
    }

    pub fn run_pipeline(&self, raw_topic_text: &str) -> Result<RunPayload> {
        let started = Instant::now();

        log_stage(PipelineStage::Analyze);
        let topic_info = self.analyzer.analyze(raw_topic_text);
        info!("[BRAIN] Running pipeline for: {}", topic_info.title);

        log_stage(PipelineStage::Script);
        let script_hindi = self.writer.generate_script(&topic_info);

        log_stage(PipelineStage::Shorts);
        let shorts = self.shorter.extract_shorts(script_hindi.as_str());

        log_stage(PipelineStage::SeoPack);
        let seo_pack = self.seo.make_seo_pack(&topic_info);

        log_stage(PipelineStage::Thumbnail);
        let thumbnail_concept = self.thumb.concept(&topic_info);

        let artifacts = Artifacts {
            topic_info,
            script_hindi,
            shorts,
            seo_pack,
            thumbnail_concept,
        };

        log_stage(PipelineStage::Save);
        let save_name = if artifacts.topic_info.title.is_empty() {
            UNTITLED_SLUG
        } else {
            artifacts.topic_info.title.as_str()
        };
        let folder = self.organizer.save(save_name, &artifacts.items()?)?;

        info!(
            "[BRAIN] Pipeline complete in {}ms ({} shorts) → {}",
            started.elapsed().as_millis(),
            artifacts.shorts.len(),
            folder.display()
        );

        Ok(RunPayload {
            artifacts,
            saved_folder: folder.to_string_lossy().into_owned(),
        })
    }
}

fn log_stage(stage: PipelineStage) {
    debug!(
        stage = stage.as_str(),
        "[BRAIN] Stage {}/{}: {}",
        stage.order(),
        PipelineStage::ALL.len(),
        stage.display_name()
    );
}
