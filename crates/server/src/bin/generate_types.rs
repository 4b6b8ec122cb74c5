//! Writes TypeScript declarations for the API wire types
//!
//! Usage:
//!   cargo run --bin generate_types -- [output-path]
//!
//! Defaults to `shared/types.ts` at the workspace root.

use std::path::PathBuf;

use anyhow::{Context, Result};
use mystro::{
    Artifacts, Manifest, PipelineStage, RunPayload, SavedTopic, Script, SeoPack,
    ShortSuggestion, ThumbnailConcept, TopicRecord,
};
use mystro_server::{
    response::ApiEnvelope,
    routes::{health::HealthStatus, run::RunRequest},
};
use ts_rs::TS;

fn main() -> Result<()> {
    let output = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../shared/types.ts"));

    let decls = [
        TopicRecord::decl(),
        Script::decl(),
        ShortSuggestion::decl(),
        SeoPack::decl(),
        ThumbnailConcept::decl(),
        Artifacts::decl(),
        RunPayload::decl(),
        Manifest::decl(),
        SavedTopic::decl(),
        PipelineStage::decl(),
        RunRequest::decl(),
        HealthStatus::decl(),
        ApiEnvelope::<serde_json::Value>::decl(),
    ];

    let mut content = String::from("// This file was generated by `generate_types`. Do not edit.\n\n");
    for decl in decls {
        content.push_str("export ");
        content.push_str(&decl);
        content.push_str("\n\n");
    }

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(&output, content)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("Wrote {}", output.display());
    Ok(())
}
