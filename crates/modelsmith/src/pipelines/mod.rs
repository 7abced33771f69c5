//! Pipeline implementations
//!
//! Each pipeline pairs one extractor with one emitter over the shared core
//! model; the orchestrator wires the stages together.

pub mod orchestrator;
pub mod project;
pub mod skeleton;

pub use orchestrator::{
    detect_source_kind, ProjectConfig, ProjectPipeline, ProjectReport, SkeletonPipeline,
    SourceKind,
};
