//! Pipeline orchestration
//!
//! Wires each pipeline's stages together: load → extract → emit, plus the
//! archive unpack/repack around the project pipeline. Each stage runs
//! exactly once per invocation; there are no retries and no resumability.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, span, Level};
use walkdir::WalkDir;

use crate::core::{ClassModel, DiskWorkspace, EmitReport, Emitter, Extractor, Workspace};
use crate::pipelines::project::{
    pack_archive, read_text_lossy, unpack_archive, ModelArchiveEmitter, PhpExtractor,
};
use crate::pipelines::skeleton::{DiagramExtractor, JavaEmitter};

/// Source formats the extractors understand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Diagram,
    PhpSource,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Diagram => write!(f, "diagram"),
            SourceKind::PhpSource => write!(f, "php-source"),
        }
    }
}

/// Classify raw text as one of the supported source formats
///
/// PHP wins on its unambiguous markers; everything else is treated as
/// diagram text, the more permissive of the two formats.
pub fn detect_source_kind(input: &str) -> SourceKind {
    if PhpExtractor::new().can_extract(input) {
        SourceKind::PhpSource
    } else {
        SourceKind::Diagram
    }
}

/// Diagram text → Java skeleton files
pub struct SkeletonPipeline {
    extractor: DiagramExtractor,
    emitter: JavaEmitter,
}

impl SkeletonPipeline {
    pub fn new() -> Self {
        Self {
            extractor: DiagramExtractor::new(),
            emitter: JavaEmitter::new(),
        }
    }

    /// Run the pipeline over one diagram source unit
    ///
    /// The workspace root is the output directory; one `<Name>.java` file is
    /// written per recognized class.
    pub fn run(&self, input: &str, workspace: &mut dyn Workspace) -> Result<EmitReport> {
        let pipeline_span = span!(Level::INFO, "skeleton_pipeline", input_len = input.len());
        let _enter = pipeline_span.enter();

        info!("Starting skeleton pipeline");

        let extract_span = span!(Level::DEBUG, "pipeline_extract");
        let _extract_enter = extract_span.enter();
        let mut model = ClassModel::new();
        self.extractor.extract(input, &mut model)?;
        debug!(class_count = model.class_count(), "Extraction completed");
        drop(_extract_enter);

        let emit_span = span!(Level::DEBUG, "pipeline_emit");
        let _emit_enter = emit_span.enter();
        let report = self.emitter.emit(&model, workspace)?;
        drop(_emit_enter);

        info!(
            class_count = report.class_count,
            files = report.files.len(),
            "Skeleton pipeline completed"
        );
        Ok(report)
    }
}

impl Default for SkeletonPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Working paths for the project pipeline
///
/// All three are deleted and recreated on every run; re-running is
/// destructive-idempotent.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Directory the input archive is extracted into
    pub extract_dir: PathBuf,
    /// Staging directory for the model document tree
    pub stage_dir: PathBuf,
    /// Output archive path
    pub output: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            extract_dir: PathBuf::from("php_src"),
            stage_dir: PathBuf::from("temp_vpp"),
            output: PathBuf::from("GeneratedProject.vpp"),
        }
    }
}

/// Summary of one project pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct ProjectReport {
    /// Number of classes in the emitted model
    pub class_count: usize,
    /// Number of source files scanned
    pub source_files: usize,
    /// Path of the produced archive
    pub output: PathBuf,
}

/// PHP source archive → UML model project archive
pub struct ProjectPipeline {
    extractor: PhpExtractor,
    emitter: ModelArchiveEmitter,
    config: ProjectConfig,
}

impl ProjectPipeline {
    pub fn new() -> Self {
        Self::with_config(ProjectConfig::default())
    }

    pub fn with_config(config: ProjectConfig) -> Self {
        Self {
            extractor: PhpExtractor::new(),
            emitter: ModelArchiveEmitter::new(),
            config,
        }
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Run the pipeline over one input archive
    pub fn run(&self, archive_path: &Path) -> Result<ProjectReport> {
        let pipeline_span = span!(
            Level::INFO,
            "project_pipeline",
            archive = %archive_path.display()
        );
        let _enter = pipeline_span.enter();

        info!("Starting project pipeline");
        self.clean_working_paths()?;

        let unpack_span = span!(Level::DEBUG, "pipeline_unpack");
        let _unpack_enter = unpack_span.enter();
        unpack_archive(archive_path, &self.config.extract_dir)?;
        drop(_unpack_enter);

        let extract_span = span!(Level::DEBUG, "pipeline_extract");
        let _extract_enter = extract_span.enter();
        let mut model = ClassModel::new();
        let source_files = self.extract_sources(&mut model)?;
        debug!(
            source_files,
            class_count = model.class_count(),
            "Extraction completed"
        );
        drop(_extract_enter);

        let emit_span = span!(Level::DEBUG, "pipeline_emit");
        let _emit_enter = emit_span.enter();
        fs::create_dir_all(&self.config.stage_dir)?;
        let mut workspace = DiskWorkspace::new(&self.config.stage_dir);
        self.emitter.emit(&model, &mut workspace)?;
        drop(_emit_enter);

        let pack_span = span!(Level::DEBUG, "pipeline_pack");
        let _pack_enter = pack_span.enter();
        pack_archive(&self.config.stage_dir, &self.config.output)?;
        drop(_pack_enter);

        info!(
            class_count = model.class_count(),
            output = %self.config.output.display(),
            "Project pipeline completed"
        );
        Ok(ProjectReport {
            class_count: model.class_count(),
            source_files,
            output: self.config.output.clone(),
        })
    }

    /// Delete prior working directories and output archive without asking
    fn clean_working_paths(&self) -> Result<()> {
        for dir in [&self.config.extract_dir, &self.config.stage_dir] {
            if dir.exists() {
                fs::remove_dir_all(dir)
                    .with_context(|| format!("failed to remove '{}'", dir.display()))?;
            }
        }
        if self.config.output.exists() {
            fs::remove_file(&self.config.output).with_context(|| {
                format!("failed to remove '{}'", self.config.output.display())
            })?;
        }
        Ok(())
    }

    /// Scan every extracted `.php` file into the model, in visitation order
    fn extract_sources(&self, model: &mut ClassModel) -> Result<usize> {
        let mut source_files = 0;
        for entry in WalkDir::new(&self.config.extract_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let is_php = entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("php"));
            if !is_php {
                continue;
            }

            let text = read_text_lossy(entry.path())?;
            self.extractor.extract(&text, model)?;
            source_files += 1;
        }
        Ok(source_files)
    }
}

impl Default for ProjectPipeline {
    fn default() -> Self {
        Self::new()
    }
}
