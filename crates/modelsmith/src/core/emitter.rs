//! Emitter trait
//!
//! An emitter converts the extracted model into target artifacts, writing
//! them through a [`Workspace`](super::workspace::Workspace) so the
//! conversion logic never touches the filesystem directly.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use super::model::ClassModel;
use super::workspace::Workspace;

/// Summary of one emission pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmitReport {
    /// Number of classes that produced an artifact
    pub class_count: usize,
    /// Workspace-relative paths written, in emission order
    pub files: Vec<PathBuf>,
}

impl EmitReport {
    pub fn record(&mut self, path: PathBuf) {
        self.files.push(path);
    }
}

/// Trait for output emitters
pub trait Emitter: Send + Sync {
    /// Emit one artifact per class in `model` into `workspace`
    ///
    /// Same-name collisions silently overwrite; pre-existing unrelated
    /// workspace contents are left alone.
    fn emit(&self, model: &ClassModel, workspace: &mut dyn Workspace) -> Result<EmitReport>;

    /// Get the name of this emitter
    fn name(&self) -> &'static str;
}
