//! Core error types for the extraction and emission pipelines

use thiserror::Error;

/// Core error types for pipeline processing
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Extract error: {message}")]
    ExtractError { message: String },

    #[error("Emit error: {message}")]
    EmitError { message: String },

    #[error("Archive error: {message}")]
    ArchiveError { message: String },

    #[error("Workspace error: {message}")]
    WorkspaceError { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl ModelError {
    /// Create a new extract error
    pub fn extract_error(message: impl Into<String>) -> Self {
        Self::ExtractError {
            message: message.into(),
        }
    }

    /// Create a new emit error
    pub fn emit_error(message: impl Into<String>) -> Self {
        Self::EmitError {
            message: message.into(),
        }
    }

    /// Create a new archive error
    pub fn archive_error(message: impl Into<String>) -> Self {
        Self::ArchiveError {
            message: message.into(),
        }
    }

    /// Create a new workspace error
    pub fn workspace_error(message: impl Into<String>) -> Self {
        Self::WorkspaceError {
            message: message.into(),
        }
    }
}
