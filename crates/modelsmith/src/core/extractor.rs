//! Extractor trait
//!
//! An extractor scans one source unit's text and appends every class
//! declaration it recognizes to the shared model. Extraction is best-effort:
//! unrecognized text is skipped, zero matches is a valid silent result, and
//! an error is reserved for failures of the pipeline itself rather than of
//! the input.

use anyhow::Result;

use super::model::ClassModel;

/// Trait for structural extractors
pub trait Extractor: Send + Sync {
    /// Scan `input` and append recognized class declarations to `model`
    ///
    /// Classes are appended in order of first match; members within a class
    /// keep source declaration order.
    fn extract(&self, input: &str, model: &mut ClassModel) -> Result<()>;

    /// Get the name of this extractor
    fn name(&self) -> &'static str;

    /// Check whether the input looks like this extractor's source format
    fn can_extract(&self, input: &str) -> bool;
}
