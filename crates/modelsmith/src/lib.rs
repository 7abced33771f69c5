//! Modelsmith - Best-effort class-model extraction and code generation
//!
//! A library for pulling class declarations out of lightweight textual
//! sources and emitting them in another representation. Two pipelines are
//! provided:
//!
//! - **skeleton**: UML-like class diagram text → Java skeleton source files
//! - **project**: zip archive of PHP sources → zip-based UML model project
//!
//! # Quick Start
//!
//! ```rust
//! let model = modelsmith::extract("class Greeter {\n    +name: String\n}").unwrap();
//! assert_eq!(model.class_count(), 1);
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual components:
//!
//! ```rust
//! use modelsmith::prelude::*;
//!
//! let input = "class Order {\n    +total(): float\n}";
//!
//! // Extract into a model
//! let extractor = DiagramExtractor::new();
//! let mut model = ClassModel::new();
//! extractor.extract(input, &mut model).unwrap();
//!
//! // Emit through an in-memory workspace
//! let mut workspace = MemoryWorkspace::new();
//! let report = JavaEmitter::new().emit(&model, &mut workspace).unwrap();
//! assert_eq!(report.class_count, 1);
//! ```

pub mod core;
pub mod pipelines;

pub use core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        AttributeDeclaration, ClassDeclaration, ClassModel, DiskWorkspace, EmitReport, Emitter,
        Extractor, MemoryWorkspace, MethodDeclaration, Visibility, Workspace,
    };
    pub use crate::pipelines::project::{ModelArchiveEmitter, PhpExtractor};
    pub use crate::pipelines::skeleton::{DiagramExtractor, JavaEmitter};
    pub use crate::pipelines::{
        detect_source_kind, ProjectConfig, ProjectPipeline, SkeletonPipeline, SourceKind,
    };
}

/// Extract class declarations from diagram text
///
/// This is the simplest way to inspect what the skeleton pipeline would
/// generate. Zero recognized classes is a valid, silent result.
///
/// # Example
/// ```rust
/// let model = modelsmith::extract("class Customer {\n    +name: String\n}").unwrap();
/// assert_eq!(model.classes()[0].attributes[0].attr_type, "String");
/// ```
pub fn extract(input: &str) -> anyhow::Result<ClassModel> {
    use crate::core::Extractor as _;
    use crate::pipelines::skeleton::DiagramExtractor;

    let extractor = DiagramExtractor::new();
    let mut model = ClassModel::new();
    extractor.extract(input, &mut model)?;
    Ok(model)
}

/// Render diagram text into Java skeleton units without touching disk
///
/// Returns `(file name, source text)` pairs in extraction order.
///
/// # Example
/// ```rust
/// let units = modelsmith::skeletons("class Greeter {\n    +greet(name): String\n}").unwrap();
/// assert_eq!(units[0].0, "Greeter.java");
/// assert!(units[0].1.contains("public String greet(name)"));
/// ```
pub fn skeletons(input: &str) -> anyhow::Result<Vec<(String, String)>> {
    use crate::pipelines::skeleton::JavaEmitter;

    let model = extract(input)?;
    let emitter = JavaEmitter::new();
    Ok(model
        .classes()
        .iter()
        .map(|class| (format!("{}.java", class.name), emitter.render_class(class)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_returns_model() {
        let model = extract("class A {\n    +x: int\n}\nclass B {\n}").unwrap();
        assert_eq!(model.class_count(), 2);
    }

    #[test]
    fn test_extract_empty_is_ok() {
        let model = extract("").unwrap();
        assert!(model.is_empty());
    }

    #[test]
    fn test_skeletons_returns_unit_per_class() {
        let units = skeletons("class A {\n}\nclass B {\n}").unwrap();
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].0, "A.java");
        assert_eq!(units[1].0, "B.java");
    }

    #[test]
    fn test_skeletons_render_members() {
        let units =
            skeletons("class Order {\n    +qty: int\n    +total(x, y): float\n}").unwrap();
        let source = &units[0].1;
        assert!(source.contains("private int qty;"));
        assert!(source.contains("public float total(x, y) {"));
        assert!(source.contains("return null;"));
    }
}
