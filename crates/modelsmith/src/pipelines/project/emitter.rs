//! Model archive emitter
//!
//! Writes the fixed document layout a modeling tool expects: one XML
//! document per class under `model/uml/classes/`, a class-diagram index
//! referencing every class by identifier, and a top-level project
//! descriptor. Each class gets one freshly generated UUID used as its root
//! `id`, its file name, and its diagram reference.
//!
//! This projection is narrower than the skeleton emitter's: member elements
//! carry name and visibility only.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;
use uuid::Uuid;

use crate::core::{ClassDeclaration, ClassModel, EmitReport, Emitter, Workspace};

use super::xml::XmlElement;

/// Directory for per-class documents, relative to the staging root
pub const CLASSES_DIR: &str = "model/uml/classes";
/// Class-diagram index document, relative to the staging root
pub const DIAGRAM_FILE: &str = "model/uml/ClassDiagram.xml";
/// Project descriptor document, relative to the staging root
pub const PROJECT_FILE: &str = "project.xml";

const PROJECT_NAME: &str = "GeneratedAppsProject";
const PROJECT_VERSION: &str = "1.0";

/// Emitter for the XML model document tree
pub struct ModelArchiveEmitter;

impl ModelArchiveEmitter {
    pub fn new() -> Self {
        Self
    }

    /// Build the XML document for one class
    pub fn class_document(&self, class: &ClassDeclaration, id: &str) -> XmlElement {
        let mut root = XmlElement::new("Class").attr("id", id).attr("name", &class.name);

        for attr in &class.attributes {
            root.push_child(
                XmlElement::new("Attribute")
                    .attr("name", &attr.name)
                    .attr("visibility", attr.visibility.as_keyword()),
            );
        }

        for method in &class.methods {
            root.push_child(
                XmlElement::new("Operation")
                    .attr("name", &method.name)
                    .attr("visibility", method.visibility.as_keyword()),
            );
        }

        root
    }

    /// Build the class-diagram index referencing every class id
    pub fn diagram_document(&self, class_ids: &[String]) -> XmlElement {
        let mut diagram = XmlElement::new("Diagram")
            .attr("type", "ClassDiagram")
            .attr("id", Uuid::new_v4().to_string());

        for id in class_ids {
            diagram.push_child(XmlElement::new("ClassNode").attr("classId", id));
        }

        diagram
    }

    /// Build the project descriptor
    pub fn project_document(&self) -> XmlElement {
        XmlElement::new("Project")
            .attr("version", PROJECT_VERSION)
            .attr("name", PROJECT_NAME)
    }
}

impl Default for ModelArchiveEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for ModelArchiveEmitter {
    fn emit(&self, model: &ClassModel, workspace: &mut dyn Workspace) -> Result<EmitReport> {
        let mut report = EmitReport {
            class_count: model.class_count(),
            ..Default::default()
        };

        workspace.create_dir_all(Path::new(CLASSES_DIR))?;

        let mut class_ids = Vec::with_capacity(model.class_count());
        for class in model.classes() {
            let id = Uuid::new_v4().to_string();
            let path = PathBuf::from(CLASSES_DIR).join(format!("{}.xml", id));
            let doc = self.class_document(class, &id);
            workspace.write_file(&path, doc.to_document().as_bytes())?;
            debug!(class = %class.name, %id, "wrote class document");
            report.record(path);
            class_ids.push(id);
        }

        let diagram = self.diagram_document(&class_ids);
        workspace.write_file(Path::new(DIAGRAM_FILE), diagram.to_document().as_bytes())?;
        report.record(PathBuf::from(DIAGRAM_FILE));

        let project = self.project_document();
        workspace.write_file(Path::new(PROJECT_FILE), project.to_document().as_bytes())?;
        report.record(PathBuf::from(PROJECT_FILE));

        Ok(report)
    }

    fn name(&self) -> &'static str {
        "model-archive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        AttributeDeclaration, MemoryWorkspace, MethodDeclaration, Visibility,
    };

    fn sample_model() -> ClassModel {
        let mut class = ClassDeclaration::new("Customer");
        class.add_attribute(AttributeDeclaration::new("name"));
        class.add_attribute(
            AttributeDeclaration::new("contact").with_visibility(Visibility::Private),
        );
        class.add_method(MethodDeclaration::new("addOrder").with_parameters("$order"));

        let mut model = ClassModel::new();
        model.add_class(class);
        model
    }

    #[test]
    fn test_class_document_shape() {
        let model = sample_model();
        let doc = ModelArchiveEmitter::new()
            .class_document(&model.classes()[0], "abc-123")
            .to_document();

        assert!(doc.contains("<Class id=\"abc-123\" name=\"Customer\">"));
        assert!(doc.contains("<Attribute name=\"name\" visibility=\"public\"/>"));
        assert!(doc.contains("<Attribute name=\"contact\" visibility=\"private\"/>"));
        assert!(doc.contains("<Operation name=\"addOrder\" visibility=\"public\"/>"));
        // The narrow projection drops parameter text entirely
        assert!(!doc.contains("$order"));
    }

    #[test]
    fn test_member_element_counts() {
        let model = sample_model();
        let doc = ModelArchiveEmitter::new().class_document(&model.classes()[0], "id");
        assert_eq!(doc.child_count(), 3);

        let text = doc.to_document();
        assert_eq!(text.matches("<Attribute ").count(), 2);
        assert_eq!(text.matches("<Operation ").count(), 1);
    }

    #[test]
    fn test_emit_layout() {
        let mut ws = MemoryWorkspace::new();
        let report = ModelArchiveEmitter::new()
            .emit(&sample_model(), &mut ws)
            .unwrap();

        assert_eq!(report.class_count, 1);
        // One class document plus diagram index plus project descriptor
        assert_eq!(ws.file_count(), 3);
        assert!(ws.file(PROJECT_FILE).is_some());
        assert!(ws.file(DIAGRAM_FILE).is_some());
        assert!(ws
            .paths()
            .any(|p| p.starts_with(CLASSES_DIR) && p.extension().is_some_and(|e| e == "xml")));
    }

    #[test]
    fn test_diagram_references_class_document_id() {
        let mut ws = MemoryWorkspace::new();
        ModelArchiveEmitter::new()
            .emit(&sample_model(), &mut ws)
            .unwrap();

        let class_path = ws
            .paths()
            .find(|p| p.starts_with(CLASSES_DIR))
            .unwrap()
            .to_path_buf();
        let id = class_path.file_stem().unwrap().to_str().unwrap().to_string();

        let class_doc = ws.file_text(&class_path).unwrap();
        assert!(class_doc.contains(&format!("id=\"{}\"", id)));

        let diagram = ws.file_text(DIAGRAM_FILE).unwrap();
        assert_eq!(diagram.matches("<ClassNode ").count(), 1);
        assert!(diagram.contains(&format!("classId=\"{}\"", id)));
    }

    #[test]
    fn test_ids_are_unique_per_class() {
        let mut model = sample_model();
        model.add_class(ClassDeclaration::new("Order"));
        model.add_class(ClassDeclaration::new("Item"));

        let mut ws = MemoryWorkspace::new();
        ModelArchiveEmitter::new().emit(&model, &mut ws).unwrap();

        let mut ids: Vec<_> = ws
            .paths()
            .filter(|p| p.starts_with(CLASSES_DIR))
            .map(|p| p.file_stem().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(ids.len(), 3);
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_project_descriptor_values() {
        let doc = ModelArchiveEmitter::new().project_document().to_document();
        assert!(doc.contains("<Project version=\"1.0\" name=\"GeneratedAppsProject\"/>"));
    }
}
