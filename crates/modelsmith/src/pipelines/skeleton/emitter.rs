//! Java skeleton emitter
//!
//! Renders one Java compilation unit per class: private fields for the
//! attributes, public stubs for the methods. Stub bodies carry a TODO marker
//! and, for non-void returns, a null placeholder so the generated tree
//! compiles before anyone fills it in.

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use crate::core::{ClassDeclaration, ClassModel, EmitReport, Emitter, Workspace};

/// Emitter for Java skeleton source files
pub struct JavaEmitter;

impl JavaEmitter {
    pub fn new() -> Self {
        Self
    }

    /// Render one class as a Java compilation unit
    pub fn render_class(&self, class: &ClassDeclaration) -> String {
        let mut lines = Vec::new();
        lines.push(format!("public class {} {{", class.name));
        lines.push(String::new());

        for attr in &class.attributes {
            lines.push(format!("    private {} {};", attr.attr_type, attr.name));
        }
        lines.push(String::new());

        for method in &class.methods {
            lines.push(format!(
                "    public {} {}({}) {{",
                method.return_type, method.name, method.parameters
            ));
            lines.push("        // TODO: implement".to_string());
            if method.returns_value() {
                lines.push("        return null;".to_string());
            }
            lines.push("    }".to_string());
            lines.push(String::new());
        }

        lines.push("}".to_string());
        lines.join("\n")
    }
}

impl Default for JavaEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for JavaEmitter {
    fn emit(&self, model: &ClassModel, workspace: &mut dyn Workspace) -> Result<EmitReport> {
        let mut report = EmitReport {
            class_count: model.class_count(),
            ..Default::default()
        };

        for class in model.classes() {
            let path = PathBuf::from(format!("{}.java", class.name));
            let unit = self.render_class(class);
            workspace.write_file(&path, unit.as_bytes())?;
            debug!(class = %class.name, file = %path.display(), "wrote skeleton");
            report.record(path);
        }

        Ok(report)
    }

    fn name(&self) -> &'static str {
        "java-skeleton"
    }
}
