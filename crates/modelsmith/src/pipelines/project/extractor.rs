//! PHP source extractor
//!
//! Regex-extracts class, property, and method declarations from one PHP
//! source unit. There is no brace matching: every member pattern found
//! between a class keyword and the end of the text is attributed to that
//! class. In a file declaring several classes, earlier classes therefore
//! absorb the members of later ones; the extractor warns when it sees such a
//! file but keeps the behavior (see DESIGN.md).

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{trace, warn};

use crate::core::{
    AttributeDeclaration, ClassDeclaration, ClassModel, Extractor, MethodDeclaration, Visibility,
};

static PHP_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"class\s+([A-Za-z_][A-Za-z0-9_]*)").expect("class pattern"));

static PHP_PROPERTY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(public|private|protected|var)\s+\$([A-Za-z_][A-Za-z0-9_]*)")
        .expect("property pattern")
});

static PHP_METHOD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(public|private|protected)?\s*function\s+([A-Za-z_][A-Za-z0-9_]*)\s*\(([^)]*)\)")
        .expect("method pattern")
});

/// Extractor for PHP source text
pub struct PhpExtractor;

impl PhpExtractor {
    pub fn new() -> Self {
        Self
    }

    fn keyword_visibility(keyword: Option<&str>) -> Visibility {
        keyword
            .and_then(Visibility::from_keyword)
            .unwrap_or_default()
    }
}

impl Default for PhpExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for PhpExtractor {
    fn extract(&self, input: &str, model: &mut ClassModel) -> Result<()> {
        let class_matches: Vec<_> = PHP_CLASS.captures_iter(input).collect();
        if class_matches.len() > 1 {
            warn!(
                classes = class_matches.len(),
                "source unit declares several classes; members after each class \
                 keyword are attributed to it, so earlier classes absorb later members"
            );
        }

        for caps in &class_matches {
            let name = &caps[1];
            // Member scan runs from the class keyword to end of text
            let body = &input[caps.get(0).expect("whole match").end()..];
            let mut class = ClassDeclaration::new(name);

            for prop in PHP_PROPERTY.captures_iter(body) {
                class.add_attribute(
                    AttributeDeclaration::new(&prop[2])
                        .with_visibility(Self::keyword_visibility(Some(&prop[1]))),
                );
            }

            for method in PHP_METHOD.captures_iter(body) {
                class.add_method(
                    MethodDeclaration::new(&method[2])
                        .with_parameters(method.get(3).map_or("", |m| m.as_str()))
                        .with_visibility(Self::keyword_visibility(
                            method.get(1).map(|m| m.as_str()),
                        )),
                );
            }

            trace!(
                class = %class.name,
                properties = class.attributes.len(),
                methods = class.methods.len(),
                "extracted class"
            );
            model.add_class(class);
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "php"
    }

    fn can_extract(&self, input: &str) -> bool {
        input.contains("<?php") || input.contains("function ")
    }
}
