//! Diagram extractor
//!
//! Scans UML-like class diagram text into the shared model. Extraction is
//! regex-based and best-effort: a class body is everything between the class
//! header and the first closing brace, so an unterminated block never matches
//! and is skipped without error.

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::core::{
    AttributeDeclaration, ClassDeclaration, ClassModel, Extractor, MethodDeclaration, Visibility,
};

static CLASS_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"class\s+(\w+)\s*\{([^}]*)\}").expect("class block pattern"));

static METHOD_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+)\s*\(([^)]*)\)\s*(?::\s*(\w+))?").expect("method pattern"));

/// Extractor for UML-like class diagram text
pub struct DiagramExtractor;

impl DiagramExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Strip a leading visibility marker or keyword, recording what it was
    ///
    /// Only the leading position counts; interior marker characters survive
    /// verbatim (they may be part of parameter text).
    fn strip_visibility<'a>(&self, line: &'a str) -> (Visibility, &'a str) {
        let mut chars = line.chars();
        if let Some(first) = chars.next() {
            if let Some(visibility) = Visibility::from_marker(first) {
                return (visibility, chars.as_str().trim_start());
            }
        }
        for keyword in ["public", "private", "protected"] {
            if let Some(rest) = line.strip_prefix(keyword) {
                if rest.starts_with(char::is_whitespace) {
                    let visibility =
                        Visibility::from_keyword(keyword).unwrap_or_default();
                    return (visibility, rest.trim_start());
                }
            }
        }
        (Visibility::default(), line)
    }

    /// Split an attribute line on its first colon
    ///
    /// No colon means the whole trimmed line is the name and the type stays
    /// at its default.
    pub fn parse_attribute(&self, line: &str) -> AttributeDeclaration {
        match line.split_once(':') {
            Some((name, attr_type)) => {
                AttributeDeclaration::new(name.trim()).with_type(attr_type.trim())
            }
            None => {
                trace!(line, "attribute line has no type, defaulting");
                AttributeDeclaration::new(line.trim())
            }
        }
    }

    /// Parse a method line of the shape `name(params)` or `name(params): type`
    ///
    /// Lines that fail the pattern yield `None` and are dropped from output.
    pub fn parse_method(&self, line: &str) -> Option<MethodDeclaration> {
        let caps = METHOD_LINE.captures(line)?;
        let mut method = MethodDeclaration::new(&caps[1])
            .with_parameters(caps.get(2).map_or("", |m| m.as_str()));
        if let Some(return_type) = caps.get(3) {
            method = method.with_return_type(return_type.as_str());
        }
        Some(method)
    }
}

impl Default for DiagramExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for DiagramExtractor {
    fn extract(&self, input: &str, model: &mut ClassModel) -> Result<()> {
        for caps in CLASS_BLOCK.captures_iter(input) {
            let name = &caps[1];
            let body = &caps[2];
            let mut class = ClassDeclaration::new(name);

            for raw in body.lines() {
                let line = raw.trim();
                // Blank lines and ' comments carry no members
                if line.is_empty() || line.starts_with('\'') {
                    continue;
                }

                let (visibility, member) = self.strip_visibility(line);

                if member.contains('(') && member.contains(')') {
                    match self.parse_method(member) {
                        Some(method) => class.add_method(method.with_visibility(visibility)),
                        None => {
                            debug!(class = %class.name, line, "dropping unparseable method line");
                        }
                    }
                } else if member.contains(':') {
                    class.add_attribute(self.parse_attribute(member).with_visibility(visibility));
                }
            }

            trace!(
                class = %class.name,
                attributes = class.attributes.len(),
                methods = class.methods.len(),
                "extracted class block"
            );
            model.add_class(class);
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "diagram"
    }

    fn can_extract(&self, input: &str) -> bool {
        input.contains("class ") && input.contains('{')
    }
}
