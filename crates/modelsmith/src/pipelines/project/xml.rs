//! Minimal XML document builder
//!
//! Just enough XML for the model documents: elements, attributes in
//! insertion order, nested children, self-closing empty elements, and
//! standard entity escaping. Attribute values are escaped at serialization
//! time; element and attribute names are written as given.

/// An XML element with attributes and child elements
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    pub fn child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn push_child(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Serialize as a standalone document with an XML declaration
    pub fn to_document(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
        self.write_into(&mut out, 0);
        out
    }

    fn write_into(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attrs {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape_xml(value));
            out.push('"');
        }

        if self.children.is_empty() {
            out.push_str("/>\n");
            return;
        }

        out.push_str(">\n");
        for child in &self.children {
            child.write_into(out, depth + 1);
        }
        out.push_str(&indent);
        out.push_str("</");
        out.push_str(&self.name);
        out.push_str(">\n");
    }
}

/// Escape special XML characters
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_element_self_closes() {
        let doc = XmlElement::new("Project")
            .attr("version", "1.0")
            .to_document();
        assert_eq!(
            doc,
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<Project version=\"1.0\"/>\n"
        );
    }

    #[test]
    fn test_nested_children_indent() {
        let doc = XmlElement::new("Class")
            .attr("name", "Customer")
            .child(XmlElement::new("Attribute").attr("name", "name"))
            .child(XmlElement::new("Operation").attr("name", "addOrder"))
            .to_document();

        assert!(doc.contains("<Class name=\"Customer\">\n"));
        assert!(doc.contains("  <Attribute name=\"name\"/>\n"));
        assert!(doc.contains("  <Operation name=\"addOrder\"/>\n"));
        assert!(doc.ends_with("</Class>\n"));
    }

    #[test]
    fn test_attribute_order_is_insertion_order() {
        let doc = XmlElement::new("Class")
            .attr("id", "1")
            .attr("name", "A")
            .to_document();
        let id_pos = doc.find("id=").unwrap();
        let name_pos = doc.find("name=").unwrap();
        assert!(id_pos < name_pos);
    }

    #[test]
    fn test_attribute_values_escaped() {
        let doc = XmlElement::new("Class")
            .attr("name", "A<B> & \"C\"")
            .to_document();
        assert!(doc.contains("name=\"A&lt;B&gt; &amp; &quot;C&quot;\""));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a&b"), "a&amp;b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_xml("'quote'"), "&apos;quote&apos;");
        assert_eq!(escape_xml("plain"), "plain");
    }
}
