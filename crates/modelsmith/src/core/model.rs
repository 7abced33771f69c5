//! Shared class model
//!
//! Stores the class declarations extracted from one or more source units.
//! Both pipelines fill this model and hand it to an emitter; entries are
//! immutable once extraction completes.

use serde::Serialize;

/// Default attribute type when a declaration carries none
pub const DEFAULT_ATTRIBUTE_TYPE: &str = "String";

/// Default method return type when a declaration carries none
pub const DEFAULT_RETURN_TYPE: &str = "void";

/// Visibility modifier for class members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public, // +
    Private,   // -
    Protected, // #
    Package,   // ~
}

impl Visibility {
    pub fn from_marker(c: char) -> Option<Self> {
        match c {
            '+' => Some(Visibility::Public),
            '-' => Some(Visibility::Private),
            '#' => Some(Visibility::Protected),
            '~' => Some(Visibility::Package),
            _ => None,
        }
    }

    /// Parse a keyword form. PHP's `var` declares a public property.
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "public" | "var" => Some(Visibility::Public),
            "private" => Some(Visibility::Private),
            "protected" => Some(Visibility::Protected),
            _ => None,
        }
    }

    pub fn as_keyword(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Protected => "protected",
            Visibility::Package => "package",
        }
    }
}

/// An attribute (field/property) declaration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeDeclaration {
    pub name: String,
    pub attr_type: String,
    pub visibility: Visibility,
}

impl AttributeDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attr_type: DEFAULT_ATTRIBUTE_TYPE.to_string(),
            visibility: Visibility::default(),
        }
    }

    pub fn with_type(mut self, attr_type: impl Into<String>) -> Self {
        self.attr_type = attr_type.into();
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

/// A method declaration
///
/// Parameter text is kept verbatim as one opaque string; no per-parameter
/// splitting happens anywhere in the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodDeclaration {
    pub name: String,
    pub parameters: String,
    pub return_type: String,
    pub visibility: Visibility,
}

impl MethodDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: String::new(),
            return_type: DEFAULT_RETURN_TYPE.to_string(),
            visibility: Visibility::default(),
        }
    }

    pub fn with_parameters(mut self, parameters: impl Into<String>) -> Self {
        self.parameters = parameters.into();
        self
    }

    pub fn with_return_type(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = return_type.into();
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn returns_value(&self) -> bool {
        self.return_type != DEFAULT_RETURN_TYPE
    }
}

/// A class declaration with its members in source order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassDeclaration {
    pub name: String,
    pub attributes: Vec<AttributeDeclaration>,
    pub methods: Vec<MethodDeclaration>,
}

impl ClassDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn add_attribute(&mut self, attribute: AttributeDeclaration) {
        self.attributes.push(attribute);
    }

    pub fn add_method(&mut self, method: MethodDeclaration) {
        self.methods.push(method);
    }
}

/// Ordered collection of extracted class declarations
///
/// Class order mirrors the order of first class-keyword match within one
/// source unit; across units it follows visitation order. Duplicate names are
/// allowed and produce duplicate output artifacts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassModel {
    classes: Vec<ClassDeclaration>,
}

impl ClassModel {
    pub fn new() -> Self {
        Self {
            classes: Vec::new(),
        }
    }

    pub fn add_class(&mut self, class: ClassDeclaration) {
        self.classes.push(class);
    }

    pub fn classes(&self) -> &[ClassDeclaration] {
        &self.classes
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn get_class(&self, name: &str) -> Option<&ClassDeclaration> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn clear(&mut self) {
        self.classes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_empty_class() {
        let class = ClassDeclaration::new("Customer");
        assert_eq!(class.name, "Customer");
        assert!(class.attributes.is_empty());
        assert!(class.methods.is_empty());
    }

    #[test]
    fn test_attribute_defaults() {
        let attr = AttributeDeclaration::new("name");
        assert_eq!(attr.attr_type, "String");
        assert_eq!(attr.visibility, Visibility::Public);
    }

    #[test]
    fn test_method_defaults() {
        let method = MethodDeclaration::new("run");
        assert_eq!(method.return_type, "void");
        assert_eq!(method.parameters, "");
        assert!(!method.returns_value());
    }

    #[test]
    fn test_method_returns_value() {
        let method = MethodDeclaration::new("total").with_return_type("float");
        assert!(method.returns_value());
    }

    #[test]
    fn test_add_members_preserves_order() {
        let mut class = ClassDeclaration::new("Order");
        class.add_attribute(AttributeDeclaration::new("createDate").with_type("Date"));
        class.add_attribute(
            AttributeDeclaration::new("status").with_visibility(Visibility::Private),
        );
        class.add_method(MethodDeclaration::new("addPayment").with_parameters("payment"));
        class.add_method(MethodDeclaration::new("total").with_return_type("float"));

        assert_eq!(class.attributes[0].name, "createDate");
        assert_eq!(class.attributes[1].name, "status");
        assert_eq!(class.methods[0].name, "addPayment");
        assert_eq!(class.methods[1].name, "total");
    }

    #[test]
    fn test_model_add_class() {
        let mut model = ClassModel::new();
        model.add_class(ClassDeclaration::new("Customer"));
        model.add_class(ClassDeclaration::new("Order"));

        assert_eq!(model.class_count(), 2);
        assert!(model.get_class("Customer").is_some());
        assert!(model.get_class("Invoice").is_none());
    }

    #[test]
    fn test_model_allows_duplicate_names() {
        let mut model = ClassModel::new();
        model.add_class(ClassDeclaration::new("Customer"));
        model.add_class(ClassDeclaration::new("Customer"));

        assert_eq!(model.class_count(), 2);
    }

    #[test]
    fn test_model_clear() {
        let mut model = ClassModel::new();
        model.add_class(ClassDeclaration::new("Customer"));
        model.clear();
        assert!(model.is_empty());
    }

    #[test]
    fn test_model_serializes_to_json() {
        let mut class = ClassDeclaration::new("Customer");
        class.add_attribute(AttributeDeclaration::new("name"));
        let mut model = ClassModel::new();
        model.add_class(class);

        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["classes"][0]["name"], "Customer");
        assert_eq!(json["classes"][0]["attributes"][0]["visibility"], "public");
    }

    #[test]
    fn test_visibility_from_marker() {
        assert_eq!(Visibility::from_marker('+'), Some(Visibility::Public));
        assert_eq!(Visibility::from_marker('-'), Some(Visibility::Private));
        assert_eq!(Visibility::from_marker('#'), Some(Visibility::Protected));
        assert_eq!(Visibility::from_marker('~'), Some(Visibility::Package));
        assert_eq!(Visibility::from_marker('x'), None);
    }

    #[test]
    fn test_visibility_from_keyword() {
        assert_eq!(Visibility::from_keyword("public"), Some(Visibility::Public));
        assert_eq!(Visibility::from_keyword("var"), Some(Visibility::Public));
        assert_eq!(
            Visibility::from_keyword("private"),
            Some(Visibility::Private)
        );
        assert_eq!(
            Visibility::from_keyword("protected"),
            Some(Visibility::Protected)
        );
        assert_eq!(Visibility::from_keyword("static"), None);
    }

    #[test]
    fn test_visibility_keyword_roundtrip() {
        assert_eq!(Visibility::Public.as_keyword(), "public");
        assert_eq!(Visibility::Package.as_keyword(), "package");
    }
}
