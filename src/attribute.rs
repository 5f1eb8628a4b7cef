use crate::kinds::{self, AttributeKind};
use std::fmt;

/// A single attribute of an element.
///
/// The kind and name are bound together at construction and cannot be
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    kind: AttributeKind,
    name: String,
    value: String,
}

impl Attribute {
    pub fn new(kind: AttributeKind, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates an `id` attribute
    pub fn id(value: impl Into<String>) -> Self {
        Self::new(kinds::ID, "id", value)
    }

    /// Creates a `class` attribute
    pub fn class(value: impl Into<String>) -> Self {
        Self::new(kinds::CLASS, "class", value)
    }

    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Renders `name=value`, wrapping the value in double quotes when `quote` is set
    pub(crate) fn render(&self, quote: bool) -> String {
        if quote {
            format!("{}=\"{}\"", self.name, self.value)
        } else {
            format!("{}={}", self.name, self.value)
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(true))
    }
}
