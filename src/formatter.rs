mod markup;

pub use self::markup::MarkupFormatter;
use crate::element::Element;

/// Configuration options for serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Put each tag on its own indented line
    pub pretty: bool,
    /// Wrap attribute values in double quotes
    pub quote_attributes: bool,
    /// Indentation unit, repeated once per depth level
    pub indent: String,
    /// Line separator emitted before each tag in pretty mode
    pub newline: String,
}

/// Compact output with quoted attributes
impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            quote_attributes: true,
            indent: "\t".to_string(),
            newline: "\n".to_string(),
        }
    }
}

impl FormatConfig {
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_quotes(mut self, quote_attributes: bool) -> Self {
        self.quote_attributes = quote_attributes;
        self
    }

    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }
}

/// Trait for rendering an element tree as text
pub trait Formatter {
    fn format(&self, element: &Element, config: &FormatConfig) -> String;
}
