use super::{FormatConfig, Formatter};
use crate::element::Element;
use tracing::trace;

pub struct MarkupFormatter;

impl Formatter for MarkupFormatter {
    fn format(&self, element: &Element, config: &FormatConfig) -> String {
        // A childless top-level element gets a bare line break and no indent,
        // unlike leaves reached through recursion.
        if !element.has_children() {
            return Self::format_leaf(element, config);
        }

        let mut result = String::new();
        Self::format_subtree(element, 0, config, &mut result);

        if config.pretty && result.starts_with(config.newline.as_str()) {
            result.drain(..config.newline.len());
        }
        result
    }
}

impl MarkupFormatter {
    fn format_leaf(element: &Element, config: &FormatConfig) -> String {
        let open = element.open_tag_string(config.quote_attributes);
        let close = element.close_tag_string();
        if config.pretty {
            format!("{}{}{}", open, config.newline, close)
        } else {
            format!("{}{}", open, close)
        }
    }

    fn format_subtree(element: &Element, depth: usize, config: &FormatConfig, result: &mut String) {
        trace!(element = element.get_name(), depth, "formatting element");

        Self::push_line_start(depth, config, result);
        result.push_str(&element.open_tag_string(config.quote_attributes));

        for child in element.children() {
            Self::format_subtree(child, depth + 1, config, result);
        }

        Self::push_line_start(depth, config, result);
        result.push_str(&element.close_tag_string());
    }

    fn push_line_start(depth: usize, config: &FormatConfig, result: &mut String) {
        if config.pretty {
            result.push_str(&config.newline);
            result.push_str(&config.indent.repeat(depth));
        }
    }
}
