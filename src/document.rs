//! Document - owns a single `html` root element

use crate::{element::Element, error::Result};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Creates a document whose root is the well-known `html` element
    pub fn new() -> Self {
        Self {
            root: Element::html(),
        }
    }

    /// Attaches `child` under the root element
    pub fn add_child(&mut self, child: Element) -> Result<&mut Self> {
        let id = child.id();
        self.root.add_child(child)?;
        debug!(child = id, "attached to document root");
        Ok(self)
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn serialize(&self, pretty: bool, quote: bool) -> String {
        self.root.serialize(pretty, quote)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
