//! Element tree model.
//!
//! An [`Element`] exclusively owns its attributes and children. Both
//! collections are keyed and iterate in ascending key order, which is the
//! order used by every snapshot accessor and by serialization.

use crate::{
    attribute::Attribute,
    error::{Collection, Result, TreeError},
    formatter::{FormatConfig, Formatter, MarkupFormatter},
    kinds::{self, AttributeKind, NodeId},
};
use std::collections::{btree_map::Entry, BTreeMap};
use std::fmt;
use tracing::{debug, instrument, trace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    id: NodeId,
    name: String,
    attributes: BTreeMap<AttributeKind, Attribute>,
    children: BTreeMap<NodeId, Self>,
}

impl Element {
    /// Creates an element with no attributes and no children
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            attributes: BTreeMap::new(),
            children: BTreeMap::new(),
        }
    }

    /// Creates an element from initial attribute and child sets.
    ///
    /// Attributes are keyed by their kind and children by their id. Any
    /// repeated key within either set fails the whole construction.
    pub fn with_contents(
        id: NodeId,
        name: impl Into<String>,
        attributes: impl IntoIterator<Item = Attribute>,
        children: impl IntoIterator<Item = Self>,
    ) -> Result<Self> {
        let mut element = Self::new(id, name);
        for attribute in attributes {
            element.add_attribute(attribute)?;
        }
        for child in children {
            element.add_child(child)?;
        }
        Ok(element)
    }

    pub fn html() -> Self {
        Self::new(kinds::HTML, "html")
    }

    pub fn head() -> Self {
        Self::new(kinds::HEAD, "head")
    }

    pub fn body() -> Self {
        Self::new(kinds::BODY, "body")
    }

    pub fn title() -> Self {
        Self::new(kinds::TITLE, "title")
    }

    pub fn script() -> Self {
        Self::new(kinds::SCRIPT, "script")
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Moves `child` into this element, keyed by the child's id.
    ///
    /// Fails without touching the children if the id is already taken.
    pub fn add_child(&mut self, child: Self) -> Result<&mut Self> {
        match self.children.entry(child.id) {
            Entry::Vacant(slot) => {
                trace!(parent = %self.name, child = child.id, "child added");
                slot.insert(child);
                Ok(self)
            }
            Entry::Occupied(_) => {
                debug!(parent = %self.name, child = child.id, "duplicate child rejected");
                Err(TreeError::DuplicateKey {
                    collection: Collection::Children,
                    key: child.id,
                })
            }
        }
    }

    /// Moves `attribute` into this element, keyed by its kind.
    ///
    /// Fails without touching the attributes if the kind is already taken.
    pub fn add_attribute(&mut self, attribute: Attribute) -> Result<&mut Self> {
        let kind = attribute.kind();
        match self.attributes.entry(kind) {
            Entry::Vacant(slot) => {
                trace!(element = %self.name, kind, "attribute added");
                slot.insert(attribute);
                Ok(self)
            }
            Entry::Occupied(_) => {
                debug!(element = %self.name, kind, "duplicate attribute rejected");
                Err(TreeError::DuplicateKey {
                    collection: Collection::Attributes,
                    key: kind,
                })
            }
        }
    }

    /// Returns a copy of the child with the given id
    pub fn get_child(&self, id: NodeId) -> Result<Self> {
        self.children.get(&id).cloned().ok_or_else(|| {
            debug!(parent = %self.name, child = id, "child lookup missed");
            TreeError::NotFound {
                collection: Collection::Children,
                key: id,
            }
        })
    }

    /// Returns a copy of the attribute with the given kind
    pub fn get_attribute(&self, kind: AttributeKind) -> Result<Attribute> {
        self.attributes.get(&kind).cloned().ok_or_else(|| {
            debug!(element = %self.name, kind, "attribute lookup missed");
            TreeError::NotFound {
                collection: Collection::Attributes,
                key: kind,
            }
        })
    }

    /// Snapshot of the children, ascending by id
    pub fn get_children(&self) -> Vec<Self> {
        self.children.values().cloned().collect()
    }

    /// Snapshot of the attributes, ascending by kind
    pub fn get_all_attributes(&self) -> Vec<Attribute> {
        self.attributes.values().cloned().collect()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub(crate) fn children(&self) -> impl Iterator<Item = &Self> {
        self.children.values()
    }

    /// Renders the opening tag, e.g. `<div id="a" class="b">`.
    ///
    /// Attributes appear in ascending kind order. With no attributes the
    /// result is just `<name>`.
    pub fn open_tag_string(&self, quote: bool) -> String {
        let mut tag = format!("<{}", self.name);
        for attribute in self.attributes.values() {
            tag.push(' ');
            tag.push_str(&attribute.render(quote));
        }
        tag.push('>');
        tag
    }

    pub fn close_tag_string(&self) -> String {
        format!("</{}>", self.name)
    }

    /// Serializes this element and its whole subtree.
    ///
    /// `pretty` puts every tag on its own line indented by one tab per
    /// depth level; `quote` wraps attribute values in double quotes.
    pub fn serialize(&self, pretty: bool, quote: bool) -> String {
        let config = FormatConfig {
            pretty,
            quote_attributes: quote,
            ..FormatConfig::default()
        };
        self.serialize_with(&config)
    }

    #[instrument(skip_all, fields(element = %self.name))]
    pub fn serialize_with(&self, config: &FormatConfig) -> String {
        MarkupFormatter.format(self, config)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.serialize(false, true))
    }
}
