//! markup-tree: an in-memory markup element tree with a deterministic serializer
//!
//! This crate provides:
//! - Immutable, kind-tagged attributes
//! - Elements that own keyed attributes and keyed children
//! - A document wrapper around a single `html` root
//! - Compact or indented serialization back to markup text
//!
//! Attributes and children are always emitted in ascending key order.
//!
//! # Examples
//! ```
//! use markup_tree::{Attribute, Element, Result};
//!
//! fn example() -> Result<()> {
//!     let mut parent = Element::new(27, "blah");
//!     parent.add_attribute(Attribute::id("id-data"))?;
//!     parent.add_child(Element::new(28, "blah"))?;
//!     assert_eq!(
//!         parent.serialize(false, true),
//!         r#"<blah id="id-data"><blah></blah></blah>"#
//!     );
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod attribute;
pub mod cli;
pub mod document;
pub mod element;
pub mod error;
pub mod formatter;
pub mod kinds;

// Re-exports
pub use attribute::Attribute;
pub use document::Document;
pub use element::Element;
pub use error::{Collection, Result, TreeError};
pub use formatter::{FormatConfig, Formatter, MarkupFormatter};
pub use kinds::{AttributeKind, NodeId};
