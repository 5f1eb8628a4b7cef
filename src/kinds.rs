//! Well-known element ids and attribute kinds.
//!
//! These are conventions, not an enumeration: any `u64` is accepted wherever
//! a [`NodeId`] or [`AttributeKind`] is expected.

/// Numeric identifier of an element, unique among its siblings
pub type NodeId = u64;

/// Numeric kind of an attribute, unique within one element
pub type AttributeKind = u64;

pub const HTML: NodeId = 0;
pub const HEAD: NodeId = 1;
pub const BODY: NodeId = 2;
pub const TITLE: NodeId = 3;
pub const SCRIPT: NodeId = 4;

pub const ID: AttributeKind = 0;
pub const CLASS: AttributeKind = 1;
