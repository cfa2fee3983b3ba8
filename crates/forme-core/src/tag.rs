//! Tag tree produced by formatters and labelers and consumed by serializers.

use crate::attrs::{AttrValue, AttributeSet};
use serde::Serialize;

/// Elements that never have content and serialize without a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
	"track", "wbr",
];

/// Returns true for elements rendered in self-closing form.
pub fn is_void_element(name: &str) -> bool {
	VOID_ELEMENTS.contains(&name)
}

/// One node of a tag tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "node", rename_all = "snake_case")]
pub enum Node {
	Tag(Tag),
	Text(String),
	/// Nodes rendered back to back with no wrapper element.
	Sequence(Vec<Node>),
}

impl Node {
	pub fn text(content: impl Into<String>) -> Self {
		Node::Text(content.into())
	}

	pub fn sequence(nodes: impl IntoIterator<Item = impl IntoNode>) -> Self {
		Node::Sequence(nodes.into_iter().map(IntoNode::into_node).collect())
	}

	/// The root tag, if this node is one.
	pub fn as_tag(&self) -> Option<&Tag> {
		match self {
			Node::Tag(tag) => Some(tag),
			_ => None,
		}
	}
}

/// An HTML element: name, attributes and owned children
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tag {
	name: String,
	attrs: AttributeSet,
	children: Vec<Node>,
}

impl Tag {
	/// Creates a new tag with no attributes and no children.
	///
	/// # Examples
	///
	/// ```
	/// use forme_core::Tag;
	///
	/// let tag = Tag::new("option").attr("value", "1").child("one");
	/// assert_eq!(tag.name(), "option");
	/// assert_eq!(tag.attrs().len(), 1);
	/// assert_eq!(tag.child_nodes().len(), 1);
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			attrs: AttributeSet::new(),
			children: Vec::new(),
		}
	}

	/// Adds an attribute.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.attrs.insert(name, value);
		self
	}

	/// Merges an attribute set into the tag; the new set wins on conflicts.
	pub fn attrs_from(mut self, attrs: AttributeSet) -> Self {
		self.attrs = std::mem::take(&mut self.attrs).merged_with(attrs);
		self
	}

	/// Adds a child node.
	pub fn child(mut self, child: impl IntoNode) -> Self {
		self.children.push(child.into_node());
		self
	}

	/// Adds multiple child nodes.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoNode>) -> Self {
		self.children
			.extend(children.into_iter().map(IntoNode::into_node));
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn attrs(&self) -> &AttributeSet {
		&self.attrs
	}

	pub fn child_nodes(&self) -> &[Node] {
		&self.children
	}

	pub fn is_void(&self) -> bool {
		is_void_element(&self.name)
	}
}

/// Conversion into a tree node.
pub trait IntoNode {
	fn into_node(self) -> Node;
}

impl IntoNode for Node {
	fn into_node(self) -> Node {
		self
	}
}

impl IntoNode for Tag {
	fn into_node(self) -> Node {
		Node::Tag(self)
	}
}

impl IntoNode for String {
	fn into_node(self) -> Node {
		Node::Text(self)
	}
}

impl IntoNode for &str {
	fn into_node(self) -> Node {
		Node::Text(self.to_string())
	}
}

impl<T: IntoNode> IntoNode for Option<T> {
	fn into_node(self) -> Node {
		match self {
			Some(v) => v.into_node(),
			None => Node::Sequence(Vec::new()),
		}
	}
}

impl<T: IntoNode> IntoNode for Vec<T> {
	fn into_node(self) -> Node {
		Node::Sequence(self.into_iter().map(IntoNode::into_node).collect())
	}
}

impl<A: IntoNode, B: IntoNode> IntoNode for (A, B) {
	fn into_node(self) -> Node {
		Node::Sequence(vec![self.0.into_node(), self.1.into_node()])
	}
}

impl<A: IntoNode, B: IntoNode, C: IntoNode> IntoNode for (A, B, C) {
	fn into_node(self) -> Node {
		Node::Sequence(vec![
			self.0.into_node(),
			self.1.into_node(),
			self.2.into_node(),
		])
	}
}

impl From<Tag> for Node {
	fn from(tag: Tag) -> Self {
		Node::Tag(tag)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_tag_creation() {
		let tag = Tag::new("div");
		assert_eq!(tag.name(), "div");
		assert!(tag.attrs().is_empty());
		assert!(tag.child_nodes().is_empty());
	}

	#[rstest]
	#[case("input", true)]
	#[case("br", true)]
	#[case("img", true)]
	#[case("textarea", false)]
	#[case("select", false)]
	#[case("label", false)]
	fn test_void_element_detection(#[case] name: &str, #[case] void: bool) {
		assert_eq!(Tag::new(name).is_void(), void);
	}

	#[rstest]
	fn test_attrs_from_merges() {
		let mut extra = AttributeSet::new();
		extra.insert("name", "b");
		let tag = Tag::new("input")
			.attr("type", "text")
			.attr("name", "a")
			.attrs_from(extra);
		assert_eq!(tag.attrs().get("type"), Some(&AttrValue::from("text")));
		assert_eq!(tag.attrs().get("name"), Some(&AttrValue::from("b")));
	}

	#[rstest]
	fn test_children_of_mixed_kinds() {
		let tag = Tag::new("label")
			.child("Foo")
			.child(": ")
			.child(Tag::new("input"));
		assert_eq!(tag.child_nodes().len(), 3);
		assert_eq!(tag.child_nodes()[0], Node::text("Foo"));
		assert!(tag.child_nodes()[2].as_tag().is_some());
	}

	#[rstest]
	fn test_into_node_conversions() {
		assert_eq!(None::<String>.into_node(), Node::Sequence(vec![]));
		assert_eq!(
			("a", "b").into_node(),
			Node::Sequence(vec![Node::text("a"), Node::text("b")])
		);
		assert_eq!(
			vec!["x"].into_node(),
			Node::Sequence(vec![Node::text("x")])
		);
	}

	#[rstest]
	fn test_clone_is_deep() {
		let original = Tag::new("select").child(Tag::new("option").child("1"));
		let copy = original.clone();
		assert_eq!(original, copy);
	}
}
