//! Default serializers: compact HTML and a JSON dump of the tree

use crate::error::{FormeError, FormeResult};
use crate::escape::escape_content;
use crate::stage::Serializer;
use crate::tag::{Node, Tag};

/// Renders a tree as compact HTML.
///
/// Void elements without children close themselves (`<input/>`); every other
/// element gets an explicit closing tag even when empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSerializer;

impl HtmlSerializer {
	/// Render a node to markup.
	///
	/// # Examples
	///
	/// ```
	/// use forme_core::{HtmlSerializer, IntoNode, Tag};
	///
	/// let node = Tag::new("select")
	///     .child(Tag::new("option").child("1"))
	///     .into_node();
	/// assert_eq!(
	///     HtmlSerializer.render(&node).unwrap(),
	///     "<select><option>1</option></select>"
	/// );
	/// ```
	pub fn render(&self, node: &Node) -> FormeResult<String> {
		let mut out = String::new();
		write_node(node, &mut out)?;
		Ok(out)
	}

	/// Opening tag only, e.g. `<form action="x">`.
	pub fn open_tag(&self, tag: &Tag) -> FormeResult<String> {
		Ok(format!("<{}{}>", tag.name(), tag.attrs().render()?))
	}

	pub fn close_tag(&self, tag: &Tag) -> String {
		format!("</{}>", tag.name())
	}
}

impl Serializer for HtmlSerializer {
	fn serialize(&self, node: &Node) -> FormeResult<String> {
		self.render(node)
	}
}

fn write_node(node: &Node, out: &mut String) -> FormeResult<()> {
	match node {
		Node::Tag(tag) => {
			out.push('<');
			out.push_str(tag.name());
			out.push_str(&tag.attrs().render()?);
			if tag.is_void() && tag.child_nodes().is_empty() {
				out.push_str("/>");
				return Ok(());
			}
			out.push('>');
			for child in tag.child_nodes() {
				write_node(child, out)?;
			}
			out.push_str("</");
			out.push_str(tag.name());
			out.push('>');
		}
		Node::Text(text) => out.push_str(&escape_content(text)),
		Node::Sequence(nodes) => {
			for child in nodes {
				write_node(child, out)?;
			}
		}
	}
	Ok(())
}

/// Dumps the tree as JSON, for inspecting what a formatter produced.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl Serializer for JsonSerializer {
	fn serialize(&self, node: &Node) -> FormeResult<String> {
		serde_json::to_string(node).map_err(|e| FormeError::Stage(e.into()))
	}
}
