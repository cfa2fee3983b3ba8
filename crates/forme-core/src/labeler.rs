//! Default labeler

use crate::error::FormeResult;
use crate::stage::Labeler;
use crate::tag::{IntoNode, Node, Tag};

/// Separator between the label text and the wrapped field.
pub const LABEL_SEPARATOR: &str = ": ";

/// Wraps the field in `<label>text: field</label>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLabeler;

impl Labeler for DefaultLabeler {
	fn label(&self, label: &str, node: Node) -> FormeResult<Node> {
		Ok(Tag::new("label")
			.child(label)
			.child(LABEL_SEPARATOR)
			.child(node)
			.into_node())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::serializer::HtmlSerializer;
	use rstest::rstest;

	#[rstest]
	fn test_label_wraps_node() {
		let input = Tag::new("input").attr("type", "text").into_node();

		let labeled = DefaultLabeler.label("Foo", input).unwrap();

		assert_eq!(
			HtmlSerializer.render(&labeled).unwrap(),
			r#"<label>Foo: <input type="text"/></label>"#
		);
	}

	#[rstest]
	fn test_label_text_is_escaped() {
		let labeled = DefaultLabeler.label("A & B", Node::text("x")).unwrap();
		assert_eq!(
			HtmlSerializer.render(&labeled).unwrap(),
			"<label>A &amp; B: x</label>"
		);
	}
}
