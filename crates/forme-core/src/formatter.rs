//! Default formatter: input type → tag

use crate::attrs::{AttrValue, AttributeSet};
use crate::error::{FormeError, FormeResult};
use crate::form::Form;
use crate::input::{Extracted, Input, VALUE};
use crate::options::{normalize_options, scalar_text};
use crate::stage::Formatter;
use crate::tag::{IntoNode, Node, Tag};
use serde_json::Value;

/// Types rendered as a bare `<input type="…"/>`.
pub const SIMPLE_TYPES: &[&str] = &[
	"text",
	"password",
	"radio",
	"checkbox",
	"submit",
	"hidden",
	"email",
	"number",
	"url",
	"tel",
	"search",
	"date",
	"datetime-local",
	"time",
	"month",
	"week",
	"color",
	"range",
	"file",
	"reset",
	"button",
	"image",
];

/// Built-in formatter for simple inputs, `textarea` and `select`.
///
/// Unknown types fail with [`FormeError::UnknownInputType`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormatter;

impl DefaultFormatter {
	/// Format a descriptor without a form; the default formatter never reads it.
	///
	/// # Examples
	///
	/// ```
	/// use forme_core::{DefaultFormatter, HtmlSerializer, Input, InputOptions};
	///
	/// let node = DefaultFormatter
	///     .format_input(Input::new("textarea", InputOptions::new().with("value", "hi")))
	///     .unwrap();
	/// assert_eq!(HtmlSerializer.render(&node).unwrap(), "<textarea>hi</textarea>");
	/// ```
	pub fn format_input(&self, input: Input) -> FormeResult<Node> {
		let (kind, opts) = input.into_parts();
		let (extracted, attrs) = opts.extract()?;
		let tag = match kind.as_str() {
			"textarea" => textarea(extracted, attrs)?,
			"select" => select(extracted, attrs)?,
			simple if SIMPLE_TYPES.contains(&simple) => simple_input(simple, extracted, attrs)?,
			unknown => {
				tracing::debug!(input_type = unknown, "no formatter branch for input type");
				return Err(FormeError::UnknownInputType(unknown.to_string()));
			}
		};
		Ok(tag.into_node())
	}
}

impl Formatter for DefaultFormatter {
	fn format(&self, _form: &Form, input: Input) -> FormeResult<Node> {
		self.format_input(input)
	}
}

fn simple_input(kind: &str, extracted: Extracted, attrs: AttributeSet) -> FormeResult<Tag> {
	let mut tag = Tag::new("input").attrs_from(attrs).attr("type", kind);
	if let Some(value) = extracted.value {
		tag = tag.attr(VALUE, AttrValue::from_json(VALUE, value)?);
	}
	Ok(tag)
}

fn textarea(extracted: Extracted, attrs: AttributeSet) -> FormeResult<Tag> {
	let tag = Tag::new("textarea").attrs_from(attrs);
	match extracted.value.as_ref().map(content_text).transpose()?.flatten() {
		Some(content) => Ok(tag.child(content)),
		None => Ok(tag),
	}
}

fn select(extracted: Extracted, attrs: AttributeSet) -> FormeResult<Tag> {
	let choices = match &extracted.options {
		Some(options) => normalize_options(
			options,
			extracted.text_method.as_deref(),
			extracted.value_method.as_deref(),
		)?,
		None => Vec::new(),
	};
	let selected = extracted.value.as_ref().map(content_text).transpose()?.flatten();

	let options = choices.into_iter().map(|choice| {
		let effective = choice.value.as_deref().unwrap_or(&choice.label);
		let is_selected = selected.as_deref() == Some(effective);
		Tag::new("option")
			.attr(VALUE, choice.value.clone())
			.attr("selected", is_selected)
			.child(choice.label)
	});
	Ok(Tag::new("select").attrs_from(attrs).children(options))
}

/// Text content of a value; `None` for null, an error for containers.
fn content_text(value: &Value) -> FormeResult<Option<String>> {
	match value {
		Value::Null => Ok(None),
		other => scalar_text(other).map(Some).ok_or_else(|| FormeError::InvalidAttribute {
			name: VALUE.to_string(),
			reason: format!("expected a scalar, got {other}"),
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::input::InputOptions;
	use crate::serializer::HtmlSerializer;
	use rstest::rstest;
	use serde_json::json;

	fn render(kind: &str, opts: InputOptions) -> String {
		let node = DefaultFormatter.format_input(Input::new(kind, opts)).unwrap();
		HtmlSerializer.render(&node).unwrap()
	}

	#[rstest]
	#[case("text")]
	#[case("hidden")]
	#[case("datetime-local")]
	fn test_simple_types(#[case] kind: &str) {
		assert_eq!(
			render(kind, InputOptions::new()),
			format!(r#"<input type="{kind}"/>"#)
		);
	}

	#[rstest]
	fn test_value_stays_attribute_for_inputs() {
		let html = render("text", InputOptions::new().with("value", 3));
		assert_eq!(html, r#"<input type="text" value="3"/>"#);
	}

	#[rstest]
	fn test_kind_wins_over_type_option() {
		let html = render("password", InputOptions::new().with("type", "text"));
		assert_eq!(html, r#"<input type="password"/>"#);
	}

	#[rstest]
	fn test_textarea_value_becomes_content() {
		let html = render(
			"textarea",
			InputOptions::new().with("value", "<b>").with("rows", 3),
		);
		assert_eq!(html, r#"<textarea rows="3">&lt;b&gt;</textarea>"#);
	}

	#[rstest]
	fn test_textarea_null_value_is_empty() {
		let html = render("textarea", InputOptions::new().with("value", json!(null)));
		assert_eq!(html, "<textarea></textarea>");
	}

	#[rstest]
	fn test_select_marks_selected_option() {
		let html = render(
			"select",
			InputOptions::new()
				.with("options", json!([["a", 1], ["b", 2]]))
				.with("value", 2),
		);
		assert_eq!(
			html,
			r#"<select><option value="1">a</option><option selected="selected" value="2">b</option></select>"#
		);
	}

	#[rstest]
	fn test_select_selected_by_label() {
		let html = render(
			"select",
			InputOptions::new().with("options", json!([1, 2])).with("value", "1"),
		);
		assert_eq!(
			html,
			r#"<select><option selected="selected">1</option><option>2</option></select>"#
		);
	}

	#[rstest]
	fn test_unknown_type_fails() {
		let result = DefaultFormatter.format_input(Input::new("blink", InputOptions::new()));
		assert!(matches!(result, Err(FormeError::UnknownInputType(ref t)) if t == "blink"));
	}

	#[rstest]
	fn test_malformed_select_options_fail() {
		let result = DefaultFormatter.format_input(Input::new(
			"select",
			InputOptions::new().with("options", json!([1, [2, 3]])),
		));
		assert!(matches!(result, Err(FormeError::MalformedOptions(_))));
	}
}
