//! Input descriptors: the requested field type plus its options
//!
//! Options mix control keys read by the pipeline with arbitrary keys that
//! become attributes of the rendered tag. [`InputOptions::extract`] splits
//! the two without dropping anything.

use crate::attrs::AttributeSet;
use crate::error::{FormeError, FormeResult};
use crate::options::scalar_text;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Text shown in a label wrapped around the field.
pub const LABEL: &str = "label";
/// Choices of a select input.
pub const OPTIONS: &str = "options";
/// Accessor producing each option's text.
pub const TEXT_METHOD: &str = "text_method";
/// Accessor producing each option's value.
pub const VALUE_METHOD: &str = "value_method";
/// Field value; an attribute for inputs, the content of a textarea.
pub const VALUE: &str = "value";

/// Ordered options of an input descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputOptions {
	entries: Map<String, Value>,
}

/// Reserved keys pulled out of [`InputOptions`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extracted {
	pub label: Option<String>,
	pub options: Option<Value>,
	pub text_method: Option<String>,
	pub value_method: Option<String>,
	pub value: Option<Value>,
}

impl InputOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style insert.
	///
	/// # Examples
	///
	/// ```
	/// use forme_core::InputOptions;
	///
	/// let opts = InputOptions::new().with("value", "foo").with("name", "bar");
	/// let keys: Vec<&str> = opts.iter().map(|(k, _)| k).collect();
	/// assert_eq!(keys, ["value", "name"]);
	/// ```
	pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.insert(key, value);
		self
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
		self.entries.insert(key.into(), value.into());
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.entries.get(key)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Remove a key, keeping the order of the remaining entries.
	pub fn remove(&mut self, key: &str) -> Option<Value> {
		self.entries.shift_remove(key)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Combine with `overrides`; keys present in both take the override's value.
	pub fn merged_with(mut self, overrides: InputOptions) -> InputOptions {
		for (key, value) in overrides.entries {
			self.entries.insert(key, value);
		}
		self
	}

	/// Split into reserved fields and residual attributes.
	///
	/// # Examples
	///
	/// ```
	/// use forme_core::InputOptions;
	///
	/// let opts = InputOptions::new()
	///     .with("label", "Name")
	///     .with("value", "foo")
	///     .with("class", "wide");
	/// let (extracted, residual) = opts.extract().unwrap();
	/// assert_eq!(extracted.label.as_deref(), Some("Name"));
	/// assert!(extracted.value.is_some());
	/// assert!(residual.contains("class"));
	/// assert!(!residual.contains("value"));
	/// ```
	pub fn extract(mut self) -> FormeResult<(Extracted, AttributeSet)> {
		let label = label_text(self.remove(LABEL).as_ref())?;
		let extracted = Extracted {
			label,
			options: self.remove(OPTIONS),
			text_method: method_name(self.remove(TEXT_METHOD), TEXT_METHOD)?,
			value_method: method_name(self.remove(VALUE_METHOD), VALUE_METHOD)?,
			value: self.remove(VALUE),
		};
		let residual = AttributeSet::from_json(self.entries)?;
		Ok((extracted, residual))
	}
}

fn label_text(value: Option<&Value>) -> FormeResult<Option<String>> {
	match value {
		None | Some(Value::Null) => Ok(None),
		Some(value) => scalar_text(value)
			.map(Some)
			.ok_or_else(|| FormeError::malformed(format!("label must be a scalar, got {value}"))),
	}
}

fn method_name(value: Option<Value>, key: &str) -> FormeResult<Option<String>> {
	match value {
		None | Some(Value::Null) => Ok(None),
		Some(Value::String(s)) => Ok(Some(s)),
		Some(Value::Number(n)) => Ok(Some(n.to_string())),
		Some(other) => Err(FormeError::malformed(format!(
			"{key} must name an accessor, got {other}"
		))),
	}
}

impl From<Map<String, Value>> for InputOptions {
	fn from(entries: Map<String, Value>) -> Self {
		Self { entries }
	}
}

impl TryFrom<Value> for InputOptions {
	type Error = FormeError;

	fn try_from(value: Value) -> FormeResult<Self> {
		match value {
			Value::Object(entries) => Ok(Self { entries }),
			Value::Null => Ok(Self::new()),
			other => Err(FormeError::malformed(format!(
				"input options must be an object, got {other}"
			))),
		}
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for InputOptions {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut opts = Self::new();
		for (k, v) in iter {
			opts.insert(k, v);
		}
		opts
	}
}

/// A request to render one field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
	#[serde(rename = "type")]
	kind: String,
	#[serde(default)]
	opts: InputOptions,
}

impl Input {
	/// Create a descriptor for the given input type.
	///
	/// # Examples
	///
	/// ```
	/// use forme_core::{Input, InputOptions};
	///
	/// let input = Input::new("text", InputOptions::new().with("name", "title"));
	/// assert_eq!(input.kind(), "text");
	/// assert_eq!(input.opts().len(), 1);
	/// ```
	pub fn new(kind: impl Into<String>, opts: InputOptions) -> Self {
		Self {
			kind: kind.into(),
			opts,
		}
	}

	pub fn kind(&self) -> &str {
		&self.kind
	}

	pub fn opts(&self) -> &InputOptions {
		&self.opts
	}

	/// Label requested for this input, if any.
	pub fn label(&self) -> FormeResult<Option<String>> {
		label_text(self.opts.get(LABEL))
	}

	pub fn into_parts(self) -> (String, InputOptions) {
		(self.kind, self.opts)
	}

	/// Use serialized domain objects as the select choices.
	///
	/// Each element becomes a JSON value; pair it with `text_method` and
	/// `value_method` naming the fields to read.
	pub fn with_choices<T: Serialize>(mut self, choices: &[T]) -> FormeResult<Self> {
		let value = serde_json::to_value(choices)
			.map_err(|e| FormeError::malformed(format!("choices could not be serialized: {e}")))?;
		self.opts.insert(OPTIONS, value);
		Ok(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::attrs::AttrValue;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_extract_strips_reserved_keys() {
		// Arrange
		let opts = InputOptions::try_from(json!({
			"label": "Pick",
			"options": [1, 2],
			"text_method": "first",
			"value_method": "last",
			"value": "x",
			"name": "choice",
		}))
		.unwrap();

		// Act
		let (extracted, residual) = opts.extract().unwrap();

		// Assert
		assert_eq!(extracted.label.as_deref(), Some("Pick"));
		assert_eq!(extracted.options, Some(json!([1, 2])));
		assert_eq!(extracted.text_method.as_deref(), Some("first"));
		assert_eq!(extracted.value_method.as_deref(), Some("last"));
		assert_eq!(extracted.value, Some(json!("x")));
		assert_eq!(residual.len(), 1);
		assert_eq!(residual.get("name"), Some(&AttrValue::from("choice")));
	}

	#[rstest]
	fn test_unknown_keys_survive_extraction() {
		let opts = InputOptions::new().with("brain", "no").with("NAME", "foo");
		let (_, residual) = opts.extract().unwrap();
		assert!(residual.contains("brain"));
		assert!(residual.contains("NAME"));
	}

	#[rstest]
	fn test_numeric_label_is_text() {
		let (extracted, _) = InputOptions::new().with("label", 3).extract().unwrap();
		assert_eq!(extracted.label.as_deref(), Some("3"));
	}

	#[rstest]
	fn test_non_scalar_label_is_rejected() {
		let result = InputOptions::new().with("label", json!(["a"])).extract();
		assert!(matches!(result, Err(FormeError::MalformedOptions(_))));
	}

	#[rstest]
	fn test_remove_preserves_order() {
		let mut opts: InputOptions = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
		opts.remove("b");
		let keys: Vec<&str> = opts.iter().map(|(k, _)| k).collect();
		assert_eq!(keys, ["a", "c"]);
	}

	#[rstest]
	fn test_merged_with_prefers_overrides() {
		let base = InputOptions::new().with("type", "text").with("id", "x");
		let merged = base.merged_with(InputOptions::new().with("type", "textarea"));
		assert_eq!(merged.get("type"), Some(&json!("textarea")));
		assert_eq!(merged.get("id"), Some(&json!("x")));
	}

	#[rstest]
	fn test_options_must_be_object() {
		assert!(InputOptions::try_from(json!([1])).is_err());
		assert!(InputOptions::try_from(json!(null)).unwrap().is_empty());
	}

	#[rstest]
	fn test_input_deserializes_from_json() {
		let input: Input =
			serde_json::from_value(json!({"type": "textarea", "opts": {"name": "body"}})).unwrap();
		assert_eq!(input.kind(), "textarea");
		assert_eq!(input.opts().get("name"), Some(&json!("body")));
	}

	#[rstest]
	fn test_with_choices_serializes_objects() {
		#[derive(Serialize)]
		struct Color {
			id: u32,
			name: &'static str,
		}

		let input = Input::new("select", InputOptions::new())
			.with_choices(&[Color { id: 1, name: "red" }])
			.unwrap();
		assert_eq!(
			input.opts().get("options"),
			Some(&json!([{"id": 1, "name": "red"}]))
		);
	}
}
