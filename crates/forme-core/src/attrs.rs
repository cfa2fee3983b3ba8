//! Attribute sets for tags
//!
//! Attributes are kept sorted by name so rendered markup is reproducible
//! regardless of the order in which options were supplied.
//!
//! Value policy:
//! - `Null` and `Bool(false)` are omitted from the output
//! - `Bool(true)` renders in minimized form, `checked="checked"`
//! - `List` renders its items joined by a single space (class lists)
//! - nested objects are rejected

use crate::error::{FormeError, FormeResult};
use crate::escape::escape_attribute;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// A single scalar attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
	Null,
	Bool(bool),
	Number(serde_json::Number),
	Text(String),
	List(Vec<String>),
}

impl AttrValue {
	/// Rendered text for this value, or `None` when the attribute is omitted.
	pub fn render_value(&self, name: &str) -> Option<String> {
		match self {
			AttrValue::Null | AttrValue::Bool(false) => None,
			AttrValue::Bool(true) => Some(name.to_string()),
			AttrValue::Number(n) => Some(n.to_string()),
			AttrValue::Text(s) => Some(s.clone()),
			AttrValue::List(items) if items.is_empty() => None,
			AttrValue::List(items) => Some(items.join(" ")),
		}
	}

	/// Convert a JSON value, naming the attribute in the error.
	pub fn from_json(name: &str, value: Value) -> FormeResult<Self> {
		match value {
			Value::Null => Ok(AttrValue::Null),
			Value::Bool(b) => Ok(AttrValue::Bool(b)),
			Value::Number(n) => Ok(AttrValue::Number(n)),
			Value::String(s) => Ok(AttrValue::Text(s)),
			Value::Array(items) => items
				.into_iter()
				.map(|item| match item {
					Value::String(s) => Ok(s),
					Value::Number(n) => Ok(n.to_string()),
					other => Err(FormeError::InvalidAttribute {
						name: name.to_string(),
						reason: format!("list items must be strings or numbers, got {other}"),
					}),
				})
				.collect::<FormeResult<Vec<_>>>()
				.map(AttrValue::List),
			Value::Object(_) => Err(FormeError::InvalidAttribute {
				name: name.to_string(),
				reason: "objects cannot be rendered as attribute values".to_string(),
			}),
		}
	}
}

impl Serialize for AttrValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			AttrValue::Null => serializer.serialize_none(),
			AttrValue::Bool(b) => serializer.serialize_bool(*b),
			AttrValue::Number(n) => n.serialize(serializer),
			AttrValue::Text(s) => serializer.serialize_str(s),
			AttrValue::List(items) => items.serialize(serializer),
		}
	}
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		AttrValue::Text(value.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		AttrValue::Text(value)
	}
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		AttrValue::Bool(value)
	}
}

impl From<i64> for AttrValue {
	fn from(value: i64) -> Self {
		AttrValue::Number(value.into())
	}
}

impl From<i32> for AttrValue {
	fn from(value: i32) -> Self {
		AttrValue::Number(value.into())
	}
}

impl From<u64> for AttrValue {
	fn from(value: u64) -> Self {
		AttrValue::Number(value.into())
	}
}

impl From<Vec<String>> for AttrValue {
	fn from(value: Vec<String>) -> Self {
		AttrValue::List(value)
	}
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(AttrValue::Null, Into::into)
	}
}

/// Attributes of one tag, unique by name and ordered by name
#[derive(Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AttributeSet {
	attrs: BTreeMap<String, AttrValue>,
}

impl AttributeSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a set from JSON options, rejecting values that cannot be attributes.
	///
	/// # Examples
	///
	/// ```
	/// use forme_core::AttributeSet;
	/// use serde_json::json;
	///
	/// let attrs = AttributeSet::from_json([
	///     ("value".to_string(), json!("foo")),
	///     ("name".to_string(), json!("bar")),
	/// ])
	/// .unwrap();
	/// assert_eq!(attrs.render().unwrap(), r#" name="bar" value="foo""#);
	/// ```
	pub fn from_json(entries: impl IntoIterator<Item = (String, Value)>) -> FormeResult<Self> {
		let mut set = Self::new();
		for (name, value) in entries {
			let value = AttrValue::from_json(&name, value)?;
			set.attrs.insert(name, value);
		}
		Ok(set)
	}

	/// Insert an attribute, replacing any previous value under the same name.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
		self.attrs.insert(name.into(), value.into());
	}

	pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
		self.attrs.remove(name)
	}

	pub fn get(&self, name: &str) -> Option<&AttrValue> {
		self.attrs.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.attrs.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.attrs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.attrs.is_empty()
	}

	/// Attributes in rendering order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
		self.attrs.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Merge two sets into a new one; every key of `overrides` wins.
	///
	/// # Examples
	///
	/// ```
	/// use forme_core::AttributeSet;
	///
	/// let mut base = AttributeSet::new();
	/// base.insert("id", "a");
	/// base.insert("name", "a");
	/// let mut overrides = AttributeSet::new();
	/// overrides.insert("name", "b");
	///
	/// let merged = AttributeSet::merge(&base, &overrides);
	/// assert_eq!(merged.render().unwrap(), r#" id="a" name="b""#);
	/// ```
	pub fn merge(base: &AttributeSet, overrides: &AttributeSet) -> AttributeSet {
		base.clone().merged_with(overrides.clone())
	}

	pub fn merged_with(mut self, overrides: AttributeSet) -> AttributeSet {
		self.attrs.extend(overrides.attrs);
		self
	}

	/// Render as ` key="value"` pairs sorted by key, escaping every value.
	pub fn render(&self) -> FormeResult<String> {
		let mut out = String::new();
		for (name, value) in &self.attrs {
			if name.is_empty() || name.contains(|c: char| c.is_whitespace() || "\"'<>/=".contains(c)) {
				return Err(FormeError::InvalidAttribute {
					name: name.clone(),
					reason: "not a valid attribute name".to_string(),
				});
			}
			if let Some(text) = value.render_value(name) {
				out.push(' ');
				out.push_str(name);
				out.push_str("=\"");
				out.push_str(&escape_attribute(&text));
				out.push('"');
			}
		}
		Ok(out)
	}
}

impl fmt::Debug for AttributeSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map().entries(self.attrs.iter()).finish()
	}
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for AttributeSet {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut set = Self::new();
		for (k, v) in iter {
			set.insert(k, v);
		}
		set
	}
}
