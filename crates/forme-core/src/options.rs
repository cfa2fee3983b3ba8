//! Normalization of `<select>` choices into ordered (label, value) pairs

use crate::error::{FormeError, FormeResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One `<option>` to render. `value` is `None` when it would repeat the label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
	pub label: String,
	pub value: Option<String>,
}

impl SelectOption {
	pub fn new(label: impl Into<String>, value: Option<String>) -> Self {
		let label = label.into();
		let value = value.filter(|v| *v != label);
		Self { label, value }
	}
}

/// Reads one part out of a choice element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accessor {
	First,
	Last,
	Index(usize),
	Key(String),
}

impl Accessor {
	/// Parse an accessor name: `first`, `last`, an index, or an object key.
	pub fn parse(name: &str) -> Self {
		match name {
			"first" => Accessor::First,
			"last" => Accessor::Last,
			_ => match name.parse::<usize>() {
				Ok(index) => Accessor::Index(index),
				Err(_) => Accessor::Key(name.to_string()),
			},
		}
	}

	/// Find the part of `element` this accessor names.
	///
	/// Positions apply to arrays. On an object every accessor is a key
	/// lookup, so a record with a `first` field still reads that field.
	pub fn lookup<'a>(&self, element: &'a Value) -> Option<&'a Value> {
		match (self, element) {
			(Accessor::First, Value::Array(items)) => items.first(),
			(Accessor::Last, Value::Array(items)) => items.last(),
			(Accessor::Index(i), Value::Array(items)) => items.get(*i),
			(accessor, Value::Object(fields)) => fields.get(&accessor.to_string()),
			_ => None,
		}
	}

	/// Apply the accessor to a choice element.
	///
	/// # Examples
	///
	/// ```
	/// use forme_core::options::Accessor;
	/// use serde_json::json;
	///
	/// let pair = json!(["a", 1]);
	/// assert_eq!(Accessor::parse("last").apply(&pair).unwrap(), json!(1));
	///
	/// let record = json!({"id": 7, "name": "seven"});
	/// assert_eq!(Accessor::parse("name").apply(&record).unwrap(), json!("seven"));
	/// ```
	pub fn apply(&self, element: &Value) -> FormeResult<Value> {
		self.lookup(element)
			.cloned()
			.ok_or_else(|| FormeError::malformed(format!("cannot read {self} from {element}")))
	}
}

impl fmt::Display for Accessor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Accessor::First => f.write_str("first"),
			Accessor::Last => f.write_str("last"),
			Accessor::Index(i) => write!(f, "{i}"),
			Accessor::Key(key) => f.write_str(key),
		}
	}
}

/// Text form of a scalar JSON value; `None` for null and containers.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
	match value {
		Value::String(s) => Some(s.clone()),
		Value::Number(n) => Some(n.to_string()),
		Value::Bool(b) => Some(b.to_string()),
		Value::Null | Value::Array(_) | Value::Object(_) => None,
	}
}

fn require_text(value: &Value, what: &str) -> FormeResult<String> {
	scalar_text(value)
		.ok_or_else(|| FormeError::malformed(format!("option {what} must be a scalar, got {value}")))
}

/// Convert the `options` value of a select input into ordered pairs.
///
/// - scalars: each becomes an option whose label is its text
/// - two-element arrays: `[label, value]`
/// - with accessors: label and value are read from each element; with no
///   value accessor the option carries no value
/// - an object: each entry is a `label: value` pair
///
/// Order is preserved and nothing is deduplicated.
///
/// # Examples
///
/// ```
/// use forme_core::options::{normalize_options, SelectOption};
/// use serde_json::json;
///
/// let pairs = normalize_options(&json!([["a", 1], ["b", 2]]), None, None).unwrap();
/// assert_eq!(pairs[0], SelectOption::new("a", Some("1".to_string())));
///
/// let swapped = normalize_options(&json!([["a", 1]]), Some("last"), Some("first")).unwrap();
/// assert_eq!(swapped[0], SelectOption::new("1", Some("a".to_string())));
/// ```
pub fn normalize_options(
	options: &Value,
	text_method: Option<&str>,
	value_method: Option<&str>,
) -> FormeResult<Vec<SelectOption>> {
	let elements: Vec<Value> = match options {
		Value::Null => return Ok(Vec::new()),
		Value::Array(items) => items.clone(),
		Value::Object(fields) => fields
			.iter()
			.map(|(k, v)| Value::Array(vec![Value::String(k.clone()), v.clone()]))
			.collect(),
		scalar => {
			return Err(FormeError::malformed(format!(
				"options must be a list or an object, got {scalar}"
			)));
		}
	};

	if text_method.is_some() || value_method.is_some() {
		let text = text_method.map(Accessor::parse);
		let value = value_method.map(Accessor::parse);
		return elements
			.iter()
			.map(|element| {
				let label = match &text {
					Some(accessor) => accessor.apply(element)?,
					None => element.clone(),
				};
				let value = value
					.as_ref()
					.map(|accessor| accessor.apply(element).and_then(|v| require_text(&v, "value")))
					.transpose()?;
				Ok(SelectOption::new(require_text(&label, "label")?, value))
			})
			.collect();
	}

	let pairs = elements.iter().filter(|e| e.is_array()).count();
	if pairs != 0 && pairs != elements.len() {
		return Err(FormeError::malformed(
			"options mix plain values and [label, value] pairs",
		));
	}

	elements
		.iter()
		.map(|element| match element {
			Value::Array(pair) if pair.len() == 2 => Ok(SelectOption::new(
				require_text(&pair[0], "label")?,
				Some(require_text(&pair[1], "value")?),
			)),
			Value::Array(other) => Err(FormeError::malformed(format!(
				"option pairs need exactly two elements, got {}",
				other.len()
			))),
			scalar => Ok(SelectOption::new(require_text(scalar, "label")?, None)),
		})
		.collect()
}
