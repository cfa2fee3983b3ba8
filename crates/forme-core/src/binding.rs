//! Objects a form is bound to
//!
//! A bound object either builds its own descriptors ([`FormeInput`]) or only
//! supplies field values ([`FieldAccess`], or a plain JSON container), in
//! which case a `text` descriptor is synthesized around the value.

use crate::error::{FormeError, FormeResult};
use crate::input::{Input, InputOptions, VALUE};
use crate::options::Accessor;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Builds the descriptor for one of the object's fields.
///
/// # Examples
///
/// ```
/// use forme_core::{Binding, Form, FormeInput, FormeResult, Input, InputOptions};
///
/// struct Post;
///
/// impl FormeInput for Post {
///     fn forme_input(&self, field: &str, opts: InputOptions) -> FormeResult<Input> {
///         let defaults = InputOptions::new().with("name", format!("post[{field}]"));
///         Ok(Input::new("text", defaults.merged_with(opts)))
///     }
/// }
///
/// let form = Form::with_object(Binding::delegate(Post));
/// assert_eq!(
///     form.input("title", InputOptions::new()).unwrap(),
///     r#"<input name="post[title]" type="text"/>"#
/// );
/// ```
pub trait FormeInput: Send + Sync {
	fn forme_input(&self, field: &str, opts: InputOptions) -> FormeResult<Input>;
}

/// Reads the current value of a field.
pub trait FieldAccess: Send + Sync {
	fn field_value(&self, field: &str) -> FormeResult<Value>;
}

impl<F> FieldAccess for F
where
	F: Fn(&str) -> FormeResult<Value> + Send + Sync,
{
	fn field_value(&self, field: &str) -> FormeResult<Value> {
		self(field)
	}
}

/// The object a form is bound to.
#[derive(Clone)]
pub enum Binding {
	/// Object that supplies complete descriptors.
	Delegate(Arc<dyn FormeInput>),
	/// Object that supplies field values.
	Accessor(Arc<dyn FieldAccess>),
	/// JSON container read by key, index, `first` or `last`.
	Value(Value),
}

impl Binding {
	pub fn delegate(object: impl FormeInput + 'static) -> Self {
		Binding::Delegate(Arc::new(object))
	}

	pub fn accessor(object: impl FieldAccess + 'static) -> Self {
		Binding::Accessor(Arc::new(object))
	}

	pub fn from_value(value: Value) -> Self {
		Binding::Value(value)
	}

	/// Bind any serializable object; fields are read from its JSON form.
	pub fn from_serialize<T: Serialize>(object: &T) -> FormeResult<Self> {
		serde_json::to_value(object)
			.map(Binding::Value)
			.map_err(|e| FormeError::Stage(e.into()))
	}

	/// Produce the descriptor for `field`.
	///
	/// Delegates are used verbatim. Otherwise the value is read and wrapped
	/// in a descriptor named after the field; a `type` option picks the input
	/// type (default `text`) and caller options override the defaults.
	pub fn resolve(&self, field: &str, opts: InputOptions) -> FormeResult<Input> {
		let value = match self {
			Binding::Delegate(object) => {
				tracing::trace!(field, "delegating descriptor to bound object");
				return object.forme_input(field, opts);
			}
			Binding::Accessor(object) => object.field_value(field)?,
			Binding::Value(container) => Accessor::parse(field)
				.lookup(container)
				.cloned()
				.ok_or_else(|| FormeError::binding(field, format!("no such field in {container}")))?,
		};
		tracing::trace!(field, "synthesizing descriptor from bound value");
		Ok(synthesize(field, value, opts))
	}
}

fn synthesize(field: &str, value: Value, mut opts: InputOptions) -> Input {
	let kind = match opts.remove("type") {
		Some(Value::String(kind)) => kind,
		_ => "text".to_string(),
	};
	let defaults = InputOptions::new()
		.with("name", field)
		.with("id", field)
		.with(VALUE, value);
	Input::new(kind, defaults.merged_with(opts))
}

impl fmt::Debug for Binding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Binding::Delegate(_) => f.write_str("Binding::Delegate(..)"),
			Binding::Accessor(_) => f.write_str("Binding::Accessor(..)"),
			Binding::Value(value) => f.debug_tuple("Binding::Value").field(value).finish(),
		}
	}
}

impl From<Value> for Binding {
	fn from(value: Value) -> Self {
		Binding::Value(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_array_binding_reads_first() {
		let binding = Binding::from_value(json!(["foo"]));

		let input = binding.resolve("first", InputOptions::new()).unwrap();

		assert_eq!(input.kind(), "text");
		assert_eq!(input.opts().get("name"), Some(&json!("first")));
		assert_eq!(input.opts().get("id"), Some(&json!("first")));
		assert_eq!(input.opts().get("value"), Some(&json!("foo")));
	}

	#[rstest]
	fn test_object_binding_reads_key() {
		let binding = Binding::from_value(json!({"foo": "bar"}));
		let input = binding.resolve("foo", InputOptions::new()).unwrap();
		assert_eq!(input.opts().get("value"), Some(&json!("bar")));
	}

	#[rstest]
	fn test_missing_key_is_binding_error() {
		let binding = Binding::from_value(json!({"foo": "bar"}));
		let result = binding.resolve("baz", InputOptions::new());
		assert!(matches!(result, Err(FormeError::Binding { ref field, .. }) if field == "baz"));
	}

	#[rstest]
	fn test_missing_key_message_names_the_container() {
		let binding = Binding::from_value(json!({"foo": "bar"}));
		let err = binding.resolve("baz", InputOptions::new()).unwrap_err();
		assert_eq!(
			err.to_string(),
			r#"Binding error for field baz: no such field in {"foo":"bar"}"#
		);
	}

	#[rstest]
	#[case("first", "Ann")]
	#[case("last", "Lee")]
	fn test_struct_fields_named_first_and_last(#[case] field: &str, #[case] expected: &str) {
		// Arrange
		#[derive(Serialize)]
		struct Person {
			first: &'static str,
			last: &'static str,
		}
		let binding = Binding::from_serialize(&Person {
			first: "Ann",
			last: "Lee",
		})
		.unwrap();

		// Act
		let input = binding.resolve(field, InputOptions::new()).unwrap();

		// Assert
		assert_eq!(input.opts().get("name"), Some(&json!(field)));
		assert_eq!(input.opts().get("value"), Some(&json!(expected)));
	}

	#[rstest]
	fn test_caller_options_override_defaults() {
		let binding = Binding::from_value(json!({"bio": "hi"}));

		let input = binding
			.resolve(
				"bio",
				InputOptions::new().with("type", "textarea").with("id", "about"),
			)
			.unwrap();

		assert_eq!(input.kind(), "textarea");
		assert_eq!(input.opts().get("id"), Some(&json!("about")));
		assert!(!input.opts().contains_key("type"));
	}

	#[rstest]
	fn test_accessor_closure() {
		let binding = Binding::accessor(|field: &str| -> FormeResult<Value> {
			Ok(json!(format!("{field}!")))
		});
		let input = binding.resolve("x", InputOptions::new()).unwrap();
		assert_eq!(input.opts().get("value"), Some(&json!("x!")));
	}

	#[rstest]
	fn test_accessor_errors_propagate() {
		let binding = Binding::accessor(|_: &str| -> FormeResult<Value> {
			Err(anyhow::anyhow!("db unavailable").into())
		});
		let result = binding.resolve("x", InputOptions::new());
		assert_eq!(result.unwrap_err().to_string(), "db unavailable");
	}

	#[rstest]
	fn test_from_serialize() {
		#[derive(Serialize)]
		struct Account {
			email: String,
		}

		let binding = Binding::from_serialize(&Account {
			email: "a@example.com".to_string(),
		})
		.unwrap();
		let input = binding.resolve("email", InputOptions::new()).unwrap();
		assert_eq!(input.opts().get("value"), Some(&json!("a@example.com")));
	}
}
