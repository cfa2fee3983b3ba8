//! Form: holds the stage bindings and drives the pipeline
//!
//! ```text
//! input(field, opts)
//!   -> [binding] descriptor
//!   -> formatter -> [labeler, when a label is requested] -> serializer
//!   -> markup
//! ```

use crate::attrs::AttributeSet;
use crate::binding::Binding;
use crate::error::FormeResult;
use crate::formatter::DefaultFormatter;
use crate::input::{Input, InputOptions};
use crate::labeler::DefaultLabeler;
use crate::serializer::HtmlSerializer;
use crate::stage::{Formatter, Labeler, Serializer};
use crate::tag::Tag;
use std::fmt;
use std::sync::Arc;

/// Stage overrides supplied when a form is created.
///
/// Unset stages fall back to [`DefaultFormatter`], [`DefaultLabeler`] and
/// [`HtmlSerializer`].
#[derive(Clone, Default)]
pub struct FormOptions {
	formatter: Option<Arc<dyn Formatter>>,
	labeler: Option<Arc<dyn Labeler>>,
	serializer: Option<Arc<dyn Serializer>>,
}

impl FormOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn formatter(mut self, formatter: impl Formatter + 'static) -> Self {
		self.formatter = Some(Arc::new(formatter));
		self
	}

	pub fn labeler(mut self, labeler: impl Labeler + 'static) -> Self {
		self.labeler = Some(Arc::new(labeler));
		self
	}

	pub fn serializer(mut self, serializer: impl Serializer + 'static) -> Self {
		self.serializer = Some(Arc::new(serializer));
		self
	}
}

impl fmt::Debug for FormOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FormOptions")
			.field("custom_formatter", &self.formatter.is_some())
			.field("custom_labeler", &self.labeler.is_some())
			.field("custom_serializer", &self.serializer.is_some())
			.finish()
	}
}

/// Renders form fields to markup
///
/// A form keeps no state between calls: the same arguments always drive the
/// whole pipeline again.
#[derive(Clone)]
pub struct Form {
	binding: Option<Binding>,
	formatter: Arc<dyn Formatter>,
	labeler: Arc<dyn Labeler>,
	serializer: Arc<dyn Serializer>,
}

impl Form {
	/// Create an unbound form with the default stages
	///
	/// # Examples
	///
	/// ```
	/// use forme_core::{Form, InputOptions};
	///
	/// let form = Form::new();
	/// assert_eq!(form.input("text", InputOptions::new()).unwrap(), r#"<input type="text"/>"#);
	/// ```
	pub fn new() -> Self {
		Self::with_options(None, FormOptions::new())
	}

	/// Create a form bound to an object, with the default stages
	///
	/// # Examples
	///
	/// ```
	/// use forme_core::{Binding, Form, InputOptions};
	/// use serde_json::json;
	///
	/// let form = Form::with_object(Binding::from_value(json!({"foo": "bar"})));
	/// assert_eq!(
	///     form.input("foo", InputOptions::new()).unwrap(),
	///     r#"<input id="foo" name="foo" type="text" value="bar"/>"#
	/// );
	/// ```
	pub fn with_object(binding: impl Into<Binding>) -> Self {
		Self::with_options(Some(binding.into()), FormOptions::new())
	}

	pub fn with_options(binding: Option<Binding>, options: FormOptions) -> Self {
		let formatter: Arc<dyn Formatter> = match options.formatter {
			Some(formatter) => formatter,
			None => Arc::new(DefaultFormatter),
		};
		let labeler: Arc<dyn Labeler> = match options.labeler {
			Some(labeler) => labeler,
			None => Arc::new(DefaultLabeler),
		};
		let serializer: Arc<dyn Serializer> = match options.serializer {
			Some(serializer) => serializer,
			None => Arc::new(HtmlSerializer),
		};
		Self {
			binding,
			formatter,
			labeler,
			serializer,
		}
	}

	pub fn binding(&self) -> Option<&Binding> {
		self.binding.as_ref()
	}

	pub fn formatter(&self) -> &dyn Formatter {
		self.formatter.as_ref()
	}

	pub fn labeler(&self) -> &dyn Labeler {
		self.labeler.as_ref()
	}

	pub fn serializer(&self) -> &dyn Serializer {
		self.serializer.as_ref()
	}

	/// Render one field.
	///
	/// Without a bound object `field` is the input type. With one, the
	/// object resolves `field` into a descriptor (see [`Binding::resolve`]).
	///
	/// # Examples
	///
	/// ```
	/// use forme_core::{Form, InputOptions};
	///
	/// let form = Form::new();
	/// let html = form
	///     .input("text", InputOptions::new().with("label", "Foo").with("value", "foo"))
	///     .unwrap();
	/// assert_eq!(html, r#"<label>Foo: <input type="text" value="foo"/></label>"#);
	/// ```
	pub fn input(&self, field: &str, opts: InputOptions) -> FormeResult<String> {
		let input = match &self.binding {
			Some(binding) => binding.resolve(field, opts)?,
			None => Input::new(field, opts),
		};
		self.render(input)
	}

	/// Run an already built descriptor through formatter, labeler and serializer.
	pub fn render(&self, input: Input) -> FormeResult<String> {
		let label = input.label()?;
		tracing::debug!(input_type = input.kind(), labeled = label.is_some(), "rendering input");

		let node = self.formatter.format(self, input)?;
		let node = match label {
			Some(label) => self.labeler.label(&label, node)?,
			None => node,
		};
		self.serializer.serialize(&node)
	}

	/// Opening `<form>` tag with the given attributes.
	///
	/// # Examples
	///
	/// ```
	/// use forme_core::{AttributeSet, Form};
	///
	/// let attrs: AttributeSet = [("method", "post"), ("action", "foo")].into_iter().collect();
	/// assert_eq!(Form::new().open(attrs).unwrap(), r#"<form action="foo" method="post">"#);
	/// ```
	pub fn open(&self, attrs: AttributeSet) -> FormeResult<String> {
		HtmlSerializer.open_tag(&Tag::new("form").attrs_from(attrs))
	}

	/// Closing `</form>` tag.
	pub fn close(&self) -> String {
		HtmlSerializer.close_tag(&Tag::new("form"))
	}
}

impl Default for Form {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for Form {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Form")
			.field("binding", &self.binding)
			.finish_non_exhaustive()
	}
}
