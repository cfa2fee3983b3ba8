//! Contracts of the three replaceable pipeline stages
//!
//! Each stage is a single-method trait implemented for plain closures of the
//! matching shape, so a function can replace a default stage directly:
//!
//! ```
//! use forme_core::{Form, FormOptions, FormeResult, InputOptions, Node};
//!
//! let form = Form::with_options(
//!     None,
//!     FormOptions::new().serializer(|node: &Node| -> FormeResult<String> {
//!         Ok(node.as_tag().map(|t| t.name().to_string()).unwrap_or_default())
//!     }),
//! );
//! assert_eq!(form.input("textarea", InputOptions::new()).unwrap(), "textarea");
//! ```

use crate::error::FormeResult;
use crate::form::Form;
use crate::input::Input;
use crate::tag::Node;

/// Turns a descriptor into a tag tree.
pub trait Formatter: Send + Sync {
	fn format(&self, form: &Form, input: Input) -> FormeResult<Node>;
}

/// Wraps a formatted tree with its label.
pub trait Labeler: Send + Sync {
	fn label(&self, label: &str, node: Node) -> FormeResult<Node>;
}

/// Turns the final tree into markup.
pub trait Serializer: Send + Sync {
	fn serialize(&self, node: &Node) -> FormeResult<String>;
}

impl<F> Formatter for F
where
	F: Fn(&Form, Input) -> FormeResult<Node> + Send + Sync,
{
	fn format(&self, form: &Form, input: Input) -> FormeResult<Node> {
		self(form, input)
	}
}

impl<F> Labeler for F
where
	F: Fn(&str, Node) -> FormeResult<Node> + Send + Sync,
{
	fn label(&self, label: &str, node: Node) -> FormeResult<Node> {
		self(label, node)
	}
}

impl<F> Serializer for F
where
	F: Fn(&Node) -> FormeResult<String> + Send + Sync,
{
	fn serialize(&self, node: &Node) -> FormeResult<String> {
		self(node)
	}
}
