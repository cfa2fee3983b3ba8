//! # Forme
//!
//! Form field markup generation for Rust.
//!
//! Forme renders form fields from a small descriptor (an input type and its
//! options) through three stages that can each be replaced by a plain
//! function:
//!
//! - **Formatter**: descriptor → tag tree
//! - **Labeler**: wraps the tree when a `label` option is given
//! - **Serializer**: tag tree → markup
//!
//! A form can also be bound to a domain object, which either builds the
//! descriptor for each of its fields or simply supplies field values.
//!
//! ## Quick Example
//!
//! ```
//! use forme::prelude::*;
//! use serde_json::json;
//!
//! let form = Form::new();
//!
//! let html = form
//!     .input("text", InputOptions::new().with("value", "foo").with("name", "bar"))
//!     .unwrap();
//! assert_eq!(html, r#"<input name="bar" type="text" value="foo"/>"#);
//!
//! let bound = Form::with_object(json!({"title": "Hello"}));
//! assert_eq!(
//!     bound.input("title", InputOptions::new()).unwrap(),
//!     r#"<input id="title" name="title" type="text" value="Hello"/>"#
//! );
//! ```

pub use forme_core::*;

/// Commonly used types.
pub mod prelude {
	pub use forme_core::{
		AttributeSet, Binding, FieldAccess, Form, FormOptions, FormeError, FormeInput,
		FormeResult, Formatter, Input, InputOptions, IntoNode, Labeler, Node, Serializer, Tag,
	};
}
