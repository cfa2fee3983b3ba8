//! Form field markup generation
//!
//! This crate turns an input descriptor (a field type plus options) into HTML
//! markup through three replaceable stages:
//! - a formatter that builds a [`Tag`] tree from the descriptor
//! - a labeler that wraps the tree when a `label` option is present
//! - a serializer that turns the tree into a string
//!
//! A [`Form`] may be bound to an object that produces descriptors for its
//! own fields ([`FormeInput`]) or only supplies field values.
//!
//! ## Example
//!
//! ```
//! use forme_core::{Form, InputOptions};
//! use serde_json::json;
//!
//! let form = Form::new();
//! let html = form
//!     .input("select", InputOptions::new().with("options", json!([["a", 1], ["b", 2]])))
//!     .unwrap();
//! assert_eq!(
//!     html,
//!     r#"<select><option value="1">a</option><option value="2">b</option></select>"#
//! );
//! ```

pub mod attrs;
pub mod binding;
pub mod error;
pub mod escape;
pub mod form;
pub mod formatter;
pub mod input;
pub mod labeler;
pub mod options;
pub mod serializer;
pub mod stage;
pub mod tag;

pub use attrs::{AttrValue, AttributeSet};
pub use binding::{Binding, FieldAccess, FormeInput};
pub use error::{FormeError, FormeResult};
pub use form::{Form, FormOptions};
pub use formatter::DefaultFormatter;
pub use input::{Extracted, Input, InputOptions};
pub use labeler::DefaultLabeler;
pub use options::{SelectOption, normalize_options};
pub use serializer::{HtmlSerializer, JsonSerializer};
pub use stage::{Formatter, Labeler, Serializer};
pub use tag::{IntoNode, Node, Tag};
