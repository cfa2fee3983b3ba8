//! Error type shared by every stage of the markup pipeline

#[derive(Debug, thiserror::Error)]
pub enum FormeError {
	/// The default formatter has no branch for the requested input type.
	#[error("Unknown input type: {0}")]
	UnknownInputType(String),
	/// The `options` value of a select input could not be normalized.
	#[error("Malformed options: {0}")]
	MalformedOptions(String),
	#[error("Invalid value for attribute {name}: {reason}")]
	InvalidAttribute { name: String, reason: String },
	/// The bound object could not supply a value for the field.
	#[error("Binding error for field {field}: {message}")]
	Binding { field: String, message: String },
	/// Raised by a custom stage or a bound object and passed through unchanged.
	#[error(transparent)]
	Stage(#[from] anyhow::Error),
}

pub type FormeResult<T> = Result<T, FormeError>;

impl FormeError {
	pub(crate) fn malformed(message: impl Into<String>) -> Self {
		Self::MalformedOptions(message.into())
	}

	pub(crate) fn binding(field: &str, message: impl Into<String>) -> Self {
		Self::Binding {
			field: field.to_string(),
			message: message.into(),
		}
	}
}
