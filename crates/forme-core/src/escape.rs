//! Escaping for text placed into attribute or content position.
//!
//! Escaped characters:
//! - `&` → `&amp;`
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `"` → `&quot;`
//! - `'` → `&#x27;`
//!
//! Attribute values additionally encode line breaks as numeric references.

use std::borrow::Cow;

/// Escape text for inclusion between tags
///
/// # Examples
///
/// ```
/// use forme_core::escape::escape_content;
///
/// assert_eq!(escape_content("&foo"), "&amp;foo");
/// assert_eq!(escape_content("<b>"), "&lt;b&gt;");
/// assert_eq!(escape_content("plain"), "plain");
/// ```
pub fn escape_content(input: &str) -> Cow<'_, str> {
	escape_with(input, &['&', '<', '>', '"', '\''])
}

/// Escape text for inclusion inside a double-quoted attribute value
///
/// # Examples
///
/// ```
/// use forme_core::escape::escape_attribute;
///
/// let escaped = escape_attribute(r#"a" onclick="x"#);
/// assert_eq!(escaped, "a&quot; onclick=&quot;x");
/// assert_eq!(escape_attribute("line\nbreak"), "line&#10;break");
/// ```
pub fn escape_attribute(input: &str) -> Cow<'_, str> {
	escape_with(input, &['&', '<', '>', '"', '\'', '\n', '\r'])
}

fn escape_with<'a>(input: &'a str, special: &[char]) -> Cow<'a, str> {
	if !input.contains(special) {
		return Cow::Borrowed(input);
	}
	let mut escaped = String::with_capacity(input.len() + 8);
	for c in input.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			'\n' if special.contains(&'\n') => escaped.push_str("&#10;"),
			'\r' if special.contains(&'\r') => escaped.push_str("&#13;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}
