//! Trusted and escaped HTML fragments.

use std::fmt;

/// Markup marked for verbatim injection into the page.
///
/// The contents are never re-encoded when placed into a [`Markup`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RawHtml(String);

impl RawHtml {
    /// Mark a string as trusted markup.
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Empty markup.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Borrow the markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the markup.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether the markup is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RawHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An HTML fragment under construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// Create an empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fragment from text, escaping it.
    pub fn text(text: &str) -> Self {
        Self(escape_html(text))
    }

    /// Create a fragment from trusted markup.
    pub fn raw(html: RawHtml) -> Self {
        Self(html.into_string())
    }

    /// Wrap children in an element. Attribute values are escaped.
    pub fn element(tag: &str, attrs: &[(&str, &str)], children: Markup) -> Self {
        let mut html = format!("<{}", tag);
        for (name, value) in attrs {
            html.push_str(&format!(r#" {}="{}""#, name, escape_html(value)));
        }
        html.push('>');
        html.push_str(&children.0);
        html.push_str(&format!("</{}>", tag));
        Self(html)
    }

    /// Append escaped text.
    pub fn push_text(&mut self, text: &str) {
        self.0.push_str(&escape_html(text));
    }

    /// Append trusted markup verbatim.
    pub fn push_raw(&mut self, html: &RawHtml) {
        self.0.push_str(html.as_str());
    }

    /// Append another fragment.
    pub fn push(&mut self, other: Markup) {
        self.0.push_str(&other.0);
    }

    /// Borrow the HTML.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the HTML.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether the fragment is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<RawHtml> for Markup {
    fn from(html: RawHtml) -> Self {
        Self::raw(html)
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape text for use in HTML content or attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
