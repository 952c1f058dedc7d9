//! Rich text — short runs of inline content used for prose and field values.

use serde::{Deserialize, Serialize};

/// A hyperlink fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// One inline fragment of a [`RichText`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Inline {
    /// Plain text.
    Text(String),
    /// Monospace text, e.g. an obfuscated mail address.
    Code(String),
    Link(Link),
}

/// An ordered sequence of inline fragments.
///
/// Deserializes from either a plain string or a list of fragments:
///
/// ```toml
/// hardware = "Dual Xeon 2.8GHz, 2GB RAM"
/// contact = [{ text = "ticket system " }, { code = "qs AT pair com" }]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RichTextRepr", into = "RichTextRepr")]
pub struct RichText {
    parts: Vec<Inline>,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RichTextRepr {
    Plain(String),
    Parts(Vec<Inline>),
}

impl From<RichTextRepr> for RichText {
    fn from(repr: RichTextRepr) -> Self {
        match repr {
            RichTextRepr::Plain(text) => Self::from(text),
            RichTextRepr::Parts(parts) => Self { parts },
        }
    }
}

impl From<RichText> for RichTextRepr {
    fn from(rich: RichText) -> Self {
        match <[Inline; 1]>::try_from(rich.parts) {
            Ok([Inline::Text(text)]) => Self::Plain(text),
            Ok([other]) => Self::Parts(vec![other]),
            Err(parts) if parts.is_empty() => Self::Plain(String::new()),
            Err(parts) => Self::Parts(parts),
        }
    }
}

impl From<String> for RichText {
    fn from(text: String) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        Self {
            parts: vec![Inline::Text(text)],
        }
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        Self::from(text.to_string())
    }
}

impl RichText {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plain text fragment.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.parts.push(Inline::Text(text.into()));
        self
    }

    /// Append a monospace fragment.
    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.parts.push(Inline::Code(code.into()));
        self
    }

    /// Append a hyperlink fragment.
    #[must_use]
    pub fn link(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.parts.push(Inline::Link(Link {
            label: label.into(),
            href: href.into(),
        }));
        self
    }

    #[must_use]
    pub fn parts(&self) -> &[Inline] {
        &self.parts
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The visible text with all markup stripped.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.parts
            .iter()
            .map(|part| match part {
                Inline::Text(text) | Inline::Code(text) => text.as_str(),
                Inline::Link(link) => link.label.as_str(),
            })
            .collect()
    }
}
