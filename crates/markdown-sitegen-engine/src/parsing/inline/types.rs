/// The inline construct a [`Span`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Plain text that isn't part of any special construct.
    Text,
    /// `**bold**`
    Bold,
    /// `*italic*`
    Italic,
    /// `` `code` `` - content is never parsed further.
    Code,
    /// `[label](url)`
    Link,
    /// `![alt](url)`
    Image,
}

/// A typed run of inline text produced by the tokenizer.
///
/// `url` is only set for [`SpanKind::Link`] and [`SpanKind::Image`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub kind: SpanKind,
    pub text: String,
    pub url: Option<String>,
}

impl Span {
    pub fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            url: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Text, text)
    }

    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Link,
            text: label.into(),
            url: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Image,
            text: alt.into(),
            url: Some(url.into()),
        }
    }

    pub fn is_text(&self) -> bool {
        self.kind == SpanKind::Text
    }
}
