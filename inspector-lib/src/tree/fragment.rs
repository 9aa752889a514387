//! Host-independent styled text.
//!
//! Adapters describe a node's label as a [`Fragment`]: a run of [`Span`]s, each
//! tagged with a semantic [`Token`]. The host decides what a token looks like.

use std::fmt;

/// Semantic style class of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Token {
    #[default]
    Plain,
    /// Separators such as `: ` and `, `.
    Punctuation,
    /// A property name.
    Name,
    /// A non-enumerable property name.
    DimmedName,
    /// Compact one-line preview of a container.
    Preview,
    Number,
    String,
    Boolean,
    Undefined,
    Null,
    RegExp,
    Symbol,
    /// The `ƒ` before a function name.
    FunctionPrefix,
    FunctionName,
    /// `<`, `>`, `</` around a tag.
    TagBracket,
    TagName,
    AttributeName,
    AttributeValue,
    Comment,
    Doctype,
    /// Sort direction glyph in a table header.
    SortIcon,
}

/// A piece of text with a single token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub token: Token,
}

impl Span {
    pub fn new(token: Token, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            token,
        }
    }
}

/// A sequence of styled spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    spans: Vec<Span>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fragment holding one plain span.
    pub fn text(text: impl Into<String>) -> Self {
        Self::styled(Token::Plain, text)
    }

    /// A fragment holding one span.
    pub fn styled(token: Token, text: impl Into<String>) -> Self {
        let mut fragment = Self::new();
        fragment.push(token, text);
        fragment
    }

    /// Append a span. Empty text is ignored.
    pub fn push(&mut self, token: Token, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        if !text.is_empty() {
            self.spans.push(Span { text, token });
        }
        self
    }

    /// Append all spans of `other`.
    pub fn append(&mut self, other: Fragment) -> &mut Self {
        self.spans.extend(other.spans);
        self
    }

    /// Builder form of [`Fragment::push`].
    pub fn with(mut self, token: Token, text: impl Into<String>) -> Self {
        self.push(token, text);
        self
    }

    /// Builder form of [`Fragment::append`].
    pub fn then(mut self, other: Fragment) -> Self {
        self.append(other);
        self
    }

    /// Concatenate fragments, putting `separator` between them.
    pub fn join(fragments: impl IntoIterator<Item = Fragment>, separator: &str) -> Self {
        let mut joined = Self::new();
        for (i, fragment) in fragments.into_iter().enumerate() {
            if i > 0 {
                joined.push(Token::Punctuation, separator);
            }
            joined.append(fragment);
        }
        joined
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The text without styling.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            f.write_str(&span.text)?;
        }
        Ok(())
    }
}

impl From<Span> for Fragment {
    fn from(span: Span) -> Self {
        Self { spans: vec![span] }
    }
}

impl FromIterator<Span> for Fragment {
    fn from_iter<I: IntoIterator<Item = Span>>(iter: I) -> Self {
        Self {
            spans: iter.into_iter().filter(|span| !span.text.is_empty()).collect(),
        }
    }
}
