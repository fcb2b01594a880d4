#![forbid(unsafe_code)]

//! Text content for titles, messages, and button labels.
//!
//! [`TextContent`] is either a plain string or pre-styled [`StyledText`].
//! The two variants are never normalized into each other; renderers must
//! handle both.

use alertkit_style::Style;

/// A run of text with a single style.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span {
    pub content: String,
    pub style: Style,
}

impl Span {
    /// Create a span with the given style.
    pub fn styled(content: impl Into<String>, style: Style) -> Self {
        Self {
            content: content.into(),
            style,
        }
    }

    /// Create an unstyled span.
    pub fn raw(content: impl Into<String>) -> Self {
        Self::styled(content, Style::new())
    }
}

/// Pre-styled text made of spans.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledText {
    spans: Vec<Span>,
}

impl StyledText {
    /// Empty styled text.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Styled text with one span.
    pub fn styled(content: impl Into<String>, style: Style) -> Self {
        Self {
            spans: vec![Span::styled(content, style)],
        }
    }

    /// Append a span.
    #[must_use]
    pub fn push_span(mut self, span: Span) -> Self {
        self.spans.push(span);
        self
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Concatenated span contents without styling.
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.content.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|s| s.content.is_empty())
    }
}

impl From<Vec<Span>> for StyledText {
    fn from(spans: Vec<Span>) -> Self {
        Self { spans }
    }
}

/// Title, message, or label text: plain or pre-styled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextContent {
    Plain(String),
    Rich(StyledText),
}

impl TextContent {
    /// The text without any styling.
    pub fn plain(&self) -> String {
        match self {
            Self::Plain(text) => text.clone(),
            Self::Rich(text) => text.plain(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Plain(text) => text.is_empty(),
            Self::Rich(text) => text.is_empty(),
        }
    }

    pub fn is_rich(&self) -> bool {
        matches!(self, Self::Rich(_))
    }
}

impl Default for TextContent {
    fn default() -> Self {
        Self::Plain(String::new())
    }
}

impl From<&str> for TextContent {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_owned())
    }
}

impl From<String> for TextContent {
    fn from(text: String) -> Self {
        Self::Plain(text)
    }
}

impl From<StyledText> for TextContent {
    fn from(text: StyledText) -> Self {
        Self::Rich(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alertkit_style::Rgb;

    #[test]
    fn plain_from_str() {
        let text = TextContent::from("Hello");
        assert_eq!(text, TextContent::Plain("Hello".to_string()));
        assert!(!text.is_rich());
    }

    #[test]
    fn rich_is_not_flattened() {
        let styled = StyledText::styled("Warning", Style::new().fg(Rgb::RED));
        let text = TextContent::from(styled.clone());
        assert_eq!(text, TextContent::Rich(styled));
        assert!(text.is_rich());
    }

    #[test]
    fn plain_concatenates_spans() {
        let styled = StyledText::new()
            .push_span(Span::raw("Delete "))
            .push_span(Span::styled("forever", Style::new().bold()));
        assert_eq!(TextContent::from(styled).plain(), "Delete forever");
    }

    #[test]
    fn default_is_empty_plain() {
        let text = TextContent::default();
        assert!(text.is_empty());
        assert!(!text.is_rich());
    }

    #[test]
    fn rich_with_empty_spans_is_empty() {
        let styled = StyledText::from(vec![Span::raw(""), Span::raw("")]);
        assert!(TextContent::from(styled).is_empty());
    }
}
