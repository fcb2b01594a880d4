#![forbid(unsafe_code)]

//! Text rendering primitive.
//!
//! The mapper decides which role a piece of text plays; the renderer decides
//! what that looks like on the host.

use alertkit_core::{ButtonStyle, Span, StyledText, TextContent};

use crate::config::AlertConfig;

/// The part of the alert a piece of text belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRole {
    Title,
    Message,
    ButtonLabel(ButtonStyle),
}

/// Turns [`TextContent`] into a host text element.
///
/// Implementations must accept both plain and rich content.
pub trait TextRenderer {
    type Element;

    fn render_text(&self, content: &TextContent, role: TextRole) -> Self::Element;
}

/// Renders every text as an unstyled `String`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

impl TextRenderer for PlainTextRenderer {
    type Element = String;

    fn render_text(&self, content: &TextContent, _role: TextRole) -> String {
        content.plain()
    }
}

/// Renders text as [`StyledText`], layering the role style from
/// [`AlertConfig`] under any styles the content already carries.
#[derive(Debug, Clone, Default)]
pub struct StyledTextRenderer {
    config: AlertConfig,
}

impl StyledTextRenderer {
    #[must_use]
    pub fn new(config: AlertConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AlertConfig {
        &self.config
    }
}

impl TextRenderer for StyledTextRenderer {
    type Element = StyledText;

    fn render_text(&self, content: &TextContent, role: TextRole) -> StyledText {
        let base = self.config.style_for(role);
        match content {
            TextContent::Plain(text) => StyledText::styled(text.clone(), base),
            TextContent::Rich(text) => text
                .spans()
                .iter()
                .map(|span| Span::styled(span.content.clone(), base.patch(span.style)))
                .collect::<Vec<_>>()
                .into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alertkit_style::{Rgb, Style, StyleFlags};

    #[test]
    fn plain_renderer_flattens_rich() {
        let rich = StyledText::new()
            .push_span(Span::raw("Hello "))
            .push_span(Span::styled("there", Style::new().bold()));
        let out = PlainTextRenderer.render_text(&rich.into(), TextRole::Message);
        assert_eq!(out, "Hello there");
    }

    #[test]
    fn styled_renderer_applies_role_style_to_plain() {
        let renderer = StyledTextRenderer::default();
        let out = renderer.render_text(&"Title".into(), TextRole::Title);
        assert_eq!(out.spans().len(), 1);
        assert!(out.spans()[0].style.has(StyleFlags::BOLD));
    }

    #[test]
    fn styled_renderer_keeps_span_styles_on_top() {
        let renderer = StyledTextRenderer::default();
        let rich = StyledText::styled("Erase", Style::new().fg(Rgb::BLUE).italic());
        let out = renderer.render_text(
            &rich.into(),
            TextRole::ButtonLabel(ButtonStyle::Destructive),
        );
        let style = out.spans()[0].style;
        assert_eq!(style.fg, Some(Rgb::BLUE));
        assert!(style.has(StyleFlags::ITALIC));
    }

    #[test]
    fn styled_renderer_uses_button_role_style() {
        let renderer = StyledTextRenderer::default();
        let out = renderer.render_text(
            &"Delete".into(),
            TextRole::ButtonLabel(ButtonStyle::Destructive),
        );
        assert_eq!(out.spans()[0].style.fg, Some(Rgb::RED));
        assert_eq!(out.plain(), "Delete");
    }
}
