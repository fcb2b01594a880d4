#![forbid(unsafe_code)]

//! Alert presentation configuration.

use alertkit_core::ButtonStyle;
use alertkit_style::{Rgb, Style};

use crate::text::TextRole;

/// Styling and sizing for presented alerts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertConfig {
    /// Title style.
    pub title_style: Style,
    /// Message style.
    pub message_style: Style,
    /// Label style for `default` buttons.
    pub default_style: Style,
    /// Label style for `cancel` buttons.
    pub cancel_style: Style,
    /// Label style for `destructive` buttons.
    pub destructive_style: Style,
    /// Label of the implicit button shown when no buttons were requested.
    pub dismiss_label: String,
    /// Minimum dialog width in cells.
    pub min_width: u16,
    /// Maximum dialog width in cells.
    pub max_width: u16,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            title_style: Style::new().bold(),
            message_style: Style::new(),
            default_style: Style::new().bold(),
            cancel_style: Style::new(),
            destructive_style: Style::new().fg(Rgb::RED),
            dismiss_label: "OK".to_string(),
            min_width: 30,
            max_width: 60,
        }
    }
}

impl AlertConfig {
    #[must_use]
    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    #[must_use]
    pub fn message_style(mut self, style: Style) -> Self {
        self.message_style = style;
        self
    }

    /// Set the label style for one button style.
    #[must_use]
    pub fn button_style(mut self, button: ButtonStyle, style: Style) -> Self {
        match button {
            ButtonStyle::Default => self.default_style = style,
            ButtonStyle::Cancel => self.cancel_style = style,
            ButtonStyle::Destructive => self.destructive_style = style,
        }
        self
    }

    #[must_use]
    pub fn dismiss_label(mut self, label: impl Into<String>) -> Self {
        self.dismiss_label = label.into();
        self
    }

    /// Set the dialog width bounds. `min` wins if the bounds cross.
    #[must_use]
    pub fn width(mut self, min: u16, max: u16) -> Self {
        self.min_width = min;
        self.max_width = max;
        self
    }

    /// Base style for a text role.
    #[must_use]
    pub fn style_for(&self, role: TextRole) -> Style {
        match role {
            TextRole::Title => self.title_style,
            TextRole::Message => self.message_style,
            TextRole::ButtonLabel(ButtonStyle::Default) => self.default_style,
            TextRole::ButtonLabel(ButtonStyle::Cancel) => self.cancel_style,
            TextRole::ButtonLabel(ButtonStyle::Destructive) => self.destructive_style,
        }
    }
}
