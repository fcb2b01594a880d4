#![forbid(unsafe_code)]

//! Text style with optional colors and attribute flags.
//!
//! Every field of [`Style`] is optional: `None` means "inherit". Combining two
//! styles with [`Style::patch`] lets the patch override only what it sets,
//! which is how role styles (title, message, button label) are layered under
//! the styles carried by pre-styled text.

use bitflags::bitflags;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(220, 50, 47);
    pub const BLUE: Self = Self::new(38, 139, 210);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StyleFlags: u16 {
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const REVERSE = 1 << 4;
        const STRIKETHROUGH = 1 << 5;
    }
}

/// Text style: foreground, background, and attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Foreground color.
    pub fg: Option<Rgb>,
    /// Background color.
    pub bg: Option<Rgb>,
    /// Attribute flags.
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// An empty style (inherits everything).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: Rgb) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: Rgb) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add attribute flags to the style.
    #[must_use]
    pub fn add_flags(mut self, flags: StyleFlags) -> Self {
        self.attrs = Some(self.attrs.unwrap_or_default() | flags);
        self
    }

    #[must_use]
    pub fn bold(self) -> Self {
        self.add_flags(StyleFlags::BOLD)
    }

    #[must_use]
    pub fn dim(self) -> Self {
        self.add_flags(StyleFlags::DIM)
    }

    #[must_use]
    pub fn italic(self) -> Self {
        self.add_flags(StyleFlags::ITALIC)
    }

    #[must_use]
    pub fn underline(self) -> Self {
        self.add_flags(StyleFlags::UNDERLINE)
    }

    #[must_use]
    pub fn reverse(self) -> Self {
        self.add_flags(StyleFlags::REVERSE)
    }

    /// Whether the given flags are all set.
    #[must_use]
    pub fn has(&self, flags: StyleFlags) -> bool {
        self.attrs.is_some_and(|attrs| attrs.contains(flags))
    }

    /// True when nothing is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }

    /// Layer `other` on top of `self`.
    ///
    /// Colors set in `other` win. Attribute flags are unioned.
    #[must_use]
    pub fn patch(self, other: Style) -> Self {
        let attrs = match (self.attrs, other.attrs) {
            (Some(a), Some(b)) => Some(a | b),
            (a, b) => a.or(b),
        };
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attrs,
        }
    }
}
