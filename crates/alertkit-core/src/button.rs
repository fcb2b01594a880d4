#![forbid(unsafe_code)]

//! Button requests: label, semantic style, and action callback.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use crate::text::TextContent;

/// Semantic role of an alert button.
///
/// Styles carry a fixed priority, independent of insertion order:
/// `Destructive` > `Default` > `Cancel`. [`Ord`] sorts by descending priority,
/// so a sorted sequence reads destructive, default, cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonStyle {
    Cancel,
    Default,
    Destructive,
}

impl ButtonStyle {
    /// All styles in presentation order.
    pub const ALL: [ButtonStyle; 3] = [Self::Destructive, Self::Default, Self::Cancel];

    /// Tie-break priority. Higher wins the earlier slot.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Destructive => 2,
            Self::Default => 1,
            Self::Cancel => 0,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cancel => "cancel",
            Self::Default => "default",
            Self::Destructive => "destructive",
        }
    }
}

impl PartialOrd for ButtonStyle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ButtonStyle {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority().cmp(&self.priority())
    }
}

impl fmt::Display for ButtonStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A zero-argument button callback.
///
/// Cloning shares the same callback.
#[derive(Clone)]
pub struct Action {
    callback: Rc<dyn Fn()>,
}

impl Action {
    pub fn new(callback: impl Fn() + 'static) -> Self {
        Self {
            callback: Rc::new(callback),
        }
    }

    /// An action that does nothing.
    #[must_use]
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    /// Run the callback.
    pub fn call(&self) {
        (self.callback)();
    }

    /// Whether two actions share the same callback.
    #[must_use]
    pub fn ptr_eq(&self, other: &Action) -> bool {
        Rc::ptr_eq(&self.callback, &other.callback)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").finish_non_exhaustive()
    }
}

/// One requested alert button.
#[derive(Debug, Clone)]
pub struct ButtonSpec {
    label: TextContent,
    style: ButtonStyle,
    action: Action,
}

impl ButtonSpec {
    pub fn new(label: impl Into<TextContent>, style: ButtonStyle, action: Action) -> Self {
        Self {
            label: label.into(),
            style,
            action,
        }
    }

    pub fn label(&self) -> &TextContent {
        &self.label
    }

    pub fn style(&self) -> ButtonStyle {
        self.style
    }

    pub fn action(&self) -> &Action {
        &self.action
    }
}
