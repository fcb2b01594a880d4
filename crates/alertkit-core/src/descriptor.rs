#![forbid(unsafe_code)]

//! The alert descriptor builder and button finalization.
//!
//! # Invariants
//!
//! 1. Every edit returns a new descriptor; the receiver is never mutated.
//! 2. Raw buttons keep insertion order and may repeat a style.
//! 3. After [`AlertDescriptor::finalize`], each style appears at most once and
//!    it is the most recently added button of that style.
//! 4. Finalized buttons are ordered destructive, default, cancel.
//!
//! # Failure Modes
//!
//! None. All edits are total. Bounding the button count to the presentation
//! surface is the mapper's job.

use std::collections::BTreeMap;

use crate::button::{Action, ButtonSpec, ButtonStyle};
use crate::text::TextContent;

/// Immutable description of a modal alert.
#[derive(Debug, Clone, Default)]
pub struct AlertDescriptor {
    title: Option<TextContent>,
    message: Option<TextContent>,
    buttons: Vec<ButtonSpec>,
}

impl AlertDescriptor {
    /// An empty descriptor: no title, no message, no buttons.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the title. Last write wins.
    #[must_use]
    pub fn with_title(&self, title: impl Into<TextContent>) -> Self {
        Self {
            title: Some(title.into()),
            ..self.clone()
        }
    }

    /// Replace the message. Last write wins.
    #[must_use]
    pub fn with_message(&self, message: impl Into<TextContent>) -> Self {
        Self {
            message: Some(message.into()),
            ..self.clone()
        }
    }

    /// Append a button request. Repeating a style is allowed here; the
    /// earlier request is dropped at finalization.
    #[must_use]
    pub fn add_button(
        &self,
        label: impl Into<TextContent>,
        style: ButtonStyle,
        action: impl Fn() + 'static,
    ) -> Self {
        self.push_button(ButtonSpec::new(label, style, Action::new(action)))
    }

    /// Append an already-built button request.
    #[must_use]
    pub fn push_button(&self, button: ButtonSpec) -> Self {
        let mut next = self.clone();
        next.buttons.push(button);
        next
    }

    #[must_use]
    pub fn cancel_button(
        &self,
        label: impl Into<TextContent>,
        action: impl Fn() + 'static,
    ) -> Self {
        self.add_button(label, ButtonStyle::Cancel, action)
    }

    #[must_use]
    pub fn default_button(
        &self,
        label: impl Into<TextContent>,
        action: impl Fn() + 'static,
    ) -> Self {
        self.add_button(label, ButtonStyle::Default, action)
    }

    #[must_use]
    pub fn destructive_button(
        &self,
        label: impl Into<TextContent>,
        action: impl Fn() + 'static,
    ) -> Self {
        self.add_button(label, ButtonStyle::Destructive, action)
    }

    pub fn title(&self) -> Option<&TextContent> {
        self.title.as_ref()
    }

    pub fn message(&self) -> Option<&TextContent> {
        self.message.as_ref()
    }

    /// Buttons in insertion order, duplicates included.
    pub fn raw_buttons(&self) -> &[ButtonSpec] {
        &self.buttons
    }

    /// Deduplicate by style (last added wins) and order by priority.
    pub fn finalize(&self) -> FinalizedButtons {
        let mut by_style: BTreeMap<ButtonStyle, (usize, &ButtonSpec)> = BTreeMap::new();
        for (position, button) in self.buttons.iter().enumerate() {
            if let Some((superseded, _)) = by_style.insert(button.style(), (position, button)) {
                tracing::trace!(
                    style = %button.style(),
                    position = superseded,
                    replaced_by = position,
                    "superseded alert button dropped"
                );
            }
        }

        let buttons: Vec<ButtonSpec> = by_style
            .into_values()
            .map(|(_, button)| button.clone())
            .collect();
        tracing::debug!(
            requested = self.buttons.len(),
            styles = ?buttons.iter().map(ButtonSpec::style).collect::<Vec<_>>(),
            "alert buttons finalized"
        );
        FinalizedButtons { buttons }
    }
}

/// Buttons after finalization: unique by style, in priority order.
#[derive(Debug, Clone, Default)]
pub struct FinalizedButtons {
    buttons: Vec<ButtonSpec>,
}

impl FinalizedButtons {
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ButtonSpec> {
        self.buttons.iter()
    }

    pub fn as_slice(&self) -> &[ButtonSpec] {
        &self.buttons
    }

    /// Styles in finalized order.
    pub fn styles(&self) -> Vec<ButtonStyle> {
        self.buttons.iter().map(ButtonSpec::style).collect()
    }
}

impl IntoIterator for FinalizedButtons {
    type Item = ButtonSpec;
    type IntoIter = std::vec::IntoIter<ButtonSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.buttons.into_iter()
    }
}

impl<'a> IntoIterator for &'a FinalizedButtons {
    type Item = &'a ButtonSpec;
    type IntoIter = std::slice::Iter<'a, ButtonSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.buttons.iter()
    }
}
