#![forbid(unsafe_code)]

//! Maps a finalized descriptor onto the two-slot presentation surface.
//!
//! # Invariants
//!
//! - The slot shape is decided by the finalized button count alone.
//! - With two buttons, the first in priority order takes the primary slot.
//! - Missing title or message is rendered as empty text, never omitted.
//! - A trigger runs its action to completion before clearing visibility.
//!
//! # Failure Modes
//!
//! - More than [`MAX_SLOTS`] distinct styles: [`try_present_alert`] returns
//!   [`AlertError::TooManyButtons`] and [`present_alert`] panics. Buttons are
//!   never dropped to make the alert fit.

use std::fmt;

use alertkit_core::{Action, AlertDescriptor, AlertError, ButtonSpec, ButtonStyle, TextContent};
use alertkit_runtime::Visibility;

use crate::text::{TextRenderer, TextRole};

/// Number of action slots the presentation surface exposes.
pub const MAX_SLOTS: usize = 2;

/// Runs a button action, then clears the visibility handle.
#[derive(Clone)]
pub struct DismissTrigger {
    action: Option<Action>,
    visibility: Option<Visibility>,
}

impl DismissTrigger {
    fn new(action: Option<Action>, visibility: Option<&Visibility>) -> Self {
        Self {
            action,
            visibility: visibility.cloned(),
        }
    }

    /// Run the action (if any), then set visibility to `false` (if bound).
    pub fn fire(&self) {
        if let Some(action) = &self.action {
            action.call();
        }
        if let Some(visibility) = &self.visibility {
            visibility.hide();
        }
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    pub fn has_visibility(&self) -> bool {
        self.visibility.is_some()
    }
}

impl fmt::Debug for DismissTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DismissTrigger")
            .field("has_action", &self.has_action())
            .field("has_visibility", &self.has_visibility())
            .finish()
    }
}

/// A button placed in a slot.
#[derive(Debug, Clone)]
pub struct SlotButton<E> {
    pub label: E,
    pub style: ButtonStyle,
    pub trigger: DismissTrigger,
}

/// Slot occupancy for a presented alert.
#[derive(Debug, Clone)]
pub enum AlertSlots<E> {
    /// No buttons were requested; the surface shows its own dismissal.
    Dismiss(DismissTrigger),
    /// One button in the sole action slot.
    Single(SlotButton<E>),
    /// Two buttons.
    Pair {
        primary: SlotButton<E>,
        secondary: SlotButton<E>,
    },
}

impl<E> AlertSlots<E> {
    /// Number of requested buttons placed.
    pub fn button_count(&self) -> usize {
        match self {
            Self::Dismiss(_) => 0,
            Self::Single(_) => 1,
            Self::Pair { .. } => 2,
        }
    }

    /// The sole or primary button.
    pub fn primary(&self) -> Option<&SlotButton<E>> {
        match self {
            Self::Dismiss(_) => None,
            Self::Single(button) | Self::Pair {
                primary: button, ..
            } => Some(button),
        }
    }

    pub fn secondary(&self) -> Option<&SlotButton<E>> {
        match self {
            Self::Pair { secondary, .. } => Some(secondary),
            _ => None,
        }
    }
}

/// Everything a presentation sink needs to put an alert on screen.
#[derive(Debug, Clone)]
pub struct NativeAlert<E> {
    pub title: E,
    pub message: E,
    pub slots: AlertSlots<E>,
}

/// The host's native alert surface.
pub trait AlertSink<E> {
    type Output;

    fn present(&mut self, alert: NativeAlert<E>) -> Self::Output;
}

/// Finalize `descriptor` and assign its buttons to slots.
pub fn map_alert<R: TextRenderer + ?Sized>(
    descriptor: &AlertDescriptor,
    visibility: Option<&Visibility>,
    renderer: &R,
) -> Result<NativeAlert<R::Element>, AlertError> {
    let finalized = descriptor.finalize();

    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("alert_present", buttons = finalized.len()).entered();

    if finalized.len() > MAX_SLOTS {
        return Err(AlertError::TooManyButtons {
            styles: finalized.styles(),
            max: MAX_SLOTS,
        });
    }

    let mut placed = finalized
        .into_iter()
        .map(|button| place_button(button, visibility, renderer));
    let slots = match (placed.next(), placed.next()) {
        (Some(primary), Some(secondary)) => AlertSlots::Pair { primary, secondary },
        (Some(only), None) => AlertSlots::Single(only),
        (None, _) => AlertSlots::Dismiss(DismissTrigger::new(None, visibility)),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(slots = slots.button_count(), "alert slots assigned");

    let empty = TextContent::default();
    Ok(NativeAlert {
        title: renderer.render_text(descriptor.title().unwrap_or(&empty), TextRole::Title),
        message: renderer.render_text(descriptor.message().unwrap_or(&empty), TextRole::Message),
        slots,
    })
}

fn place_button<R: TextRenderer + ?Sized>(
    button: ButtonSpec,
    visibility: Option<&Visibility>,
    renderer: &R,
) -> SlotButton<R::Element> {
    let style = button.style();
    SlotButton {
        label: renderer.render_text(button.label(), TextRole::ButtonLabel(style)),
        style,
        trigger: DismissTrigger::new(Some(button.action().clone()), visibility),
    }
}

/// Map `descriptor` and hand it to `sink`.
///
/// Returns [`AlertError::TooManyButtons`] instead of presenting a truncated
/// alert.
pub fn try_present_alert<R, S>(
    descriptor: &AlertDescriptor,
    visibility: Option<&Visibility>,
    renderer: &R,
    sink: &mut S,
) -> Result<S::Output, AlertError>
where
    R: TextRenderer + ?Sized,
    S: AlertSink<R::Element> + ?Sized,
{
    let alert = map_alert(descriptor, visibility, renderer)?;
    Ok(sink.present(alert))
}

/// Map `descriptor` and hand it to `sink`.
///
/// # Panics
///
/// Panics when the descriptor finalizes to more than [`MAX_SLOTS`] distinct
/// button styles. That is a caller bug: the surface cannot show the extra
/// actions and silently dropping one is not allowed.
pub fn present_alert<R, S>(
    descriptor: &AlertDescriptor,
    visibility: Option<&Visibility>,
    renderer: &R,
    sink: &mut S,
) -> S::Output
where
    R: TextRenderer + ?Sized,
    S: AlertSink<R::Element> + ?Sized,
{
    match try_present_alert(descriptor, visibility, renderer, sink) {
        Ok(output) => output,
        Err(err) => {
            #[cfg(feature = "tracing")]
            tracing::error!(error = %err, "alert precondition violated");
            panic!("{err}");
        }
    }
}
