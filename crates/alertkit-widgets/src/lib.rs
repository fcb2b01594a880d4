#![forbid(unsafe_code)]

//! Presentation of alertkit descriptors.
//!
//! The [`alert`] module maps a finalized [`AlertDescriptor`] onto a surface
//! with at most two action slots (primary and secondary). Text is turned into
//! host elements through a [`TextRenderer`], and the resulting
//! [`NativeAlert`] is handed to an [`AlertSink`].
//!
//! [`AlertDescriptor`]: alertkit_core::AlertDescriptor

pub mod alert;
pub mod config;
pub mod text;

pub use alert::{
    AlertSink, AlertSlots, DismissTrigger, MAX_SLOTS, ModalAlert, NativeAlert, RenderedDialog,
    Slot, SlotButton, TextDialog, map_alert, present_alert, try_present_alert,
};
pub use config::AlertConfig;
pub use text::{PlainTextRenderer, StyledTextRenderer, TextRenderer, TextRole};
