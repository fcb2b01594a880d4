#![forbid(unsafe_code)]

//! Alert presentation: slot mapping, host binding, and a reference text dialog.
//!
//! # Slot assignment
//!
//! | Finalized buttons | Slots |
//! |-------------------|-------|
//! | 0 | implicit dismissal, no callback |
//! | 1 | the button takes the sole slot |
//! | 2 | first takes primary, second takes secondary |
//! | 3+ | [`AlertError::TooManyButtons`]; [`present_alert`] panics |
//!
//! Every slot carries a [`DismissTrigger`] that runs the button action and
//! then clears the visibility handle.
//!
//! # Example
//!
//! ```
//! use alertkit_core::{AlertDescriptor, ButtonStyle};
//! use alertkit_runtime::Visibility;
//! use alertkit_widgets::{ModalAlert, PlainTextRenderer, Slot, TextDialog};
//!
//! let visible = Visibility::new(true);
//! let alert = AlertDescriptor::new()
//!     .with_title("Hello")
//!     .add_button("Delete", ButtonStyle::Destructive, || {});
//!
//! let modal = ModalAlert::new(alert, &visible);
//! let dialog = modal
//!     .render(&PlainTextRenderer, &mut TextDialog::default())
//!     .unwrap();
//! assert!(dialog.press(Slot::Primary));
//! assert!(!visible.is_visible());
//! ```
//!
//! [`AlertError::TooManyButtons`]: alertkit_core::AlertError::TooManyButtons

mod dialog;
mod mapper;
mod modal;

pub use dialog::{RenderedDialog, Slot, TextDialog};
pub use mapper::{
    AlertSink, AlertSlots, DismissTrigger, MAX_SLOTS, NativeAlert, SlotButton, map_alert,
    present_alert, try_present_alert,
};
pub use modal::ModalAlert;
