#![forbid(unsafe_code)]

//! alertkit public facade.
//!
//! Build an [`AlertDescriptor`] with chained edits, bind it to a
//! [`Visibility`] handle with [`ModalAlert`], and present it through any
//! [`TextRenderer`] / [`AlertSink`] pair.
//!
//! ```
//! use alertkit::prelude::*;
//!
//! let visible = Visibility::new(true);
//! let alert = AlertDescriptor::new()
//!     .with_title("Hello")
//!     .with_message("World")
//!     .cancel_button("Dismiss", || {})
//!     .destructive_button("Delete", || {});
//!
//! let dialog = ModalAlert::new(alert, &visible)
//!     .render(&PlainTextRenderer, &mut TextDialog::default())
//!     .expect("visible alerts render");
//! assert_eq!(dialog.button_labels(), vec!["Delete", "Dismiss"]);
//! ```

pub use alertkit_core::{
    Action, AlertDescriptor, AlertError, ButtonSpec, ButtonStyle, FinalizedButtons, Span,
    StyledText, TextContent,
};
pub use alertkit_runtime::{
    LogConfig, LogInitError, Observable, Subscription, Visibility, init_logging,
};
pub use alertkit_style::{Rgb, Style, StyleFlags};
pub use alertkit_widgets::{
    AlertConfig, AlertSink, AlertSlots, DismissTrigger, MAX_SLOTS, ModalAlert, NativeAlert,
    PlainTextRenderer, RenderedDialog, Slot, SlotButton, StyledTextRenderer, TextDialog,
    TextRenderer, TextRole, map_alert, present_alert, try_present_alert,
};

/// Everything needed to build and show an alert.
pub mod prelude {
    pub use crate::{
        AlertConfig, AlertDescriptor, AlertSink, AlertSlots, ButtonStyle, ModalAlert,
        NativeAlert, PlainTextRenderer, Slot, StyledText, StyledTextRenderer, TextContent,
        TextDialog, TextRenderer, TextRole, Visibility, present_alert, try_present_alert,
    };
}
