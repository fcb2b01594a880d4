#![forbid(unsafe_code)]

//! Immutable alert descriptors for alertkit.
//!
//! An [`AlertDescriptor`] accumulates a title, a message, and button requests
//! through chained edits. Each edit returns a new value and leaves the
//! receiver untouched. Buttons are deduplicated and ordered only when the
//! descriptor is finalized for presentation (see [`AlertDescriptor::finalize`]).
//!
//! # Example
//!
//! ```
//! use alertkit_core::{AlertDescriptor, ButtonStyle};
//!
//! let alert = AlertDescriptor::new()
//!     .with_title("Hello")
//!     .with_message("World")
//!     .add_button("Dismiss", ButtonStyle::Cancel, || {})
//!     .add_button("Delete", ButtonStyle::Destructive, || {});
//!
//! let buttons = alert.finalize();
//! assert_eq!(
//!     buttons.styles(),
//!     vec![ButtonStyle::Destructive, ButtonStyle::Cancel]
//! );
//! ```

pub mod button;
pub mod descriptor;
pub mod error;
pub mod text;

pub use button::{Action, ButtonSpec, ButtonStyle};
pub use descriptor::{AlertDescriptor, FinalizedButtons};
pub use error::AlertError;
pub use text::{Span, StyledText, TextContent};
