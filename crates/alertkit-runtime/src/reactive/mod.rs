#![forbid(unsafe_code)]

//! Reactive state cells for alert hosts.
//!
//! - [`Observable`]: a shared, version-tracked value with change notification.
//! - [`Subscription`]: RAII guard that unsubscribes on drop.
//! - [`Visibility`]: an `Observable<bool>` the host toggles to show an alert
//!   and the alert clears when a button dismisses it.
//!
//! # Architecture
//!
//! `Observable<T>` uses `Rc<RefCell<..>>` for single-threaded shared ownership.
//! Subscribers are stored as `Weak` callbacks and cleaned up lazily during
//! notification.
//!
//! # Invariants
//!
//! 1. Version increments exactly once per mutation that changes the value.
//! 2. Subscribers are notified in registration order.
//! 3. Setting a value equal to the current value is a no-op (no version bump,
//!    no notifications).
//! 4. Dropping a [`Subscription`] removes the callback before the next
//!    notification cycle.
//! 5. Callbacks run after the internal borrow is released, so they may read
//!    or write the observable.

pub mod observable;

pub use observable::{Observable, Subscription};

/// Host-owned flag controlling whether an alert is shown.
pub type Visibility = Observable<bool>;
