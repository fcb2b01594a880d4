#![forbid(unsafe_code)]

//! Runtime glue for alertkit: reactive visibility handles and logging setup.

pub mod logging;
pub mod reactive;

pub use logging::{LogConfig, LogInitError, init_logging};
pub use reactive::{Observable, Subscription, Visibility};
