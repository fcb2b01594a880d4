#![forbid(unsafe_code)]

//! Style types for alertkit rich text.
//!
//! This crate provides:
//! - [`Style`] for span styling with patch (override) semantics
//! - [`StyleFlags`] for text attributes (bold, italic, ...)
//! - [`Rgb`] for 24-bit colors

pub mod style;

pub use style::{Rgb, Style, StyleFlags};
