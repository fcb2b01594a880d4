#![forbid(unsafe_code)]

//! Errors raised when a descriptor cannot be presented.

use crate::button::ButtonStyle;

/// Errors from alert presentation.
///
/// Building a descriptor never fails; this is only produced when a finalized
/// descriptor is mapped onto the two-slot presentation surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertError {
    /// More distinct button styles were requested than there are slots.
    TooManyButtons {
        /// Finalized styles, in slot order.
        styles: Vec<ButtonStyle>,
        /// Number of slots the surface offers.
        max: usize,
    },
}

impl std::fmt::Display for AlertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManyButtons { styles, max } => {
                let names: Vec<String> = styles.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "alert requests {} distinct button styles ({}); at most {max} can be presented",
                    styles.len(),
                    names.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for AlertError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_many_buttons_message_names_styles() {
        let err = AlertError::TooManyButtons {
            styles: vec![
                ButtonStyle::Destructive,
                ButtonStyle::Default,
                ButtonStyle::Cancel,
            ],
            max: 2,
        };
        assert_eq!(
            err.to_string(),
            "alert requests 3 distinct button styles (destructive, default, cancel); \
             at most 2 can be presented"
        );
    }
}
