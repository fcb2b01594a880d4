#![forbid(unsafe_code)]

//! A descriptor bound to a host-owned visibility handle.

use alertkit_core::{AlertDescriptor, AlertError};
use alertkit_runtime::Visibility;

use super::mapper::{AlertSink, present_alert, try_present_alert};
use crate::text::TextRenderer;

/// An alert that is shown while its visibility handle is `true`.
///
/// The host flips the handle to show the alert; any button (or the implicit
/// dismissal) flips it back after running its action.
#[derive(Debug, Clone)]
pub struct ModalAlert {
    descriptor: AlertDescriptor,
    visibility: Visibility,
}

impl ModalAlert {
    pub fn new(descriptor: AlertDescriptor, visibility: &Visibility) -> Self {
        Self {
            descriptor,
            visibility: visibility.clone(),
        }
    }

    pub fn descriptor(&self) -> &AlertDescriptor {
        &self.descriptor
    }

    pub fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    pub fn is_presented(&self) -> bool {
        self.visibility.is_visible()
    }

    /// Present the alert if the handle is `true`.
    ///
    /// Returns `Ok(None)` while hidden.
    pub fn try_render<R, S>(
        &self,
        renderer: &R,
        sink: &mut S,
    ) -> Result<Option<S::Output>, AlertError>
    where
        R: TextRenderer + ?Sized,
        S: AlertSink<R::Element> + ?Sized,
    {
        if !self.is_presented() {
            return Ok(None);
        }
        try_present_alert(&self.descriptor, Some(&self.visibility), renderer, sink).map(Some)
    }

    /// Present the alert if the handle is `true`.
    ///
    /// # Panics
    ///
    /// Panics when the descriptor needs more than two slots.
    pub fn render<R, S>(&self, renderer: &R, sink: &mut S) -> Option<S::Output>
    where
        R: TextRenderer + ?Sized,
        S: AlertSink<R::Element> + ?Sized,
    {
        if !self.is_presented() {
            return None;
        }
        Some(present_alert(
            &self.descriptor,
            Some(&self.visibility),
            renderer,
            sink,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::{Slot, TextDialog};
    use crate::text::PlainTextRenderer;
    use alertkit_core::ButtonStyle;

    #[test]
    fn hidden_alert_renders_nothing() {
        let visible = Visibility::new(false);
        let modal = ModalAlert::new(AlertDescriptor::new().with_title("Hi"), &visible);
        assert!(!modal.is_presented());
        assert!(
            modal
                .render(&PlainTextRenderer, &mut TextDialog::default())
                .is_none()
        );
    }

    #[test]
    fn shown_alert_renders_and_dismisses() {
        let visible = Visibility::new(false);
        let modal = ModalAlert::new(
            AlertDescriptor::new()
                .with_title("Hi")
                .add_button("Close", ButtonStyle::Cancel, || {}),
            &visible,
        );

        visible.show();
        let dialog = modal
            .render(&PlainTextRenderer, &mut TextDialog::default())
            .unwrap();
        assert!(dialog.press(Slot::Primary));
        assert!(!modal.is_presented());
        assert!(
            modal
                .render(&PlainTextRenderer, &mut TextDialog::default())
                .is_none()
        );
    }

    #[test]
    fn hidden_alert_skips_precondition_check() {
        let visible = Visibility::new(false);
        let descriptor = AlertDescriptor::new()
            .cancel_button("C", || {})
            .default_button("D", || {})
            .destructive_button("X", || {});
        let modal = ModalAlert::new(descriptor, &visible);
        assert!(matches!(
            modal.try_render(&PlainTextRenderer, &mut TextDialog::default()),
            Ok(None)
        ));
    }

    #[test]
    fn try_render_reports_too_many_buttons() {
        let visible = Visibility::new(true);
        let descriptor = AlertDescriptor::new()
            .cancel_button("C", || {})
            .default_button("D", || {})
            .destructive_button("X", || {});
        let modal = ModalAlert::new(descriptor, &visible);
        assert!(matches!(
            modal.try_render(&PlainTextRenderer, &mut TextDialog::default()),
            Err(AlertError::TooManyButtons { .. })
        ));
        assert!(modal.is_presented());
    }
}
