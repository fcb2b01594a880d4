#![forbid(unsafe_code)]

//! Reference text dialog sink.
//!
//! Renders a [`NativeAlert<String>`] as a bordered block of text lines:
//!
//! ```text
//! ┌────────── Hello ───────────┐
//! │           World            │
//! │                            │
//! │  [ Delete ]  [ Dismiss ]   │
//! └────────────────────────────┘
//! ```
//!
//! A message containing `\n` gets one row per line; other control characters
//! in titles, messages, and labels are shown as spaces.
//!
//! Buttons are laid out primary first, two cells apart, centered. The width
//! fits the widest row and is clamped to the configured bounds; text that
//! does not fit is truncated with an ellipsis.

use std::fmt;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::mapper::{AlertSink, AlertSlots, DismissTrigger, NativeAlert};
use crate::config::AlertConfig;

const BUTTON_GAP: &str = "  ";
/// "│ " + " │"
const FRAME_WIDTH: usize = 4;

/// Which slot to press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The primary, sole, or implicit dismissal button.
    Primary,
    /// The secondary button.
    Secondary,
}

/// Text-mode alert surface.
#[derive(Debug, Clone, Default)]
pub struct TextDialog {
    config: AlertConfig,
}

impl TextDialog {
    #[must_use]
    pub fn new(config: AlertConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AlertConfig {
        &self.config
    }

    fn dialog_width(&self, content: usize) -> usize {
        let min = usize::from(self.config.min_width);
        let max = usize::from(self.config.max_width);
        (content + FRAME_WIDTH).min(max).max(min).max(FRAME_WIDTH + 1)
    }
}

impl AlertSink<String> for TextDialog {
    type Output = RenderedDialog;

    fn present(&mut self, alert: NativeAlert<String>) -> RenderedDialog {
        let buttons: Vec<(String, DismissTrigger)> = match alert.slots {
            AlertSlots::Dismiss(trigger) => vec![(self.config.dismiss_label.clone(), trigger)],
            AlertSlots::Single(button) => vec![(button.label, button.trigger)],
            AlertSlots::Pair { primary, secondary } => vec![
                (primary.label, primary.trigger),
                (secondary.label, secondary.trigger),
            ],
        };

        let button_row = buttons
            .iter()
            .map(|(label, _)| format!("[ {} ]", printable(label)))
            .collect::<Vec<_>>()
            .join(BUTTON_GAP);
        let title = printable(&alert.title);
        let message: Vec<String> = alert.message.split('\n').map(printable).collect();

        let content = message
            .iter()
            .map(|row| row.width())
            .chain([title.width() + 2, button_row.width()])
            .max()
            .unwrap_or(0);
        let width = self.dialog_width(content);
        let inner = width - FRAME_WIDTH;

        let mut lines = Vec::with_capacity(message.len() + 4);
        lines.push(top_border(&title, width - 2));
        lines.extend(
            message
                .iter()
                .map(|row| framed(&center(&fit(row, inner), inner))),
        );
        lines.push(framed(&" ".repeat(inner)));
        lines.push(framed(&center(&fit(&button_row, inner), inner)));
        lines.push(format!("└{}┘", "─".repeat(width - 2)));

        RenderedDialog { lines, buttons }
    }
}

/// Output of [`TextDialog`]: rendered rows plus live button triggers.
#[derive(Debug, Clone)]
pub struct RenderedDialog {
    lines: Vec<String>,
    buttons: Vec<(String, DismissTrigger)>,
}

impl RenderedDialog {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Button labels, primary first.
    pub fn button_labels(&self) -> Vec<&str> {
        self.buttons.iter().map(|(label, _)| label.as_str()).collect()
    }

    /// Fire the trigger in `slot`. Returns `false` if the slot is empty.
    pub fn press(&self, slot: Slot) -> bool {
        let index = match slot {
            Slot::Primary => 0,
            Slot::Secondary => 1,
        };
        match self.buttons.get(index) {
            Some((_, trigger)) => {
                trigger.fire();
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for RenderedDialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Replace control characters (tabs, carriage returns, ...) with spaces so
/// every row stays on one terminal line.
fn printable(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

fn framed(body: &str) -> String {
    format!("│ {body} │")
}

fn top_border(title: &str, span: usize) -> String {
    // Keep at least one rule cell on each side of the title.
    let label = fit(title, span.saturating_sub(4));
    if label.is_empty() {
        return format!("┌{}┐", "─".repeat(span));
    }
    let label = format!(" {label} ");
    let left = (span - label.width()) / 2;
    let right = span - label.width() - left;
    format!("┌{}{label}{}┐", "─".repeat(left), "─".repeat(right))
}

/// Pad `text` to `width` cells, centered (extra cell goes right).
fn center(text: &str, width: usize) -> String {
    let used = text.width().min(width);
    let left = (width - used) / 2;
    let right = width - used - left;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

/// Truncate `text` to at most `width` cells, ending in `…` when cut.
fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let w = grapheme.width();
        if used + w > width - 1 {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::mapper::present_alert;
    use crate::text::PlainTextRenderer;
    use alertkit_core::AlertDescriptor;
    use alertkit_runtime::Visibility;
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn render(descriptor: &AlertDescriptor, visibility: Option<&Visibility>) -> RenderedDialog {
        present_alert(
            descriptor,
            visibility,
            &PlainTextRenderer,
            &mut TextDialog::default(),
        )
    }

    #[test]
    fn renders_five_rows_of_equal_width() {
        let dialog = render(
            &AlertDescriptor::new()
                .with_title("Hello")
                .with_message("World")
                .cancel_button("Dismiss", || {})
                .destructive_button("Delete", || {}),
            None,
        );
        assert_eq!(dialog.lines().len(), 5);
        for line in dialog.lines() {
            assert_eq!(line.width(), 30, "row {line:?}");
        }
    }

    #[test]
    fn exact_layout_for_two_buttons() {
        let dialog = render(
            &AlertDescriptor::new()
                .with_title("Hello")
                .with_message("World")
                .cancel_button("Dismiss", || {})
                .destructive_button("Delete", || {}),
            None,
        );
        let expected = vec![
            format!("┌{} Hello {}┐", "─".repeat(10), "─".repeat(11)),
            format!("│ {}World{} │", " ".repeat(10), " ".repeat(11)),
            format!("│ {} │", " ".repeat(26)),
            "│  [ Delete ]  [ Dismiss ]   │".to_string(),
            format!("└{}┘", "─".repeat(28)),
        ];
        assert_eq!(dialog.lines(), expected.as_slice());
    }

    #[test]
    fn empty_alert_shows_dismiss_label() {
        let dialog = render(&AlertDescriptor::new(), None);
        assert_eq!(dialog.button_labels(), vec!["OK"]);
        assert_eq!(dialog.lines()[0], format!("┌{}┐", "─".repeat(28)));
    }

    #[test]
    fn custom_dismiss_label() {
        let dialog = present_alert(
            &AlertDescriptor::new(),
            None,
            &PlainTextRenderer,
            &mut TextDialog::new(AlertConfig::default().dismiss_label("Got it")),
        );
        assert_eq!(dialog.button_labels(), vec!["Got it"]);
        assert!(dialog.to_string().contains("[ Got it ]"));
    }

    #[test]
    fn dismiss_press_hides_without_callback() {
        let visible = Visibility::new(true);
        let dialog = render(&AlertDescriptor::new(), Some(&visible));
        assert!(dialog.press(Slot::Primary));
        assert!(!visible.is_visible());
        assert!(!dialog.press(Slot::Secondary));
    }

    #[test]
    fn secondary_press_runs_secondary_action() {
        let visible = Visibility::new(true);
        let cancelled = Rc::new(Cell::new(false));
        let flag = Rc::clone(&cancelled);
        let dialog = render(
            &AlertDescriptor::new()
                .default_button("Save", || {})
                .cancel_button("Cancel", move || flag.set(true)),
            Some(&visible),
        );
        assert_eq!(dialog.button_labels(), vec!["Save", "Cancel"]);
        assert!(dialog.press(Slot::Secondary));
        assert!(cancelled.get());
        assert!(!visible.is_visible());
    }

    #[test]
    fn long_message_is_truncated_to_max_width() {
        let message = "x".repeat(200);
        let dialog = render(&AlertDescriptor::new().with_message(message), None);
        for line in dialog.lines() {
            assert_eq!(line.width(), 60);
        }
        assert!(dialog.lines()[1].contains('…'));
    }

    #[test]
    fn multi_line_message_gets_one_row_per_line() {
        let dialog = render(
            &AlertDescriptor::new()
                .with_title("T")
                .with_message("line one\nline two\ttab"),
            None,
        );
        assert_eq!(dialog.lines().len(), 6);
        assert!(dialog.lines()[1].contains("line one"));
        assert!(dialog.lines()[2].contains("line two tab"));
        for line in dialog.lines() {
            assert!(!line.contains('\n') && !line.contains('\t'), "row {line:?}");
            assert_eq!(line.width(), 30, "row {line:?}");
        }
    }

    #[test]
    fn control_characters_in_title_and_label_become_spaces() {
        let dialog = render(
            &AlertDescriptor::new()
                .with_title("Save\tnow")
                .default_button("O\nK", || {}),
            None,
        );
        assert!(dialog.lines()[0].contains(" Save now "));
        assert!(dialog.lines()[3].contains("[ O K ]"));
        assert_eq!(dialog.button_labels(), vec!["O\nK"]);
    }

    #[test]
    fn fit_respects_wide_graphemes() {
        assert_eq!(fit("日本語", 4), "日…");
        assert_eq!(fit("abc", 3), "abc");
        assert_eq!(fit("abcd", 0), "");
    }

    #[test]
    fn center_puts_extra_cell_right() {
        assert_eq!(center("ab", 5), " ab  ");
    }

    proptest! {
        #[test]
        fn rows_share_one_width(
            title in "[a-zA-Z \\t\\n]{0,80}",
            message in "[a-zA-Z \\t\\n\\r]{0,120}",
            label in "[a-zA-Z\\t]{1,20}",
        ) {
            let descriptor = AlertDescriptor::new()
                .with_title(title)
                .with_message(message.clone())
                .default_button(label, || {});
            let dialog = render(&descriptor, None);
            let width = dialog.lines()[0].width();
            prop_assert!((30..=60).contains(&width));
            for line in dialog.lines() {
                prop_assert_eq!(line.width(), width);
                prop_assert!(!line.chars().any(char::is_control), "row {:?}", line);
            }
            prop_assert_eq!(dialog.lines().len(), message.split('\n').count() + 4);
        }
    }
}
