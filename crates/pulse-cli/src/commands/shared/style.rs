use pulse_core::enums::Vertical;
use pulse_core::theme::Theme;

use crate::output::view::{NewsTab, Style};
use crate::ui;

/// Table-mode style for `vertical` under the resolved terminal preferences.
#[must_use]
pub fn for_vertical(vertical: Vertical, tab: Option<NewsTab>) -> Style {
    Style {
        theme: Theme::for_vertical(vertical),
        color: ui::prefs().color,
        tab,
    }
}
