use std::io::IsTerminal;
use std::sync::OnceLock;

use pulse_core::enums::Vertical;
use pulse_core::theme::{Rgb, Theme};

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Terminal capabilities resolved once at startup.
#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
    /// Primary colour of the starting vertical; `None` without colour.
    pub accent: Option<Rgb>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags, vertical: Vertical) {
    let _ = UI_PREFS.set(resolve(
        flags,
        vertical,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var("COLUMNS").ok().as_deref(),
    ));
}

fn resolve(
    flags: &GlobalFlags,
    vertical: Vertical,
    is_tty: bool,
    no_color: bool,
    columns: Option<&str>,
) -> UiPrefs {
    let table = flags.format == OutputFormat::Table;
    let color = match flags.color {
        ColorMode::Always => table,
        ColorMode::Never => false,
        ColorMode::Auto => is_tty && table && !flags.quiet && !no_color,
    };

    // Spinners draw on stderr; keep them away from machine-readable output.
    let progress = is_tty && table && !flags.quiet;

    let term_width = columns
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    UiPrefs {
        color,
        progress,
        term_width,
        accent: color.then(|| Theme::for_vertical(vertical).primary),
    }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        color: false,
        progress: false,
        term_width: None,
        accent: None,
    })
}
