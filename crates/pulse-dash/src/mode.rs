//! The dental/aesthetic mode switch.

use std::sync::Arc;

use pulse_core::enums::Vertical;
use pulse_core::theme::Theme;
use tokio::sync::watch;
use tracing::debug;

/// Current vertical, shared by handle. Subscribers see every change.
///
/// Cloning yields another handle to the same value.
#[derive(Debug, Clone)]
pub struct ModeState {
    tx: Arc<watch::Sender<Vertical>>,
}

impl Default for ModeState {
    fn default() -> Self {
        Self::new(Vertical::default())
    }
}

impl ModeState {
    #[must_use]
    pub fn new(initial: Vertical) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    #[must_use]
    pub fn current(&self) -> Vertical {
        *self.tx.borrow()
    }

    /// Flip the vertical and return the new value.
    pub fn toggle(&self) -> Vertical {
        let mut next = Vertical::default();
        self.tx.send_modify(|v| {
            *v = v.toggled();
            next = *v;
        });
        debug!(vertical = %next, "mode: toggled");
        next
    }

    /// Set the vertical. Returns `false` (and notifies nobody) when it
    /// already had that value.
    pub fn set(&self, vertical: Vertical) -> bool {
        let changed = self.tx.send_if_modified(|v| {
            if *v == vertical {
                false
            } else {
                *v = vertical;
                true
            }
        });
        if changed {
            debug!(%vertical, "mode: set");
        }
        changed
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vertical> {
        self.tx.subscribe()
    }

    /// Palette for the current vertical.
    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::for_vertical(self.current())
    }
}
