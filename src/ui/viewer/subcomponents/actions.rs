// SPDX-License-Identifier: MPL-2.0
//! Header action buttons and the busy flags supplied by the caller.
//!
//! The viewer never performs an action itself. It only decides whether a
//! button may be pressed: download and delete are disabled while either one
//! is in flight, favorite is always available.

/// Side-effecting header actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Download,
    Delete,
    Favorite,
}

/// In-flight flags owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BusyFlags {
    pub is_downloading: bool,
    pub is_deleting: bool,
    /// Not a busy flag strictly speaking: whether the current photo is a favorite.
    pub is_favorited: bool,
}

impl BusyFlags {
    /// Whether the button for `action` accepts presses.
    #[must_use]
    pub fn is_enabled(&self, action: Action) -> bool {
        match action {
            Action::Download | Action::Delete => !self.is_downloading && !self.is_deleting,
            Action::Favorite => true,
        }
    }

    /// Whether `action` itself is in flight (spinner on its button).
    #[must_use]
    pub fn is_busy(&self, action: Action) -> bool {
        match action {
            Action::Download => self.is_downloading,
            Action::Delete => self.is_deleting,
            Action::Favorite => false,
        }
    }
}
