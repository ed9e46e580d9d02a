// SPDX-License-Identifier: MPL-2.0
//! Host event listeners the viewer needs, derived from its state.
//!
//! - Keyboard and wheel capture: only while the viewer is open
//! - Window-level pointer-up: only while a drag is active, so a drag that
//!   ends outside the image still terminates
//!
//! The shell compares the set before and after each message and tells the
//! host exactly which listeners to install or remove.

/// A listener the host installs on its behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    /// Window keydown, routed to the shortcut table.
    Keyboard,
    /// Non-passive wheel listener that cancels page scrolling.
    WheelCapture,
    /// Window pointer-up, ending drags released outside the viewer.
    GlobalPointerUp,
}

impl Listener {
    const ALL: [Listener; 3] = [
        Listener::Keyboard,
        Listener::WheelCapture,
        Listener::GlobalPointerUp,
    ];
}

/// The set of listeners required at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListenerSet {
    keyboard: bool,
    wheel_capture: bool,
    global_pointer_up: bool,
}

impl ListenerSet {
    /// Listeners required for the given viewer state.
    #[must_use]
    pub fn required(is_open: bool, is_dragging: bool) -> Self {
        Self {
            keyboard: is_open,
            wheel_capture: is_open,
            global_pointer_up: is_open && is_dragging,
        }
    }

    #[must_use]
    pub fn contains(&self, listener: Listener) -> bool {
        match listener {
            Listener::Keyboard => self.keyboard,
            Listener::WheelCapture => self.wheel_capture,
            Listener::GlobalPointerUp => self.global_pointer_up,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Listeners present in `next` but not in `self`.
    pub fn added<'a>(&'a self, next: &'a Self) -> impl Iterator<Item = Listener> + 'a {
        Listener::ALL
            .into_iter()
            .filter(move |listener| next.contains(*listener) && !self.contains(*listener))
    }

    /// Listeners present in `self` but not in `next`.
    pub fn removed<'a>(&'a self, next: &'a Self) -> impl Iterator<Item = Listener> + 'a {
        next.added(self)
    }
}
