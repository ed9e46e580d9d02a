// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcut routing.
//!
//! | Key          | Action              |
//! |--------------|---------------------|
//! | Escape       | close               |
//! | ArrowLeft    | previous photo      |
//! | ArrowRight   | next photo          |
//! | `+` / `=`    | zoom in by 25%      |
//! | `-`          | zoom out by 25%     |
//! | `0`          | reset zoom and pan  |
//! | `i` / `I`    | toggle info panel   |

use super::{navigation, zoom};
use crate::config::KEYBOARD_ZOOM_STEP_PERCENT;
use crate::ui::viewer::controllers::Controllers;

/// A key as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Character(char),
    Other,
}

impl Key {
    /// Parses a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Character(c),
                    _ => Key::Other,
                }
            }
        }
    }
}

/// Viewer actions reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shortcut {
    Close,
    Previous,
    Next,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    ToggleInfoPanel,
}

impl Shortcut {
    /// Looks up the shortcut bound to a key.
    #[must_use]
    pub fn for_key(key: Key) -> Option<Self> {
        match key {
            Key::Escape => Some(Shortcut::Close),
            Key::ArrowLeft => Some(Shortcut::Previous),
            Key::ArrowRight => Some(Shortcut::Next),
            Key::Character('+' | '=') => Some(Shortcut::ZoomIn),
            Key::Character('-') => Some(Shortcut::ZoomOut),
            Key::Character('0') => Some(Shortcut::ResetZoom),
            Key::Character('i' | 'I') => Some(Shortcut::ToggleInfoPanel),
            Key::Character(_) | Key::Other => None,
        }
    }
}

/// Shortcut legend shown in the info panel, as (keys, description).
pub const SHORTCUT_LEGEND: &[(&str, &str)] = &[
    ("← / →", "Previous / next photo"),
    ("+ / -", "Zoom in / out"),
    ("0", "Reset zoom"),
    ("I", "Toggle info panel"),
    ("Esc", "Close viewer"),
    ("Double-click", "Toggle 200% zoom"),
    ("Scroll", "Zoom"),
];

/// Effects produced by keyboard routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Key is not bound (or the viewer is closed); let the host handle it.
    Ignored,
    /// Key was bound but changed nothing.
    Handled,
    /// Zoom or pan changed.
    ViewChanged,
    /// A navigation request was issued (including close).
    Navigation(navigation::Effect),
    /// The shell should toggle the info panel.
    ToggleInfoPanel,
}

/// Routes a key press to the controllers.
pub fn route(key: Key, controllers: &mut Controllers) -> Effect {
    if !controllers.is_open() {
        return Effect::Ignored;
    }
    let Some(shortcut) = Shortcut::for_key(key) else {
        return Effect::Ignored;
    };

    let zoom_effect = |effect: zoom::Effect| match effect {
        zoom::Effect::ViewChanged => Effect::ViewChanged,
        zoom::Effect::None => Effect::Handled,
    };

    match shortcut {
        Shortcut::Close => Effect::Navigation(controllers.navigate(navigation::Message::Close)),
        Shortcut::Previous => {
            Effect::Navigation(controllers.navigate(navigation::Message::Previous))
        }
        Shortcut::Next => Effect::Navigation(controllers.navigate(navigation::Message::Next)),
        Shortcut::ZoomIn => {
            zoom_effect(controllers.zoom(zoom::Message::ZoomBy(KEYBOARD_ZOOM_STEP_PERCENT)))
        }
        Shortcut::ZoomOut => {
            zoom_effect(controllers.zoom(zoom::Message::ZoomBy(-KEYBOARD_ZOOM_STEP_PERCENT)))
        }
        Shortcut::ResetZoom => zoom_effect(controllers.zoom(zoom::Message::Reset)),
        Shortcut::ToggleInfoPanel => Effect::ToggleInfoPanel,
    }
}
