// SPDX-License-Identifier: MPL-2.0
//! Render model for the lightbox overlay.
//!
//! Hosts draw exactly what this describes; no interaction logic is needed on
//! their side beyond forwarding events back as messages.

use crate::ui::metadata_panel::InfoPanel;
use crate::ui::state::zoom::format_number;
use crate::ui::state::ImageTransform;
use crate::ui::viewer::subcomponents::actions::Action;

/// Cursor hint for the image surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    /// At or below 100%: a double-click zooms in.
    ZoomIn,
    /// Magnified, ready to drag.
    Grab,
    /// Drag in progress.
    Grabbing,
}

impl CursorHint {
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            CursorHint::ZoomIn => "zoom-in",
            CursorHint::Grab => "grab",
            CursorHint::Grabbing => "grabbing",
        }
    }
}

/// Header button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderButtonKind {
    Favorite,
    Download,
    Delete,
    Info,
    Close,
}

impl From<Action> for HeaderButtonKind {
    fn from(action: Action) -> Self {
        match action {
            Action::Download => HeaderButtonKind::Download,
            Action::Delete => HeaderButtonKind::Delete,
            Action::Favorite => HeaderButtonKind::Favorite,
        }
    }
}

/// One header button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderButton {
    pub kind: HeaderButtonKind,
    pub aria_label: &'static str,
    pub enabled: bool,
    /// Toggle state (favorite set, info panel shown).
    pub active: bool,
    /// Spinner instead of icon.
    pub busy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// e.g. "3 / 12"
    pub counter: String,
    pub filename: String,
    /// e.g. "150%"
    pub zoom_readout: String,
    pub buttons: Vec<HeaderButton>,
}

impl Header {
    #[must_use]
    pub fn button(&self, kind: HeaderButtonKind) -> Option<&HeaderButton> {
        self.buttons.iter().find(|button| button.kind == kind)
    }
}

/// The image area.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub src: String,
    pub alt: String,
    pub transform: ImageTransform,
    /// Spinner over the image until the host reports it loaded.
    pub is_loading: bool,
    /// Slide animation running.
    pub is_transitioning: bool,
    pub cursor: CursorHint,
}

impl Surface {
    /// CSS `transform` for the image element.
    #[must_use]
    pub fn css_transform(&self) -> String {
        self.transform.to_css()
    }
}

/// Previous/next arrows. Absent for single-photo collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrows {
    pub previous_index: usize,
    pub next_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub index: usize,
    pub src: String,
    pub alt: String,
    pub is_active: bool,
}

/// Dialog-level ARIA attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aria {
    pub role: &'static str,
    pub modal: bool,
    pub label: &'static str,
}

impl Default for Aria {
    fn default() -> Self {
        Self {
            role: "dialog",
            modal: true,
            label: "Photo viewer",
        }
    }
}

/// Everything the overlay shows in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub aria: Aria,
    pub header: Header,
    pub surface: Surface,
    pub info_panel: Option<InfoPanel>,
    pub arrows: Option<Arrows>,
    /// Empty when hidden.
    pub thumbnails: Vec<Thumbnail>,
    /// URLs worth fetching ahead of navigation.
    pub preload: Vec<String>,
}

/// Formats the index counter, 1-based.
#[must_use]
pub fn format_counter(index: usize, len: usize) -> String {
    format!("{} / {}", index + 1, len)
}

/// Formats the zoom readout.
#[must_use]
pub fn format_zoom(percent: f32) -> String {
    format!("{}%", format_number(percent.round()))
}
