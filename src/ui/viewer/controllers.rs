// SPDX-License-Identifier: MPL-2.0
//! The two controllers that input adapters are allowed to drive.
//!
//! Bundling them keeps the cross-controller rule in one place: whenever the
//! navigation controller opens a session or moves the index, the zoom/pan
//! view goes back to its default.

use super::subcomponents::{navigation, zoom};

#[derive(Debug, Clone, Default)]
pub struct Controllers {
    pub zoom: zoom::State,
    pub navigation: navigation::State,
}

impl Controllers {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            zoom: zoom::State::default(),
            navigation: navigation::State::new(len),
        }
    }

    /// Forwards a navigation message, resetting the view when the shown photo changes.
    pub fn navigate(&mut self, msg: navigation::Message) -> navigation::Effect {
        let effect = self.navigation.handle(msg);
        let resets_view = match effect {
            navigation::Effect::Opened { .. } | navigation::Effect::Committed { .. } => true,
            navigation::Effect::Resized { index_changed, .. } => index_changed,
            _ => false,
        };
        if resets_view {
            self.zoom.handle(zoom::Message::Reset);
        }
        effect
    }

    /// Forwards a zoom message. Ignored while the session is closed.
    pub fn zoom(&mut self, msg: zoom::Message) -> zoom::Effect {
        if !self.navigation.is_open() {
            return zoom::Effect::None;
        }
        self.zoom.handle(msg)
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.navigation.is_open()
    }

    #[must_use]
    pub fn is_magnified(&self) -> bool {
        self.zoom.is_magnified()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_resets_zoom_and_pan() {
        let mut controllers = Controllers::new(5);
        controllers.navigate(navigation::Message::Open(0));
        for _ in 0..6 {
            controllers.zoom(zoom::Message::ZoomBy(25.0));
        }
        controllers.zoom(zoom::Message::PanTo { x: 120.0, y: -80.0 });
        assert_eq!(controllers.zoom.zoom_percent(), 250.0);

        let navigation::Effect::TransitionStarted { token, .. } =
            controllers.navigate(navigation::Message::Next)
        else {
            panic!("expected transition start");
        };
        // Zoom is untouched until the transition commits.
        assert_eq!(controllers.zoom.zoom_percent(), 250.0);

        controllers.navigate(navigation::Message::TransitionElapsed(token));
        assert_eq!(controllers.zoom.zoom_percent(), 100.0);
        assert_eq!(controllers.zoom.pan(), (0.0, 0.0));
    }

    #[test]
    fn zoom_is_inert_while_closed() {
        let mut controllers = Controllers::new(3);
        assert_eq!(
            controllers.zoom(zoom::Message::ZoomBy(20.0)),
            zoom::Effect::None
        );
        assert_eq!(controllers.zoom.zoom_percent(), 100.0);
    }

    #[test]
    fn open_resets_previous_zoom() {
        let mut controllers = Controllers::new(3);
        controllers.navigate(navigation::Message::Open(1));
        controllers.zoom(zoom::Message::ZoomBy(60.0));
        controllers.navigate(navigation::Message::Close);
        controllers.navigate(navigation::Message::Open(2));
        assert_eq!(controllers.zoom.zoom_percent(), 100.0);
    }
}
