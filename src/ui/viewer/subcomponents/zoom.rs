// SPDX-License-Identifier: MPL-2.0
//! Zoom/pan sub-component encapsulating `ZoomPanState` and its handlers.

use crate::ui::state::{ImageTransform, ZoomPanState};

/// Zoom sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// The underlying zoom/pan value.
    pub inner: ZoomPanState,
}

/// Messages for the zoom sub-component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Change zoom by a signed number of percentage points.
    ZoomBy(f32),
    /// Double-click/double-tap: toggle between fit and 200%.
    ToggleDoubleClickZoom,
    /// Move the pan by a relative offset.
    PanBy { dx: f32, dy: f32 },
    /// Set the pan to an absolute offset.
    PanTo { x: f32, y: f32 },
    /// Back to 100% with no pan.
    Reset,
}

/// Effects produced by zoom changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing visible changed.
    None,
    /// Zoom or pan changed.
    ViewChanged,
}

impl State {
    /// Handle a zoom message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        let before = self.inner;
        match msg {
            Message::ZoomBy(delta) => {
                self.inner.zoom_by(delta);
            }
            Message::ToggleDoubleClickZoom => self.inner.toggle_double_click_zoom(),
            Message::PanBy { dx, dy } => {
                self.inner.pan_by(dx, dy);
            }
            Message::PanTo { x, y } => {
                self.inner.pan_to(x, y);
            }
            Message::Reset => self.inner.reset(),
        }

        if self.inner == before {
            Effect::None
        } else {
            log::trace!(
                "zoom {}% pan {:?}",
                self.inner.zoom_percent(),
                self.inner.pan()
            );
            Effect::ViewChanged
        }
    }

    #[must_use]
    pub fn zoom_percent(&self) -> f32 {
        self.inner.zoom_percent()
    }

    #[must_use]
    pub fn pan(&self) -> (f32, f32) {
        self.inner.pan()
    }

    #[must_use]
    pub fn is_magnified(&self) -> bool {
        self.inner.is_magnified()
    }

    #[must_use]
    pub fn transform(&self) -> ImageTransform {
        self.inner.transform()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_by_reports_view_change() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::ZoomBy(25.0)), Effect::ViewChanged);
        assert_eq!(state.zoom_percent(), 125.0);
    }

    #[test]
    fn zoom_at_limit_reports_no_change() {
        let mut state = State::default();
        state.handle(Message::ZoomBy(1000.0));
        assert_eq!(state.handle(Message::ZoomBy(20.0)), Effect::None);
        assert_eq!(state.zoom_percent(), 400.0);
    }

    #[test]
    fn pan_at_fit_reports_no_change() {
        let mut state = State::default();
        assert_eq!(
            state.handle(Message::PanBy { dx: 10.0, dy: 0.0 }),
            Effect::None
        );
    }

    #[test]
    fn keyboard_steps_reach_250_percent() {
        let mut state = State::default();
        let mut seen = Vec::new();
        for _ in 0..6 {
            state.handle(Message::ZoomBy(25.0));
            seen.push(state.zoom_percent());
        }
        assert_eq!(seen, vec![125.0, 150.0, 175.0, 200.0, 225.0, 250.0]);
    }

    #[test]
    fn reset_restores_default() {
        let mut state = State::default();
        state.handle(Message::ZoomBy(100.0));
        state.handle(Message::PanTo { x: 80.0, y: -30.0 });
        assert_eq!(state.handle(Message::Reset), Effect::ViewChanged);
        assert_eq!(state.zoom_percent(), 100.0);
        assert_eq!(state.pan(), (0.0, 0.0));
    }

    #[test]
    fn zoom_below_fit_clears_pan() {
        let mut state = State::default();
        state.handle(Message::ZoomBy(20.0));
        state.handle(Message::PanBy { dx: 30.0, dy: 30.0 });
        state.handle(Message::ZoomBy(-20.0));
        assert_eq!(state.pan(), (0.0, 0.0));
    }
}
