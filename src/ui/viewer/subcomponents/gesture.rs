// SPDX-License-Identifier: MPL-2.0
//! Gesture sub-component translating pointer, touch and wheel input into
//! controller calls.
//!
//! The only state kept here are the short-lived drag/swipe snapshots and the
//! last tap (for double-tap detection). Zoom, pan and index always live in the
//! controllers.

use super::{navigation, zoom};
use crate::config::{DOUBLE_TAP_WINDOW_MS, TAP_MAX_TRAVEL_PX, WHEEL_ZOOM_STEP_PERCENT};
use crate::ui::state::{DragState, Point, SwipeDirection, SwipeState};
use crate::ui::viewer::controllers::Controllers;

/// Gesture sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    drag: Option<DragState>,
    swipe: Option<SwipeState>,
    last_tap: Option<(Point, f64)>,
}

/// Raw input events, in viewer-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// One wheel tick. Negative `delta_y` scrolls up.
    Wheel { delta_y: f32 },
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    /// Pointer left the image surface.
    PointerLeave,
    /// Pointer released anywhere in the window, delivered by the global listener.
    GlobalPointerUp,
    TouchStart {
        position: Point,
        /// Number of active touch points.
        touches: usize,
        time_ms: f64,
    },
    TouchMove {
        position: Point,
        touches: usize,
    },
    TouchEnd {
        /// Position of the lifted touch point.
        position: Point,
        time_ms: f64,
    },
    TouchCancel,
    DoubleClick,
}

/// Effects produced by gesture handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do.
    None,
    /// Zoom or pan changed.
    ViewChanged,
    /// A wheel event was consumed; the host must suppress page scrolling.
    WheelConsumed { view_changed: bool },
    /// A swipe issued a navigation request.
    Navigation(navigation::Effect),
}

impl From<zoom::Effect> for Effect {
    fn from(effect: zoom::Effect) -> Self {
        match effect {
            zoom::Effect::None => Effect::None,
            zoom::Effect::ViewChanged => Effect::ViewChanged,
        }
    }
}

impl State {
    /// Handle a gesture message against the controllers.
    ///
    /// Every event is ignored while the session is closed.
    pub fn handle(&mut self, msg: Message, controllers: &mut Controllers) -> Effect {
        if !controllers.is_open() {
            self.clear();
            return Effect::None;
        }

        let effect = match msg {
            Message::Wheel { delta_y } => {
                let view_changed = if delta_y < 0.0 {
                    controllers.zoom(zoom::Message::ZoomBy(WHEEL_ZOOM_STEP_PERCENT))
                        == zoom::Effect::ViewChanged
                } else if delta_y > 0.0 {
                    controllers.zoom(zoom::Message::ZoomBy(-WHEEL_ZOOM_STEP_PERCENT))
                        == zoom::Effect::ViewChanged
                } else {
                    false
                };
                Effect::WheelConsumed { view_changed }
            }
            Message::PointerDown(position) => {
                self.begin_drag(position, controllers);
                Effect::None
            }
            Message::PointerMove(position) => self.continue_drag(position, controllers),
            Message::PointerUp | Message::PointerLeave | Message::GlobalPointerUp => {
                self.drag = None;
                Effect::None
            }
            Message::TouchStart {
                position,
                touches,
                time_ms,
            } => {
                if touches == 1 {
                    self.swipe = Some(SwipeState::begin(position, time_ms));
                    self.begin_drag(position, controllers);
                } else {
                    self.drag = None;
                    self.swipe = None;
                }
                Effect::None
            }
            Message::TouchMove { position, touches } => {
                if touches == 1 {
                    self.continue_drag(position, controllers)
                } else {
                    Effect::None
                }
            }
            Message::TouchEnd { position, time_ms } => {
                self.end_touch(position, time_ms, controllers)
            }
            Message::TouchCancel => {
                self.drag = None;
                self.swipe = None;
                Effect::None
            }
            Message::DoubleClick => controllers
                .zoom(zoom::Message::ToggleDoubleClickZoom)
                .into(),
        };

        self.reconcile(controllers);
        effect
    }

    /// A drag needs a magnified image that is not sliding out.
    fn begin_drag(&mut self, position: Point, controllers: &Controllers) {
        let can_drag = controllers.is_magnified() && !controllers.navigation.is_transitioning();
        self.drag = can_drag.then(|| DragState::begin(position, controllers.zoom.pan()));
    }

    fn continue_drag(&mut self, position: Point, controllers: &mut Controllers) -> Effect {
        let Some(drag) = self.drag else {
            return Effect::None;
        };
        let (x, y) = drag.target_pan(position);
        controllers.zoom(zoom::Message::PanTo { x, y }).into()
    }

    fn end_touch(
        &mut self,
        position: Point,
        time_ms: f64,
        controllers: &mut Controllers,
    ) -> Effect {
        self.drag = None;
        let Some(swipe) = self.swipe.take() else {
            return Effect::None;
        };

        if swipe.is_tap(position) {
            return self.register_tap(position, time_ms, controllers);
        }
        self.last_tap = None;

        // Swiping is disabled while zoomed in; the touch was a pan.
        if controllers.is_magnified() {
            return Effect::None;
        }

        match swipe.classify(position, time_ms) {
            Some(SwipeDirection::Left) => {
                Effect::Navigation(controllers.navigate(navigation::Message::Next))
            }
            Some(SwipeDirection::Right) => {
                Effect::Navigation(controllers.navigate(navigation::Message::Previous))
            }
            None => Effect::None,
        }
    }

    fn register_tap(
        &mut self,
        position: Point,
        time_ms: f64,
        controllers: &mut Controllers,
    ) -> Effect {
        let is_double_tap = self.last_tap.is_some_and(|(previous, previous_ms)| {
            let dx = position.x - previous.x;
            let dy = position.y - previous.y;
            time_ms - previous_ms < DOUBLE_TAP_WINDOW_MS
                && (dx * dx + dy * dy).sqrt() <= 2.0 * TAP_MAX_TRAVEL_PX
        });

        if is_double_tap {
            // Reset to avoid triple-tap toggling twice
            self.last_tap = None;
            controllers
                .zoom(zoom::Message::ToggleDoubleClickZoom)
                .into()
        } else {
            self.last_tap = Some((position, time_ms));
            Effect::None
        }
    }

    /// Drops snapshots that are no longer legal.
    ///
    /// A drag only exists while magnified, open and idle. Zooming back to fit
    /// by any path (keyboard, double-click) or starting a transition ends it.
    pub fn reconcile(&mut self, controllers: &Controllers) {
        if !controllers.is_open() {
            self.clear();
        } else if !controllers.is_magnified() || controllers.navigation.is_transitioning() {
            self.drag = None;
        }
    }

    /// Discards every gesture snapshot.
    pub fn clear(&mut self) {
        self.drag = None;
        self.swipe = None;
        self.last_tap = None;
    }

    /// Check if a drag is currently in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Check if a touch gesture is being tracked.
    #[must_use]
    pub fn is_tracking_touch(&self) -> bool {
        self.swipe.is_some()
    }
}
