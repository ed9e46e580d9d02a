// SPDX-License-Identifier: MPL-2.0
//! Drag and swipe gesture snapshots
//!
//! Both are short-lived values: created when a gesture starts, consumed when
//! it ends. Nothing is carried over from one gesture to the next.

use crate::config::{
    SWIPE_DOMINANCE_RATIO, SWIPE_MAX_DURATION_MS, SWIPE_MIN_DISTANCE_PX, TAP_MAX_TRAVEL_PX,
};

/// Screen position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Snapshot taken when a pan drag begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Pointer position where the drag started
    pub origin: Point,
    /// Pan offset when the drag started
    pub origin_pan: (f32, f32),
}

impl DragState {
    #[must_use]
    pub fn begin(origin: Point, origin_pan: (f32, f32)) -> Self {
        Self { origin, origin_pan }
    }

    /// Pan offset the image should have with the pointer at `current`.
    ///
    /// Always measured from the origin snapshot, so per-event rounding never
    /// accumulates.
    #[must_use]
    pub fn target_pan(&self, current: Point) -> (f32, f32) {
        (
            self.origin_pan.0 + (current.x - self.origin.x),
            self.origin_pan.1 + (current.y - self.origin.y),
        )
    }
}

/// Horizontal swipe direction, named after the finger's movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: show the next photo.
    Left,
    /// Finger moved right: show the previous photo.
    Right,
}

/// Snapshot taken when a single-finger touch begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeState {
    pub origin: Point,
    /// Event timestamp in milliseconds
    pub origin_time_ms: f64,
}

impl SwipeState {
    #[must_use]
    pub fn begin(origin: Point, origin_time_ms: f64) -> Self {
        Self {
            origin,
            origin_time_ms,
        }
    }

    /// Classifies a completed touch as a horizontal swipe.
    ///
    /// A swipe is fast (under 300ms), long (over 50px horizontally) and
    /// predominantly horizontal (|dx| > 2·|dy|). Anything else is a scroll or tap.
    #[must_use]
    pub fn classify(&self, end: Point, end_time_ms: f64) -> Option<SwipeDirection> {
        let elapsed = end_time_ms - self.origin_time_ms;
        let dx = end.x - self.origin.x;
        let dy = end.y - self.origin.y;

        let is_swipe = elapsed < SWIPE_MAX_DURATION_MS
            && dx.abs() > SWIPE_MIN_DISTANCE_PX
            && dx.abs() > SWIPE_DOMINANCE_RATIO * dy.abs();

        if !is_swipe {
            return None;
        }
        if dx > 0.0 {
            Some(SwipeDirection::Right)
        } else {
            Some(SwipeDirection::Left)
        }
    }

    /// Whether the touch stayed close enough to its origin to count as a tap.
    #[must_use]
    pub fn is_tap(&self, end: Point) -> bool {
        let dx = end.x - self.origin.x;
        let dy = end.y - self.origin.y;
        (dx * dx + dy * dy).sqrt() <= TAP_MAX_TRAVEL_PX
    }
}
