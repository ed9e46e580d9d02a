// SPDX-License-Identifier: MPL-2.0
//! Zoom and pan state
//!
//! This module holds the numeric core of the viewer surface:
//! - Zoom percentage clamped to 50%–400%
//! - Pan offset clamped to a range that grows with zoom
//! - The visual transform derived from both

pub use crate::config::{
    DEFAULT_ZOOM_PERCENT, DOUBLE_CLICK_ZOOM_PERCENT, MAX_ZOOM_PERCENT, MIN_ZOOM_PERCENT,
    PAN_RANGE_PER_100_PERCENT,
};

/// Zoom percentage, guaranteed to be within valid range (50%–400%).
///
/// This type ensures that zoom values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZoomPercent(f32);

impl ZoomPercent {
    /// Creates a new zoom percentage, clamping the value to the valid range.
    ///
    /// NaN maps to the default zoom.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self::default();
        }
        Self(percent.clamp(MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the zoom as a multiplier (e.g., 100% → 1.0).
    #[must_use]
    pub fn as_factor(self) -> f32 {
        self.0 / 100.0
    }

    /// Returns whether the image is magnified beyond its fitted size.
    #[must_use]
    pub fn is_magnified(self) -> bool {
        self.0 > DEFAULT_ZOOM_PERCENT
    }

    /// Returns whether the zoom is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM_PERCENT
    }

    /// Returns whether the zoom is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM_PERCENT
    }

    /// Shifts zoom by a signed step.
    #[must_use]
    pub fn shifted(self, delta: f32) -> Self {
        Self::new(self.0 + delta)
    }
}

impl Default for ZoomPercent {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_PERCENT)
    }
}

/// Largest pan distance allowed in each direction at the given zoom.
///
/// Zero at or below 100%, then linear: 200px at 200%, 600px at 400%.
#[must_use]
pub fn max_pan(zoom_percent: f32) -> f32 {
    ((zoom_percent - DEFAULT_ZOOM_PERCENT) / 100.0 * PAN_RANGE_PER_100_PERCENT).max(0.0)
}

/// CSS-style transform applied to the image surface.
///
/// Translation is expressed in pre-scale units so a drag moves the image by
/// the same number of screen pixels at any zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageTransform {
    pub scale: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl ImageTransform {
    /// Renders the transform as a CSS `transform` value.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "scale({}) translate({}px, {}px)",
            format_number(self.scale),
            format_number(self.translate_x),
            format_number(self.translate_y)
        )
    }
}

/// Zoom level and pan offset of the image surface.
///
/// Invariants, upheld by every method:
/// - zoom stays within 50%–400%
/// - at or below 100% the pan is exactly (0, 0)
/// - `|pan_x|` and `|pan_y|` never exceed [`max_pan`] for the current zoom
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoomPanState {
    zoom: ZoomPercent,
    pan_x: f32,
    pan_y: f32,
}

impl ZoomPanState {
    #[must_use]
    pub fn zoom(&self) -> ZoomPercent {
        self.zoom
    }

    #[must_use]
    pub fn zoom_percent(&self) -> f32 {
        self.zoom.value()
    }

    #[must_use]
    pub fn pan(&self) -> (f32, f32) {
        (self.pan_x, self.pan_y)
    }

    /// Whether dragging (and therefore panning) is currently allowed.
    #[must_use]
    pub fn is_magnified(&self) -> bool {
        self.zoom.is_magnified()
    }

    #[must_use]
    pub fn max_pan(&self) -> f32 {
        max_pan(self.zoom.value())
    }

    /// Changes zoom by `delta` percentage points, clamped.
    ///
    /// Returns `false` when the zoom did not change.
    pub fn zoom_by(&mut self, delta: f32) -> bool {
        if !delta.is_finite() {
            return false;
        }
        let previous = self.zoom;
        self.zoom = self.zoom.shifted(delta);
        self.enforce_pan_bounds();
        self.zoom != previous
    }

    /// Double-click behaviour: magnified resets to fit, otherwise jumps to 200%.
    pub fn toggle_double_click_zoom(&mut self) {
        if self.is_magnified() {
            self.reset();
        } else {
            self.zoom = ZoomPercent::new(DOUBLE_CLICK_ZOOM_PERCENT);
            self.enforce_pan_bounds();
        }
    }

    /// Moves the pan by a relative offset. Ignored unless magnified.
    pub fn pan_by(&mut self, delta_x: f32, delta_y: f32) -> bool {
        self.pan_to(self.pan_x + delta_x, self.pan_y + delta_y)
    }

    /// Sets the pan to an absolute offset, clamped. Ignored unless magnified.
    pub fn pan_to(&mut self, x: f32, y: f32) -> bool {
        if !self.is_magnified() || !x.is_finite() || !y.is_finite() {
            return false;
        }
        let limit = self.max_pan();
        self.pan_x = x.clamp(-limit, limit);
        self.pan_y = y.clamp(-limit, limit);
        true
    }

    /// Returns to 100% with no pan.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The visual transform for the current zoom and pan.
    #[must_use]
    pub fn transform(&self) -> ImageTransform {
        let scale = self.zoom.as_factor();
        ImageTransform {
            scale,
            translate_x: self.pan_x / scale,
            translate_y: self.pan_y / scale,
        }
    }

    fn enforce_pan_bounds(&mut self) {
        if self.is_magnified() {
            let limit = self.max_pan();
            self.pan_x = self.pan_x.clamp(-limit, limit);
            self.pan_y = self.pan_y.clamp(-limit, limit);
        } else {
            self.pan_x = 0.0;
            self.pan_y = 0.0;
        }
    }
}

/// Formats a number for display (removes unnecessary decimal places)
#[must_use]
pub fn format_number(value: f32) -> String {
    if value.fract().abs() < f32::EPSILON {
        // Value has no fractional part, so it represents an integer exactly
        #[allow(clippy::cast_possible_truncation)]
        let int_value = value as i32;
        format!("{int_value}")
    } else {
        format!("{value:.3}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
