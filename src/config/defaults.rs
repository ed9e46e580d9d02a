// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all interaction constants.
//!
//! This module is the single source of truth for the numbers that shape how
//! the lightbox feels. Several of them are relied upon by existing users
//! (wheel and keyboard zoom steps, swipe thresholds) and must not drift.
//!
//! # Categories
//!
//! - **Zoom**: Zoom percentage bounds and steps
//! - **Pan**: Pan range growth per zoom percent
//! - **Transition**: Slide transition lock duration
//! - **Gesture**: Swipe and double-tap thresholds

use std::time::Duration;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom level when a photo is shown (100% = fit).
pub const DEFAULT_ZOOM_PERCENT: f32 = 100.0;

/// Minimum allowed zoom percentage.
pub const MIN_ZOOM_PERCENT: f32 = 50.0;

/// Maximum allowed zoom percentage.
pub const MAX_ZOOM_PERCENT: f32 = 400.0;

/// Zoom level reached by a double-click at or below 100%.
pub const DOUBLE_CLICK_ZOOM_PERCENT: f32 = 200.0;

/// Zoom change per wheel tick.
pub const WHEEL_ZOOM_STEP_PERCENT: f32 = 20.0;

/// Zoom change per `+`/`-` key press. Intentionally differs from the wheel step.
pub const KEYBOARD_ZOOM_STEP_PERCENT: f32 = 25.0;

// ==========================================================================
// Pan Defaults
// ==========================================================================

/// Pan range (in pixels, each direction) gained per 100% of zoom above 100%.
///
/// At 200% the image may move 200px either way, at 400% 600px.
pub const PAN_RANGE_PER_100_PERCENT: f32 = 200.0;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// How long navigation is locked while the slide animation runs.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(150);

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// A swipe must complete strictly faster than this (milliseconds).
pub const SWIPE_MAX_DURATION_MS: f64 = 300.0;

/// A swipe must travel strictly more than this horizontally (pixels).
pub const SWIPE_MIN_DISTANCE_PX: f32 = 50.0;

/// Horizontal travel must exceed vertical travel by this factor.
pub const SWIPE_DOMINANCE_RATIO: f32 = 2.0;

/// Two taps ending within this window (milliseconds) form a double-tap.
pub const DOUBLE_TAP_WINDOW_MS: f64 = 300.0;

/// A touch that moves further than this (pixels) is not a tap.
pub const TAP_MAX_TRAVEL_PX: f32 = 10.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_ZOOM_PERCENT > 0.0);
    assert!(MIN_ZOOM_PERCENT < DEFAULT_ZOOM_PERCENT);
    assert!(MAX_ZOOM_PERCENT > DEFAULT_ZOOM_PERCENT);
    assert!(DOUBLE_CLICK_ZOOM_PERCENT > DEFAULT_ZOOM_PERCENT);
    assert!(DOUBLE_CLICK_ZOOM_PERCENT <= MAX_ZOOM_PERCENT);
    assert!(WHEEL_ZOOM_STEP_PERCENT > 0.0);
    assert!(KEYBOARD_ZOOM_STEP_PERCENT > 0.0);
    assert!(PAN_RANGE_PER_100_PERCENT > 0.0);
    assert!(SWIPE_MAX_DURATION_MS > 0.0);
    assert!(SWIPE_MIN_DISTANCE_PX > TAP_MAX_TRAVEL_PX);
    assert!(SWIPE_DOMINANCE_RATIO >= 1.0);
};
