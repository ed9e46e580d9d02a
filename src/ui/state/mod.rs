// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Plain value types shared by the viewer sub-components: the zoom/pan core
//! and the ephemeral gesture snapshots.

pub mod drag;
pub mod zoom;

// Re-export commonly used types for convenience
pub use drag::{DragState, Point, SwipeDirection, SwipeState};
pub use zoom::{ImageTransform, ZoomPanState, ZoomPercent};
