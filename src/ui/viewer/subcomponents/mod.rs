// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the viewer.
//!
//! Each sub-component has its own State, Message, Effect, and handle() method.
//! The main component.rs orchestrates these sub-components.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── zoom        - Zoom level and pan offset (clamped)
//!     ├── navigation  - Current index, open flag, transition lock
//!     ├── gesture     - Wheel, pointer drag, touch drag, swipe, double-tap
//!     ├── keyboard    - Shortcut routing
//!     ├── loading     - Per-image loaded flags
//!     └── actions     - Header button enabling from busy flags
//! ```
//!
//! `zoom` and `navigation` are only written through
//! [`Controllers`](super::controllers::Controllers), which `gesture`,
//! `keyboard` and the shell's public API all share.

pub mod actions;
pub mod gesture;
pub mod keyboard;
pub mod loading;
pub mod navigation;
pub mod zoom;
