// SPDX-License-Identifier: MPL-2.0
//! User interface state and the lightbox component.
//!
//! Follows the Elm-style "state down, messages up" pattern: the host owns
//! rendering, the viewer owns interaction state.
//!
//! - [`viewer`] - Lightbox shell with zoom, pan, navigation and shortcuts
//! - [`state`] - Reusable zoom/pan and drag/swipe state
//! - [`metadata_panel`] - Info panel content (EXIF, dimensions, shortcuts)

pub mod metadata_panel;
pub mod state;
pub mod viewer;
