// SPDX-License-Identifier: MPL-2.0
//! `studio_lightbox` is the interaction core of a photo lightbox.
//!
//! It owns zoom and pan, navigation with a short transition lock, gesture and
//! keyboard input, and builds a render model for any host to draw. Timers and
//! event listeners are requested through effects, so the core itself stays
//! free of I/O.
//!
//! ```
//! use studio_lightbox::domain::photo::Photo;
//! use studio_lightbox::ui::viewer::component::Message;
//! use studio_lightbox::ui::viewer::subcomponents::keyboard::Key;
//! use studio_lightbox::{ViewerCallbacks, ViewerProps, ViewerShell};
//!
//! let photos = vec![
//!     Photo::new("a", "https://cdn/a.jpg", "a.jpg"),
//!     Photo::new("b", "https://cdn/b.jpg", "b.jpg"),
//! ];
//! let (mut viewer, _effects) =
//!     ViewerShell::new(ViewerProps::new(photos).open_at(0), ViewerCallbacks::default());
//!
//! viewer.handle(Message::Key(Key::from_dom("+")));
//! assert_eq!(viewer.zoom_percent(), 125.0);
//! ```

#![doc(html_root_url = "https://docs.rs/studio_lightbox/0.3.0")]

pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

pub use error::{Error, Result};
pub use ui::viewer::{ViewerCallbacks, ViewerProps, ViewerShell};
