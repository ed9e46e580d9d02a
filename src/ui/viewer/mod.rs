// SPDX-License-Identifier: MPL-2.0
//! Lightbox viewer: the shell, its sub-components and the render model.
//!
//! The host forwards DOM-like events as [`component::Message`]s, carries out
//! the returned [`component::Effect`]s and draws [`view::ViewModel`].

pub mod component;
pub mod controllers;
pub mod subcomponents;
pub mod subscription;
pub mod timer;
pub mod view;

pub use component::{ViewerCallbacks, ViewerProps, ViewerShell};
