// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure data handed to the viewer by its caller.
//!
//! Serde derives are the only external dependency, so records decode
//! straight from the gallery API payload.
//!
//! # Modules
//!
//! - [`photo`]: Photo records ([`Photo`](photo::Photo), [`ExifData`](photo::ExifData))

pub mod photo;
