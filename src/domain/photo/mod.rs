// SPDX-License-Identifier: MPL-2.0
//! Photo domain types.

mod types;

pub use types::{ExifData, Photo};
