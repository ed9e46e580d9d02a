// SPDX-License-Identifier: MPL-2.0
//! Photo records as delivered by the gallery API.
//!
//! These are read-only for the viewer: ownership stays with the caller and the
//! records are shared through `Arc<[Photo]>`.

use serde::{Deserialize, Serialize};

/// EXIF fields populated by the upload pipeline.
///
/// Every field is optional; photos exported from editors often carry none.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExifData {
    /// Camera manufacturer (e.g., "Canon")
    pub camera_make: Option<String>,
    /// Camera model (e.g., "EOS R5")
    pub camera_model: Option<String>,
    /// Lens description (e.g., "RF 50mm F1.2 L USM")
    pub lens_model: Option<String>,
    /// Focal length in millimetres
    pub focal_length: Option<f32>,
    /// Aperture f-number
    pub aperture: Option<f32>,
    /// Exposure time as written by the camera (e.g., "1/250")
    pub shutter_speed: Option<String>,
    /// ISO sensitivity
    pub iso: Option<u32>,
    /// Capture date, either EXIF style (`2024:05:01 14:03:22`) or RFC 3339
    pub date_taken: Option<String>,
}

impl ExifData {
    /// Returns whether no field is populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Joins make and model, dropping the make when the model already repeats it.
    #[must_use]
    pub fn camera(&self) -> Option<String> {
        match (self.camera_make.as_deref(), self.camera_model.as_deref()) {
            (Some(make), Some(model)) if model.starts_with(make) => Some(model.to_string()),
            (Some(make), Some(model)) => Some(format!("{make} {model}")),
            (Some(make), None) => Some(make.to_string()),
            (None, Some(model)) => Some(model.to_string()),
            (None, None) => None,
        }
    }
}

/// A single photo in a gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    /// Full resolution URL, always present.
    pub primary_url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub medium_url: Option<String>,
    pub filename: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub exif: Option<ExifData>,
}

impl Photo {
    /// Creates a photo with only the required fields set.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        primary_url: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            primary_url: primary_url.into(),
            thumbnail_url: None,
            medium_url: None,
            filename: filename.into(),
            width: None,
            height: None,
            exif: None,
        }
    }

    /// URL used for the thumbnail strip: thumbnail, then medium, then primary.
    #[must_use]
    pub fn thumbnail_src(&self) -> &str {
        self.thumbnail_url
            .as_deref()
            .or(self.medium_url.as_deref())
            .unwrap_or(&self.primary_url)
    }

    /// Pixel dimensions, when both are known.
    #[must_use]
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.width.zip(self.height)
    }

    /// EXIF data, ignoring an attached but empty record.
    #[must_use]
    pub fn exif(&self) -> Option<&ExifData> {
        self.exif.as_ref().filter(|exif| !exif.is_empty())
    }
}
