// SPDX-License-Identifier: MPL-2.0
//! Slide-in metadata panel content: dimensions, EXIF fields, filename and the
//! keyboard shortcut legend.

use crate::domain::photo::{ExifData, Photo};
use crate::ui::viewer::subcomponents::keyboard::SHORTCUT_LEGEND;
use chrono::{DateTime, NaiveDateTime};

/// Which metadata a row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataField {
    Dimensions,
    Camera,
    Lens,
    FocalLength,
    Aperture,
    ShutterSpeed,
    Iso,
    DateTaken,
}

impl MetadataField {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MetadataField::Dimensions => "Dimensions",
            MetadataField::Camera => "Camera",
            MetadataField::Lens => "Lens",
            MetadataField::FocalLength => "Focal length",
            MetadataField::Aperture => "Aperture",
            MetadataField::ShutterSpeed => "Shutter speed",
            MetadataField::Iso => "ISO",
            MetadataField::DateTaken => "Date taken",
        }
    }
}

/// One labelled value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRow {
    pub field: MetadataField,
    pub label: &'static str,
    pub value: String,
}

/// Everything the panel displays for one photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoPanel {
    pub filename: String,
    pub rows: Vec<MetadataRow>,
    pub shortcuts: &'static [(&'static str, &'static str)],
}

impl InfoPanel {
    #[must_use]
    pub fn for_photo(photo: &Photo) -> Self {
        let mut rows = Vec::new();
        let mut push = |field: MetadataField, value: Option<String>| {
            if let Some(value) = value {
                rows.push(MetadataRow {
                    field,
                    label: field.label(),
                    value,
                });
            }
        };

        push(
            MetadataField::Dimensions,
            photo
                .dimensions()
                .map(|(width, height)| format_dimensions(width, height)),
        );

        if let Some(exif) = photo.exif() {
            push(MetadataField::Camera, exif.camera());
            push(MetadataField::Lens, exif.lens_model.clone());
            push(
                MetadataField::FocalLength,
                exif.focal_length.map(format_focal_length),
            );
            push(MetadataField::Aperture, exif.aperture.map(format_aperture));
            push(
                MetadataField::ShutterSpeed,
                exif.shutter_speed.as_deref().map(format_shutter_speed),
            );
            push(MetadataField::Iso, exif.iso.map(|iso| format!("ISO {iso}")));
            push(MetadataField::DateTaken, date_taken(exif));
        }

        Self {
            filename: photo.filename.clone(),
            rows,
            shortcuts: SHORTCUT_LEGEND,
        }
    }

    /// Value of a field, if shown.
    #[must_use]
    pub fn value(&self, field: MetadataField) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.field == field)
            .map(|row| row.value.as_str())
    }
}

fn date_taken(exif: &ExifData) -> Option<String> {
    exif.date_taken.as_deref().map(format_date_taken)
}

/// Formats pixel dimensions, e.g. "6000 × 4000".
#[must_use]
pub fn format_dimensions(width: u32, height: u32) -> String {
    format!("{width} × {height}")
}

/// Formats a focal length, e.g. "50 mm" or "4.5 mm".
#[must_use]
pub fn format_focal_length(mm: f32) -> String {
    if mm.fract().abs() < f32::EPSILON {
        format!("{mm:.0} mm")
    } else {
        format!("{mm:.1} mm")
    }
}

/// Formats an f-number, e.g. "f/2.8" or "f/8".
#[must_use]
pub fn format_aperture(f_number: f32) -> String {
    if f_number.fract().abs() < f32::EPSILON {
        format!("f/{f_number:.0}")
    } else {
        format!("f/{f_number:.1}")
    }
}

/// Appends the seconds unit unless the camera already wrote one.
#[must_use]
pub fn format_shutter_speed(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.ends_with('s') {
        trimmed.to_string()
    } else {
        format!("{trimmed}s")
    }
}

/// Formats a capture date as "YYYY-MM-DD HH:MM".
///
/// Accepts the EXIF layout (`2024:05:01 14:03:22`), ISO without offset and
/// RFC 3339. Anything else is returned verbatim.
#[must_use]
pub fn format_date_taken(raw: &str) -> String {
    const DISPLAY: &str = "%Y-%m-%d %H:%M";
    let trimmed = raw.trim();

    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y:%m:%d %H:%M:%S") {
        return parsed.format(DISPLAY).to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return parsed.format(DISPLAY).to_string();
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return parsed.naive_local().format(DISPLAY).to_string();
    }
    trimmed.to_string()
}
