//! Configuration options for markup representations.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::angle::DEFAULT_ARC_RESOLUTION;
use crate::error::Result;
use crate::label_format::LabelFormat;
use crate::render::CoincidentOffset;

/// Options shared by every representation created from a registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// printf-style format for measurement labels.
    pub label_format: LabelFormat,

    /// Number of segments the angle arc is tessellated into.
    pub arc_resolution: u32,

    /// Number of sides of line and arc tubes.
    pub tube_number_of_sides: u32,

    /// Tube radius as a fraction of the control point size.
    pub line_radius_ratio: f64,

    /// Base control point size in world units; the display node's glyph scale multiplies it.
    pub control_point_size: f64,

    /// Maximum display distance (pixels) at which a component can be picked.
    pub pick_tolerance_pixels: f64,

    /// Depth offsets applied to markup mappers.
    pub coincident_topology: CoincidentTopologyParameters,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            label_format: LabelFormat::default(),
            arc_resolution: DEFAULT_ARC_RESOLUTION,
            tube_number_of_sides: 20,
            line_radius_ratio: 0.125,
            control_point_size: 1.0,
            pick_tolerance_pixels: 10.0,
            coincident_topology: CoincidentTopologyParameters::default(),
        }
    }
}

impl Options {
    /// Parses options from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes options to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let options = Self::from_json(&text)?;
        log::info!("loaded markup options from {}", path.as_ref().display());
        Ok(options)
    }
}

/// Coincident topology offsets, relative to whatever the renderer applies globally.
///
/// Markups are pulled toward the camera so they stay visible on top of the
/// surfaces they were placed on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoincidentTopologyParameters {
    /// Offset for filled polygons (glyphs).
    pub polygon: CoincidentOffset,
    /// Offset for lines and tubes.
    pub line: CoincidentOffset,
    /// Offset for points.
    pub point: CoincidentOffset,
}

impl Default for CoincidentTopologyParameters {
    fn default() -> Self {
        Self {
            polygon: CoincidentOffset::new(-1.0, -1.0),
            line: CoincidentOffset::new(-1.0, -1.0),
            point: CoincidentOffset::new(0.0, -1.0),
        }
    }
}
