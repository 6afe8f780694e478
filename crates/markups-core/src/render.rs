//! Draw submission seam between representations and a renderer.
//!
//! Representations describe what to draw as [`DrawItem`]s and hand them to a
//! [`RenderContext`] once per pass. The renderer that consumes them lives
//! outside this workspace.

use glam::{DVec3, IVec2};
use serde::{Deserialize, Serialize};

use crate::view::ViewContext;

/// Render pass a prop is submitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderPass {
    /// Fully opaque 3-D geometry.
    Opaque,
    /// 3-D geometry with opacity below one.
    Translucent,
    /// 2-D overlay drawn last (text).
    Overlay,
}

/// Depth bias applied to a primitive to avoid z-fighting with coincident geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CoincidentOffset {
    /// Slope-scaled factor.
    pub factor: f64,
    /// Constant offset in depth units.
    pub units: f64,
}

impl CoincidentOffset {
    /// Creates a new offset.
    pub const fn new(factor: f64, units: f64) -> Self {
        Self { factor, units }
    }
}

/// One primitive handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawItem {
    /// Poly lines swept into tubes.
    Tubes {
        /// Tessellated line points.
        points: Vec<DVec3>,
        /// Point index lists, one per poly line.
        lines: Vec<Vec<usize>>,
        /// Tube radius in world units.
        radius: f64,
        /// Number of sides around each tube.
        sides: u32,
        /// RGB color.
        color: DVec3,
        /// Opacity in `[0, 1]`.
        opacity: f64,
        /// Depth bias for lines.
        offset: CoincidentOffset,
    },
    /// Glyphs (control point markers) at positions.
    Glyphs {
        /// Glyph centers.
        positions: Vec<DVec3>,
        /// Glyph size in world units.
        scale: f64,
        /// RGB color.
        color: DVec3,
        /// Opacity in `[0, 1]`.
        opacity: f64,
        /// Depth bias for polygons.
        offset: CoincidentOffset,
    },
    /// Screen-space text.
    Text {
        /// Text to draw.
        text: String,
        /// Lower-left anchor in display coordinates.
        display_position: IVec2,
        /// RGB color.
        color: DVec3,
        /// Opacity in `[0, 1]`.
        opacity: f64,
        /// Font scale.
        scale: f64,
    },
}

/// A view that accepts draw submissions.
pub trait RenderContext: ViewContext {
    /// Submits one primitive for a pass.
    fn submit(&mut self, pass: RenderPass, item: DrawItem);
}
