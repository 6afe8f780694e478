//! Control point glyph and label pipelines.

use glam::DVec3;
use markups_core::{project_to_display_anchor, CoincidentOffset, DrawItem, RenderContext, RenderPass};

use crate::actor::{Property, TextProperty};
use crate::poly_data::bounds_of;

/// Selection state a control point is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlPointType {
    /// Not selected.
    Unselected,
    /// Selected.
    Selected,
    /// Under the cursor or being dragged.
    Active,
}

impl ControlPointType {
    /// All types, in pipeline order.
    pub const ALL: [Self; 3] = [Self::Unselected, Self::Selected, Self::Active];

    /// Index of this type into a pipeline array.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Unselected => 0,
            Self::Selected => 1,
            Self::Active => 2,
        }
    }
}

/// Glyphs and labels for the control points in one selection state.
///
/// Its `property` and `text_property` are shared with any line-like actor
/// that is drawn in the same state.
#[derive(Debug, Clone)]
pub struct ControlPointsPipeline {
    /// Glyph surface appearance.
    pub property: Property,
    /// Label appearance.
    pub text_property: TextProperty,
    positions: Vec<DVec3>,
    labels: Vec<String>,
    glyph_scale_factor: f64,
    labels_visible: bool,
    visibility: bool,
    offset: CoincidentOffset,
}

impl ControlPointsPipeline {
    /// Creates an empty pipeline with the given color.
    pub fn new(color: DVec3) -> Self {
        Self {
            property: Property { color, opacity: 1.0 },
            text_property: TextProperty {
                color,
                ..TextProperty::default()
            },
            positions: Vec::new(),
            labels: Vec::new(),
            glyph_scale_factor: 1.0,
            labels_visible: true,
            visibility: true,
            offset: CoincidentOffset::default(),
        }
    }

    /// Replaces the glyph positions and their labels (empty labels are not drawn).
    pub fn set_points(&mut self, positions: Vec<DVec3>, labels: Vec<String>) {
        self.positions = positions;
        self.labels = labels;
    }

    /// Returns the glyph positions.
    #[must_use]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns the glyph size.
    #[must_use]
    pub fn glyph_scale_factor(&self) -> f64 {
        self.glyph_scale_factor
    }

    /// Sets the glyph size.
    pub fn set_glyph_scale_factor(&mut self, scale: f64) {
        self.glyph_scale_factor = scale;
    }

    /// Returns whether labels are drawn.
    #[must_use]
    pub fn labels_visible(&self) -> bool {
        self.labels_visible
    }

    /// Shows or hides labels.
    pub fn set_labels_visible(&mut self, visible: bool) {
        self.labels_visible = visible;
    }

    /// Returns whether glyphs are drawn.
    #[must_use]
    pub fn visibility(&self) -> bool {
        self.visibility
    }

    /// Shows or hides glyphs and labels.
    pub fn set_visibility(&mut self, visible: bool) {
        self.visibility = visible;
    }

    /// Returns the mapper's coincident topology offset.
    #[must_use]
    pub fn coincident_offset(&self) -> CoincidentOffset {
        self.offset
    }

    /// Sets the mapper's coincident topology offset.
    pub fn set_coincident_offset(&mut self, offset: CoincidentOffset) {
        self.offset = offset;
    }

    /// Returns the glyph bounds.
    #[must_use]
    pub fn bounds(&self) -> Option<(DVec3, DVec3)> {
        if !self.visibility {
            return None;
        }
        let half = DVec3::splat(self.glyph_scale_factor * 0.5);
        bounds_of(self.positions.iter().copied()).map(|(min, max)| (min - half, max + half))
    }

    /// Returns true if visible glyphs need the translucent pass.
    #[must_use]
    pub fn has_translucent_polygonal_geometry(&self) -> bool {
        self.visibility && !self.positions.is_empty() && self.property.is_translucent()
    }

    /// Submits glyphs (3-D passes) or labels (overlay); returns the number of props rendered.
    pub fn render(&self, pass: RenderPass, ctx: &mut dyn RenderContext) -> u32 {
        if !self.visibility || self.positions.is_empty() {
            return 0;
        }
        match pass {
            RenderPass::Opaque | RenderPass::Translucent => {
                let wanted = if self.property.is_translucent() {
                    RenderPass::Translucent
                } else {
                    RenderPass::Opaque
                };
                if pass != wanted {
                    return 0;
                }
                ctx.submit(
                    pass,
                    DrawItem::Glyphs {
                        positions: self.positions.clone(),
                        scale: self.glyph_scale_factor,
                        color: self.property.color,
                        opacity: self.property.opacity,
                        offset: self.offset,
                    },
                );
                1
            }
            RenderPass::Overlay => {
                if !self.labels_visible {
                    return 0;
                }
                let mut rendered = 0;
                for (position, label) in self.positions.iter().zip(&self.labels) {
                    if label.is_empty() {
                        continue;
                    }
                    let display_position = project_to_display_anchor(*position, &*ctx);
                    ctx.submit(
                        pass,
                        DrawItem::Text {
                            text: label.clone(),
                            display_position,
                            color: self.text_property.color,
                            opacity: self.text_property.opacity,
                            scale: self.text_property.scale,
                        },
                    );
                    rendered = 1;
                }
                rendered
            }
        }
    }
}
