//! Actors: drawable props with visibility and display properties.

use glam::{DVec3, IVec2};
use markups_core::{CoincidentOffset, DrawItem, RenderContext, RenderPass};

use crate::poly_data::PolyData;
use crate::tube_filter::TubeFilter;

/// Surface appearance of a 3-D prop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Property {
    /// RGB color.
    pub color: DVec3,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Default for Property {
    fn default() -> Self {
        Self {
            color: DVec3::ONE,
            opacity: 1.0,
        }
    }
}

impl Property {
    /// Returns true if the prop needs the translucent pass.
    #[must_use]
    pub fn is_translucent(&self) -> bool {
        self.opacity < 1.0
    }
}

/// Appearance of screen-space text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextProperty {
    /// RGB color.
    pub color: DVec3,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Font scale.
    pub scale: f64,
}

impl Default for TextProperty {
    fn default() -> Self {
        Self {
            color: DVec3::ONE,
            opacity: 1.0,
            scale: 3.0,
        }
    }
}

/// Poly lines drawn as tubes.
#[derive(Debug, Clone, Default)]
pub struct Actor {
    input: PolyData,
    tube: TubeFilter,
    property: Property,
    visibility: bool,
    offset: CoincidentOffset,
    prepared: Option<DrawItem>,
}

impl Actor {
    /// Creates a visible actor with empty geometry.
    pub fn new(tube: TubeFilter) -> Self {
        Self {
            tube,
            visibility: true,
            ..Self::default()
        }
    }

    /// Returns the input geometry.
    #[must_use]
    pub fn input(&self) -> &PolyData {
        &self.input
    }

    /// Replaces the input geometry.
    pub fn set_input(&mut self, input: PolyData) {
        self.input = input;
        self.prepared = None;
    }

    /// Returns the tube parameters.
    #[must_use]
    pub fn tube(&self) -> &TubeFilter {
        &self.tube
    }

    /// Returns mutable tube parameters.
    pub fn tube_mut(&mut self) -> &mut TubeFilter {
        self.prepared = None;
        &mut self.tube
    }

    /// Returns the surface property.
    #[must_use]
    pub fn property(&self) -> &Property {
        &self.property
    }

    /// Replaces the surface property.
    pub fn set_property(&mut self, property: Property) {
        self.property = property;
        self.prepared = None;
    }

    /// Returns whether the actor is drawn.
    #[must_use]
    pub fn visibility(&self) -> bool {
        self.visibility
    }

    /// Shows or hides the actor.
    pub fn set_visibility(&mut self, visibility: bool) {
        self.visibility = visibility;
    }

    /// Returns the mapper's coincident topology offset.
    #[must_use]
    pub fn coincident_offset(&self) -> CoincidentOffset {
        self.offset
    }

    /// Sets the mapper's coincident topology offset.
    pub fn set_coincident_offset(&mut self, offset: CoincidentOffset) {
        self.offset = offset;
        self.prepared = None;
    }

    /// Returns the bounds of the swept geometry.
    #[must_use]
    pub fn bounds(&self) -> Option<(DVec3, DVec3)> {
        self.tube.bounds(&self.input)
    }

    /// Returns true if the actor is visible and translucent.
    #[must_use]
    pub fn has_translucent_polygonal_geometry(&self) -> bool {
        self.visibility && self.property.is_translucent()
    }

    /// Builds the draw item ahead of rendering.
    pub fn prepare(&mut self) {
        self.prepared = Some(self.draw_item());
    }

    /// Returns whether a draw item is cached.
    #[must_use]
    pub fn is_prepared(&self) -> bool {
        self.prepared.is_some()
    }

    /// Drops the cached draw item.
    pub fn release_graphics_resources(&mut self) {
        self.prepared = None;
    }

    /// Submits the actor if it belongs in `pass`; returns 1 if it rendered.
    pub fn render(&self, pass: RenderPass, ctx: &mut dyn RenderContext) -> u32 {
        if !self.visibility || self.input.lines().is_empty() {
            return 0;
        }
        let wanted = if self.property.is_translucent() {
            RenderPass::Translucent
        } else {
            RenderPass::Opaque
        };
        if pass != wanted {
            return 0;
        }
        let item = self.prepared.clone().unwrap_or_else(|| self.draw_item());
        ctx.submit(pass, item);
        1
    }

    fn draw_item(&self) -> DrawItem {
        DrawItem::Tubes {
            points: self.input.points().to_vec(),
            lines: self.input.lines().to_vec(),
            radius: self.tube.radius(),
            sides: self.tube.number_of_sides(),
            color: self.property.color,
            opacity: self.property.opacity,
            offset: self.offset,
        }
    }
}

/// Text drawn at a fixed display position.
#[derive(Debug, Clone)]
pub struct TextActor {
    input: String,
    display_position: IVec2,
    text_property: TextProperty,
    visibility: bool,
}

impl TextActor {
    /// Creates a visible text actor.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            display_position: IVec2::ZERO,
            text_property: TextProperty::default(),
            visibility: true,
        }
    }

    /// Returns the text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Sets the text.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Returns the display position.
    #[must_use]
    pub fn display_position(&self) -> IVec2 {
        self.display_position
    }

    /// Sets the display position.
    pub fn set_display_position(&mut self, position: IVec2) {
        self.display_position = position;
    }

    /// Returns the text property.
    #[must_use]
    pub fn text_property(&self) -> &TextProperty {
        &self.text_property
    }

    /// Replaces the text property.
    pub fn set_text_property(&mut self, property: TextProperty) {
        self.text_property = property;
    }

    /// Returns whether the text is drawn.
    #[must_use]
    pub fn visibility(&self) -> bool {
        self.visibility
    }

    /// Shows or hides the text.
    pub fn set_visibility(&mut self, visibility: bool) {
        self.visibility = visibility;
    }

    /// Submits the text in the overlay pass; returns 1 if it rendered.
    pub fn render(&self, pass: RenderPass, ctx: &mut dyn RenderContext) -> u32 {
        if !self.visibility || pass != RenderPass::Overlay || self.input.is_empty() {
            return 0;
        }
        ctx.submit(
            pass,
            DrawItem::Text {
                text: self.input.clone(),
                display_position: self.display_position,
                color: self.text_property.color,
                opacity: self.text_property.opacity,
                scale: self.text_property.scale,
            },
        );
        1
    }
}
