//! Representation trait.
//!
//! A [`Representation3D`] turns one markup into renderable props for one 3-D
//! view and answers interaction queries against them.

use std::any::Any;

use glam::{DVec3, IVec2};

use crate::display::DisplayNode;
use crate::markup::MarkupsNode;
use crate::pick::InteractionHit;
use crate::render::RenderContext;
use crate::view::ViewContext;

/// Renderable view of a markup in a 3-D view.
///
/// Each representation exclusively owns its primitives. They are created
/// once and updated in place by [`Representation3D::update_from_model`].
pub trait Representation3D: Any + Send + Sync {
    /// Returns a reference to self as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Returns a mutable reference to self as `Any` for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Returns the markup kind this representation draws (e.g. `"Angle"`).
    fn markup_kind(&self) -> &'static str;

    /// Rebuilds geometry and display properties from the markup and its display node.
    ///
    /// A missing display node hides the representation.
    fn update_from_model(&mut self, markup: &dyn MarkupsNode, display: Option<&DisplayNode>, view: &dyn ViewContext);

    /// Returns the world-space bounding box of everything drawn, if any.
    fn bounds(&self) -> Option<(DVec3, DVec3)>;

    /// Finds the markup component nearest to a cursor position.
    fn can_interact(
        &self,
        markup: &dyn MarkupsNode,
        display_position: IVec2,
        world_position: DVec3,
        view: &dyn ViewContext,
    ) -> Option<InteractionHit>;

    /// Submits opaque geometry; returns the number of props rendered.
    fn render_opaque_geometry(&self, ctx: &mut dyn RenderContext) -> u32;

    /// Submits translucent geometry; returns the number of props rendered.
    fn render_translucent_polygonal_geometry(&self, ctx: &mut dyn RenderContext) -> u32;

    /// Submits overlay props (text); returns the number of props rendered.
    fn render_overlay(&self, ctx: &mut dyn RenderContext) -> u32;

    /// Returns whether any visible prop needs the translucent pass.
    fn has_translucent_polygonal_geometry(&self) -> bool;

    /// Drops cached render data; it is rebuilt on the next update.
    fn release_graphics_resources(&mut self);

    /// Returns the point that interactive transforms rotate and scale about.
    fn transformation_reference_point(&self, markup: &dyn MarkupsNode) -> Option<DVec3>;

    /// Returns whether the representation is currently shown.
    fn is_visible(&self) -> bool;

    /// Returns whether the view must re-render.
    fn need_to_render(&self) -> bool;

    /// Sets or clears the re-render request.
    fn set_need_to_render(&mut self, need: bool);

    /// Submits every pass in order and returns the total number of props rendered.
    fn render(&self, ctx: &mut dyn RenderContext) -> u32 {
        self.render_opaque_geometry(ctx)
            + self.render_translucent_polygonal_geometry(ctx)
            + self.render_overlay(ctx)
    }
}
