//! Angle markup representation: two rays, an arc and a degree label.

use std::any::Any;
use std::fmt;

use glam::{DVec3, IVec2};
use markups_core::{
    project_to_display_anchor, AngleGeometryCalculator, AngleOutcome, AngleResult, ComponentType, DisplayNode,
    InteractionHit, LabelFormat, MarkupsNode, Options, RenderContext, RenderPass, Representation3D, ViewContext,
    ANGLE_MARKUP_KIND,
};
use markups_render::{Actor, ArcSource, ControlPointType, PolyData, TextActor, TubeFilter};

use crate::base::MarkupsRepresentation3D;

/// Draws an angle markup in a 3-D view.
///
/// Control point 0 ends the first ray, point 1 is the vertex and point 2 ends
/// the second ray. The arc and label only appear once all three points are
/// placed and the angle could be measured.
#[derive(Debug, Clone)]
pub struct AngleRepresentation3D {
    base: MarkupsRepresentation3D,
    calculator: AngleGeometryCalculator,
    arc: ArcSource,
    line_actor: Actor,
    arc_actor: Actor,
    text_actor: TextActor,
    last_result: Option<AngleResult>,
}

impl AngleRepresentation3D {
    /// Creates a hidden representation; call `update_from_model` to populate it.
    pub fn new(options: &Options) -> Self {
        let tube = TubeFilter::new(1.0, options.tube_number_of_sides);
        let mut this = Self {
            base: MarkupsRepresentation3D::new(options),
            calculator: AngleGeometryCalculator::with_label_format(options.label_format.clone()),
            arc: ArcSource::new(options.arc_resolution),
            line_actor: Actor::new(tube.clone()),
            arc_actor: Actor::new(tube),
            text_actor: TextActor::new("0"),
            last_result: None,
        };
        this.hide();
        this
    }

    /// Returns the shared control point handling.
    pub fn base(&self) -> &MarkupsRepresentation3D {
        &self.base
    }

    /// Returns the format used for the degree label.
    pub fn label_format(&self) -> &LabelFormat {
        self.calculator.label_format()
    }

    /// Changes the label format; takes effect on the next update.
    pub fn set_label_format(&mut self, label_format: LabelFormat) {
        self.calculator.set_label_format(label_format);
    }

    /// Returns the last successfully measured angle.
    pub fn angle_result(&self) -> Option<&AngleResult> {
        self.last_result.as_ref()
    }

    /// Returns the poly line through the control points.
    pub fn line_actor(&self) -> &Actor {
        &self.line_actor
    }

    /// Returns the arc between the rays.
    pub fn arc_actor(&self) -> &Actor {
        &self.arc_actor
    }

    /// Returns the arc generator.
    pub fn arc_source(&self) -> &ArcSource {
        &self.arc
    }

    /// Returns the degree label.
    pub fn text_actor(&self) -> &TextActor {
        &self.text_actor
    }

    fn hide(&mut self) {
        self.base.set_visibility(false);
        self.line_actor.set_visibility(false);
        self.arc_actor.set_visibility(false);
        self.text_actor.set_visibility(false);
    }

    fn build_arc(&mut self, markup: &dyn MarkupsNode, view: &dyn ViewContext) {
        if markup.number_of_control_points() != 3 {
            return;
        }
        let (Some(ray1_end), Some(vertex), Some(ray2_end)) = (
            markup.control_point_position_world(0),
            markup.control_point_position_world(1),
            markup.control_point_position_world(2),
        ) else {
            return;
        };

        match self.calculator.compute_angle(vertex, ray1_end, ray2_end) {
            Ok(AngleOutcome::Computed(result)) => {
                self.arc.set_point1(result.arc_point1);
                self.arc.set_point2(result.arc_point2);
                self.arc.set_center(result.arc_center);
                self.arc.update();
                self.arc_actor.set_input(self.arc.output().clone());

                self.text_actor.set_input(result.label_text.clone());
                self.text_actor
                    .set_display_position(project_to_display_anchor(result.label_anchor, view));
                self.last_result = Some(result);
            }
            Ok(AngleOutcome::Skipped) => {
                log::debug!("angle rays too short along x; keeping previous arc");
            }
            Err(err) => {
                log::warn!("cannot measure angle: {err}");
                self.arc_actor.set_input(PolyData::new());
                self.last_result = None;
            }
        }
    }
}

impl Representation3D for AngleRepresentation3D {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn markup_kind(&self) -> &'static str {
        ANGLE_MARKUP_KIND
    }

    fn update_from_model(&mut self, markup: &dyn MarkupsNode, display: Option<&DisplayNode>, view: &dyn ViewContext) {
        let Some(display) = self.base.update_from_model(markup, display, view) else {
            self.hide();
            return;
        };

        let mut line = PolyData::new();
        self.base.build_line(markup, &mut line);
        self.line_actor.set_input(line);
        self.build_arc(markup, view);

        self.base.update_relative_coincident_topology_offsets(&mut self.line_actor);
        self.base.update_relative_coincident_topology_offsets(&mut self.arc_actor);

        let radius = self.base.control_point_size() * self.base.options().line_radius_ratio;
        self.line_actor.tube_mut().set_radius(radius);
        self.arc_actor.tube_mut().set_radius(radius);

        let line_visibility = markup.all_control_points_visible();
        let arc_visibility =
            line_visibility && markup.number_of_control_points() == 3 && self.last_result.is_some();
        self.line_actor.set_visibility(line_visibility);
        self.arc_actor.set_visibility(arc_visibility);
        // The display node's text visibility also gates the angle label.
        self.text_actor
            .set_visibility(arc_visibility && display.text_visibility());

        let control_point_type = if display.active_component_type() == ComponentType::Line {
            ControlPointType::Active
        } else if markup.all_control_points_selected() {
            ControlPointType::Selected
        } else {
            ControlPointType::Unselected
        };
        let pipeline = self.base.pipeline(control_point_type);
        let (property, text_property) = (pipeline.property, pipeline.text_property);
        self.line_actor.set_property(property);
        self.arc_actor.set_property(property);
        self.text_actor.set_text_property(text_property);

        self.line_actor.prepare();
        self.arc_actor.prepare();
    }

    fn bounds(&self) -> Option<(DVec3, DVec3)> {
        if !self.base.visibility() {
            return None;
        }
        self.base
            .add_actors_bounds(&[&self.line_actor, &self.arc_actor], self.base.bounds())
    }

    fn can_interact(
        &self,
        markup: &dyn MarkupsNode,
        display_position: IVec2,
        _world_position: DVec3,
        view: &dyn ViewContext,
    ) -> Option<InteractionHit> {
        if !self.base.visibility() || markup.locked() || markup.number_of_control_points() < 1 {
            return None;
        }
        self.base
            .can_interact(markup, display_position, view)
            .or_else(|| {
                self.line_actor
                    .visibility()
                    .then(|| self.base.can_interact_with_line(markup, display_position, view))
                    .flatten()
            })
    }

    fn render_opaque_geometry(&self, ctx: &mut dyn RenderContext) -> u32 {
        self.render_pass(RenderPass::Opaque, ctx)
    }

    fn render_translucent_polygonal_geometry(&self, ctx: &mut dyn RenderContext) -> u32 {
        self.render_pass(RenderPass::Translucent, ctx)
    }

    fn render_overlay(&self, ctx: &mut dyn RenderContext) -> u32 {
        self.render_pass(RenderPass::Overlay, ctx)
    }

    fn has_translucent_polygonal_geometry(&self) -> bool {
        self.base.has_translucent_polygonal_geometry()
            || self.line_actor.has_translucent_polygonal_geometry()
            || self.arc_actor.has_translucent_polygonal_geometry()
    }

    fn release_graphics_resources(&mut self) {
        self.line_actor.release_graphics_resources();
        self.arc_actor.release_graphics_resources();
    }

    fn transformation_reference_point(&self, markup: &dyn MarkupsNode) -> Option<DVec3> {
        if markup.number_of_control_points() < 2 {
            return None;
        }
        markup.control_point_position_world(1)
    }

    fn is_visible(&self) -> bool {
        self.base.visibility()
    }

    fn need_to_render(&self) -> bool {
        self.base.need_to_render()
    }

    fn set_need_to_render(&mut self, need: bool) {
        self.base.set_need_to_render(need);
    }
}

impl AngleRepresentation3D {
    fn render_pass(&self, pass: RenderPass, ctx: &mut dyn RenderContext) -> u32 {
        if !self.base.visibility() {
            return 0;
        }
        self.base.render(pass, ctx)
            + self.line_actor.render(pass, ctx)
            + self.arc_actor.render(pass, ctx)
            + self.text_actor.render(pass, ctx)
    }
}

impl fmt::Display for AngleRepresentation3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Line Visibility: {}", self.line_actor.visibility())?;
        writeln!(f, "Arc Visibility: {}", self.arc_actor.visibility())?;
        writeln!(f, "Text Visibility: {}", self.text_actor.visibility())?;
        writeln!(f, "Label Format: {}", self.label_format())
    }
}
