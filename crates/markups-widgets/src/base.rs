//! Control point handling shared by every markup representation.

use glam::{DVec2, DVec3, IVec2};
use markups_core::{
    ComponentType, DisplayNode, InteractionHit, MarkupsNode, Options, RenderContext, RenderPass, ViewContext,
};
use markups_render::{union_bounds, Actor, ControlPointType, ControlPointsPipeline, PolyData};

/// Control point glyphs, labels and picking for one markup in one view.
///
/// Concrete representations embed this and add their own actors.
#[derive(Debug, Clone)]
pub struct MarkupsRepresentation3D {
    pipelines: [ControlPointsPipeline; 3],
    options: Options,
    control_point_size: f64,
    visibility: bool,
    need_to_render: bool,
}

impl MarkupsRepresentation3D {
    /// Creates the base with one pipeline per control point type.
    pub fn new(options: &Options) -> Self {
        let display = DisplayNode::default();
        Self {
            pipelines: [
                ControlPointsPipeline::new(display.color()),
                ControlPointsPipeline::new(display.selected_color()),
                ControlPointsPipeline::new(display.active_color()),
            ],
            options: options.clone(),
            control_point_size: options.control_point_size * display.glyph_scale(),
            visibility: true,
            need_to_render: false,
        }
    }

    /// Returns the options this representation was created with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Returns the pipeline for a control point type.
    pub fn pipeline(&self, control_point_type: ControlPointType) -> &ControlPointsPipeline {
        &self.pipelines[control_point_type.index()]
    }

    /// Returns the pipeline for a control point type, mutably.
    pub fn pipeline_mut(&mut self, control_point_type: ControlPointType) -> &mut ControlPointsPipeline {
        &mut self.pipelines[control_point_type.index()]
    }

    /// Returns the control point glyph size in world units.
    pub fn control_point_size(&self) -> f64 {
        self.control_point_size
    }

    /// Returns whether the representation is shown.
    pub fn visibility(&self) -> bool {
        self.visibility
    }

    /// Shows or hides the representation.
    pub fn set_visibility(&mut self, visibility: bool) {
        self.visibility = visibility;
        for pipeline in &mut self.pipelines {
            pipeline.set_visibility(visibility);
        }
    }

    /// Returns whether the view must re-render.
    pub fn need_to_render(&self) -> bool {
        self.need_to_render
    }

    /// Sets or clears the re-render request.
    pub fn set_need_to_render(&mut self, need: bool) {
        self.need_to_render = need;
    }

    /// Updates visibility and control point pipelines from the model.
    ///
    /// Returns the display node if the markup is shown in `view`, after
    /// which the caller updates its own actors.
    pub fn update_from_model<'a>(
        &mut self,
        markup: &dyn MarkupsNode,
        display: Option<&'a DisplayNode>,
        view: &dyn ViewContext,
    ) -> Option<&'a DisplayNode> {
        self.need_to_render = true;

        let Some(display) = display.filter(|d| d.visibility() && d.is_displayable_in_view(view.view_id())) else {
            self.set_visibility(false);
            return None;
        };
        self.set_visibility(true);
        self.control_point_size = self.options.control_point_size * display.glyph_scale();

        let colors = [display.color(), display.selected_color(), display.active_color()];
        let mut positions: [Vec<DVec3>; 3] = Default::default();
        let mut labels: [Vec<String>; 3] = Default::default();

        for index in 0..markup.number_of_control_points() {
            if !markup.control_point_visible(index) {
                continue;
            }
            let Some(position) = markup.control_point_position_world(index) else {
                continue;
            };
            let control_point_type = if display.active_component_type() == ComponentType::ControlPoint
                && display.active_component_index() == Some(index)
            {
                ControlPointType::Active
            } else if markup.control_point_selected(index) {
                ControlPointType::Selected
            } else {
                ControlPointType::Unselected
            };
            let slot = control_point_type.index();
            positions[slot].push(position);
            labels[slot].push(markup.control_point_label(index).unwrap_or_default().to_string());
        }

        let offset = self.options.coincident_topology.polygon;
        for (((pipeline, color), positions), labels) in self.pipelines.iter_mut().zip(colors).zip(positions).zip(labels) {
            pipeline.property.color = color;
            pipeline.property.opacity = display.opacity();
            pipeline.text_property.color = color;
            pipeline.text_property.opacity = display.opacity();
            pipeline.text_property.scale = display.text_scale();
            pipeline.set_points(positions, labels);
            pipeline.set_labels_visible(display.text_visibility());
            pipeline.set_glyph_scale_factor(self.control_point_size);
            pipeline.set_coincident_offset(offset);
        }

        Some(display)
    }

    /// Fills `line` with a poly line through all control points in order.
    pub fn build_line(&self, markup: &dyn MarkupsNode, line: &mut PolyData) {
        line.set_polyline(markup.control_point_positions_world());
    }

    /// Applies the configured line offset to an actor's mapper.
    pub fn update_relative_coincident_topology_offsets(&self, actor: &mut Actor) {
        actor.set_coincident_offset(self.options.coincident_topology.line);
    }

    /// Finds the visible control point nearest to the cursor, within the pick tolerance.
    pub fn can_interact(
        &self,
        markup: &dyn MarkupsNode,
        display_position: IVec2,
        view: &dyn ViewContext,
    ) -> Option<InteractionHit> {
        let cursor = display_position.as_dvec2();
        let tolerance2 = self.options.pick_tolerance_pixels.powi(2);

        (0..markup.number_of_control_points())
            .filter(|&i| markup.control_point_visible(i))
            .filter_map(|i| markup.control_point_position_world(i).map(|p| (i, p)))
            .filter_map(|(i, world)| {
                let distance2 = display_xy(view, world).distance_squared(cursor);
                (distance2 < tolerance2)
                    .then(|| InteractionHit::new(ComponentType::ControlPoint, i, distance2, world))
            })
            .fold(None, |best, hit| InteractionHit::closer(best, Some(hit)))
    }

    /// Finds the line segment nearest to the cursor, within the pick tolerance.
    ///
    /// The hit index is the segment's first control point.
    pub fn can_interact_with_line(
        &self,
        markup: &dyn MarkupsNode,
        display_position: IVec2,
        view: &dyn ViewContext,
    ) -> Option<InteractionHit> {
        let cursor = display_position.as_dvec2();
        let tolerance2 = self.options.pick_tolerance_pixels.powi(2);
        let points = markup.control_point_positions_world();

        points
            .windows(2)
            .enumerate()
            .filter_map(|(i, pair)| {
                let a = display_xy(view, pair[0]);
                let b = display_xy(view, pair[1]);
                let (t, distance2) = closest_on_segment(cursor, a, b);
                (distance2 < tolerance2).then(|| {
                    InteractionHit::new(ComponentType::Line, i, distance2, pair[0].lerp(pair[1], t))
                })
            })
            .fold(None, |best, hit| InteractionHit::closer(best, Some(hit)))
    }

    /// Returns the bounds of the control point glyphs.
    pub fn bounds(&self) -> Option<(DVec3, DVec3)> {
        self.pipelines
            .iter()
            .fold(None, |acc, pipeline| union_bounds(acc, pipeline.bounds()))
    }

    /// Joins the bounds of the visible actors with `bounds`.
    pub fn add_actors_bounds(&self, actors: &[&Actor], bounds: Option<(DVec3, DVec3)>) -> Option<(DVec3, DVec3)> {
        actors
            .iter()
            .filter(|actor| actor.visibility())
            .fold(bounds, |acc, actor| union_bounds(acc, actor.bounds()))
    }

    /// Renders control point glyphs or labels for a pass.
    pub fn render(&self, pass: RenderPass, ctx: &mut dyn RenderContext) -> u32 {
        if !self.visibility {
            return 0;
        }
        self.pipelines.iter().map(|pipeline| pipeline.render(pass, ctx)).sum()
    }

    /// Returns whether any control point glyphs are translucent.
    pub fn has_translucent_polygonal_geometry(&self) -> bool {
        self.visibility
            && self
                .pipelines
                .iter()
                .any(ControlPointsPipeline::has_translucent_polygonal_geometry)
    }
}

fn display_xy(view: &dyn ViewContext, world: DVec3) -> DVec2 {
    view.world_to_display(world).truncate()
}

/// Returns the parameter of the closest point on segment `ab` and its squared distance to `p`.
fn closest_on_segment(p: DVec2, a: DVec2, b: DVec2) -> (f64, f64) {
    let ab = b - a;
    let len2 = ab.length_squared();
    let t = if len2 > 0.0 { ((p - a).dot(ab) / len2).clamp(0.0, 1.0) } else { 0.0 };
    (t, (a + ab * t).distance_squared(p))
}
