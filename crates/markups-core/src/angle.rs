//! Angle measurement geometry.
//!
//! [`AngleGeometryCalculator`] turns a vertex and two ray endpoints into the
//! subtended angle, the end points of a short arc drawn around the vertex, a
//! label anchor on the angle bisector and the formatted label text. It is a
//! pure function of its inputs and the configured [`LabelFormat`].

use glam::{DVec3, IVec2};

use crate::error::{MarkupsError, Result};
use crate::label_format::LabelFormat;
use crate::view::ViewTransform;

/// Rays whose x extent from the vertex is below this are not measured.
///
/// Only the x axis is gated, so a ray lying in the vertex's y-z plane is
/// skipped even though its angle is well defined.
pub const DEGENERATE_TOLERANCE: f64 = 0.001;

/// Arc end points sit at this fraction of the shorter ray.
pub const ARC_PLACEMENT_RATIO: f64 = 0.5;

/// Label anchor sits at this fraction of the shorter ray along the bisector.
pub const LABEL_PLACEMENT_RATIO: f64 = 0.6;

/// Default number of segments used to tessellate the arc.
pub const DEFAULT_ARC_RESOLUTION: u32 = 30;

/// The three points of an angle measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleInput {
    /// Point where the two rays meet.
    pub vertex: DVec3,
    /// End of the first ray.
    pub ray1_end: DVec3,
    /// End of the second ray.
    pub ray2_end: DVec3,
}

impl AngleInput {
    /// Creates an input from vertex and ray endpoints.
    #[must_use]
    pub fn new(vertex: DVec3, ray1_end: DVec3, ray2_end: DVec3) -> Self {
        Self {
            vertex,
            ray1_end,
            ray2_end,
        }
    }
}

/// Geometry derived from an [`AngleInput`].
#[derive(Debug, Clone, PartialEq)]
pub struct AngleResult {
    /// Angle between the rays, in `[0, π]`.
    pub angle_radians: f64,
    /// Arc start, on the first ray.
    pub arc_point1: DVec3,
    /// Arc end, on the second ray.
    pub arc_point2: DVec3,
    /// Arc center; always the vertex.
    pub arc_center: DVec3,
    /// World-space label position on the bisector.
    pub label_anchor: DVec3,
    /// Angle in degrees, formatted with the configured label format.
    pub label_text: String,
}

impl AngleResult {
    /// Returns the angle in degrees.
    #[must_use]
    pub fn angle_degrees(&self) -> f64 {
        self.angle_radians.to_degrees()
    }
}

/// Outcome of [`AngleGeometryCalculator::compute_angle`].
#[derive(Debug, Clone, PartialEq)]
pub enum AngleOutcome {
    /// The angle was measured.
    Computed(AngleResult),
    /// The input is too close to degenerate to give a stable value; callers
    /// keep whatever they displayed last.
    Skipped,
}

impl AngleOutcome {
    /// Returns the result if the angle was computed.
    #[must_use]
    pub fn computed(self) -> Option<AngleResult> {
        match self {
            Self::Computed(result) => Some(result),
            Self::Skipped => None,
        }
    }

    /// Returns true if the computation was skipped.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }
}

/// Computes angle measurement geometry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AngleGeometryCalculator {
    label_format: LabelFormat,
}

impl AngleGeometryCalculator {
    /// Creates a calculator with the default `%-#6.3g` label format.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with a custom label format.
    #[must_use]
    pub fn with_label_format(label_format: LabelFormat) -> Self {
        Self { label_format }
    }

    /// Returns the label format.
    #[must_use]
    pub fn label_format(&self) -> &LabelFormat {
        &self.label_format
    }

    /// Sets the label format.
    pub fn set_label_format(&mut self, label_format: LabelFormat) {
        self.label_format = label_format;
    }

    /// Computes the angle at `vertex` between the rays to `ray1_end` and `ray2_end`.
    ///
    /// Returns [`AngleOutcome::Skipped`] when either ray's x extent is below
    /// [`DEGENERATE_TOLERANCE`]; see [`Self::solve`] for the rest.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupsError::DegenerateInput`] if a ray that passes the gate
    /// has zero or non-finite length.
    pub fn compute_angle(&self, vertex: DVec3, ray1_end: DVec3, ray2_end: DVec3) -> Result<AngleOutcome> {
        let input = AngleInput::new(vertex, ray1_end, ray2_end);
        if passes_stability_gate(&input) {
            self.solve(&input).map(AngleOutcome::Computed)
        } else {
            Ok(AngleOutcome::Skipped)
        }
    }

    /// Computes the angle geometry without the stability gate.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupsError::DegenerateInput`] if either ray has zero or
    /// non-finite length.
    pub fn solve(&self, input: &AngleInput) -> Result<AngleResult> {
        let (dir1, len1) = unit_ray(input.ray1_end - input.vertex, 1)?;
        let (dir2, len2) = unit_ray(input.ray2_end - input.vertex, 2)?;

        let angle_radians = dir1.dot(dir2).clamp(-1.0, 1.0).acos();

        let shorter = len1.min(len2);
        let placement = shorter * ARC_PLACEMENT_RATIO;
        let arc_point1 = input.vertex + dir1 * placement;
        let arc_point2 = input.vertex + dir2 * placement;

        // Opposite rays have no bisector; the label then sits on the vertex.
        let bisector = (dir1 + dir2).normalize_or_zero();
        let label_anchor = input.vertex + bisector * shorter * LABEL_PLACEMENT_RATIO;

        Ok(AngleResult {
            angle_radians,
            arc_point1,
            arc_point2,
            arc_center: input.vertex,
            label_anchor,
            label_text: self.label_format.apply(angle_radians.to_degrees()),
        })
    }
}

/// Returns true when both rays extend at least [`DEGENERATE_TOLERANCE`] along x.
#[must_use]
pub fn passes_stability_gate(input: &AngleInput) -> bool {
    (input.ray1_end.x - input.vertex.x).abs() >= DEGENERATE_TOLERANCE
        && (input.ray2_end.x - input.vertex.x).abs() >= DEGENERATE_TOLERANCE
}

fn unit_ray(ray: DVec3, index: u8) -> Result<(DVec3, f64)> {
    let length = ray.length();
    if length == 0.0 || !length.is_finite() {
        return Err(MarkupsError::DegenerateInput { ray: index, length });
    }
    Ok((ray / length, length))
}

/// Projects a world-space label anchor to integer display coordinates.
///
/// Coordinates are truncated toward zero, not rounded.
#[allow(clippy::cast_possible_truncation)]
pub fn project_to_display_anchor<V>(label_anchor_world: DVec3, view: &V) -> IVec2
where
    V: ViewTransform + ?Sized,
{
    let display = view.world_to_display(label_anchor_world);
    IVec2::new(display.x as i32, display.y as i32)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use proptest::prelude::*;

    use super::*;

    const EPS: f64 = 1e-9;

    fn computed(vertex: DVec3, a: DVec3, b: DVec3) -> AngleResult {
        AngleGeometryCalculator::new()
            .compute_angle(vertex, a, b)
            .expect("angle failed")
            .computed()
            .expect("angle skipped")
    }

    #[test]
    fn test_right_angle() {
        // The x gate would skip this layout, so measure it ungated.
        let input = AngleInput::new(DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0), DVec3::new(0.0, 2.0, 0.0));
        let result = AngleGeometryCalculator::new().solve(&input).unwrap();
        assert!((result.angle_radians - FRAC_PI_2).abs() < EPS);
        assert!((result.arc_point1 - DVec3::new(1.0, 0.0, 0.0)).length() < EPS);
        assert!((result.arc_point2 - DVec3::new(0.0, 1.0, 0.0)).length() < EPS);
        assert_eq!(result.arc_center, DVec3::ZERO);
        assert_eq!(result.label_text.trim_end(), "90.0");
        let diagonal = DVec3::new(1.0, 1.0, 0.0).normalize() * 1.2;
        assert!((result.label_anchor - diagonal).length() < EPS);
    }

    #[test]
    fn test_arc_uses_shorter_ray() {
        let vertex = DVec3::new(1.0, 1.0, 1.0);
        let result = computed(vertex, vertex + DVec3::new(2.0, 0.0, 0.0), vertex + DVec3::new(0.5, 2.0, 0.0));
        let dir2 = DVec3::new(0.5, 2.0, 0.0).normalize();
        assert!((result.arc_point1 - (vertex + DVec3::X)).length() < EPS);
        assert!((result.arc_point2 - (vertex + dir2)).length() < EPS);

        let bisector = (DVec3::X + dir2).normalize();
        assert!((result.label_anchor - (vertex + bisector * 1.2)).length() < EPS);
    }

    #[test]
    fn test_opposite_rays() {
        let result = computed(DVec3::ZERO, DVec3::new(1.0, 0.0, 0.0), DVec3::new(-1.0, 0.0, 0.0));
        assert!((result.angle_radians - PI).abs() < EPS);
        assert_eq!(result.label_text.trim_end(), "180.");
        assert_eq!(result.label_anchor, DVec3::ZERO);
    }

    #[test]
    fn test_same_direction_rays() {
        let result = computed(DVec3::ZERO, DVec3::new(1.0, 1.0, 0.0), DVec3::new(3.0, 3.0, 0.0));
        assert!(result.angle_radians.abs() < 1e-6);
        // Shorter ray has length sqrt(2).
        let expected = DVec3::new(1.0, 1.0, 0.0) * 0.6;
        assert!((result.label_anchor - expected).length() < EPS);
    }

    #[test]
    fn test_forty_five_degrees_label() {
        let result = computed(DVec3::ZERO, DVec3::new(4.0, 0.0, 0.0), DVec3::new(1.0, 1.0, 0.0));
        assert!((result.angle_radians - FRAC_PI_4).abs() < EPS);
        assert_eq!(result.label_text, "45.0  ");
        assert!((result.angle_degrees() - 45.0).abs() < EPS);
    }

    #[test]
    fn test_custom_label_format() {
        let calculator = AngleGeometryCalculator::with_label_format(LabelFormat::parse("%.1f deg").unwrap());
        let result = calculator
            .compute_angle(DVec3::ZERO, DVec3::new(4.0, 0.0, 0.0), DVec3::new(1.0, 1.0, 0.0))
            .unwrap()
            .computed()
            .unwrap();
        assert_eq!(result.label_text, "45.0 deg");
        assert_eq!(calculator.label_format().as_str(), "%.1f deg");
    }

    #[test]
    fn test_gate_on_first_ray() {
        let outcome = AngleGeometryCalculator::new()
            .compute_angle(DVec3::ZERO, DVec3::new(0.0005, 1.0, 0.0), DVec3::new(5.0, 5.0, 0.0))
            .unwrap();
        assert!(outcome.is_skipped());
    }

    #[test]
    fn test_gate_on_second_ray() {
        let outcome = AngleGeometryCalculator::new()
            .compute_angle(DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0), DVec3::new(0.0, 2.0, 0.0))
            .unwrap();
        assert!(outcome.is_skipped());
    }

    #[test]
    fn test_gate_skips_ray_in_yz_plane() {
        // Well-defined 90 degree angle, still skipped because only x is checked.
        let outcome = AngleGeometryCalculator::new()
            .compute_angle(DVec3::ZERO, DVec3::new(0.0, 0.0, 3.0), DVec3::new(3.0, 0.0, 0.0))
            .unwrap();
        assert_eq!(outcome, AngleOutcome::Skipped);
    }

    #[test]
    fn test_coincident_vertex_is_skipped() {
        let outcome = AngleGeometryCalculator::new()
            .compute_angle(DVec3::ZERO, DVec3::new(1.0, 0.0, 0.0), DVec3::ZERO)
            .unwrap();
        assert!(outcome.is_skipped());
    }

    #[test]
    fn test_solve_zero_ray_is_degenerate() {
        let input = AngleInput::new(DVec3::ZERO, DVec3::new(1.0, 0.0, 0.0), DVec3::ZERO);
        let err = AngleGeometryCalculator::new().solve(&input).unwrap_err();
        assert!(matches!(err, MarkupsError::DegenerateInput { ray: 2, .. }));
    }

    #[test]
    fn test_non_finite_ray_is_degenerate() {
        let outcome = AngleGeometryCalculator::new().compute_angle(
            DVec3::ZERO,
            DVec3::new(1.0, f64::INFINITY, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
        );
        assert!(matches!(outcome, Err(MarkupsError::DegenerateInput { ray: 1, .. })));
    }

    #[test]
    fn test_idempotent() {
        let calculator = AngleGeometryCalculator::new();
        let a = calculator
            .compute_angle(DVec3::new(0.3, -1.0, 2.0), DVec3::new(4.1, 0.2, 0.0), DVec3::new(-2.7, 3.3, 1.0))
            .unwrap();
        let b = calculator
            .compute_angle(DVec3::new(0.3, -1.0, 2.0), DVec3::new(4.1, 0.2, 0.0), DVec3::new(-2.7, 3.3, 1.0))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_project_to_display_anchor_truncates() {
        struct ScaledView;
        impl ViewTransform for ScaledView {
            fn world_to_display(&self, p: DVec3) -> DVec3 {
                DVec3::new(p.x * 10.0 + 0.9, p.y * 10.0 - 0.9, 0.5)
            }
        }
        let view = ScaledView;
        assert_eq!(project_to_display_anchor(DVec3::new(1.0, 1.0, 0.0), &view), IVec2::new(10, 9));
        // Toward zero, not toward negative infinity.
        assert_eq!(project_to_display_anchor(DVec3::new(-1.0, 0.0, 0.0), &view), IVec2::new(-9, 0));
    }

    fn coord() -> impl Strategy<Value = f64> {
        -100.0..100.0f64
    }

    fn point() -> impl Strategy<Value = DVec3> {
        (coord(), coord(), coord()).prop_map(|(x, y, z)| DVec3::new(x, y, z))
    }

    fn gated_input() -> impl Strategy<Value = AngleInput> {
        (point(), point(), point())
            .prop_map(|(v, a, b)| AngleInput::new(v, a, b))
            .prop_filter("rays must pass the x gate", |input| {
                (input.ray1_end.x - input.vertex.x).abs() > 0.01 && (input.ray2_end.x - input.vertex.x).abs() > 0.01
            })
    }

    proptest! {
        #[test]
        fn prop_angle_in_range(input in gated_input()) {
            let result = AngleGeometryCalculator::new().solve(&input).unwrap();
            prop_assert!(result.angle_radians >= 0.0);
            prop_assert!(result.angle_radians <= PI);
        }

        #[test]
        fn prop_translation_invariant(input in gated_input(), offset in point()) {
            let calculator = AngleGeometryCalculator::new();
            let base = calculator.solve(&input).unwrap();
            let moved = calculator
                .solve(&AngleInput::new(input.vertex + offset, input.ray1_end + offset, input.ray2_end + offset))
                .unwrap();
            prop_assert!((base.angle_radians - moved.angle_radians).abs() < 1e-5);
            prop_assert!(((moved.arc_point1 - offset) - base.arc_point1).length() < 1e-6);
        }

        #[test]
        fn prop_scale_invariant(input in gated_input(), scale in 0.1..10.0f64) {
            let calculator = AngleGeometryCalculator::new();
            let base = calculator.solve(&input).unwrap();
            let scaled = calculator
                .solve(&AngleInput::new(input.vertex * scale, input.ray1_end * scale, input.ray2_end * scale))
                .unwrap();
            prop_assert!((base.angle_radians - scaled.angle_radians).abs() < 1e-5);

            let base_dist = (base.arc_point1 - input.vertex).length();
            let scaled_dist = (scaled.arc_point1 - input.vertex * scale).length();
            prop_assert!((scaled_dist - base_dist * scale).abs() < 1e-6 * (1.0 + scaled_dist));
        }

        #[test]
        fn prop_symmetric_under_ray_swap(input in gated_input()) {
            let calculator = AngleGeometryCalculator::new();
            let base = calculator.solve(&input).unwrap();
            let swapped = calculator
                .solve(&AngleInput::new(input.vertex, input.ray2_end, input.ray1_end))
                .unwrap();
            prop_assert!((base.angle_radians - swapped.angle_radians).abs() < 1e-12);
            prop_assert!((base.arc_point1 - swapped.arc_point2).length() < 1e-9);
        }

        #[test]
        fn prop_gate_skips_small_x(vertex in point(), b in point(), dx in -0.000_99..0.000_99f64, y in coord(), z in coord()) {
            let a = DVec3::new(vertex.x + dx, y, z);
            let outcome = AngleGeometryCalculator::new().compute_angle(vertex, a, b).unwrap();
            prop_assert!(outcome.is_skipped());
        }
    }
}
