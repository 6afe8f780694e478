//! Circular arc tessellation.

use glam::DVec3;

use crate::poly_data::PolyData;

/// Generates a circular arc from `point1` to `point2` around `center`.
///
/// The radius is the distance from `center` to `point1`; the arc takes the
/// shorter way round. Output is a single poly line of `resolution + 1` points.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSource {
    point1: DVec3,
    point2: DVec3,
    center: DVec3,
    resolution: u32,
    output: PolyData,
}

impl Default for ArcSource {
    fn default() -> Self {
        Self::new(markups_core::angle::DEFAULT_ARC_RESOLUTION)
    }
}

impl ArcSource {
    /// Creates an arc source; the output is empty until [`ArcSource::update`].
    pub fn new(resolution: u32) -> Self {
        Self {
            point1: DVec3::new(0.0, 0.5, 0.0),
            point2: DVec3::new(0.5, 0.0, 0.0),
            center: DVec3::ZERO,
            resolution: resolution.max(1),
            output: PolyData::new(),
        }
    }

    /// Returns the start point.
    #[must_use]
    pub fn point1(&self) -> DVec3 {
        self.point1
    }

    /// Sets the start point.
    pub fn set_point1(&mut self, point: DVec3) {
        self.point1 = point;
    }

    /// Returns the end point.
    #[must_use]
    pub fn point2(&self) -> DVec3 {
        self.point2
    }

    /// Sets the end point.
    pub fn set_point2(&mut self, point: DVec3) {
        self.point2 = point;
    }

    /// Returns the center.
    #[must_use]
    pub fn center(&self) -> DVec3 {
        self.center
    }

    /// Sets the center.
    pub fn set_center(&mut self, center: DVec3) {
        self.center = center;
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Sets the number of segments (at least one).
    pub fn set_resolution(&mut self, resolution: u32) {
        self.resolution = resolution.max(1);
    }

    /// Returns the last generated arc.
    #[must_use]
    pub fn output(&self) -> &PolyData {
        &self.output
    }

    /// Regenerates the output from the current points.
    pub fn update(&mut self) {
        let v1 = self.point1 - self.center;
        let v2 = self.point2 - self.center;
        let radius = v1.length();
        let count = self.resolution as usize + 1;

        if radius == 0.0 || v2.length() == 0.0 {
            self.output.set_polyline(vec![self.center; count]);
            return;
        }

        let n1 = v1 / radius;
        let n2 = v2.normalize();
        let angle = n1.dot(n2).clamp(-1.0, 1.0).acos();

        // Unit vector in the arc plane, perpendicular to the start direction.
        let perpendicular = n1
            .cross(n2)
            .cross(n1)
            .try_normalize()
            .unwrap_or_else(|| n1.any_orthonormal_vector());

        let step = angle / f64::from(self.resolution);
        let points = (0..count)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let theta = step * i as f64;
                self.center + (n1 * theta.cos() + perpendicular * theta.sin()) * radius
            })
            .collect();
        self.output.set_polyline(points);
    }
}
