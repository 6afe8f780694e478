//! Camera and world-to-display projection.

use glam::{DMat4, DVec2, DVec3};
use markups_core::ViewTransform;

/// Camera projection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    /// Perspective projection.
    #[default]
    Perspective,
    /// Orthographic projection.
    Orthographic,
}

/// A 3D camera looking into a viewport of a given pixel size.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space.
    pub position: DVec3,
    /// Point the camera is looking at.
    pub target: DVec3,
    /// Up vector.
    pub up: DVec3,
    /// Vertical field of view in radians.
    pub fov: f64,
    /// Viewport size in pixels.
    pub viewport_size: DVec2,
    /// Near clipping plane.
    pub near: f64,
    /// Far clipping plane.
    pub far: f64,
    /// Projection mode.
    pub projection_mode: ProjectionMode,
    /// Half height of the view volume (used when `projection_mode` is Orthographic).
    pub ortho_scale: f64,
}

impl Camera {
    /// Creates a camera for a viewport of `width` x `height` pixels.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            position: DVec3::new(0.0, 0.0, 3.0),
            target: DVec3::ZERO,
            up: DVec3::Y,
            fov: std::f64::consts::FRAC_PI_4, // 45 degrees
            viewport_size: DVec2::new(width.max(1.0), height.max(1.0)),
            near: 0.01,
            far: 1000.0,
            projection_mode: ProjectionMode::Perspective,
            ortho_scale: 1.0,
        }
    }

    /// Returns width / height.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.viewport_size.x / self.viewport_size.y
    }

    /// Resizes the viewport.
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.viewport_size = DVec2::new(width.max(1.0), height.max(1.0));
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Returns the projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> DMat4 {
        match self.projection_mode {
            ProjectionMode::Perspective => DMat4::perspective_rh(self.fov, self.aspect_ratio(), self.near, self.far),
            ProjectionMode::Orthographic => {
                let half_height = self.ortho_scale;
                let half_width = half_height * self.aspect_ratio();
                // Symmetric depth range around the target so nothing near the
                // focus point is clipped.
                let dist = (self.position - self.target).length();
                let ortho_depth = (dist + self.far).max(self.ortho_scale * 100.0);
                DMat4::orthographic_rh(-half_width, half_width, -half_height, half_height, -ortho_depth, ortho_depth)
            }
        }
    }

    /// Returns the combined view-projection matrix.
    #[must_use]
    pub fn view_projection_matrix(&self) -> DMat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Resets the camera to look at the given bounding box.
    pub fn look_at_box(&mut self, min: DVec3, max: DVec3) {
        let center = (min + max) * 0.5;
        let size = (max - min).length().max(1e-6);
        let extents = max - min;

        self.target = center;
        self.position = center + DVec3::new(0.0, 0.0, size * 1.5);
        self.near = size * 0.001;
        self.far = size * 100.0;

        let half_height = extents.y.max(extents.x / self.aspect_ratio()) * 0.6;
        self.ortho_scale = half_height.max(0.1);
    }

    /// Sets the projection mode.
    pub fn set_projection_mode(&mut self, mode: ProjectionMode) {
        self.projection_mode = mode;
    }

    /// Sets the orthographic scale.
    pub fn set_ortho_scale(&mut self, scale: f64) {
        self.ortho_scale = scale.max(0.01);
    }

    /// Sets the field of view in radians.
    pub fn set_fov(&mut self, fov: f64) {
        self.fov = fov.clamp(0.1, std::f64::consts::PI - 0.1);
    }
}

impl ViewTransform for Camera {
    /// Maps to pixels with the origin at the lower-left corner; `z` is NDC depth.
    fn world_to_display(&self, world: DVec3) -> DVec3 {
        let ndc = self.view_projection_matrix().project_point3(world);
        DVec3::new(
            (ndc.x + 1.0) * 0.5 * self.viewport_size.x,
            (ndc.y + 1.0) * 0.5 * self.viewport_size.y,
            ndc.z,
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
