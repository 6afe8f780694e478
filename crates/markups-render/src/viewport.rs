//! A view that records draw submissions.

use glam::DVec3;
use markups_core::{DrawItem, RenderContext, RenderPass, ViewContext, ViewTransform};

use crate::camera::Camera;

/// A 3-D view: a camera plus the draw items submitted this frame.
///
/// The host renderer drains the submissions with [`Viewport::take_submissions`]
/// after all representations have rendered.
#[derive(Debug, Clone)]
pub struct Viewport {
    id: String,
    camera: Camera,
    submissions: Vec<(RenderPass, DrawItem)>,
}

impl Viewport {
    /// Creates a viewport.
    pub fn new(id: impl Into<String>, camera: Camera) -> Self {
        Self {
            id: id.into(),
            camera,
            submissions: Vec::new(),
        }
    }

    /// Returns the camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Returns the camera for modification.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Returns the submissions recorded so far.
    #[must_use]
    pub fn submissions(&self) -> &[(RenderPass, DrawItem)] {
        &self.submissions
    }

    /// Removes and returns all recorded submissions.
    pub fn take_submissions(&mut self) -> Vec<(RenderPass, DrawItem)> {
        std::mem::take(&mut self.submissions)
    }

    /// Counts submissions in a pass.
    #[must_use]
    pub fn count(&self, pass: RenderPass) -> usize {
        self.submissions.iter().filter(|(p, _)| *p == pass).count()
    }
}

impl ViewTransform for Viewport {
    fn world_to_display(&self, world: DVec3) -> DVec3 {
        self.camera.world_to_display(world)
    }
}

impl ViewContext for Viewport {
    fn view_id(&self) -> &str {
        &self.id
    }
}

impl RenderContext for Viewport {
    fn submit(&mut self, pass: RenderPass, item: DrawItem) {
        log::trace!("view '{}': {:?} submission", self.id, pass);
        self.submissions.push((pass, item));
    }
}
