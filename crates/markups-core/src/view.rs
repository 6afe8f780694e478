//! World-to-display projection seam.

use glam::DVec3;

/// Maps world-space positions into display (pixel) coordinates.
///
/// Display coordinates have their origin at the lower-left corner of the
/// viewport; `z` carries the normalized depth. Cameras and viewports implement
/// this so geometry code never needs to know how the projection is built.
pub trait ViewTransform {
    /// Projects a world-space point to display coordinates.
    fn world_to_display(&self, world: DVec3) -> DVec3;
}

/// A view that markups are displayed in.
pub trait ViewContext: ViewTransform {
    /// Returns the identifier of the view, matched against display node view lists.
    fn view_id(&self) -> &str;
}
