//! Markup data model: ordered control points in world space.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{MarkupsError, Result};

/// Markup kind string for angle measurements.
pub const ANGLE_MARKUP_KIND: &str = "Angle";

/// Read access to a markup's control points and flags.
///
/// Representations only ever read through this trait; the owning application
/// decides how control points are stored and edited.
pub trait MarkupsNode {
    /// Returns the kind of markup (e.g. `"Angle"`), used to pick a representation.
    fn markup_kind(&self) -> &str;

    /// Returns the number of control points.
    fn number_of_control_points(&self) -> usize;

    /// Returns the world position of a control point.
    fn control_point_position_world(&self, index: usize) -> Option<DVec3>;

    /// Returns whether the markup is locked against interaction.
    fn locked(&self) -> bool;

    /// Returns whether a control point is visible.
    fn control_point_visible(&self, index: usize) -> bool;

    /// Returns whether a control point is selected.
    fn control_point_selected(&self, index: usize) -> bool;

    /// Returns the label shown next to a control point.
    fn control_point_label(&self, _index: usize) -> Option<&str> {
        None
    }

    /// Returns the world positions of all control points in order.
    fn control_point_positions_world(&self) -> Vec<DVec3> {
        (0..self.number_of_control_points())
            .filter_map(|i| self.control_point_position_world(i))
            .collect()
    }

    /// Returns true if every control point is visible.
    fn all_control_points_visible(&self) -> bool {
        (0..self.number_of_control_points()).all(|i| self.control_point_visible(i))
    }

    /// Returns true if every control point is selected.
    fn all_control_points_selected(&self) -> bool {
        (0..self.number_of_control_points()).all(|i| self.control_point_selected(i))
    }
}

/// A single user-placed point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Position in world space.
    pub position_world: DVec3,
    /// Label drawn next to the point.
    pub label: String,
    /// Whether the point is drawn.
    pub visible: bool,
    /// Whether the point is selected.
    pub selected: bool,
}

impl ControlPoint {
    /// Creates a visible, selected control point.
    pub fn new(position_world: DVec3) -> Self {
        Self {
            position_world,
            label: String::new(),
            visible: true,
            selected: true,
        }
    }
}

/// In-memory markup implementing [`MarkupsNode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Markup {
    kind: String,
    control_points: Vec<ControlPoint>,
    locked: bool,
}

impl Markup {
    /// Creates an empty markup of the given kind.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            control_points: Vec::new(),
            locked: false,
        }
    }

    /// Creates an angle markup from ray-1 end, vertex and ray-2 end.
    pub fn angle(ray1_end: DVec3, vertex: DVec3, ray2_end: DVec3) -> Self {
        let mut markup = Self::new(ANGLE_MARKUP_KIND);
        markup.add_control_point(ray1_end);
        markup.add_control_point(vertex);
        markup.add_control_point(ray2_end);
        markup
    }

    /// Appends a control point and returns its index.
    pub fn add_control_point(&mut self, position_world: DVec3) -> usize {
        self.control_points.push(ControlPoint::new(position_world));
        self.control_points.len() - 1
    }

    /// Removes a control point.
    pub fn remove_control_point(&mut self, index: usize) -> Result<ControlPoint> {
        self.check_index(index)?;
        Ok(self.control_points.remove(index))
    }

    /// Moves a control point.
    pub fn set_control_point_position_world(&mut self, index: usize, position_world: DVec3) -> Result<()> {
        self.control_point_mut(index)?.position_world = position_world;
        Ok(())
    }

    /// Returns a mutable control point.
    pub fn control_point_mut(&mut self, index: usize) -> Result<&mut ControlPoint> {
        self.check_index(index)?;
        Ok(&mut self.control_points[index])
    }

    /// Returns all control points.
    #[must_use]
    pub fn control_points(&self) -> &[ControlPoint] {
        &self.control_points
    }

    /// Locks or unlocks the markup.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Selects or deselects every control point.
    pub fn set_all_selected(&mut self, selected: bool) {
        for point in &mut self.control_points {
            point.selected = selected;
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.control_points.len() {
            Ok(())
        } else {
            Err(MarkupsError::ControlPointOutOfRange {
                index,
                count: self.control_points.len(),
            })
        }
    }
}

impl MarkupsNode for Markup {
    fn markup_kind(&self) -> &str {
        &self.kind
    }

    fn number_of_control_points(&self) -> usize {
        self.control_points.len()
    }

    fn control_point_position_world(&self, index: usize) -> Option<DVec3> {
        self.control_points.get(index).map(|p| p.position_world)
    }

    fn locked(&self) -> bool {
        self.locked
    }

    fn control_point_visible(&self, index: usize) -> bool {
        self.control_points.get(index).is_some_and(|p| p.visible)
    }

    fn control_point_selected(&self, index: usize) -> bool {
        self.control_points.get(index).is_some_and(|p| p.selected)
    }

    fn control_point_label(&self, index: usize) -> Option<&str> {
        self.control_points
            .get(index)
            .map(|p| p.label.as_str())
            .filter(|label| !label.is_empty())
    }
}
