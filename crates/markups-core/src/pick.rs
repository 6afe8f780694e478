//! Interaction (picking) results.

use glam::DVec3;

use crate::display::ComponentType;

/// A markup component found under the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionHit {
    /// The kind of component that was hit.
    pub component_type: ComponentType,

    /// Index of the control point, or of the line segment's first point.
    pub component_index: usize,

    /// Squared display-space distance from the cursor to the component.
    pub closest_distance2: f64,

    /// World position of the hit on the component.
    pub world_position: DVec3,
}

impl InteractionHit {
    /// Creates a new hit.
    pub fn new(
        component_type: ComponentType,
        component_index: usize,
        closest_distance2: f64,
        world_position: DVec3,
    ) -> Self {
        Self {
            component_type,
            component_index,
            closest_distance2,
            world_position,
        }
    }

    /// Keeps whichever of two optional hits is closer.
    #[must_use]
    pub fn closer(a: Option<Self>, b: Option<Self>) -> Option<Self> {
        match (a, b) {
            (Some(a), Some(b)) => Some(if b.closest_distance2 < a.closest_distance2 { b } else { a }),
            (a, None) => a,
            (None, b) => b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closer_prefers_smaller_distance() {
        let a = InteractionHit::new(ComponentType::ControlPoint, 0, 4.0, DVec3::ZERO);
        let b = InteractionHit::new(ComponentType::Line, 1, 1.0, DVec3::X);
        assert_eq!(InteractionHit::closer(Some(a), Some(b)), Some(b));
        assert_eq!(InteractionHit::closer(Some(a), None), Some(a));
        assert_eq!(InteractionHit::closer(None, None), None);
    }

    #[test]
    fn test_closer_keeps_first_on_tie() {
        let a = InteractionHit::new(ComponentType::ControlPoint, 0, 1.0, DVec3::ZERO);
        let b = InteractionHit::new(ComponentType::Line, 1, 1.0, DVec3::X);
        assert_eq!(InteractionHit::closer(Some(a), Some(b)), Some(a));
    }
}
