//! Display node: per-markup style, visibility and interaction state.

use std::collections::HashSet;

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// The part of a markup that is under the cursor or being manipulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ComponentType {
    /// Nothing.
    #[default]
    None,
    /// A single control point.
    ControlPoint,
    /// The line (or arc) connecting control points.
    Line,
}

/// Style and visibility of one markup across the views that show it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayNode {
    visibility: bool,
    text_visibility: bool,
    /// Views this markup is restricted to; empty means every view.
    view_ids: HashSet<String>,
    active_component_type: ComponentType,
    active_component_index: Option<usize>,

    color: DVec3,
    selected_color: DVec3,
    active_color: DVec3,
    opacity: f64,
    text_scale: f64,
    glyph_scale: f64,
}

impl Default for DisplayNode {
    fn default() -> Self {
        Self {
            visibility: true,
            text_visibility: true,
            view_ids: HashSet::new(),
            active_component_type: ComponentType::None,
            active_component_index: None,
            color: DVec3::new(0.4, 1.0, 1.0),
            selected_color: DVec3::new(1.0, 0.5, 0.5),
            active_color: DVec3::new(0.4, 1.0, 0.0),
            opacity: 1.0,
            text_scale: 3.0,
            glyph_scale: 3.0,
        }
    }
}

impl DisplayNode {
    /// Creates a display node with default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the markup is shown at all.
    #[must_use]
    pub fn visibility(&self) -> bool {
        self.visibility
    }

    /// Shows or hides the markup.
    pub fn set_visibility(&mut self, visibility: bool) -> &mut Self {
        self.visibility = visibility;
        self
    }

    /// Returns whether labels are shown.
    #[must_use]
    pub fn text_visibility(&self) -> bool {
        self.text_visibility
    }

    /// Shows or hides labels.
    pub fn set_text_visibility(&mut self, visibility: bool) -> &mut Self {
        self.text_visibility = visibility;
        self
    }

    /// Returns whether the markup should be displayed in the given view.
    #[must_use]
    pub fn is_displayable_in_view(&self, view_id: &str) -> bool {
        self.view_ids.is_empty() || self.view_ids.contains(view_id)
    }

    /// Restricts display to a view. May be called for several views.
    pub fn add_view_id(&mut self, view_id: impl Into<String>) -> &mut Self {
        self.view_ids.insert(view_id.into());
        self
    }

    /// Removes all view restrictions.
    pub fn clear_view_ids(&mut self) {
        self.view_ids.clear();
    }

    /// Returns the active component type.
    #[must_use]
    pub fn active_component_type(&self) -> ComponentType {
        self.active_component_type
    }

    /// Returns the active component index, if any.
    #[must_use]
    pub fn active_component_index(&self) -> Option<usize> {
        self.active_component_index
    }

    /// Sets the active component.
    pub fn set_active_component(&mut self, component_type: ComponentType, index: Option<usize>) -> &mut Self {
        self.active_component_type = component_type;
        self.active_component_index = index;
        self
    }

    /// Returns the unselected color.
    #[must_use]
    pub fn color(&self) -> DVec3 {
        self.color
    }

    /// Sets the unselected color.
    pub fn set_color(&mut self, color: DVec3) -> &mut Self {
        self.color = color;
        self
    }

    /// Returns the selected color.
    #[must_use]
    pub fn selected_color(&self) -> DVec3 {
        self.selected_color
    }

    /// Sets the selected color.
    pub fn set_selected_color(&mut self, color: DVec3) -> &mut Self {
        self.selected_color = color;
        self
    }

    /// Returns the color used while a component is active.
    #[must_use]
    pub fn active_color(&self) -> DVec3 {
        self.active_color
    }

    /// Sets the active color.
    pub fn set_active_color(&mut self, color: DVec3) -> &mut Self {
        self.active_color = color;
        self
    }

    /// Returns the opacity in `[0, 1]`.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Sets the opacity, clamped to `[0, 1]`.
    pub fn set_opacity(&mut self, opacity: f64) -> &mut Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Returns the label text scale.
    #[must_use]
    pub fn text_scale(&self) -> f64 {
        self.text_scale
    }

    /// Sets the label text scale.
    pub fn set_text_scale(&mut self, scale: f64) -> &mut Self {
        self.text_scale = scale;
        self
    }

    /// Returns the control point glyph scale.
    #[must_use]
    pub fn glyph_scale(&self) -> f64 {
        self.glyph_scale
    }

    /// Sets the control point glyph scale.
    pub fn set_glyph_scale(&mut self, scale: f64) -> &mut Self {
        self.glyph_scale = scale;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_displayable_in_view() {
        let mut display = DisplayNode::new();
        assert!(display.is_displayable_in_view("View1"));

        display.add_view_id("View2");
        assert!(!display.is_displayable_in_view("View1"));
        assert!(display.is_displayable_in_view("View2"));

        display.clear_view_ids();
        assert!(display.is_displayable_in_view("View1"));
    }

    #[test]
    fn test_opacity_clamped() {
        let mut display = DisplayNode::new();
        display.set_opacity(1.5);
        assert_eq!(display.opacity(), 1.0);
        display.set_opacity(-0.2);
        assert_eq!(display.opacity(), 0.0);
    }

    #[test]
    fn test_active_component() {
        let mut display = DisplayNode::new();
        assert_eq!(display.active_component_type(), ComponentType::None);
        display.set_active_component(ComponentType::Line, Some(1));
        assert_eq!(display.active_component_type(), ComponentType::Line);
        assert_eq!(display.active_component_index(), Some(1));
    }
}
