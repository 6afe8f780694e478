//! Tube parameters for drawing poly lines with thickness.

use glam::DVec3;

use crate::poly_data::PolyData;

/// Sweeps poly lines into tubes of a given radius.
///
/// The renderer does the sweeping; this carries the parameters and the
/// resulting extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeFilter {
    radius: f64,
    number_of_sides: u32,
}

impl Default for TubeFilter {
    fn default() -> Self {
        Self {
            radius: 1.0,
            number_of_sides: 20,
        }
    }
}

impl TubeFilter {
    /// Creates a tube filter.
    pub fn new(radius: f64, number_of_sides: u32) -> Self {
        Self {
            radius: radius.max(0.0),
            number_of_sides: number_of_sides.max(3),
        }
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Sets the radius (negative values clamp to zero).
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.max(0.0);
    }

    /// Returns the number of sides.
    #[must_use]
    pub fn number_of_sides(&self) -> u32 {
        self.number_of_sides
    }

    /// Sets the number of sides (at least three).
    pub fn set_number_of_sides(&mut self, sides: u32) {
        self.number_of_sides = sides.max(3);
    }

    /// Returns the bounding box of the swept tubes.
    #[must_use]
    pub fn bounds(&self, input: &PolyData) -> Option<(DVec3, DVec3)> {
        if input.lines().is_empty() {
            return None;
        }
        input
            .bounds()
            .map(|(min, max)| (min - DVec3::splat(self.radius), max + DVec3::splat(self.radius)))
    }
}
