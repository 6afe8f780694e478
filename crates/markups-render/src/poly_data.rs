//! Points connected by poly lines.

use glam::DVec3;

/// Point positions and the poly lines that connect them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolyData {
    points: Vec<DVec3>,
    lines: Vec<Vec<usize>>,
}

impl PolyData {
    /// Creates empty poly data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a single open poly line through the points in order.
    pub fn from_polyline(points: Vec<DVec3>) -> Self {
        let mut poly = Self::new();
        poly.set_polyline(points);
        poly
    }

    /// Replaces the contents with a single open poly line.
    ///
    /// Fewer than two points produce no line cell.
    pub fn set_polyline(&mut self, points: Vec<DVec3>) {
        self.lines.clear();
        if points.len() >= 2 {
            self.lines.push((0..points.len()).collect());
        }
        self.points = points;
    }

    /// Removes all points and lines.
    pub fn reset(&mut self) {
        self.points.clear();
        self.lines.clear();
    }

    /// Returns the points.
    #[must_use]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Returns the line cells as point index lists.
    #[must_use]
    pub fn lines(&self) -> &[Vec<usize>] {
        &self.lines
    }

    /// Returns the number of points.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns true if there are no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over every line segment as a pair of (first point index, endpoints).
    pub fn segments(&self) -> impl Iterator<Item = (usize, DVec3, DVec3)> + '_ {
        self.lines.iter().flat_map(move |line| {
            line.windows(2)
                .map(move |pair| (pair[0], self.points[pair[0]], self.points[pair[1]]))
        })
    }

    /// Returns the axis-aligned bounding box of the points.
    #[must_use]
    pub fn bounds(&self) -> Option<(DVec3, DVec3)> {
        bounds_of(self.points.iter().copied())
    }
}

/// Returns the axis-aligned bounding box of a point set, or `None` if it is empty.
pub fn bounds_of(points: impl IntoIterator<Item = DVec3>) -> Option<(DVec3, DVec3)> {
    points.into_iter().fold(None, |acc, p| match acc {
        None => Some((p, p)),
        Some((min, max)) => Some((min.min(p), max.max(p))),
    })
}

/// Joins two optional bounding boxes.
#[must_use]
pub fn union_bounds(a: Option<(DVec3, DVec3)>, b: Option<(DVec3, DVec3)>) -> Option<(DVec3, DVec3)> {
    match (a, b) {
        (Some((amin, amax)), Some((bmin, bmax))) => Some((amin.min(bmin), amax.max(bmax))),
        (a, None) => a,
        (None, b) => b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyline_connectivity() {
        let poly = PolyData::from_polyline(vec![DVec3::ZERO, DVec3::X, DVec3::Y]);
        assert_eq!(poly.num_points(), 3);
        assert_eq!(poly.lines(), &[vec![0, 1, 2]]);

        let segments: Vec<_> = poly.segments().collect();
        assert_eq!(segments, vec![(0, DVec3::ZERO, DVec3::X), (1, DVec3::X, DVec3::Y)]);
    }

    #[test]
    fn test_single_point_has_no_line() {
        let poly = PolyData::from_polyline(vec![DVec3::ONE]);
        assert!(poly.lines().is_empty());
        assert_eq!(poly.segments().count(), 0);
        assert_eq!(poly.bounds(), Some((DVec3::ONE, DVec3::ONE)));
    }

    #[test]
    fn test_bounds_and_union() {
        let poly = PolyData::from_polyline(vec![DVec3::new(-1.0, 2.0, 0.0), DVec3::new(3.0, -4.0, 1.0)]);
        let bounds = poly.bounds().unwrap();
        assert_eq!(bounds, (DVec3::new(-1.0, -4.0, 0.0), DVec3::new(3.0, 2.0, 1.0)));

        let joined = union_bounds(Some(bounds), Some((DVec3::splat(5.0), DVec3::splat(6.0)))).unwrap();
        assert_eq!(joined, (DVec3::new(-1.0, -4.0, 0.0), DVec3::splat(6.0)));
        assert_eq!(union_bounds(None, None), None);
    }

    #[test]
    fn test_reset() {
        let mut poly = PolyData::from_polyline(vec![DVec3::ZERO, DVec3::X]);
        poly.reset();
        assert!(poly.is_empty());
        assert!(poly.bounds().is_none());
    }
}
