/// Rect — axis-aligned rectangle in 2D world space.

use glam::DVec2;

/// Axis-aligned world rectangle. Edges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Minimum corner (x, y)
    pub min: DVec2,
    /// Maximum corner (x, y)
    pub max: DVec2,
}

impl Rect {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: DVec2, size: DVec2) -> Self {
        let half = size * 0.5;
        Self { min: center - half, max: center + half }
    }

    /// Smallest rect enclosing all points. An empty iterator yields an
    /// inverted rect (`min = +inf`, `max = -inf`) that contains nothing.
    pub fn from_points<I: IntoIterator<Item = DVec2>>(points: I) -> Self {
        points.into_iter().fold(
            Self { min: DVec2::splat(f64::INFINITY), max: DVec2::splat(f64::NEG_INFINITY) },
            |rect, point| Self { min: rect.min.min(point), max: rect.max.max(point) },
        )
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    pub fn contains_point(&self, point: DVec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x
            && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Test if this rect fully contains another rect.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.min.x >= self.min.x && other.max.x <= self.max.x
            && other.min.y >= self.min.y && other.max.y <= self.max.y
    }

    /// Test if the two rects overlap (touching edges count).
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x
            && self.min.y <= other.max.y && self.max.y >= other.min.y
    }
}

#[cfg(test)]
#[path = "rect_tests.rs"]
mod tests;
