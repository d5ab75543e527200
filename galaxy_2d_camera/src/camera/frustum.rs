/// Frustum2D — the four side planes of the view volume, in world space.
///
/// A 2D camera only ever draws on the z = 0 world plane, so each clipping
/// plane reduces to a line. Each line is stored as a DVec3 (A, B, D) where:
/// - (A, B) is the inward-pointing unit normal
/// - D is the signed distance
/// - A point P is inside if `A*P.x + B*P.y + D >= 0` for all lines
///
/// Near/far are not tested: every 2D point shares the same depth.

use glam::{DMat4, DVec2, DVec3};
use super::rect::Rect;

/// Result of a 3-way frustum/rect classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    /// Rect is entirely outside the frustum
    Outside,
    /// Rect is entirely inside the frustum
    Inside,
    /// Rect partially overlaps the frustum
    Partial,
}

/// Plane indices. TOP is NDC y = -1, the top screen edge (Y down).
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_TOP: usize = 2;
pub const PLANE_BOTTOM: usize = 3;

/// Four world-space culling lines: left, right, top, bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum2D {
    pub planes: [DVec3; 4],
}

impl Frustum2D {
    /// Extract the side planes from a view-projection matrix.
    ///
    /// Gribb & Hartmann, evaluated at world z = 0 (the z column drops out).
    pub fn from_view_projection(vp: &DMat4) -> Self {
        let m = vp.to_cols_array_2d();

        // Row i restricted to (x, y, w): (m[0][i], m[1][i], m[3][i])
        let row = |i: usize| DVec3::new(m[0][i], m[1][i], m[3][i]);
        let (row0, row1, row3) = (row(0), row(1), row(3));

        let mut planes = [
            row3 + row0, // left:   ndc.x >= -1
            row3 - row0, // right:  ndc.x <= 1
            row3 + row1, // top:    ndc.y >= -1
            row3 - row1, // bottom: ndc.y <= 1
        ];

        for plane in &mut planes {
            let length = DVec2::new(plane.x, plane.y).length();
            if length > 0.0 {
                *plane /= length;
            }
        }

        Self { planes }
    }

    /// Signed distance from a world point to one plane (positive = inside).
    ///
    /// `plane` is one of `PLANE_LEFT`, `PLANE_RIGHT`, `PLANE_TOP`, `PLANE_BOTTOM`.
    ///
    /// # Panics
    ///
    /// Panics if `plane >= 4`.
    pub fn distance(&self, plane: usize, point: DVec2) -> f64 {
        let p = self.planes[plane];
        p.x * point.x + p.y * point.y + p.z
    }

    pub fn contains_point(&self, point: DVec2) -> bool {
        (0..self.planes.len()).all(|i| self.distance(i, point) >= 0.0)
    }

    /// Classify a world rect against the frustum.
    ///
    /// Positive/negative vertex test: the corner furthest along each
    /// normal decides `Outside`, the nearest one decides `Partial`.
    pub fn classify_rect(&self, rect: &Rect) -> FrustumTest {
        let mut all_inside = true;

        for plane in &self.planes {
            let p_vertex = DVec2::new(
                if plane.x >= 0.0 { rect.max.x } else { rect.min.x },
                if plane.y >= 0.0 { rect.max.y } else { rect.min.y },
            );
            if plane.x * p_vertex.x + plane.y * p_vertex.y + plane.z < 0.0 {
                return FrustumTest::Outside;
            }

            let n_vertex = DVec2::new(
                if plane.x >= 0.0 { rect.min.x } else { rect.max.x },
                if plane.y >= 0.0 { rect.min.y } else { rect.max.y },
            );
            if plane.x * n_vertex.x + plane.y * n_vertex.y + plane.z < 0.0 {
                all_inside = false;
            }
        }

        if all_inside { FrustumTest::Inside } else { FrustumTest::Partial }
    }

    /// Conservative overlap test (never culls a visible rect).
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        self.classify_rect(rect) != FrustumTest::Outside
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
