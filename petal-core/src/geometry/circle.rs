use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geometry::r2::R2;

/// A circle identified by center and radius.
///
/// Radii may be zero or negative: such a circle contains nothing and excludes
/// everything, which is how degenerate per-vertex radii behave downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub c: R2<f64>,
    pub r: f64,
}

impl Circle {
    pub fn new(c: R2<f64>, r: f64) -> Self {
        Circle { c, r }
    }

    /// Strictly inside; points on the boundary are not contained.
    pub fn contains(&self, p: &R2<f64>) -> bool {
        self.c.dist(p) < self.r
    }

    /// Strictly outside; points on the boundary are not excluded.
    pub fn excludes(&self, p: &R2<f64>) -> bool {
        self.c.dist(p) > self.r
    }

    /// Intersection point of two overlapping circles, taking the solution on
    /// the negative branch of the radical term.
    ///
    /// For large circles around adjacent vertices of a roughly circular ring
    /// this branch lands on the crossing across the ring from the pair, the
    /// anchor the cusp between their lobes is carved around.
    pub fn outer_intersection(&self, o: &Circle) -> Result<R2<f64>, GeometryError> {
        let d = o.c - self.c;
        let rr = d.x * d.x + d.y * d.y;
        if rr == 0. {
            return Err(GeometryError::ConcentricCircles { c: self.c });
        }
        let dr2 = self.r * self.r - o.r * o.r;
        let disc = 4. * rr * o.r * o.r - (dr2 - rr) * (dr2 - rr);
        if disc < 0. {
            return Err(GeometryError::DisjointCircles { c1: self.c, c2: o.c });
        }
        let sqrt = disc.sqrt();
        Ok(R2 {
            x: (self.c.x + o.c.x + (d.x * dr2 - d.y * sqrt) / rr) / 2.,
            y: (self.c.y + o.c.y + (d.y * dr2 + d.x * sqrt) / rr) / 2.,
        })
    }

    /// Touch point of two circles assumed tangent: the intersection equation
    /// with the radical term dropped. Exact only when the center distance
    /// matches the radii; otherwise the result is an approximate point, not
    /// an error.
    pub fn tangency_point(&self, o: &Circle) -> Result<R2<f64>, GeometryError> {
        let d = o.c - self.c;
        let rr = d.x * d.x + d.y * d.y;
        if rr == 0. {
            return Err(GeometryError::ConcentricCircles { c: self.c });
        }
        let dr2 = self.r * self.r - o.r * o.r;
        Ok(R2 {
            x: (self.c.x + o.c.x + d.x * dr2 / rr) / 2.,
            y: (self.c.y + o.c.y + d.y * dr2 / rr) / 2.,
        })
    }
}

impl Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C({:.3}, {:.3}, {:.3})", self.c.x, self.c.y, self.r)
    }
}
