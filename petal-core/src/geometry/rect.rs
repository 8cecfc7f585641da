use serde::{Deserialize, Serialize};

use crate::geometry::ring::VertexRing;

/// Integer pixel rectangle; `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    /// Smallest integer rectangle containing the circle of radius `large[i]`
    /// around every vertex, snapped outward to whole pixels.
    pub fn enclosing(ring: &VertexRing, large: &[f64]) -> Rect {
        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for (v, &r) in ring.vertices().iter().zip(large) {
            min_x = min_x.min(v.x - r);
            max_x = max_x.max(v.x + r);
            min_y = min_y.min(v.y - r);
            max_y = max_y.max(v.y + r);
        }
        let x = min_x.floor() as i64;
        let y = min_y.floor() as i64;
        Rect {
            x,
            y,
            width: max_x.ceil() as i64 - x,
            height: max_y.ceil() as i64 - y,
        }
    }

    pub fn right(&self) -> i64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i64 {
        self.y + self.height
    }
}
