use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::notch;
use crate::analysis::radii::{self, RadiusTable};
use crate::error::GeometryError;
use crate::geometry::circle::Circle;
use crate::geometry::r2::R2;
use crate::geometry::rect::Rect;
use crate::geometry::ring::VertexRing;

/// The full derived geometry for one frame. Every field is a pure function
/// of the ring; the bundle is recomputed wholesale and carries no state
/// between frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flower {
    pub ring: VertexRing,
    pub padding: f64,
    pub radii: RadiusTable,
    pub rect: Rect,
    pub intersections: Vec<R2<f64>>,
    pub tangencies: Vec<[R2<f64>; 2]>,
    pub notches: Vec<Circle>,
}

impl Flower {
    pub fn compute(ring: &VertexRing) -> Result<Flower, GeometryError> {
        let padding = radii::padding(ring);
        let radii = RadiusTable::compute(ring, padding);
        let rect = Rect::enclosing(ring, &radii.large);
        let intersections = notch::intersections(ring, &radii)?;
        let tangencies = notch::tangencies(ring, &radii)?;
        let notches = notch::notches(ring, &intersections, &tangencies);
        debug!(
            "flower over {} vertices: rect {:?}, large {:?}",
            ring.num_vertices(),
            rect,
            radii.large,
        );
        Ok(Flower {
            ring: ring.clone(),
            padding,
            radii,
            rect,
            intersections,
            tangencies,
            notches,
        })
    }

    /// Whether a sample point belongs to the filled shape.
    ///
    /// Small circles win first: a point inside any of them is out regardless
    /// of the lobes. Survivors must then avoid every notch circle and sit
    /// inside every large circle. All comparisons are strict, so boundary
    /// points are never knocked out by the rule they sit on.
    pub fn is_inside(&self, p: R2<f64>) -> bool {
        let vertices = self.ring.vertices();
        for (v, &small) in vertices.iter().zip(&self.radii.small) {
            if v.dist(&p) < small {
                return false;
            }
        }
        for (i, v) in vertices.iter().enumerate() {
            if self.notches[i].contains(&p) {
                return false;
            }
            if v.dist(&p) > self.radii.large[i] {
                return false;
            }
        }
        true
    }

    /// Evaluate membership at every integer pixel of the bounding rect.
    pub fn rasterize(&self) -> Mask {
        let width = self.rect.width.max(0);
        let height = self.rect.height.max(0);
        let mut data = Vec::with_capacity((width * height) as usize);
        for py in self.rect.y..self.rect.y + height {
            for px in self.rect.x..self.rect.x + width {
                data.push(self.is_inside(R2 { x: px as f64, y: py as f64 }));
            }
        }
        Mask { rect: self.rect, data }
    }
}

/// Row-major binary pixel coverage of the bounding rect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mask {
    pub rect: Rect,
    pub data: Vec<bool>,
}

impl Mask {
    /// Membership at absolute pixel coordinates; anything outside the rect is
    /// outside the shape.
    pub fn get(&self, x: i64, y: i64) -> bool {
        let w = self.rect.width.max(0);
        let h = self.rect.height.max(0);
        let dx = x - self.rect.x;
        let dy = y - self.rect.y;
        if dx < 0 || dy < 0 || dx >= w || dy >= h {
            return false;
        }
        self.data[(dy * w + dx) as usize]
    }

    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&inside| inside).count()
    }
}
