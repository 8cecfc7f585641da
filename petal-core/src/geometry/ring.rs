use serde::{Deserialize, Serialize};

use crate::error::RingError;
use crate::geometry::r2::R2;

/// Ordered ring of control vertices.
///
/// All index arithmetic wraps modulo the vertex count, so any `usize` is a
/// valid index. The count is always odd and at least 3: the radius formulas
/// split the ring into two half-counts that must differ by exactly one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexRing {
    vertices: Vec<R2<f64>>,
}

impl VertexRing {
    pub fn new(vertices: Vec<R2<f64>>) -> Result<Self, RingError> {
        if vertices.len() < 3 {
            return Err(RingError::TooFewVertices(vertices.len()));
        }
        if vertices.len() % 2 == 0 {
            return Err(RingError::EvenVertexCount(vertices.len()));
        }
        Ok(VertexRing { vertices })
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Wrapping accessor: `get(i)` and `get(i + n)` are the same vertex.
    pub fn get(&self, i: usize) -> R2<f64> {
        self.vertices[i % self.vertices.len()]
    }

    /// Distance between the vertices at two wrapping indices.
    pub fn dist(&self, i: usize, j: usize) -> f64 {
        self.get(i).dist(&self.get(j))
    }

    pub fn vertices(&self) -> &[R2<f64>] {
        &self.vertices
    }

    /// Arithmetic mean of all vertices.
    pub fn centroid(&self) -> R2<f64> {
        let sum = self
            .vertices
            .iter()
            .fold(R2 { x: 0., y: 0. }, |acc, &v| acc + v);
        sum / self.vertices.len() as f64
    }

    /// Copy of the ring with the vertex at wrapping index `i` replaced, e.g.
    /// the candidate state for a proposed move.
    pub fn with_vertex(&self, i: usize, p: R2<f64>) -> VertexRing {
        let mut vertices = self.vertices.clone();
        let n = vertices.len();
        vertices[i % n] = p;
        VertexRing { vertices }
    }

    /// The two half-counts `(⌊n/2⌋, ⌈n/2⌉)`.
    pub fn half_counts(&self) -> (usize, usize) {
        let n = self.vertices.len();
        (n / 2, n / 2 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pentagon() -> VertexRing {
        VertexRing::new(vec![
            R2 { x: 600., y: 380. },
            R2 { x: 470., y: 590. },
            R2 { x: 210., y: 520. },
            R2 { x: 190., y: 260. },
            R2 { x: 430., y: 190. },
        ])
        .unwrap()
    }

    #[test]
    fn construction_rules() {
        assert_eq!(
            VertexRing::new(vec![R2 { x: 0., y: 0. }]),
            Err(RingError::TooFewVertices(1))
        );
        let square = vec![
            R2 { x: 0., y: 0. },
            R2 { x: 1., y: 0. },
            R2 { x: 1., y: 1. },
            R2 { x: 0., y: 1. },
        ];
        assert_eq!(VertexRing::new(square), Err(RingError::EvenVertexCount(4)));
    }

    #[test]
    fn wrapping_accessor() {
        let ring = pentagon();
        assert_eq!(ring.get(7), ring.get(2));
        assert_eq!(ring.get(5), ring.get(0));
        assert_relative_eq!(ring.dist(4, 6), ring.dist(4, 1));
    }

    #[test]
    fn centroid_is_the_mean() {
        let ring = pentagon();
        let c = ring.centroid();
        assert_relative_eq!(c.x, 380.);
        assert_relative_eq!(c.y, 388.);
    }

    #[test]
    fn with_vertex_wraps() {
        let ring = pentagon();
        let moved = ring.with_vertex(5, R2 { x: 1., y: 2. });
        assert_eq!(moved.get(0), R2 { x: 1., y: 2. });
        assert_eq!(moved.get(1), ring.get(1));
    }

    #[test]
    fn half_counts_differ_by_one() {
        assert_eq!(pentagon().half_counts(), (2, 3));
        let seven = VertexRing::new(
            (0..7).map(|i| R2 { x: i as f64, y: (i * i) as f64 }).collect(),
        )
        .unwrap();
        assert_eq!(seven.half_counts(), (3, 4));
    }
}
