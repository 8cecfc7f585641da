use crate::geometry::r2::R2;

/// Rejected vertex sets.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RingError {
    #[error("a vertex ring needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("a vertex ring needs an odd vertex count, got {0}")]
    EvenVertexCount(usize),
}

/// The vertex configuration has drifted past what the padding scheme
/// supports, leaving a pair solver without a real solution.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("circles centered at {c1} and {c2} are too far apart to intersect")]
    DisjointCircles { c1: R2<f64>, c2: R2<f64> },

    #[error("coincident circle centers at {c}")]
    ConcentricCircles { c: R2<f64> },
}
