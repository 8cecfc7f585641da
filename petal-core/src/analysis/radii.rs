use log::debug;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::geometry::ring::VertexRing;

/// Sum of `offset` vertex-pair distances `(start+j, start+j+offset)`, the
/// sliding half-ring window behind both the padding and the radii.
fn span_sum(ring: &VertexRing, start: usize, offset: usize) -> f64 {
    (0..offset)
        .map(|j| ring.dist(start + j, start + j + offset))
        .sum()
}

/// Global shrink term: the minimum over all start vertices of the
/// opposite-pair distance sum. The minimum (rather than the mean) keeps every
/// vertex's circles overlapping its neighbors', at the cost of over-padding
/// the rest of the ring.
pub fn padding(ring: &VertexRing) -> f64 {
    let (m, _) = ring.half_counts();
    let padding = (0..ring.num_vertices())
        .map(|i| span_sum(ring, i, m))
        .min_by_key(|&sum| OrderedFloat(sum))
        .unwrap_or(f64::INFINITY);
    debug!("padding: {padding}");
    padding
}

/// Per-vertex radii: `small` excludes a region around each vertex, `large`
/// bounds its lobe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiusTable {
    pub small: Vec<f64>,
    pub large: Vec<f64>,
}

impl RadiusTable {
    /// `small[i]` sums the window one step past the vertex over the short
    /// half-count; `large[i]` sums the window at the vertex over the long
    /// half-count. The extra term keeps the two circle families different
    /// enough to cross visibly. Rounded to whole units; `small` is clamped to
    /// zero, `large` is left as computed even when degenerate.
    pub fn compute(ring: &VertexRing, padding: f64) -> RadiusTable {
        let n = ring.num_vertices();
        let (m_short, m_long) = ring.half_counts();
        let mut small = Vec::with_capacity(n);
        let mut large = Vec::with_capacity(n);
        for i in 0..n {
            small.push((span_sum(ring, i + 1, m_short) - padding).round().max(0.));
            large.push((span_sum(ring, i, m_long) - padding).round());
        }
        RadiusTable { small, large }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::geometry::r2::R2;

    fn regular(n: usize, radius: f64) -> VertexRing {
        VertexRing::new(
            (0..n)
                .map(|i| {
                    let theta = 2. * PI * i as f64 / n as f64;
                    R2 { x: radius * theta.cos(), y: radius * theta.sin() }
                })
                .collect(),
        )
        .unwrap()
    }

    fn irregular() -> VertexRing {
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
    fn regular_pentagon_values() {
        let ring = regular(5, 100.);
        let padding = padding(&ring);
        assert_relative_eq!(padding, 380.4226065180614, epsilon = 1e-9);
        let radii = RadiusTable::compute(&ring, padding);
        assert_eq!(radii.small, vec![0.; 5]);
        assert_eq!(radii.large, vec![190.; 5]);
    }

    #[test]
    fn regular_heptagon_values() {
        let ring = regular(7, 100.);
        let padding = padding(&ring);
        assert_relative_eq!(padding, 584.9567473090941, epsilon = 1e-9);
        let radii = RadiusTable::compute(&ring, padding);
        assert_eq!(radii.small, vec![0.; 7]);
        assert_eq!(radii.large, vec![195.; 7]);
    }

    #[test]
    fn irregular_pentagon_values() {
        let ring = irregular();
        let padding = padding(&ring);
        assert_relative_eq!(padding, 816.3620119468488, epsilon = 1e-9);
        let radii = RadiusTable::compute(&ring, padding);
        assert_eq!(radii.small, vec![13., 7., 13., 0., 31.]);
        assert_eq!(radii.large, vec![427., 433., 427., 440., 409.]);
    }

    #[test]
    fn padding_is_a_lower_bound() {
        let ring = irregular();
        let n = ring.num_vertices();
        let m = n / 2;
        let p = padding(&ring);
        for i in 0..n {
            let sum: f64 = (0..m).map(|j| ring.dist(i + j, i + j + m)).sum();
            assert!(p <= sum + 1e-9);
        }
    }

    #[test]
    fn small_radii_never_negative() {
        for ring in [regular(5, 100.), regular(9, 40.), irregular()] {
            let radii = RadiusTable::compute(&ring, padding(&ring));
            assert!(radii.small.iter().all(|&r| r >= 0.));
        }
    }
}
