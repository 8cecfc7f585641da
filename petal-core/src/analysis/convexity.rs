use serde::{Deserialize, Serialize};

use crate::geometry::r2::R2;
use crate::geometry::ring::VertexRing;

/// Outcome of a proposed vertex move. `warn` is set whenever the move breaks
/// the star shape, whether or not it was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveVerdict {
    pub accepted: bool,
    pub warn: bool,
}

/// Twice the signed area of triangle (a, b, p): positive when p lies to the
/// left of a→b.
fn orient(a: R2<f64>, b: R2<f64>, p: R2<f64>) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Whether p and q fall on the same side of the line through a and b.
/// A point exactly on the line matches either side.
fn same_side(p: R2<f64>, q: R2<f64>, a: R2<f64>, b: R2<f64>) -> bool {
    orient(a, b, p) * orient(a, b, q) >= 0.
}

/// Test a candidate ring (with the vertex at `moved` already displaced)
/// against the star-shape constraint: the moved vertex must stay with the
/// centroid relative to the chords two steps away on either side, and across
/// the chord joining its immediate neighbors. Triangles pass trivially.
pub fn check_move(candidate: &VertexRing, moved: usize, allow_non_convex: bool) -> MoveVerdict {
    let n = candidate.num_vertices();
    if n <= 3 {
        return MoveVerdict { accepted: true, warn: false };
    }
    let p = candidate.get(moved);
    let centroid = candidate.centroid();
    let next1 = candidate.get(moved + 1);
    let next2 = candidate.get(moved + 2);
    let prev1 = candidate.get(moved + n - 1);
    let prev2 = candidate.get(moved + n - 2);
    let admissible = same_side(p, centroid, prev1, prev2)
        && same_side(p, centroid, next1, next2)
        && !same_side(p, centroid, next1, prev1);
    if admissible {
        MoveVerdict { accepted: true, warn: false }
    } else {
        MoveVerdict { accepted: allow_non_convex, warn: true }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    fn regular_pentagon() -> VertexRing {
        VertexRing::new(
            (0..5)
                .map(|i| {
                    let theta = 2. * PI * i as f64 / 5.;
                    R2 { x: 100. * theta.cos(), y: 100. * theta.sin() }
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn triangles_always_accept() {
        let ring = VertexRing::new(vec![
            R2 { x: 0., y: 0. },
            R2 { x: 10., y: 0. },
            R2 { x: 5., y: 8. },
        ])
        .unwrap();
        let candidate = ring.with_vertex(0, R2 { x: 500., y: 500. });
        assert_eq!(
            check_move(&candidate, 0, false),
            MoveVerdict { accepted: true, warn: false }
        );
        assert_eq!(
            check_move(&candidate, 0, true),
            MoveVerdict { accepted: true, warn: false }
        );
    }

    #[test]
    fn outward_nudge_accepts() {
        let candidate = regular_pentagon().with_vertex(0, R2 { x: 105., y: 0. });
        assert_eq!(
            check_move(&candidate, 0, false),
            MoveVerdict { accepted: true, warn: false }
        );
    }

    #[test]
    fn crossing_the_centroid_rejects() {
        let candidate = regular_pentagon().with_vertex(0, R2 { x: -150., y: 0. });
        assert_eq!(
            check_move(&candidate, 0, false),
            MoveVerdict { accepted: false, warn: true }
        );
        assert_eq!(
            check_move(&candidate, 0, true),
            MoveVerdict { accepted: true, warn: true }
        );
    }

    #[test]
    fn small_nudges_accept_anywhere_on_the_ring() {
        let ring = VertexRing::new(vec![
            R2 { x: 600., y: 380. },
            R2 { x: 470., y: 590. },
            R2 { x: 210., y: 520. },
            R2 { x: 190., y: 260. },
            R2 { x: 430., y: 190. },
        ])
        .unwrap();
        for i in 0..5 {
            let v = ring.get(i);
            let candidate = ring.with_vertex(i, R2 { x: v.x + 3., y: v.y - 2. });
            assert_eq!(
                check_move(&candidate, i, false),
                MoveVerdict { accepted: true, warn: false },
                "vertex {i}"
            );
        }
    }
}
