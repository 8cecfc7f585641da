use itertools::Itertools;

use crate::analysis::radii::RadiusTable;
use crate::error::GeometryError;
use crate::geometry::circle::Circle;
use crate::geometry::r2::R2;
use crate::geometry::ring::VertexRing;

/// One crossing point per adjacent pair of large circles:
/// `intersections[i]` joins the lobes at vertices `i` and `i + 1`.
pub fn intersections(
    ring: &VertexRing,
    radii: &RadiusTable,
) -> Result<Vec<R2<f64>>, GeometryError> {
    ring.vertices()
        .iter()
        .zip(&radii.large)
        .circular_tuple_windows()
        .map(|((&c1, &r1), (&c2, &r2))| {
            Circle::new(c1, r1).outer_intersection(&Circle::new(c2, r2))
        })
        .collect()
}

/// Touch points between each vertex's small circle and the large circles half
/// a ring away: `[i][0]` for the short half-count offset, `[i][1]` for the
/// long one.
pub fn tangencies(
    ring: &VertexRing,
    radii: &RadiusTable,
) -> Result<Vec<[R2<f64>; 2]>, GeometryError> {
    let n = ring.num_vertices();
    let (m_short, m_long) = ring.half_counts();
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let small = Circle::new(ring.get(i), radii.small[i]);
        let [a, b] = [m_short, m_long].map(|offset| {
            let j = (i + offset) % n;
            small.tangency_point(&Circle::new(ring.get(j), radii.large[j]))
        });
        points.push([a?, b?]);
    }
    Ok(points)
}

/// Clipping circles that carve the concave cusp between adjacent lobes:
/// centered on each crossing point, sized by its distance to the short-offset
/// touch point of the vertex half a ring on.
pub fn notches(
    ring: &VertexRing,
    intersections: &[R2<f64>],
    tangencies: &[[R2<f64>; 2]],
) -> Vec<Circle> {
    let n = ring.num_vertices();
    let (_, m_long) = ring.half_counts();
    (0..n)
        .map(|i| {
            let t = tangencies[(i + m_long) % n][0];
            Circle::new(intersections[i], intersections[i].dist(&t))
        })
        .collect()
}
