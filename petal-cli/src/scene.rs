//! Vertex-ring generation for the CLI.

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use petal_core::{RingError, VertexRing, R2};

/// `n` vertices on a circle of radius `size / 3` around the canvas center,
/// rounded to whole pixels, each displaced by up to ±`jitter` per axis. The
/// default jitter shrinks quadratically with the vertex count so dense rings
/// stay roughly circular.
pub fn jittered_ring(
    n: usize,
    size: f64,
    jitter: Option<f64>,
    seed: u64,
) -> Result<VertexRing, RingError> {
    let scale = (size / 3.).round();
    let jitter = jitter.unwrap_or(5. * scale / (n * n) as f64).abs();
    let center = size / 2.;
    let mut rng = StdRng::seed_from_u64(seed);
    let vertices = (0..n)
        .map(|i| {
            let theta = 2. * PI * i as f64 / n as f64;
            R2 {
                x: (theta.cos() * scale + center + rng.gen_range(-jitter..=jitter)).round(),
                y: (theta.sin() * scale + center + rng.gen_range(-jitter..=jitter)).round(),
            }
        })
        .collect();
    VertexRing::new(vertices)
}
