#[cfg_attr(not(test), allow(unused_imports))]
#[macro_use]
extern crate approx;

pub mod analysis;
pub mod error;
pub mod geometry;

pub use geometry::circle;
pub use geometry::r2;
pub use geometry::rect;
pub use geometry::ring;

pub use analysis::convexity;
pub use analysis::flower;
pub use analysis::notch;
pub use analysis::radii;

// Re-export key types for external use
pub use analysis::convexity::{check_move, MoveVerdict};
pub use analysis::flower::{Flower, Mask};
pub use analysis::radii::RadiusTable;
pub use error::{GeometryError, RingError};
pub use geometry::circle::Circle;
pub use geometry::r2::R2;
pub use geometry::rect::Rect;
pub use geometry::ring::VertexRing;
