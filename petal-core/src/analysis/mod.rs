pub mod convexity;
pub mod flower;
pub mod notch;
pub mod radii;
