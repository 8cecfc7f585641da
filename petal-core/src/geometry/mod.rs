pub mod circle;
pub mod r2;
pub mod rect;
pub mod ring;
