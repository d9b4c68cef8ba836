pub mod geometry;
pub mod intervals;
