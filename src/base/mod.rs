//! Base geographic value objects and their builders.

mod bound;
mod coordinate;

pub use bound::{Bound, BoundBuilder, CoordinateArgs};
pub use coordinate::{Coordinate, CoordinateBuilder};
