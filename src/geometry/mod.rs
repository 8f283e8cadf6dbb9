mod color;
mod facet;
mod hull;
mod path;
mod segment;

pub use color::{Color, ColorRegistry};
pub use facet::{split_hull, Bounds, Facet};
pub use hull::ConvexHull;
pub use path::{Path, Winding};
pub use segment::Segment;
