mod point;
pub use point::Point;
mod vertex;
pub use vertex::Vertex;
