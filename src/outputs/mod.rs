mod list;
pub use list::List;
mod triangle;
pub use triangle::Triangle;
mod triangulation;
pub use triangulation::Triangulation;
