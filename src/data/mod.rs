pub mod loader;
pub mod pixel_grid;

pub use loader::*;
pub use pixel_grid::*;
