pub mod html;
pub mod json;
pub mod title_pages;

pub use html::*;
pub use json::*;
pub use title_pages::*;
