pub mod driver;
pub mod input;
pub mod progress;
pub mod traits;
pub mod types;

pub use driver::*;
pub use input::*;
pub use progress::*;
pub use traits::*;
pub use types::*;
