pub mod http;
pub mod urls;

pub use http::*;
pub use urls::*;
