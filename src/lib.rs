pub mod algorithms;
pub mod analysis;
pub mod config;
pub mod data;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod pipeline;
pub mod report;

pub use algorithms::*;
pub use data::*;
pub use error::CoverError;
pub use fetch::*;
pub use pipeline::*;
pub use report::*;

pub type Result<T> = anyhow::Result<T>;
