pub mod color_variance;
pub mod edge_variance;

pub use color_variance::*;
pub use edge_variance::*;

use crate::config::ClassifierConfig;
use crate::pipeline::UsefulnessClassifier;

/// Classifier selected at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    /// Row-wise variation of Canny edge density
    Edge,
    /// Per-channel colour variation over the cover center
    Color,
}

impl Strategy {
    pub fn build(self, config: &ClassifierConfig) -> Box<dyn UsefulnessClassifier> {
        match self {
            Strategy::Edge => Box::new(EdgeVarianceClassifier::with_config(config.edge.clone())),
            Strategy::Color => Box::new(ColorVarianceClassifier::with_config(config.color.clone())),
        }
    }
}
