use crate::analysis::{row_means, std_deviation};
use crate::config::EdgeConfig;
use crate::data::PixelGrid;
use crate::pipeline::{Classification, UsefulnessClassifier};
use crate::Result;
use image::GrayImage;
use imageproc::edges::canny;

/// Edge-density heuristic for thumbnail-sized covers.
///
/// Real artwork has rows of very different edge density (title blocks,
/// illustration outlines) while cloth and blank covers are nearly uniform
/// from top to bottom. The edge level is the standard deviation of the
/// per-row mean of a Canny edge map.
#[derive(Debug, Clone, Default)]
pub struct EdgeVarianceClassifier {
    config: EdgeConfig,
}

impl EdgeVarianceClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EdgeConfig) -> Self {
        Self { config }
    }

    pub fn edge_map(&self, grid: &PixelGrid) -> GrayImage {
        canny(&grid.to_luma(), self.config.canny_low, self.config.canny_high)
    }

    pub fn edge_level(&self, grid: &PixelGrid) -> f64 {
        std_deviation(&row_means(&self.edge_map(grid)))
    }

    /// Threshold is inclusive: exactly `threshold` counts as useful
    pub fn decide(&self, edge_level: f64) -> bool {
        edge_level >= self.config.threshold
    }
}

impl UsefulnessClassifier for EdgeVarianceClassifier {
    fn name(&self) -> &str {
        "edge-variance"
    }

    fn classify(&self, grid: &PixelGrid) -> Result<Classification> {
        let edge_level = self.edge_level(grid);
        tracing::trace!(edge_level, "Computed edge level");

        Ok(Classification {
            useful: self.decide(edge_level),
            score: edge_level,
            diagnostics: Vec::new(),
        })
    }

    fn records_title_pages(&self) -> bool {
        true
    }
}
