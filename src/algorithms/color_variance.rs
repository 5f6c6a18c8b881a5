use crate::analysis::std_deviation;
use crate::config::ColorConfig;
use crate::data::PixelGrid;
use crate::pipeline::{Classification, UsefulnessClassifier};
use crate::Result;
use image::{imageops, RgbImage};

/// Colour-variation heuristic.
///
/// The center of the cover (borders carry barcodes and library stamps) is
/// averaged down to a coarse grid; if no channel varies much across the grid
/// the cover is taken to be plain cloth.
#[derive(Debug, Clone, Default)]
pub struct ColorVarianceClassifier {
    config: ColorConfig,
}

impl ColorVarianceClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ColorConfig) -> Self {
        Self { config }
    }

    /// Center crop followed by an area-averaging downsample to the grid size
    pub fn preprocess(&self, grid: &PixelGrid) -> RgbImage {
        let (width, height) = grid.dimensions();
        let crop_width = scaled_side(width, self.config.keep_fraction);
        let crop_height = scaled_side(height, self.config.keep_fraction);
        let x = (width - crop_width) / 2;
        let y = (height - crop_height) / 2;

        let cropped = imageops::crop_imm(grid.as_rgb(), x, y, crop_width, crop_height).to_image();
        imageops::thumbnail(&cropped, self.config.grid_width, self.config.grid_height)
    }

    /// Per-channel standard deviation, channel values scaled to `human_scale`
    pub fn channel_deviations(&self, cells: &RgbImage) -> [f64; 3] {
        let scale = self.config.human_scale / 255.0;
        let mut channels: [Vec<f64>; 3] = Default::default();
        for pixel in cells.pixels() {
            for (samples, value) in channels.iter_mut().zip(pixel.0) {
                samples.push(value as f64 * scale);
            }
        }
        [
            std_deviation(&channels[0]),
            std_deviation(&channels[1]),
            std_deviation(&channels[2]),
        ]
    }

    /// Not useful only when every channel stays under the threshold
    pub fn decide(&self, deviations: &[f64; 3]) -> bool {
        !deviations.iter().all(|d| *d < self.config.threshold)
    }
}

fn scaled_side(side: u32, fraction: f64) -> u32 {
    ((side as f64 * fraction).round() as u32).clamp(1, side)
}

pub fn format_deviations(deviations: &[f64; 3]) -> Vec<String> {
    deviations.iter().map(|d| format!("{:.2}", d)).collect()
}

impl UsefulnessClassifier for ColorVarianceClassifier {
    fn name(&self) -> &str {
        "color-variance"
    }

    fn classify(&self, grid: &PixelGrid) -> Result<Classification> {
        let cells = self.preprocess(grid);
        let deviations = self.channel_deviations(&cells);
        tracing::trace!(?deviations, "Computed channel deviations");

        Ok(Classification {
            useful: self.decide(&deviations),
            score: deviations.iter().cloned().fold(0.0, f64::max),
            diagnostics: format_deviations(&deviations),
        })
    }

    fn diagnostics_header(&self) -> Option<&str> {
        Some("Std Deviation (R, G, B)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_crop_keeps_center_fraction() {
        assert_eq!(scaled_side(180, 0.6), 108);
        assert_eq!(scaled_side(5, 0.6), 3);
        assert_eq!(scaled_side(1, 0.6), 1);
    }

    #[test]
    fn test_preprocess_ignores_border_stamps() {
        // Bright border, flat center: only the center survives the crop.
        let image = RgbImage::from_fn(100, 100, |x, y| {
            if x < 15 || x >= 85 || y < 15 || y >= 85 {
                Rgb([255, 255, 255])
            } else {
                Rgb([90, 40, 20])
            }
        });
        let grid = PixelGrid::from_rgb(image).unwrap();
        let classifier = ColorVarianceClassifier::new();

        let cells = classifier.preprocess(&grid);
        assert_eq!(cells.dimensions(), (16, 16));
        let deviations = classifier.channel_deviations(&cells);
        assert!(deviations.iter().all(|d| *d < 1.0), "got {:?}", deviations);
        assert!(!classifier.classify(&grid).unwrap().useful);
    }

    #[test]
    fn test_channel_deviations_on_grid() {
        let cells = RgbImage::from_fn(16, 16, |x, _| {
            if x % 2 == 0 {
                Rgb([95, 45, 205])
            } else {
                Rgb([105, 55, 215])
            }
        });
        let classifier = ColorVarianceClassifier::new();
        let deviations = classifier.channel_deviations(&cells);
        assert_eq!(deviations, [5.0, 5.0, 5.0]);
        assert!(!classifier.decide(&deviations));
        assert_eq!(format_deviations(&deviations), vec!["5.00", "5.00", "5.00"]);
    }

    #[test]
    fn test_one_varied_channel_is_enough() {
        let classifier = ColorVarianceClassifier::new();
        assert!(classifier.decide(&[1.0, 15.0, 2.0]));
        assert!(!classifier.decide(&[14.99, 14.99, 14.99]));
    }
}
