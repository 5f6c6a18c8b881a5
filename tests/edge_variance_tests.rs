use cover_analyzer::*;
use image::{Rgb, RgbImage};

fn blank_cover(width: u32, height: u32) -> PixelGrid {
    PixelGrid::from_rgb(RgbImage::from_pixel(width, height, Rgb([96, 32, 28]))).unwrap()
}

/// Gray cover with a band of high-contrast vertical stripes, like a title block
fn banded_cover(width: u32, height: u32, band: std::ops::Range<u32>) -> PixelGrid {
    PixelGrid::from_rgb(RgbImage::from_fn(width, height, |x, y| {
        if band.contains(&y) {
            if x % 16 < 8 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        } else {
            Rgb([128, 128, 128])
        }
    }))
    .unwrap()
}

/// Same stripes on every row: lots of edges, but evenly spread
fn striped_cloth(width: u32, height: u32) -> PixelGrid {
    PixelGrid::from_rgb(RgbImage::from_fn(width, height, |x, _| {
        if x % 16 < 8 {
            Rgb([0, 0, 0])
        } else {
            Rgb([255, 255, 255])
        }
    }))
    .unwrap()
}

#[test]
fn test_blank_cover_is_not_useful() {
    let classifier = EdgeVarianceClassifier::new();
    let result = classifier.classify(&blank_cover(180, 270)).unwrap();

    assert!(!result.useful);
    assert_eq!(result.score, 0.0);
}

#[test]
fn test_title_block_makes_cover_useful() {
    let classifier = EdgeVarianceClassifier::new();
    let result = classifier.classify(&banded_cover(180, 270, 20..100)).unwrap();

    assert!(result.useful, "edge level {} should reach the threshold", result.score);
    assert!(result.score >= 13.0);
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_uniform_texture_is_not_useful() {
    let classifier = EdgeVarianceClassifier::new();
    let grid = striped_cloth(180, 400);

    let edges = classifier.edge_map(&grid);
    assert!(edges.pixels().any(|p| p[0] > 0), "stripes should produce edges");

    let result = classifier.classify(&grid).unwrap();
    assert!(!result.useful, "edge level {} should stay below the threshold", result.score);
}

#[test]
fn test_edge_level_matches_row_statistics() {
    let classifier = EdgeVarianceClassifier::new();
    let grid = banded_cover(120, 160, 40..90);

    let expected = analysis::std_deviation(&analysis::row_means(&classifier.edge_map(&grid)));
    assert_eq!(classifier.edge_level(&grid), expected);
    assert_eq!(classifier.classify(&grid).unwrap().score, expected);
}

#[test]
fn test_classification_is_deterministic() {
    let classifier = EdgeVarianceClassifier::new();
    let grid = banded_cover(180, 270, 150..200);

    let first = classifier.classify(&grid).unwrap();
    let second = classifier.classify(&grid).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_tiny_images_do_not_panic() {
    let classifier = EdgeVarianceClassifier::new();
    for (width, height) in [(2, 2), (3, 9), (9, 3)] {
        let result = classifier.classify(&blank_cover(width, height)).unwrap();
        assert!(!result.useful);
    }
}

/// Gray 100/160 stripes in a band on a 130 background. The raw step (60) gives
/// a Sobel response of 240, above the high threshold, but after the 1.4 sigma
/// pre-blur the peak response is about 137, so no pixel seeds an edge.
#[test]
fn test_moderate_contrast_title_block_yields_zero_edge_level() {
    let grid = PixelGrid::from_rgb(RgbImage::from_fn(180, 270, |x, y| {
        if (20..100).contains(&y) {
            let v = if x % 16 < 8 { 100 } else { 160 };
            Rgb([v, v, v])
        } else {
            Rgb([130, 130, 130])
        }
    }))
    .unwrap();

    let classifier = EdgeVarianceClassifier::new();
    assert!(classifier.edge_map(&grid).pixels().all(|p| p[0] == 0));

    let result = classifier.classify(&grid).unwrap();
    assert_eq!(result.score, 0.0);
    assert!(!result.useful);
}
