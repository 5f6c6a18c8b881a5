use image::GrayImage;

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by N), 0 for an empty slice
pub fn std_deviation(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = mean(values);
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Mean intensity of every row, top to bottom
pub fn row_means(image: &GrayImage) -> Vec<f64> {
    let width = image.width() as usize;
    if width == 0 {
        return vec![0.0; image.height() as usize];
    }
    image
        .as_raw()
        .chunks_exact(width)
        .map(|row| row.iter().map(|&v| v as f64).sum::<f64>() / width as f64)
        .collect()
}
