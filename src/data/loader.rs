use crate::data::PixelGrid;
use crate::error::CoverError;

/// Decode an encoded image payload of any supported format.
///
/// Arbitrary bytes are fine: garbage comes back as `CoverError::Decode`.
pub fn decode_image(bytes: &[u8]) -> Result<PixelGrid, CoverError> {
    let image = image::load_from_memory(bytes)?;
    PixelGrid::from_rgb(image.to_rgb8())
}
