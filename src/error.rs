use thiserror::Error;

/// Everything that can keep a single item from producing a usable image.
///
/// All variants end up as the same "error reading" row in the report; the
/// distinction only shows up on the diagnostic side channel.
#[derive(Debug, Error)]
pub enum CoverError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("image body exceeds {limit} bytes")]
    TooLarge { limit: u64 },

    #[error("failed to read response body: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("decoded image is empty ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("classification failed: {0}")]
    Classify(String),
}

impl CoverError {
    pub fn request(url: &str, source: ureq::Error) -> Self {
        Self::Request {
            url: url.to_string(),
            source: Box::new(source),
        }
    }
}
