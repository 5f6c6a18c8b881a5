use crate::data::PixelGrid;
use crate::error::CoverError;
use crate::pipeline::types::{Classification, Identifier};
use crate::Result;

/// Cover usefulness heuristic applied to a decoded image
pub trait UsefulnessClassifier {
    /// Returns the name of the strategy
    fn name(&self) -> &str;

    /// Classify one image. Must be a pure function of the grid.
    fn classify(&self, grid: &PixelGrid) -> Result<Classification>;

    /// Header of the extra report column holding diagnostics, if any
    fn diagnostics_header(&self) -> Option<&str> {
        None
    }

    /// Whether NotUseful identifiers go to the title-page list
    fn records_title_pages(&self) -> bool {
        false
    }
}

/// Result of asking the archive for an item's thumbnail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched {
    Image(Vec<u8>),
    /// The request resolved to the archive's "not found" image
    Placeholder,
}

/// Where thumbnails come from
pub trait ImageSource {
    fn fetch(&self, identifier: &Identifier) -> std::result::Result<Fetched, CoverError>;
}
