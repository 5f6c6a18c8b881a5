use crate::config::FetchConfig;
use crate::pipeline::Identifier;

const PLACEHOLDER: &str = "{identifier}";

/// URL templates for one archive
#[derive(Debug, Clone)]
pub struct ArchiveUrls {
    image_template: String,
    details_template: String,
    not_found_url: String,
}

impl Default for ArchiveUrls {
    fn default() -> Self {
        Self::from_config(&FetchConfig::default())
    }
}

impl ArchiveUrls {
    pub fn from_config(config: &FetchConfig) -> Self {
        Self {
            image_template: config.image_url_template.clone(),
            details_template: config.details_url_template.clone(),
            not_found_url: config.not_found_url.clone(),
        }
    }

    /// Thumbnail location, also used as the report's `<img src>`
    pub fn image_url(&self, identifier: &Identifier) -> String {
        self.image_template.replace(PLACEHOLDER, identifier.as_str())
    }

    pub fn details_url(&self, identifier: &Identifier) -> String {
        self.details_template.replace(PLACEHOLDER, identifier.as_str())
    }

    /// True when a response resolved to the "no cover" sentinel image
    pub fn is_placeholder(&self, resolved_url: &str) -> bool {
        resolved_url == self.not_found_url
    }
}
