use crate::config::FetchConfig;
use crate::error::CoverError;
use crate::fetch::ArchiveUrls;
use crate::pipeline::{Fetched, Identifier, ImageSource};
use std::io::Read;

/// Blocking HTTP thumbnail source.
///
/// One request per call, redirects followed by the agent's default policy,
/// no retries. Each response is read to completion and dropped before the
/// call returns.
pub struct HttpImageSource {
    agent: ureq::Agent,
    urls: ArchiveUrls,
    max_image_bytes: u64,
}

impl HttpImageSource {
    pub fn new(config: &FetchConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(&config.user_agent)
            .build();

        Self {
            agent,
            urls: ArchiveUrls::from_config(config),
            max_image_bytes: config.max_image_bytes,
        }
    }

    pub fn urls(&self) -> &ArchiveUrls {
        &self.urls
    }
}

impl ImageSource for HttpImageSource {
    fn fetch(&self, identifier: &Identifier) -> Result<Fetched, CoverError> {
        let url = self.urls.image_url(identifier);
        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(|error| CoverError::request(&url, error))?;

        if self.urls.is_placeholder(response.get_url()) {
            tracing::debug!(identifier = %identifier, "Resolved to placeholder image");
            return Ok(Fetched::Placeholder);
        }

        let bytes = read_limited(response.into_reader(), self.max_image_bytes)?;
        tracing::trace!(identifier = %identifier, bytes = bytes.len(), "Fetched image");
        Ok(Fetched::Image(bytes))
    }
}

fn read_limited(reader: impl Read, limit: u64) -> Result<Vec<u8>, CoverError> {
    let mut bytes = Vec::new();
    reader.take(limit.saturating_add(1)).read_to_end(&mut bytes)?;
    if bytes.len() as u64 > limit {
        return Err(CoverError::TooLarge { limit });
    }
    Ok(bytes)
}
