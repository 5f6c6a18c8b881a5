use crate::logging::LoggingConfig;
use crate::Result;
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub classifier: ClassifierConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Thumbnail URL, `{identifier}` is substituted
    pub image_url_template: String,
    /// Item detail page URL, `{identifier}` is substituted
    pub details_url_template: String,
    /// Resolved URL the archive redirects to when an item has no cover
    pub not_found_url: String,
    pub user_agent: String,
    pub max_image_bytes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClassifierConfig {
    pub edge: EdgeConfig,
    pub color: ColorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeConfig {
    pub canny_low: f32,
    pub canny_high: f32,
    /// Minimum edge level for a useful cover (inclusive)
    pub threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Fraction of each side kept by the center crop
    pub keep_fraction: f64,
    pub grid_width: u32,
    pub grid_height: u32,
    /// Scale applied to normalized channel values, 255 gives 0-255
    pub human_scale: f64,
    /// Channel deviations below this on every channel mean a cloth cover
    pub threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub title: String,
    pub title_page_ids_file: PathBuf,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            image_url_template: "https://archive.org/services/img/{identifier}".to_string(),
            details_url_template: "https://archive.org/details/{identifier}".to_string(),
            not_found_url: "https://archive.org/images/notfound.png".to_string(),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            max_image_bytes: 10 * 1024 * 1024,
        }
    }
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            canny_low: 100.0,
            canny_high: 200.0,
            threshold: 13.0,
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            keep_fraction: 0.6,
            grid_width: 16,
            grid_height: 16,
            human_scale: 255.0,
            threshold: 15.0,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Cover Analyzer".to_string(),
            title_page_ids_file: PathBuf::from("title_page_ids.txt"),
        }
    }
}

impl Config {
    /// Parse a TOML or JSON config; JSON is recognised by a leading `{`
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;

        let config = if content.trim_start().starts_with('{') {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        Ok(config)
    }

    /// Write the config in the format named by the file extension
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = match ConfigFormat::from_path(path) {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> std::result::Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !self.fetch.image_url_template.contains("{identifier}") {
            errors.push("fetch.image_url_template must contain {identifier}".to_string());
        }

        if !self.fetch.details_url_template.contains("{identifier}") {
            errors.push("fetch.details_url_template must contain {identifier}".to_string());
        }

        if self.fetch.max_image_bytes == 0 {
            errors.push("fetch.max_image_bytes must be positive".to_string());
        }

        let edge = &self.classifier.edge;
        if edge.canny_low < 0.0 || edge.canny_high < edge.canny_low {
            errors.push("Canny thresholds must satisfy 0 <= canny_low <= canny_high".to_string());
        }

        let color = &self.classifier.color;
        if !(color.keep_fraction > 0.0 && color.keep_fraction <= 1.0) {
            errors.push("classifier.color.keep_fraction must be in (0, 1]".to_string());
        }

        if color.grid_width == 0 || color.grid_height == 0 {
            errors.push("classifier.color grid dimensions must be positive".to_string());
        }

        if color.human_scale <= 0.0 {
            errors.push("classifier.color.human_scale must be positive".to_string());
        }

        if let Err(message) = self.logging.validate() {
            errors.push(message);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// `.json` files are JSON, anything else is TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

fn load_validated(path: &Path) -> Result<Config> {
    let config = Config::load_from_file(path)?;
    if let Err(problems) = config.validate() {
        bail!("invalid configuration: {}", problems.join("; "));
    }
    Ok(config)
}

/// Load `config_path` if given. Any problem is reported on stderr and the
/// fixed defaults are used instead; logging is not up yet at this point.
pub fn load_config_or_default(config_path: Option<&Path>) -> Config {
    let Some(path) = config_path else {
        return Config::default();
    };

    match load_validated(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Ignoring config '{}': {:#}", path.display(), e);
            eprintln!("Using default configuration.");
            Config::default()
        }
    }
}
