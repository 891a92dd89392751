/// Raw TOML shapes
pub mod sources;

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

/// Fully resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listing source.
    pub data: DataConfig,
    /// Featured carousel.
    pub carousel: CarouselSettings,
    /// Card grids.
    pub grid: GridSettings,
    /// Site layout.
    pub site: SiteSettings,
    /// Provenance of the values above.
    pub metadata: ConfigMetadata,
}

/// Where the listing collection comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Fetched over HTTP(S).
    Url(Url),
    /// Read from the local filesystem.
    Path(PathBuf),
}

impl DataSource {
    /// Human-readable form for logs.
    pub fn describe(&self) -> String {
        match self {
            DataSource::Url(url) => url.to_string(),
            DataSource::Path(path) => path.display().to_string(),
        }
    }
}

/// Resolved `[data]` section.
#[derive(Debug, Clone)]
pub struct DataConfig {
    /// Where listings come from.
    pub source: DataSource,
    /// Zero means no timeout.
    pub fetch_timeout: Duration,
}

/// Resolved `[carousel]` section.
#[derive(Debug, Clone)]
pub struct CarouselSettings {
    /// Time each slide stays up.
    pub autoplay_interval: Duration,
    /// Minimum swipe travel in pixels.
    pub swipe_threshold: f32,
    /// Most slides in the carousel.
    pub featured_slide_limit: usize,
}

/// Resolved `[grid]` section.
#[derive(Debug, Clone)]
pub struct GridSettings {
    /// Cards in the home page featured strip.
    pub featured_card_limit: usize,
}

/// Resolved `[site]` section.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    /// Detail page linked from cards and slides.
    pub detail_page: String,
}

/// How the configuration was assembled.
#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    /// Config file that was read, if any.
    pub config_path: Option<PathBuf>,
    /// Whether a `.env` file was found.
    pub env_file_loaded: bool,
}
