use serde::{Deserialize, Serialize};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    /// `[data]` table.
    #[serde(default)]
    pub data: FileDataConfig,
    /// `[carousel]` table.
    #[serde(default)]
    pub carousel: FileCarouselConfig,
    /// `[grid]` table.
    #[serde(default)]
    pub grid: FileGridConfig,
    /// `[site]` table.
    #[serde(default)]
    pub site: FileSiteConfig,
}

/// Where listings come from.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileDataConfig {
    /// URL or filesystem path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// HTTP timeout; 0 disables it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_timeout_secs: Option<u64>,
}

/// Featured carousel behaviour.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCarouselConfig {
    /// Milliseconds each slide stays up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoplay_interval_ms: Option<u64>,
    /// Minimum swipe travel in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swipe_threshold: Option<f32>,
    /// Most slides in the carousel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_slide_limit: Option<usize>,
}

/// Card grids.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileGridConfig {
    /// Cards in the home page featured strip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_card_limit: Option<usize>,
}

/// Site layout.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileSiteConfig {
    /// Detail page linked from cards and slides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_page: Option<String>,
}
