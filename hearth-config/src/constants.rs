//! Stock defaults and environment variable names.

/// Listings document read when nothing else is configured.
pub const DEFAULT_LISTINGS_SOURCE: &str = "data/listings.json";
/// Request timeout for HTTP listing sources.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
/// Featured carousel dwell time.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 5_000;
/// Minimum swipe travel in pixels.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;
/// Most slides in the featured carousel.
pub const DEFAULT_FEATURED_SLIDE_LIMIT: usize = 5;
/// Cards in the home page featured strip.
pub const DEFAULT_FEATURED_CARD_LIMIT: usize = 3;
/// Page that shows a single listing.
pub const DEFAULT_DETAIL_PAGE: &str = "property.html";

/// Autoplay intervals below this are allowed but flagged.
pub const MIN_COMFORTABLE_AUTOPLAY_MS: u64 = 1_000;

/// Path of the TOML config file.
pub const ENV_CONFIG_PATH: &str = "HEARTH_CONFIG";
/// Overrides `data.source`.
pub const ENV_LISTINGS_SOURCE: &str = "HEARTH_LISTINGS_SOURCE";
/// Overrides `data.fetch_timeout_secs`.
pub const ENV_FETCH_TIMEOUT_SECS: &str = "HEARTH_FETCH_TIMEOUT_SECS";
/// Overrides `carousel.autoplay_interval_ms`.
pub const ENV_AUTOPLAY_MS: &str = "HEARTH_AUTOPLAY_MS";
/// Overrides `site.detail_page`.
pub const ENV_DETAIL_PAGE: &str = "HEARTH_DETAIL_PAGE";
