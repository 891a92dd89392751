//! Shared configuration library for Hearth.
//!
//! Configuration is assembled from stock defaults, an optional TOML file and
//! environment overrides (with an optional `.env` file loaded first). The
//! result is validated by a small set of guard rails that either reject the
//! configuration or attach warnings for the caller to log.

/// Defaults and environment variable names
pub mod constants;
/// Layered configuration loading
pub mod loader;
/// Resolved and raw configuration types
pub mod models;
/// Environment lookup helpers
pub mod util;
/// Guard rails and warnings
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::sources::FileConfig;
pub use models::{
    CarouselSettings, Config, ConfigMetadata, DataConfig, DataSource,
    GridSettings, SiteSettings,
};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
