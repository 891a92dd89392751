/// Loader errors
pub mod error;

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::constants::*;
use crate::models::sources::FileConfig;
use crate::models::{
    CarouselSettings, Config, ConfigMetadata, DataConfig, DataSource,
    GridSettings, SiteSettings,
};
use crate::util::{non_blank_var, parse_var};
use crate::validation::{ConfigWarnings, apply_guard_rails};

use error::ConfigLoadError;

type EnvLookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Result of a successful load: the configuration plus any non-fatal
/// findings the caller should surface.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    /// The resolved configuration.
    pub config: Config,
    /// Findings to log.
    pub warnings: ConfigWarnings,
}

/// Assembles a [`Config`] from defaults, a TOML file and the environment.
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    load_env_file: bool,
    env: EnvLookup,
}

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("config_path", &self.config_path)
            .field("load_env_file", &self.load_env_file)
            .finish()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader reading the process environment, with `.env` support.
    pub fn new() -> Self {
        Self {
            config_path: None,
            load_env_file: true,
            env: Box::new(|name: &str| std::env::var(name).ok()),
        }
    }

    /// Use an explicit config file instead of `HEARTH_CONFIG`.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Replace the environment with a custom lookup. Disables `.env`
    /// loading, since its values would not be visible through the lookup.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.env = Box::new(lookup);
        self.load_env_file = false;
        self
    }

    /// Skip `.env` loading.
    pub fn without_env_file(mut self) -> Self {
        self.load_env_file = false;
        self
    }

    /// Resolve the configuration and run the guard rails.
    pub fn load(self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = if self.load_env_file {
            match dotenvy::dotenv() {
                Ok(path) => {
                    debug!(path = %path.display(), "loaded env file");
                    true
                }
                Err(err) if err.not_found() => false,
                Err(err) => return Err(err.into()),
            }
        } else {
            false
        };

        let lookup = &self.env;
        let config_path = self
            .config_path
            .clone()
            .or_else(|| non_blank_var(lookup, ENV_CONFIG_PATH).map(PathBuf::from));

        let file = match &config_path {
            Some(path) => read_file_config(path)?,
            None => FileConfig::default(),
        };

        let mut warnings = ConfigWarnings::default();

        let raw_source = non_blank_var(lookup, ENV_LISTINGS_SOURCE)
            .or(file.data.source)
            .unwrap_or_else(|| DEFAULT_LISTINGS_SOURCE.to_string());
        let source = parse_source(&raw_source)?;

        let fetch_timeout_secs = env_or(
            lookup,
            ENV_FETCH_TIMEOUT_SECS,
            file.data.fetch_timeout_secs,
            DEFAULT_FETCH_TIMEOUT_SECS,
            &mut warnings,
        );
        let autoplay_ms = env_or(
            lookup,
            ENV_AUTOPLAY_MS,
            file.carousel.autoplay_interval_ms,
            DEFAULT_AUTOPLAY_INTERVAL_MS,
            &mut warnings,
        );

        let detail_page = non_blank_var(lookup, ENV_DETAIL_PAGE)
            .or(file.site.detail_page)
            .unwrap_or_else(|| DEFAULT_DETAIL_PAGE.to_string());

        let config = Config {
            data: DataConfig {
                source,
                fetch_timeout: Duration::from_secs(fetch_timeout_secs),
            },
            carousel: CarouselSettings {
                autoplay_interval: Duration::from_millis(autoplay_ms),
                swipe_threshold: file
                    .carousel
                    .swipe_threshold
                    .unwrap_or(DEFAULT_SWIPE_THRESHOLD),
                featured_slide_limit: file
                    .carousel
                    .featured_slide_limit
                    .unwrap_or(DEFAULT_FEATURED_SLIDE_LIMIT),
            },
            grid: GridSettings {
                featured_card_limit: file
                    .grid
                    .featured_card_limit
                    .unwrap_or(DEFAULT_FEATURED_CARD_LIMIT),
            },
            site: SiteSettings { detail_page },
            metadata: ConfigMetadata {
                config_path,
                env_file_loaded,
            },
        };

        warnings.extend(apply_guard_rails(&config)?);

        Ok(ConfigLoad { config, warnings })
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| {
        ConfigLoadError::ConfigFileIo {
            path: path.to_path_buf(),
            source,
        }
    })?;
    toml::from_str(&raw).map_err(|source| ConfigLoadError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })
}

/// `http(s)://` sources are URLs, everything else is a filesystem path.
fn parse_source(raw: &str) -> Result<DataSource, ConfigLoadError> {
    let lowered = raw.to_ascii_lowercase();
    if lowered.starts_with("http://") || lowered.starts_with("https://") {
        let url = Url::parse(raw).map_err(|source| {
            ConfigLoadError::InvalidSourceUrl {
                raw: raw.to_string(),
                source,
            }
        })?;
        Ok(DataSource::Url(url))
    } else {
        Ok(DataSource::Path(PathBuf::from(raw)))
    }
}

fn env_or(
    lookup: &EnvLookup,
    name: &str,
    file_value: Option<u64>,
    default: u64,
    warnings: &mut ConfigWarnings,
) -> u64 {
    match parse_var::<_, u64>(lookup, name) {
        Some(Ok(value)) => value,
        Some(Err(raw)) => {
            warnings.push_with_hint(
                format!("{name}='{raw}' is not a whole number; ignoring it"),
                format!("unset {name} or set it to a non-negative integer"),
            );
            file_value.unwrap_or(default)
        }
        None => file_value.unwrap_or(default),
    }
}
