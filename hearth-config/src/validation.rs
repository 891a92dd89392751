use thiserror::Error;

use crate::constants::MIN_COMFORTABLE_AUTOPLAY_MS;
use crate::models::Config;

/// Configuration values that are rejected outright.
#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    /// Autoplay interval of zero.
    #[error("carousel autoplay interval must be greater than zero")]
    ZeroAutoplayInterval,
    /// A count limit of zero.
    #[error("{field} must be at least 1")]
    ZeroLimit {
        /// Dotted name of the offending setting.
        field: &'static str,
    },
    /// Negative or non-finite swipe threshold.
    #[error("swipe threshold must be a finite, non-negative number")]
    InvalidSwipeThreshold,
    /// Blank detail page path.
    #[error("detail page must not be empty")]
    EmptyDetailPage,
}

/// A finding that does not stop the load.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// What is off.
    pub message: String,
    /// How to fix it, when there is an obvious fix.
    pub hint: Option<String>,
}

/// Warnings collected while loading.
#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    /// In the order they were found.
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    /// Add a warning without a hint.
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    /// Add a warning with a hint.
    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    /// Whether there are no warnings.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of warnings.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Append every warning of `other`.
    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

/// Check a resolved configuration. Hard violations are errors; questionable but usable values come back as warnings.
pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    let interval_ms = config.carousel.autoplay_interval.as_millis();
    if interval_ms == 0 {
        return Err(ConfigGuardRailError::ZeroAutoplayInterval);
    }
    if interval_ms < u128::from(MIN_COMFORTABLE_AUTOPLAY_MS) {
        warnings.push_with_hint(
            format!("carousel autoplay interval of {interval_ms}ms is very short"),
            "slides will rotate before visitors can read them; 5000ms is the stock value",
        );
    }

    if config.carousel.featured_slide_limit == 0 {
        return Err(ConfigGuardRailError::ZeroLimit {
            field: "carousel.featured_slide_limit",
        });
    }
    if config.grid.featured_card_limit == 0 {
        return Err(ConfigGuardRailError::ZeroLimit {
            field: "grid.featured_card_limit",
        });
    }

    let threshold = config.carousel.swipe_threshold;
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(ConfigGuardRailError::InvalidSwipeThreshold);
    }
    if threshold == 0.0 {
        warnings.push_with_hint(
            "swipe threshold is 0; any horizontal jitter will change slides",
            "the stock threshold is 50",
        );
    }

    if config.site.detail_page.trim().is_empty() {
        return Err(ConfigGuardRailError::EmptyDetailPage);
    }

    if config.data.fetch_timeout.is_zero() {
        warnings.push("fetch timeout is 0; listing requests will not time out");
    }

    Ok(warnings)
}
