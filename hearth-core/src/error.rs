use hearth_model::ModelError;
use thiserror::Error;

use crate::slides::WidgetKey;

/// Errors raised by the core library.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Transport failure while fetching listings.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Listing source answered with a non-success status.
    #[error("listing source {url} responded with HTTP {status}")]
    HttpStatus {
        /// Requested URL.
        url: String,
        /// Status received.
        status: reqwest::StatusCode,
    },

    /// Reading a local listing file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The listings document is not valid JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid model value, such as a slide target out of range.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// No widget is registered under the key.
    #[error("no widget registered for {0:?}")]
    UnknownWidget(WidgetKey),
}

/// Result alias for the core library.
pub type Result<T> = std::result::Result<T, CoreError>;
