//! # Hearth Core
//!
//! Presentation logic for the Hearth listings site: loading the listing
//! collection, filtering it, rendering listing cards, and driving the three
//! slide widgets (featured carousel, property gallery and lightbox).
//!
//! ## Architecture
//!
//! - [`store`]: one-shot listing loader with an empty-collection fallback
//! - [`filter`]: conjunctive listing filters and the listings-page controller
//! - [`render`]: HTML fragments for cards, grids, the carousel and the gallery
//! - [`slides`]: the cyclic slide controller, its scheduler and input table
//! - [`widgets`]: wiring of the three slide widgets onto a page
//! - [`page`]: page initialization against an abstract [`surface`]
//!
//! Nothing here touches a browser. Pages render into a [`surface::Surface`]
//! and slide widgets report every transition through a
//! [`slides::SlideRenderer`], so the whole crate runs under plain unit tests
//! with a simulated clock.

#![cfg_attr(docsrs, feature(doc_cfg))]

/// Error types and error handling utilities
pub mod error;

/// Price and number formatting
pub mod format;

/// Listing filters and the listings-page filter controller
pub mod filter;

/// Detail page links
pub mod navigation;

/// Page initialization and event routing
pub mod page;

/// HTML fragment rendering
pub mod render;

/// Cyclic slide controllers, scheduling and input bindings
pub mod slides;

/// Listing store and listing sources
pub mod store;

/// Display surface abstraction
pub mod surface;

/// Slide widget wiring
pub mod widgets;

pub use error::{CoreError, Result};
pub use hearth_model::prelude::*;
