//! Core data model definitions shared across Hearth crates.
#![allow(missing_docs)]

pub mod error;
pub mod filter_types;
pub mod ids;
pub mod listing;
pub mod prelude;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use filter_types::{FilterCriteria, FilterField, parse_leading_int};
pub use ids::ListingId;
pub use listing::{
    Address, Listing, ListingStatus, ListingsDocument, PropertyType,
};
