//! Presentation focused snapshot of the types surface.
//! Prefer importing from this module in rendering and widget code.

pub use super::filter_types::{FilterCriteria, FilterField};
pub use super::ids::ListingId;
pub use super::listing::{
    Address, Listing, ListingStatus, ListingsDocument, PropertyType,
};
