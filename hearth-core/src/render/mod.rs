//! HTML fragments for listing cards, grids, the featured carousel and the
//! property gallery.
//!
//! Every fragment is plain markup. Interactive elements carry a
//! `data-action` attribute naming the slide action they trigger; the wiring
//! itself lives in [`crate::slides::InputBindings`].

/// Property cards
pub mod card;
/// Featured carousel
pub mod carousel;
/// Property gallery and lightbox
pub mod gallery;
/// Card grids
pub mod grid;
/// Generated stand-in images
pub mod placeholder;

pub use card::{property_card, status_class};
pub use carousel::featured_carousel;
pub use gallery::{lightbox, property_gallery};
pub use grid::{GridOptions, render_listings};
pub use placeholder::{PLACEHOLDER_IMAGE, Placeholder};
