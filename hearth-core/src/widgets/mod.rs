//! Wiring of the slide widgets onto a page: markup into the surface, a
//! controller and its input bindings into the [`SlideHost`].
//!
//! [`SlideHost`]: crate::slides::SlideHost

/// Featured carousel
pub mod featured;
/// Property gallery and lightbox
pub mod gallery;

pub use featured::{CarouselOptions, featured_bindings, mount_featured_carousel};
pub use gallery::{gallery_bindings, lightbox_bindings, mount_gallery};

use crate::slides::{SlideRenderer, WidgetKey};

/// Creates the renderer for a widget when it is mounted.
pub type RendererFactory<'a> = dyn FnMut(WidgetKey) -> Box<dyn SlideRenderer> + 'a;
