//! Display surface abstraction.
//!
//! A surface is whatever hosts the page: a browser document, a test double,
//! or the static document the CLI writes. Components only ever populate the
//! mount points a surface already declares; an absent mount point turns the
//! component into a no-op.

use std::collections::{BTreeMap, HashMap};

use hearth_model::FilterField;
use tracing::debug;

/// Logical role of a mount point on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MountRole {
    /// Home page rotating carousel.
    FeaturedCarousel,
    /// Home page card strip of featured listings.
    FeaturedListings,
    /// Listings page result count.
    ListingsCount,
    /// Listings page grid.
    AllListings,
    /// Property page inline gallery.
    Gallery,
    /// Full-screen overlay for the property gallery.
    Lightbox,
}

impl MountRole {
    /// Every role, in document order.
    pub fn all() -> &'static [MountRole] {
        use MountRole::*;
        &[
            FeaturedCarousel,
            FeaturedListings,
            ListingsCount,
            AllListings,
            Gallery,
            Lightbox,
        ]
    }

    /// Element id of the mount point on the site's pages.
    pub fn element_id(&self) -> &'static str {
        match self {
            MountRole::FeaturedListings => "featured-listings",
            MountRole::FeaturedCarousel => "featured-carousel-slot",
            MountRole::AllListings => "all-listings",
            MountRole::ListingsCount => "listings-count",
            MountRole::Gallery => "property-gallery",
            MountRole::Lightbox => "lightbox-slot",
        }
    }
}

/// Host page as seen by the presentation layer.
pub trait Surface {
    /// Whether the page declares a mount point for `role`.
    fn has_mount(&self, role: MountRole) -> bool;

    /// Replace the content of the `role` mount point.
    fn mount(&mut self, role: MountRole, content: String);

    /// Whether the page has the filter input for `field`.
    fn has_input(&self, field: FilterField) -> bool;

    /// Current value of the filter input for `field`.
    fn input_value(&self, field: FilterField) -> Option<String>;
}

/// In-memory surface: declared mount points and inputs, with content kept
/// as strings.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    mounts: BTreeMap<MountRole, String>,
    inputs: HashMap<FilterField, String>,
}

impl MemorySurface {
    /// Surface without mount points or inputs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an (empty) mount point.
    pub fn with_mount(mut self, role: MountRole) -> Self {
        self.mounts.entry(role).or_default();
        self
    }

    /// Declare several (empty) mount points.
    pub fn with_mounts(mut self, roles: &[MountRole]) -> Self {
        for role in roles {
            self.mounts.entry(*role).or_default();
        }
        self
    }

    /// Declare a filter input with its initial value.
    pub fn with_input(mut self, field: FilterField, value: impl Into<String>) -> Self {
        self.inputs.insert(field, value.into());
        self
    }

    /// Change the value of a declared input. Returns `false` when the input
    /// does not exist.
    pub fn set_input(&mut self, field: FilterField, value: impl Into<String>) -> bool {
        match self.inputs.get_mut(&field) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Current content of a declared mount point.
    pub fn content(&self, role: MountRole) -> Option<&str> {
        self.mounts.get(&role).map(String::as_str)
    }

    /// Declared mount points with their current content, in role order.
    pub fn mounts(&self) -> impl Iterator<Item = (MountRole, &str)> {
        self.mounts.iter().map(|(role, content)| (*role, content.as_str()))
    }
}

impl Surface for MemorySurface {
    fn has_mount(&self, role: MountRole) -> bool {
        self.mounts.contains_key(&role)
    }

    fn mount(&mut self, role: MountRole, content: String) {
        match self.mounts.get_mut(&role) {
            Some(slot) => *slot = content,
            None => debug!(?role, "ignoring content for undeclared mount point"),
        }
    }

    fn has_input(&self, field: FilterField) -> bool {
        self.inputs.contains_key(&field)
    }

    fn input_value(&self, field: FilterField) -> Option<String> {
        self.inputs.get(&field).cloned()
    }
}
