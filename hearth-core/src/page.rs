//! Page initialization and event routing.
//!
//! A page is whatever subset of mount points the surface declares: the home
//! page has the featured strip and carousel, the listings page the grid,
//! count and filters, the property page the gallery and lightbox. Each
//! component checks for its own mount point, so partial pages just work.

use hearth_model::{FilterField, Listing, ListingId};
use tracing::{debug, info};

use crate::error::Result;
use crate::filter::FilterController;
use crate::navigation::Navigator;
use crate::render::grid::{DEFAULT_FEATURED_LIMIT, GridOptions, render_listings};
use crate::slides::{
    InputEvent, NavKey, Scheduler, SlideAction, SlideHost, WidgetKey,
};
use crate::store::{ListingSource, ListingStore};
use crate::surface::{MountRole, Surface};
use crate::widgets::{
    CarouselOptions, RendererFactory, mount_featured_carousel, mount_gallery,
};

/// Site-wide presentation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSettings {
    /// Detail page links for cards and slides.
    pub navigator: Navigator,
    /// Cards in the home page featured strip.
    pub featured_card_limit: usize,
    /// Featured carousel settings.
    pub carousel: CarouselOptions,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            navigator: Navigator::default(),
            featured_card_limit: DEFAULT_FEATURED_LIMIT,
            carousel: CarouselOptions::default(),
        }
    }
}

/// An initialized page: the listing store, the filter controller when the
/// page has a listings grid, and the slide widgets.
#[derive(Debug)]
pub struct Page<S: Scheduler> {
    store: ListingStore,
    settings: PageSettings,
    host: SlideHost<S>,
    filters: Option<FilterController>,
    detail: Option<ListingId>,
}

impl<S: Scheduler> Page<S> {
    /// Load the store from `source`, falling back to an empty collection,
    /// then initialize the page.
    pub async fn load<F: Surface + ?Sized>(
        source: &dyn ListingSource,
        settings: PageSettings,
        detail: Option<ListingId>,
        surface: &mut F,
        scheduler: S,
        renderers: &mut RendererFactory<'_>,
    ) -> Self {
        let store = ListingStore::load(source).await;
        Self::initialize(store, settings, detail, surface, scheduler, renderers)
    }

    /// Populate every mount point the surface declares and register the
    /// slide widgets. `detail` selects the listing shown by the gallery.
    pub fn initialize<F: Surface + ?Sized>(
        store: ListingStore,
        settings: PageSettings,
        detail: Option<ListingId>,
        surface: &mut F,
        scheduler: S,
        renderers: &mut RendererFactory<'_>,
    ) -> Self {
        let mut host = SlideHost::new(scheduler);
        let navigator = &settings.navigator;

        if surface.has_mount(MountRole::FeaturedListings) {
            let all: Vec<&Listing> = store.iter().collect();
            let strip = render_listings(
                &all,
                &GridOptions::featured(settings.featured_card_limit),
                navigator,
            );
            surface.mount(MountRole::FeaturedListings, strip.into_string());
        } else {
            debug!("no featured listings mount point");
        }

        mount_featured_carousel(
            &mut host,
            surface,
            &store,
            navigator,
            &settings.carousel,
            renderers,
        );

        let filters =
            FilterController::setup(store.clone(), navigator.clone(), &*surface);
        if let Some(filters) = &filters {
            filters.render_all(surface);
        }

        if surface.has_mount(MountRole::Gallery) {
            let images = match &detail {
                Some(id) => match store.get(id) {
                    Some(listing) => listing.images.clone(),
                    None => {
                        debug!(%id, "detail listing not found");
                        Vec::new()
                    }
                },
                None => Vec::new(),
            };
            mount_gallery(&mut host, surface, &images, renderers);
        }

        info!(
            listing_count = store.len(),
            widgets = host.keys().count(),
            filters = filters.is_some(),
            "page initialized"
        );

        Self {
            store,
            settings,
            host,
            filters,
            detail,
        }
    }

    /// The loaded listings.
    pub fn store(&self) -> &ListingStore {
        &self.store
    }

    /// Settings the page was initialized with.
    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }

    /// Listing shown by the gallery, if this is a property page.
    pub fn detail(&self) -> Option<&ListingId> {
        self.detail.as_ref()
    }

    /// The page's slide widgets.
    pub fn host(&self) -> &SlideHost<S> {
        &self.host
    }

    /// Mutable access to the slide widgets.
    pub fn host_mut(&mut self) -> &mut SlideHost<S> {
        &mut self.host
    }

    /// Filter controller, present on pages with a listings grid.
    pub fn filters(&self) -> Option<&FilterController> {
        self.filters.as_ref()
    }

    /// Input aimed at one widget.
    pub fn dispatch(
        &mut self,
        widget: WidgetKey,
        event: InputEvent,
    ) -> Result<Option<SlideAction>> {
        self.host.dispatch(widget, event)
    }

    /// Page-wide key press, routed to the lightbox while it is open and to
    /// the gallery otherwise.
    pub fn key_press(
        &mut self,
        key: NavKey,
    ) -> Result<Option<(WidgetKey, SlideAction)>> {
        self.host.dispatch_global(InputEvent::Key(key))
    }

    /// Deliver due autoplay ticks.
    pub fn poll_timers(&mut self) -> usize {
        self.host.poll_timers()
    }

    /// Change event from a filter input. Returns the new result count when
    /// the grid was re-rendered.
    pub fn filter_changed<F: Surface + ?Sized>(
        &mut self,
        field: FilterField,
        surface: &mut F,
    ) -> Option<usize> {
        self.filters.as_mut()?.handle_change(field, surface)
    }

    /// Re-read every bound filter input and re-render the grid. Returns the
    /// result count, or `None` on a page without a listings grid.
    pub fn apply_filters<F: Surface + ?Sized>(
        &mut self,
        surface: &mut F,
    ) -> Option<usize> {
        Some(self.filters.as_mut()?.apply(surface))
    }

    /// Dispose every widget and cancel their timers.
    pub fn teardown(&mut self) {
        self.host.teardown();
    }
}
