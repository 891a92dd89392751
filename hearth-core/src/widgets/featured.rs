use std::time::Duration;

use tracing::debug;

use super::RendererFactory;
use crate::navigation::Navigator;
use crate::render::featured_carousel;
use crate::slides::{
    DEFAULT_AUTOPLAY_INTERVAL, DEFAULT_SWIPE_THRESHOLD, InputKind, Scheduler,
    SlideAction, SlideConfig, SlideController, SlideHost, WidgetKey,
};
use crate::store::ListingStore;
use crate::surface::{MountRole, Surface};

/// Largest number of slides in the featured carousel.
pub const DEFAULT_SLIDE_LIMIT: usize = 5;

/// Settings for the featured carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselOptions {
    /// Most featured listings shown as slides.
    pub slide_limit: usize,
    /// Time each slide stays up.
    pub autoplay_interval: Duration,
    /// Minimum swipe travel in pixels.
    pub swipe_threshold: f32,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            slide_limit: DEFAULT_SLIDE_LIMIT,
            autoplay_interval: DEFAULT_AUTOPLAY_INTERVAL,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

/// Inputs of the featured carousel: buttons, dots, swipe and hover pause.
pub fn featured_bindings() -> Vec<(InputKind, SlideAction)> {
    vec![
        (InputKind::PrevClick, SlideAction::Prev),
        (InputKind::NextClick, SlideAction::Next),
        (InputKind::IndicatorClick, SlideAction::GoToIndicator),
        (InputKind::TouchStart, SlideAction::SwipeStart),
        (InputKind::TouchEnd, SlideAction::SwipeEnd),
        (InputKind::HoverEnter, SlideAction::PauseAutoplay),
        (InputKind::HoverLeave, SlideAction::ResumeAutoplay),
    ]
}

/// Mount the featured carousel and register its controller, which starts
/// autoplay. Returns the number of slides, or `None` when the page has no
/// carousel mount point or the store has no featured listings.
pub fn mount_featured_carousel<S, F>(
    host: &mut SlideHost<S>,
    surface: &mut F,
    store: &ListingStore,
    navigator: &Navigator,
    options: &CarouselOptions,
    renderers: &mut RendererFactory<'_>,
) -> Option<usize>
where
    S: Scheduler,
    F: Surface + ?Sized,
{
    if !surface.has_mount(MountRole::FeaturedCarousel) {
        debug!("no featured carousel mount point");
        return None;
    }
    let slides = store.featured(options.slide_limit);
    surface.mount(
        MountRole::FeaturedCarousel,
        featured_carousel(&slides, navigator).into_string(),
    );
    if slides.is_empty() {
        debug!("no featured listings; carousel left empty");
        return None;
    }

    let ids: Vec<String> =
        slides.iter().map(|listing| listing.id.to_string()).collect();
    let count = ids.len();
    let controller = SlideController::new(
        WidgetKey::FeaturedCarousel,
        SlideConfig::featured(options.autoplay_interval, options.swipe_threshold),
        ids,
        renderers(WidgetKey::FeaturedCarousel),
    );
    host.register(controller, featured_bindings());
    Some(count)
}
