//! Shared types for the slide widgets

use std::time::Duration;

/// Autoplay interval of the featured carousel.
pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);

/// Minimum horizontal travel, in pixels, for a touch gesture to count as a
/// swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Identifies a slide widget on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKey {
    /// Home page carousel.
    FeaturedCarousel,
    /// Property page inline gallery.
    Gallery,
    /// Property page lightbox.
    Lightbox,
    /// Any other widget.
    Custom(&'static str),
}

/// How a widget shows its current slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// All slides sit on one track that is translated by whole slide widths.
    Track,
    /// One image element whose source is swapped.
    SingleImage,
}

/// Static configuration for a slide widget. The presets cover the three
/// widgets of the site; ad-hoc configurations are fine too.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideConfig {
    /// Track or single image.
    pub presentation: Presentation,
    /// Repeating advance interval, `None` for no autoplay.
    pub autoplay: Option<Duration>,
    /// Swipe threshold, `None` when the widget ignores touch gestures.
    pub swipe_threshold: Option<f32>,
    /// Whether frames carry one indicator state per slide (dots, thumbnails).
    pub indicators: bool,
    /// Whether frames carry an `index / len` counter.
    pub counter: bool,
    /// Modal widgets start hidden and take keyboard input while shown.
    pub modal: bool,
}

impl SlideConfig {
    /// Home page carousel: track, autoplay, dots and swipe.
    pub const fn featured(autoplay: Duration, swipe_threshold: f32) -> Self {
        Self {
            presentation: Presentation::Track,
            autoplay: Some(autoplay),
            swipe_threshold: Some(swipe_threshold),
            indicators: true,
            counter: false,
            modal: false,
        }
    }

    /// Inline property gallery: single image, thumbnails and counter.
    pub const fn gallery() -> Self {
        Self {
            presentation: Presentation::SingleImage,
            autoplay: None,
            swipe_threshold: None,
            indicators: true,
            counter: true,
            modal: false,
        }
    }

    /// Full-screen overlay for the gallery.
    pub const fn lightbox() -> Self {
        Self {
            presentation: Presentation::SingleImage,
            autoplay: None,
            swipe_threshold: None,
            indicators: false,
            counter: true,
            modal: true,
        }
    }
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self::featured(DEFAULT_AUTOPLAY_INTERVAL, DEFAULT_SWIPE_THRESHOLD)
    }
}
