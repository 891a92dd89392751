//! The per-widget slide controller.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, trace};

use super::frame::{Position, SlideFrame, SlideRenderer};
use super::input::{SwipeDirection, SwipeTracker};
use super::scheduler::{Scheduler, TimerHandle};
use super::state::CyclicIndex;
use super::types::{
    DEFAULT_SWIPE_THRESHOLD, Presentation, SlideConfig, WidgetKey,
};
use crate::error::Result;

/// Cyclic index, autoplay timer and visibility of one slide widget.
///
/// Every transition produces a [`SlideFrame`] for the widget's renderer.
/// A controller over zero slides is inert: it never renders, never
/// schedules, and every step is a no-op.
pub struct SlideController {
    key: WidgetKey,
    config: SlideConfig,
    slides: Arc<[String]>,
    index: CyclicIndex,
    timer: Option<TimerHandle>,
    visible: bool,
    swipe: SwipeTracker,
    renderer: Box<dyn SlideRenderer>,
}

impl std::fmt::Debug for SlideController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideController")
            .field("key", &self.key)
            .field("index", &self.index)
            .field("timer", &self.timer)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}

impl SlideController {
    /// Build a controller at index 0 and render its first frame. `slides`
    /// are image references for single-image widgets and slide ids for
    /// track widgets.
    pub fn new(
        key: WidgetKey,
        config: SlideConfig,
        slides: impl Into<Arc<[String]>>,
        renderer: Box<dyn SlideRenderer>,
    ) -> Self {
        let slides = slides.into();
        let threshold = config.swipe_threshold.unwrap_or(DEFAULT_SWIPE_THRESHOLD);
        let mut controller = Self {
            key,
            config,
            index: CyclicIndex::new(slides.len()),
            slides,
            timer: None,
            visible: !config.modal,
            swipe: SwipeTracker::new(threshold),
            renderer,
        };
        controller.render();
        controller
    }

    /// Key the widget is registered under.
    pub fn key(&self) -> WidgetKey {
        self.key
    }

    /// Static configuration.
    pub fn config(&self) -> &SlideConfig {
        &self.config
    }

    /// Current slide index.
    pub fn index(&self) -> usize {
        self.index.get()
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the widget has no slides. Inert widgets ignore every operation.
    pub fn is_inert(&self) -> bool {
        self.index.is_empty()
    }

    /// Modal widgets are hidden until shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Live autoplay timer, if any.
    pub fn timer(&self) -> Option<TimerHandle> {
        self.timer
    }

    /// Reference of the current slide: a listing id or an image source.
    pub fn current_slide(&self) -> Option<&str> {
        self.slides.get(self.index.get()).map(String::as_str)
    }

    /// Frame describing the current state, `None` when inert.
    pub fn frame(&self) -> Option<SlideFrame> {
        if self.is_inert() {
            return None;
        }
        let index = self.index.get();
        let len = self.index.len();
        let position = match self.config.presentation {
            Presentation::Track => Position::Track {
                offset_percent: index * 100,
            },
            Presentation::SingleImage => Position::Media {
                src: self.slides[index].clone(),
                alt: format!("Property image {}", index + 1),
            },
        };
        let indicators = if self.config.indicators {
            (0..len).map(|i| i == index).collect()
        } else {
            Vec::new()
        };
        let counter = self
            .config
            .counter
            .then(|| format!("{} / {}", index + 1, len));

        Some(SlideFrame {
            widget: self.key,
            index,
            len,
            position,
            indicators,
            counter,
            visible: self.visible,
        })
    }

    fn render(&mut self) {
        if let Some(frame) = self.frame() {
            self.renderer.render(&frame);
        }
    }

    /// Step forward. Leaves the autoplay timer alone.
    pub fn next(&mut self) -> usize {
        if self.is_inert() {
            return 0;
        }
        self.index.next();
        self.render();
        self.index.get()
    }

    /// Step back. Leaves the autoplay timer alone.
    pub fn prev(&mut self) -> usize {
        if self.is_inert() {
            return 0;
        }
        self.index.prev();
        self.render();
        self.index.get()
    }

    /// Jump to `target` and restart autoplay when the widget has it.
    pub fn go_to<S: Scheduler + ?Sized>(
        &mut self,
        target: usize,
        scheduler: &mut S,
    ) -> Result<usize> {
        if self.is_inert() {
            return Ok(0);
        }
        self.index.set(target)?;
        self.render();
        self.restart_autoplay(scheduler);
        Ok(target)
    }

    /// Cancel any live timer, then advance every `interval`.
    pub fn start_autoplay<S: Scheduler + ?Sized>(
        &mut self,
        scheduler: &mut S,
        interval: Duration,
    ) -> Option<TimerHandle> {
        if self.is_inert() {
            return None;
        }
        self.stop_autoplay(scheduler);
        let handle = scheduler.schedule_repeating(self.key, interval);
        trace!(widget = ?self.key, ?interval, "autoplay started");
        self.timer = Some(handle);
        self.timer
    }

    /// Cancel the live timer. Idempotent.
    pub fn stop_autoplay<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.timer.take() {
            scheduler.cancel(handle);
            trace!(widget = ?self.key, "autoplay stopped");
        }
    }

    /// Start autoplay afresh if the widget is configured for it.
    pub fn restart_autoplay<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(interval) = self.config.autoplay {
            self.start_autoplay(scheduler, interval);
        }
    }

    /// Advance for an autoplay tick. Ticks from a handle other than the
    /// live one are stale and ignored.
    pub fn on_tick(&mut self, handle: TimerHandle) -> bool {
        if self.timer != Some(handle) {
            debug!(widget = ?self.key, "ignoring stale autoplay tick");
            return false;
        }
        self.next();
        true
    }

    /// Touch start. Ignored by widgets without a swipe threshold.
    pub fn begin_swipe(&mut self, x: f32) {
        if self.config.swipe_threshold.is_some() {
            self.swipe.begin(x);
        }
    }

    /// Complete a swipe. A swipe past the threshold steps once and restarts
    /// autoplay; returns the new index in that case.
    pub fn end_swipe<S: Scheduler + ?Sized>(
        &mut self,
        x: f32,
        scheduler: &mut S,
    ) -> Option<usize> {
        if self.is_inert() {
            return None;
        }
        let index = match self.swipe.end(x)? {
            SwipeDirection::Next => self.next(),
            SwipeDirection::Prev => self.prev(),
        };
        self.restart_autoplay(scheduler);
        Some(index)
    }

    /// Make the widget visible and render it.
    pub fn show(&mut self) {
        self.visible = true;
        self.render();
    }

    /// Hide the widget.
    pub fn hide(&mut self) {
        self.visible = false;
        self.render();
    }

    /// Stop everything the controller scheduled. Called on disposal.
    pub fn shutdown<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.stop_autoplay(scheduler);
    }
}
