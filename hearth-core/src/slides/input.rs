//! Input events and the table that maps them onto slide actions.

use std::collections::HashMap;

use super::types::WidgetKey;

/// Keyboard keys the slide widgets react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    /// Previous slide.
    ArrowLeft,
    /// Next slide.
    ArrowRight,
    /// Close an overlay.
    Escape,
}

/// A user input aimed at a slide widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Click on the previous button.
    PrevClick,
    /// Click on the next button.
    NextClick,
    /// Click on the dot or thumbnail at the given position.
    IndicatorClick(usize),
    /// Click on the main image of a viewer.
    MainClick,
    /// Click on an overlay's close button.
    CloseClick,
    /// Click on an overlay's backdrop, outside its content.
    BackdropClick,
    /// Click inside an overlay's content.
    ContentClick,
    /// Key press.
    Key(NavKey),
    /// Touch began.
    TouchStart {
        /// Horizontal position in pixels.
        x: f32,
    },
    /// Touch ended.
    TouchEnd {
        /// Horizontal position in pixels.
        x: f32,
    },
    /// Pointer entered the widget.
    HoverEnter,
    /// Pointer left the widget.
    HoverLeave,
}

impl InputEvent {
    /// Kind used to look the event up in [`InputBindings`].
    pub fn kind(&self) -> InputKind {
        match self {
            InputEvent::PrevClick => InputKind::PrevClick,
            InputEvent::NextClick => InputKind::NextClick,
            InputEvent::IndicatorClick(_) => InputKind::IndicatorClick,
            InputEvent::MainClick => InputKind::MainClick,
            InputEvent::CloseClick => InputKind::CloseClick,
            InputEvent::BackdropClick => InputKind::BackdropClick,
            InputEvent::ContentClick => InputKind::ContentClick,
            InputEvent::Key(key) => InputKind::Key(*key),
            InputEvent::TouchStart { .. } => InputKind::TouchStart,
            InputEvent::TouchEnd { .. } => InputKind::TouchEnd,
            InputEvent::HoverEnter => InputKind::HoverEnter,
            InputEvent::HoverLeave => InputKind::HoverLeave,
        }
    }
}

/// Payload-free discriminant of [`InputEvent`], used as a binding key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Previous button.
    PrevClick,
    /// Next button.
    NextClick,
    /// Dot or thumbnail.
    IndicatorClick,
    /// Main image.
    MainClick,
    /// Close button.
    CloseClick,
    /// Overlay backdrop.
    BackdropClick,
    /// Overlay content.
    ContentClick,
    /// Key press, per key.
    Key(NavKey),
    /// Touch start.
    TouchStart,
    /// Touch end.
    TouchEnd,
    /// Pointer enter.
    HoverEnter,
    /// Pointer leave.
    HoverLeave,
}

/// What a bound input does to its widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideAction {
    /// Step back, then restart autoplay.
    Prev,
    /// Step forward, then restart autoplay.
    Next,
    /// Jump to the indicator carried by the event, then restart autoplay.
    GoToIndicator,
    /// Remember where a touch began.
    SwipeStart,
    /// Step according to the swipe, then restart autoplay.
    SwipeEnd,
    /// Cancel the autoplay timer.
    PauseAutoplay,
    /// Start autoplay afresh with a full interval.
    ResumeAutoplay,
    /// Show the widget's linked overlay at the widget's current index.
    OpenOverlay,
    /// Hide this overlay.
    CloseOverlay,
}

/// Table from `(widget, input kind)` to the action it triggers. Inputs
/// without an entry are ignored.
#[derive(Debug, Clone, Default)]
pub struct InputBindings {
    table: HashMap<(WidgetKey, InputKind), SlideAction>,
}

impl InputBindings {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `bindings` for `widget`, replacing earlier entries for the
    /// same input kinds.
    pub fn install<I>(&mut self, widget: WidgetKey, bindings: I)
    where
        I: IntoIterator<Item = (InputKind, SlideAction)>,
    {
        for (kind, action) in bindings {
            self.table.insert((widget, kind), action);
        }
    }

    /// Remove every binding of `widget`. Returns how many were removed.
    pub fn remove_widget(&mut self, widget: WidgetKey) -> usize {
        let before = self.table.len();
        self.table.retain(|(bound, _), _| *bound != widget);
        before - self.table.len()
    }

    /// Action bound to `kind` on `widget`.
    pub fn lookup(&self, widget: WidgetKey, kind: InputKind) -> Option<SlideAction> {
        self.table.get(&(widget, kind)).copied()
    }

    /// Whether `widget` reacts to `kind`.
    pub fn is_bound(&self, widget: WidgetKey, kind: InputKind) -> bool {
        self.table.contains_key(&(widget, kind))
    }

    /// Number of bindings installed for `widget`.
    pub fn bindings_for(&self, widget: WidgetKey) -> usize {
        self.table.keys().filter(|(bound, _)| *bound == widget).count()
    }

    /// Total number of bindings.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether no widget has bindings.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Direction of a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: show the next slide.
    Next,
    /// Finger moved right: show the previous slide.
    Prev,
}

/// Horizontal swipe detection between a touch start and end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    /// Tracker that needs more than `threshold` pixels of travel.
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    /// Start a gesture at `x`, discarding any unfinished one.
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Finish the gesture. Travel at or below the threshold, or an end
    /// without a start, is not a swipe.
    pub fn end(&mut self, x: f32) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let delta = start - x;
        if delta.abs() <= self.threshold {
            None
        } else if delta > 0.0 {
            Some(SwipeDirection::Next)
        } else {
            Some(SwipeDirection::Prev)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swipe_threshold_is_exclusive() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.begin(200.0);
        assert_eq!(swipe.end(150.0), None);
        swipe.begin(200.0);
        assert_eq!(swipe.end(149.0), Some(SwipeDirection::Next));
        swipe.begin(100.0);
        assert_eq!(swipe.end(180.0), Some(SwipeDirection::Prev));
    }

    #[test]
    fn end_without_start_is_ignored() {
        let mut swipe = SwipeTracker::new(50.0);
        assert_eq!(swipe.end(0.0), None);
        swipe.begin(300.0);
        assert!(swipe.end(0.0).is_some());
        assert_eq!(swipe.end(0.0), None);
    }

    #[test]
    fn bindings_are_scoped_per_widget() {
        let mut bindings = InputBindings::new();
        bindings.install(
            WidgetKey::Gallery,
            [
                (InputKind::Key(NavKey::ArrowRight), SlideAction::Next),
                (InputKind::Key(NavKey::ArrowLeft), SlideAction::Prev),
            ],
        );
        bindings.install(
            WidgetKey::Lightbox,
            [(InputKind::Key(NavKey::ArrowRight), SlideAction::Next)],
        );

        assert_eq!(
            bindings.lookup(WidgetKey::Gallery, InputKind::Key(NavKey::ArrowLeft)),
            Some(SlideAction::Prev)
        );
        assert_eq!(
            bindings.lookup(WidgetKey::Lightbox, InputKind::Key(NavKey::ArrowLeft)),
            None
        );

        assert_eq!(bindings.remove_widget(WidgetKey::Gallery), 2);
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings.bindings_for(WidgetKey::Lightbox), 1);
    }
}
