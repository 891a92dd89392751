//! Render frames and the renderers that consume them.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use super::types::WidgetKey;

/// Visual position of the current slide.
#[derive(Debug, Clone, PartialEq)]
pub enum Position {
    /// Track offset in percent of one slide width (`index * 100`).
    Track {
        /// Distance the track is moved left.
        offset_percent: usize,
    },
    /// Image currently shown by a single-image viewer.
    Media {
        /// Image source.
        src: String,
        /// Alternative text.
        alt: String,
    },
}

impl Position {
    /// CSS transform for track positions.
    pub fn transform(&self) -> Option<String> {
        match self {
            Position::Track { offset_percent } => {
                Some(format!("translateX(-{offset_percent}%)"))
            }
            Position::Media { .. } => None,
        }
    }
}

/// Everything a widget's visuals depend on after a transition.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideFrame {
    /// Widget that produced the frame.
    pub widget: WidgetKey,
    /// Current slide.
    pub index: usize,
    /// Number of slides.
    pub len: usize,
    /// Where the current slide is shown.
    pub position: Position,
    /// One entry per slide, `true` only at `index`. Empty for widgets
    /// without indicators.
    pub indicators: Vec<bool>,
    /// `"index+1 / len"` for widgets with a counter.
    pub counter: Option<String>,
    /// Whether the widget is shown. Always `true` for non-modal widgets.
    pub visible: bool,
}

impl SlideFrame {
    /// Position of the active indicator.
    pub fn active_indicator(&self) -> Option<usize> {
        self.indicators.iter().position(|active| *active)
    }
}

/// Receives a frame after every transition of a widget.
pub trait SlideRenderer {
    /// Apply `frame` to the widget's visuals.
    fn render(&mut self, frame: &SlideFrame);
}

impl<R: SlideRenderer + ?Sized> SlideRenderer for Box<R> {
    fn render(&mut self, frame: &SlideFrame) {
        (**self).render(frame);
    }
}

/// Keeps every frame it receives. Clones share the same log, so a test can
/// hand one clone to a widget and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    frames: Rc<RefCell<Vec<SlideFrame>>>,
}

impl RecordingRenderer {
    /// Renderer with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every frame so far.
    pub fn frames(&self) -> Vec<SlideFrame> {
        self.frames.borrow().clone()
    }

    /// Most recent frame.
    pub fn last(&self) -> Option<SlideFrame> {
        self.frames.borrow().last().cloned()
    }

    /// Number of frames received.
    pub fn len(&self) -> usize {
        self.frames.borrow().len()
    }

    /// Whether nothing was rendered yet.
    pub fn is_empty(&self) -> bool {
        self.frames.borrow().is_empty()
    }

    /// Indices of all recorded frames, oldest first.
    pub fn indices(&self) -> Vec<usize> {
        self.frames.borrow().iter().map(|frame| frame.index).collect()
    }

    /// Forget every frame.
    pub fn clear(&self) {
        self.frames.borrow_mut().clear();
    }
}

impl SlideRenderer for RecordingRenderer {
    fn render(&mut self, frame: &SlideFrame) {
        self.frames.borrow_mut().push(frame.clone());
    }
}

/// Logs frames at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRenderer;

impl SlideRenderer for TracingRenderer {
    fn render(&mut self, frame: &SlideFrame) {
        debug!(
            widget = ?frame.widget,
            index = frame.index,
            len = frame.len,
            visible = frame.visible,
            transform = frame.position.transform().as_deref(),
            counter = frame.counter.as_deref(),
            "slide frame"
        );
    }
}
