//! Cyclic slide controllers shared by the featured carousel, the property
//! gallery and the lightbox.
//!
//! One [`SlideController`] exists per widget instance and owns that widget's
//! index and autoplay timer. A [`SlideHost`] keeps the controllers of a page
//! together with their [`InputBindings`] and a [`Scheduler`], routes input
//! events to them, and delivers timer ticks.

/// Per-widget slide controller
pub mod controller;
/// Render frames and renderers
pub mod frame;
/// Page-level widget registry
pub mod host;
/// Input events and bindings
pub mod input;
/// Autoplay timers
pub mod scheduler;
/// Cyclic index
pub mod state;
/// Widget keys and configuration
pub mod types;

pub use controller::SlideController;
pub use frame::{
    Position, RecordingRenderer, SlideFrame, SlideRenderer, TracingRenderer,
};
pub use host::SlideHost;
pub use input::{
    InputBindings, InputEvent, InputKind, NavKey, SlideAction, SwipeDirection,
    SwipeTracker,
};
pub use scheduler::{
    Clock, ManualClock, Scheduler, SystemClock, Tick, TimerHandle, TimerQueue,
};
pub use state::CyclicIndex;
pub use types::{
    DEFAULT_AUTOPLAY_INTERVAL, DEFAULT_SWIPE_THRESHOLD, Presentation,
    SlideConfig, WidgetKey,
};
