//! Registry of the slide widgets on one page.

use tracing::{debug, warn};

use super::controller::SlideController;
use super::input::{InputBindings, InputEvent, InputKind, SlideAction};
use super::scheduler::Scheduler;
use super::types::WidgetKey;
use crate::error::{CoreError, Result};

/// An overlay that mirrors the index of the widget that opens it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OverlayLink {
    owner: WidgetKey,
    overlay: WidgetKey,
}

/// Owns the page's slide controllers, their input bindings and the
/// scheduler that drives autoplay.
///
/// Overlays linked with [`SlideHost::link_overlay`] share an index with
/// their owner: opening seeds the overlay from the owner, and every
/// transition of the overlay is mirrored back, so closing leaves the owner
/// on the overlay's slide.
#[derive(Debug)]
pub struct SlideHost<S: Scheduler> {
    scheduler: S,
    controllers: Vec<SlideController>,
    bindings: InputBindings,
    links: Vec<OverlayLink>,
    scroll_locked: bool,
}

impl<S: Scheduler> SlideHost<S> {
    /// Empty host driven by `scheduler`.
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            controllers: Vec::new(),
            bindings: InputBindings::new(),
            links: Vec::new(),
            scroll_locked: false,
        }
    }

    /// The scheduler behind autoplay.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the scheduler.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Input bindings of every registered widget.
    pub fn bindings(&self) -> &InputBindings {
        &self.bindings
    }

    /// Whether an open overlay has locked page scrolling.
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Registered widgets, in registration order.
    pub fn keys(&self) -> impl Iterator<Item = WidgetKey> + '_ {
        self.controllers.iter().map(SlideController::key)
    }

    /// Controller registered under `key`.
    pub fn controller(&self, key: WidgetKey) -> Option<&SlideController> {
        self.controllers.iter().find(|c| c.key() == key)
    }

    fn position(&self, key: WidgetKey) -> Result<usize> {
        self.controllers
            .iter()
            .position(|c| c.key() == key)
            .ok_or(CoreError::UnknownWidget(key))
    }

    /// Add a controller with its input bindings and start its autoplay if
    /// it has any. A controller registered under a key already in use
    /// replaces the old one.
    pub fn register<I>(&mut self, mut controller: SlideController, bindings: I)
    where
        I: IntoIterator<Item = (InputKind, SlideAction)>,
    {
        let key = controller.key();
        if self.dispose(key).is_some() {
            warn!(widget = ?key, "replacing registered slide widget");
        }
        self.bindings.install(key, bindings);
        controller.restart_autoplay(&mut self.scheduler);
        debug!(
            widget = ?key,
            slides = controller.len(),
            bindings = self.bindings.bindings_for(key),
            "slide widget registered"
        );
        self.controllers.push(controller);
    }

    /// Remove a controller, cancelling its timer and dropping its bindings
    /// and overlay links.
    pub fn dispose(&mut self, key: WidgetKey) -> Option<SlideController> {
        let pos = self.position(key).ok()?;
        let mut controller = self.controllers.remove(pos);
        controller.shutdown(&mut self.scheduler);
        if controller.config().modal && controller.is_visible() {
            self.scroll_locked = false;
        }
        self.bindings.remove_widget(key);
        self.links
            .retain(|link| link.owner != key && link.overlay != key);
        debug!(widget = ?key, "slide widget disposed");
        Some(controller)
    }

    /// Make `overlay` the overlay opened from `owner`.
    pub fn link_overlay(
        &mut self,
        owner: WidgetKey,
        overlay: WidgetKey,
    ) -> Result<()> {
        self.position(owner)?;
        self.position(overlay)?;
        self.links.retain(|link| link.owner != owner);
        self.links.push(OverlayLink { owner, overlay });
        Ok(())
    }

    /// Overlay linked to `owner`.
    pub fn overlay_of(&self, owner: WidgetKey) -> Option<WidgetKey> {
        self.links
            .iter()
            .find(|link| link.owner == owner)
            .map(|link| link.overlay)
    }

    fn owner_of(&self, overlay: WidgetKey) -> Option<WidgetKey> {
        self.links
            .iter()
            .find(|link| link.overlay == overlay)
            .map(|link| link.owner)
    }

    /// Deliver `event` to the widget `key`. Returns the action performed, or
    /// `None` when the event has no binding or the widget is hidden.
    pub fn dispatch(
        &mut self,
        key: WidgetKey,
        event: InputEvent,
    ) -> Result<Option<SlideAction>> {
        let pos = self.position(key)?;
        if !self.controllers[pos].is_visible() {
            return Ok(None);
        }
        let Some(action) = self.bindings.lookup(key, event.kind()) else {
            return Ok(None);
        };
        self.apply(pos, action, event)?;
        Ok(Some(action))
    }

    /// Deliver a page-wide event, such as a key press, to the widget that
    /// should receive it: a visible modal widget bound to it if there is
    /// one, otherwise the first visible widget bound to it.
    pub fn dispatch_global(
        &mut self,
        event: InputEvent,
    ) -> Result<Option<(WidgetKey, SlideAction)>> {
        let kind = event.kind();
        let candidates: Vec<&SlideController> = self
            .controllers
            .iter()
            .filter(|c| c.is_visible() && self.bindings.is_bound(c.key(), kind))
            .collect();
        let target = candidates
            .iter()
            .find(|c| c.config().modal)
            .or_else(|| candidates.first())
            .map(|c| c.key());

        match target {
            Some(key) => Ok(self.dispatch(key, event)?.map(|action| (key, action))),
            None => Ok(None),
        }
    }

    /// Deliver every due autoplay tick. Returns how many advanced a widget.
    pub fn poll_timers(&mut self) -> usize {
        let mut advanced = 0;
        for tick in self.scheduler.poll_due() {
            let Ok(pos) = self.position(tick.owner) else {
                debug!(widget = ?tick.owner, "tick for unregistered widget");
                continue;
            };
            if self.controllers[pos].on_tick(tick.handle) {
                advanced += 1;
            }
        }
        advanced
    }

    fn apply(
        &mut self,
        pos: usize,
        action: SlideAction,
        event: InputEvent,
    ) -> Result<()> {
        let key = self.controllers[pos].key();
        let before = self.controllers[pos].index();
        let controller = &mut self.controllers[pos];

        match (action, event) {
            (SlideAction::Prev, _) => {
                controller.prev();
                controller.restart_autoplay(&mut self.scheduler);
            }
            (SlideAction::Next, _) => {
                controller.next();
                controller.restart_autoplay(&mut self.scheduler);
            }
            (SlideAction::GoToIndicator, InputEvent::IndicatorClick(target)) => {
                controller.go_to(target, &mut self.scheduler)?;
            }
            (SlideAction::SwipeStart, InputEvent::TouchStart { x }) => {
                controller.begin_swipe(x);
            }
            (SlideAction::SwipeEnd, InputEvent::TouchEnd { x }) => {
                controller.end_swipe(x, &mut self.scheduler);
            }
            (SlideAction::PauseAutoplay, _) => {
                controller.stop_autoplay(&mut self.scheduler);
            }
            (SlideAction::ResumeAutoplay, _) => {
                controller.restart_autoplay(&mut self.scheduler);
            }
            (SlideAction::OpenOverlay, _) => return self.open_overlay(key),
            (SlideAction::CloseOverlay, _) => return self.close_overlay(key),
            (action, event) => {
                debug!(widget = ?key, ?action, ?event, "action does not apply to event");
            }
        }

        if self.controllers[pos].index() != before {
            self.mirror_to_owner(key)?;
        }
        Ok(())
    }

    /// Show the overlay linked to `owner`, seeded with the owner's index.
    pub fn open_overlay(&mut self, owner: WidgetKey) -> Result<()> {
        let Some(overlay) = self.overlay_of(owner) else {
            debug!(widget = ?owner, "no overlay linked");
            return Ok(());
        };
        let index = self.controllers[self.position(owner)?].index();
        let pos = self.position(overlay)?;
        let controller = &mut self.controllers[pos];
        if controller.is_inert() {
            return Ok(());
        }
        controller.go_to(index, &mut self.scheduler)?;
        controller.show();
        self.scroll_locked = true;
        debug!(widget = ?overlay, index, "overlay opened");
        Ok(())
    }

    /// Hide the overlay `overlay` and release the scroll lock.
    pub fn close_overlay(&mut self, overlay: WidgetKey) -> Result<()> {
        let pos = self.position(overlay)?;
        let controller = &mut self.controllers[pos];
        if !controller.is_visible() {
            return Ok(());
        }
        controller.hide();
        self.scroll_locked = false;
        debug!(widget = ?overlay, "overlay closed");
        Ok(())
    }

    fn mirror_to_owner(&mut self, overlay: WidgetKey) -> Result<()> {
        let Some(owner) = self.owner_of(overlay) else {
            return Ok(());
        };
        let index = self.controllers[self.position(overlay)?].index();
        let pos = self.position(owner)?;
        if self.controllers[pos].index() != index {
            self.controllers[pos].go_to(index, &mut self.scheduler)?;
        }
        Ok(())
    }

    /// Dispose every widget.
    pub fn teardown(&mut self) {
        let keys: Vec<WidgetKey> = self.keys().collect();
        for key in keys {
            self.dispose(key);
        }
    }
}
