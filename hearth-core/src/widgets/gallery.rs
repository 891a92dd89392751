use tracing::debug;

use super::RendererFactory;
use crate::render::{lightbox, property_gallery};
use crate::slides::{
    InputKind, NavKey, Scheduler, SlideAction, SlideConfig, SlideController,
    SlideHost, WidgetKey,
};
use crate::surface::{MountRole, Surface};

/// Inputs of the inline gallery. Navigation is only bound when there is
/// something to navigate; the main image always opens the lightbox.
pub fn gallery_bindings(len: usize) -> Vec<(InputKind, SlideAction)> {
    let mut bindings = vec![(InputKind::MainClick, SlideAction::OpenOverlay)];
    if len > 1 {
        bindings.extend([
            (InputKind::PrevClick, SlideAction::Prev),
            (InputKind::NextClick, SlideAction::Next),
            (InputKind::IndicatorClick, SlideAction::GoToIndicator),
            (InputKind::Key(NavKey::ArrowLeft), SlideAction::Prev),
            (InputKind::Key(NavKey::ArrowRight), SlideAction::Next),
        ]);
    }
    bindings
}

/// Inputs of the lightbox. Content clicks are unbound; only the backdrop,
/// the close button and Escape close it.
pub fn lightbox_bindings() -> Vec<(InputKind, SlideAction)> {
    vec![
        (InputKind::PrevClick, SlideAction::Prev),
        (InputKind::NextClick, SlideAction::Next),
        (InputKind::Key(NavKey::ArrowLeft), SlideAction::Prev),
        (InputKind::Key(NavKey::ArrowRight), SlideAction::Next),
        (InputKind::Key(NavKey::Escape), SlideAction::CloseOverlay),
        (InputKind::CloseClick, SlideAction::CloseOverlay),
        (InputKind::BackdropClick, SlideAction::CloseOverlay),
    ]
}

/// Mount the property gallery and, when the page has a lightbox mount
/// point, its lightbox. Registers both controllers and links the lightbox
/// to the gallery. Returns the number of images, or `None` without a
/// gallery mount point.
pub fn mount_gallery<S, F>(
    host: &mut SlideHost<S>,
    surface: &mut F,
    images: &[String],
    renderers: &mut RendererFactory<'_>,
) -> Option<usize>
where
    S: Scheduler,
    F: Surface + ?Sized,
{
    if !surface.has_mount(MountRole::Gallery) {
        debug!("no gallery mount point");
        return None;
    }
    surface.mount(MountRole::Gallery, property_gallery(images).into_string());
    if images.is_empty() {
        debug!("listing has no images; gallery shows a placeholder");
        return Some(0);
    }

    let gallery = SlideController::new(
        WidgetKey::Gallery,
        SlideConfig::gallery(),
        images.to_vec(),
        renderers(WidgetKey::Gallery),
    );
    host.register(gallery, gallery_bindings(images.len()));

    if surface.has_mount(MountRole::Lightbox) {
        surface.mount(MountRole::Lightbox, lightbox(images).into_string());
        let overlay = SlideController::new(
            WidgetKey::Lightbox,
            SlideConfig::lightbox(),
            images.to_vec(),
            renderers(WidgetKey::Lightbox),
        );
        host.register(overlay, lightbox_bindings());
        if let Err(error) = host.link_overlay(WidgetKey::Gallery, WidgetKey::Lightbox) {
            debug!(%error, "lightbox left unlinked");
        }
    } else {
        debug!("no lightbox mount point");
    }
    Some(images.len())
}
