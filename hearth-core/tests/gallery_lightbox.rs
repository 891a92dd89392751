mod support;

use hearth_core::slides::{
    InputEvent, ManualClock, NavKey, Position, SlideAction, SlideHost,
    TimerQueue, WidgetKey,
};
use hearth_core::surface::{MemorySurface, MountRole};
use hearth_core::widgets::mount_gallery;
use support::{Recorders, images};

type Host = SlideHost<TimerQueue<ManualClock>>;

fn property_page(n: usize, with_lightbox: bool) -> (Host, Recorders) {
    let mut surface = MemorySurface::new().with_mount(MountRole::Gallery);
    if with_lightbox {
        surface = surface.with_mount(MountRole::Lightbox);
    }
    let recorders = Recorders::default();
    let mut factory = recorders.factory();
    let mut host = SlideHost::new(TimerQueue::new(ManualClock::new()));
    mount_gallery(&mut host, &mut surface, &images(n), &mut factory);
    (host, recorders)
}

fn index(host: &Host, key: WidgetKey) -> usize {
    host.controller(key).expect("registered").index()
}

fn lightbox_open(host: &Host) -> bool {
    host.controller(WidgetKey::Lightbox)
        .expect("registered")
        .is_visible()
}

#[test]
fn opening_seeds_the_lightbox_from_the_gallery() {
    let (mut host, recorders) = property_page(4, true);
    host.dispatch(WidgetKey::Gallery, InputEvent::IndicatorClick(2))
        .unwrap();
    host.dispatch(WidgetKey::Gallery, InputEvent::MainClick)
        .unwrap();

    assert!(lightbox_open(&host));
    assert!(host.scroll_locked());
    let frame = recorders.get(WidgetKey::Lightbox).last().unwrap();
    assert!(frame.visible);
    assert_eq!(frame.index, 2);
    assert_eq!(frame.counter.as_deref(), Some("3 / 4"));
    assert_eq!(
        frame.position,
        Position::Media {
            src: "images/photo-3.jpg".into(),
            alt: "Property image 3".into(),
        }
    );
}

#[test]
fn closing_leaves_the_gallery_on_the_lightbox_image() {
    let (mut host, recorders) = property_page(4, true);
    host.dispatch(WidgetKey::Gallery, InputEvent::IndicatorClick(2))
        .unwrap();
    host.dispatch(WidgetKey::Gallery, InputEvent::MainClick)
        .unwrap();
    host.dispatch(WidgetKey::Lightbox, InputEvent::NextClick)
        .unwrap();
    assert_eq!(index(&host, WidgetKey::Lightbox), 3);
    assert_eq!(index(&host, WidgetKey::Gallery), 3);

    host.dispatch(WidgetKey::Lightbox, InputEvent::CloseClick)
        .unwrap();
    assert!(!lightbox_open(&host));
    assert!(!host.scroll_locked());
    assert_eq!(index(&host, WidgetKey::Gallery), 3);

    let gallery = recorders.get(WidgetKey::Gallery).last().unwrap();
    assert_eq!(gallery.active_indicator(), Some(3));
    assert_eq!(gallery.counter.as_deref(), Some("4 / 4"));
}

#[test]
fn lightbox_wraps_backwards_and_mirrors() {
    let (mut host, _) = property_page(3, true);
    host.dispatch(WidgetKey::Gallery, InputEvent::MainClick)
        .unwrap();
    host.dispatch(WidgetKey::Lightbox, InputEvent::PrevClick)
        .unwrap();
    assert_eq!(index(&host, WidgetKey::Lightbox), 2);
    assert_eq!(index(&host, WidgetKey::Gallery), 2);
}

#[test]
fn arrow_keys_follow_the_open_overlay() {
    let (mut host, _) = property_page(3, true);

    let routed = host
        .dispatch_global(InputEvent::Key(NavKey::ArrowRight))
        .unwrap();
    assert_eq!(routed, Some((WidgetKey::Gallery, SlideAction::Next)));
    assert_eq!(index(&host, WidgetKey::Gallery), 1);

    host.dispatch(WidgetKey::Gallery, InputEvent::MainClick)
        .unwrap();
    let routed = host
        .dispatch_global(InputEvent::Key(NavKey::ArrowRight))
        .unwrap();
    assert_eq!(routed, Some((WidgetKey::Lightbox, SlideAction::Next)));
    assert_eq!(index(&host, WidgetKey::Lightbox), 2);
    assert_eq!(index(&host, WidgetKey::Gallery), 2);

    let routed = host
        .dispatch_global(InputEvent::Key(NavKey::Escape))
        .unwrap();
    assert_eq!(routed, Some((WidgetKey::Lightbox, SlideAction::CloseOverlay)));
    assert!(!lightbox_open(&host));
}

#[test]
fn only_the_backdrop_closes() {
    let (mut host, _) = property_page(2, true);
    host.dispatch(WidgetKey::Gallery, InputEvent::MainClick)
        .unwrap();

    let action = host
        .dispatch(WidgetKey::Lightbox, InputEvent::ContentClick)
        .unwrap();
    assert_eq!(action, None);
    assert!(lightbox_open(&host));

    host.dispatch(WidgetKey::Lightbox, InputEvent::BackdropClick)
        .unwrap();
    assert!(!lightbox_open(&host));
    assert!(!host.scroll_locked());
}

#[test]
fn hidden_lightbox_ignores_input() {
    let (mut host, _) = property_page(3, true);
    let action = host
        .dispatch(WidgetKey::Lightbox, InputEvent::NextClick)
        .unwrap();
    assert_eq!(action, None);
    assert_eq!(index(&host, WidgetKey::Lightbox), 0);
}

#[test]
fn single_image_gallery_has_no_navigation() {
    let (mut host, _) = property_page(1, true);
    let routed = host
        .dispatch_global(InputEvent::Key(NavKey::ArrowRight))
        .unwrap();
    assert_eq!(routed, None);
    assert_eq!(
        host.dispatch(WidgetKey::Gallery, InputEvent::NextClick)
            .unwrap(),
        None
    );

    host.dispatch(WidgetKey::Gallery, InputEvent::MainClick)
        .unwrap();
    assert!(lightbox_open(&host));
}

#[test]
fn gallery_without_lightbox_mount_never_locks_scrolling() {
    let (mut host, recorders) = property_page(3, false);
    assert!(host.controller(WidgetKey::Lightbox).is_none());
    assert!(!recorders.contains(WidgetKey::Lightbox));

    host.dispatch(WidgetKey::Gallery, InputEvent::MainClick)
        .unwrap();
    assert!(!host.scroll_locked());
}

#[test]
fn disposing_an_open_lightbox_releases_the_scroll_lock() {
    let (mut host, _) = property_page(3, true);
    host.dispatch(WidgetKey::Gallery, InputEvent::MainClick)
        .unwrap();
    assert!(host.scroll_locked());

    host.dispose(WidgetKey::Lightbox);
    assert!(!host.scroll_locked());
    assert_eq!(host.overlay_of(WidgetKey::Gallery), None);
}
