mod common;

use std::sync::{mpsc, Arc};

use approx::assert_relative_eq;
use proptest::prelude::*;
use proptest::test_runner::Config;

use common::{image_set, modal, shell};
use vitrine_core::config::{GestureConfig, ViewerConfig};
use vitrine_core::error::ViewerError;
use vitrine_core::geometry::{Point, Rect};
use vitrine_core::input::{InputEvent, Key, KeyFocus};
use vitrine_core::observer::ViewerEvent;
use vitrine_core::scroll_lock::CountingScrollLock;
use vitrine_core::shell::{
    CloseReason, LensPosition, Navigate, PresentationMode, ViewerCore, ViewerShell,
};
use vitrine_core::transform::Transform;

// ---------------------------------------------------------------------------
// Modal lifecycle
// ---------------------------------------------------------------------------

#[test]
fn test_open_acquires_lock_and_close_releases() {
    let (mut viewer, lock, _rx) = modal(3, 0);
    assert!(!viewer.is_open());

    viewer.open(1);
    assert!(viewer.is_open());
    assert!(viewer.key_listener_attached());
    assert_eq!(lock.depth(), 1);

    assert!(viewer.close(CloseReason::Explicit));
    assert!(!viewer.is_open());
    assert!(!viewer.key_listener_attached());
    assert_eq!(lock.depth(), 0);
}

#[test]
fn test_close_is_idempotent() {
    let (mut viewer, lock, _rx) = modal(3, 0);
    viewer.open(0);
    assert!(viewer.close(CloseReason::Explicit));
    assert!(!viewer.close(CloseReason::Explicit));
    assert!(!viewer.backdrop_click());
    assert_eq!(lock.depth(), 0);
}

#[test]
fn test_reopen_while_open_does_not_double_lock() {
    let (mut viewer, lock, _rx) = modal(3, 0);
    viewer.open(0);
    viewer.open(2);
    assert_eq!(lock.depth(), 1);
    assert_eq!(viewer.active_index(), 2);
    viewer.close(CloseReason::Explicit);
    assert_eq!(lock.depth(), 0);
}

#[test]
fn test_drop_while_open_releases_lock() {
    let (mut viewer, lock, rx) = modal(3, 0);
    viewer.open(0);
    drop(viewer);
    assert_eq!(lock.depth(), 0);
    let events: Vec<_> = rx.try_iter().collect();
    assert_eq!(events.last(), Some(&ViewerEvent::OpenChanged(false)));
}

#[test]
fn test_backdrop_click_closes() {
    let (mut viewer, lock, _rx) = modal(2, 0);
    viewer.open(0);
    assert!(viewer.backdrop_click());
    assert!(!viewer.is_open());
    assert_eq!(lock.depth(), 0);
}

#[test]
fn test_open_resets_transform() {
    let (mut viewer, _lock, _rx) = modal(3, 0);
    viewer.open(0);
    viewer.handle_input(&InputEvent::DoubleClick);
    assert_eq!(viewer.transform().scale, 2.5);
    viewer.close(CloseReason::Explicit);
    viewer.open(0);
    assert!(viewer.transform().is_identity());
}

#[derive(Clone, Debug)]
enum ModalOp {
    Open(i64),
    Close,
    Escape,
    Backdrop,
}

fn modal_op() -> impl Strategy<Value = ModalOp> {
    prop_oneof![
        2 => (-2_i64..6).prop_map(ModalOp::Open),
        1 => Just(ModalOp::Close),
        1 => Just(ModalOp::Escape),
        1 => Just(ModalOp::Backdrop),
    ]
}

proptest! {
    #![proptest_config(Config::with_cases(256))]
    #[test]
    fn scroll_lock_balances_for_any_open_close_sequence(
        ops in prop::collection::vec(modal_op(), 1..100)
    ) {
        let (mut viewer, lock, _rx) = modal(4, 0);
        for op in ops {
            match op {
                ModalOp::Open(index) => {
                    viewer.open(index);
                }
                ModalOp::Close => {
                    viewer.close(CloseReason::Explicit);
                }
                ModalOp::Escape => {
                    viewer.handle_input(&InputEvent::key(Key::Escape));
                }
                ModalOp::Backdrop => {
                    viewer.backdrop_click();
                }
            }
            prop_assert_eq!(lock.depth(), usize::from(viewer.is_open()));
        }
        drop(viewer);
        prop_assert_eq!(lock.depth(), 0);
    }
}

#[test]
fn test_inverted_scale_bounds_are_rejected_at_construction() {
    let config = ViewerConfig {
        gesture: GestureConfig {
            min_scale: 3.0,
            max_scale: 2.0,
            ..GestureConfig::default()
        },
        ..ViewerConfig::default()
    };
    for mode in [
        PresentationMode::Modal,
        PresentationMode::Inline,
        PresentationMode::MobileCarousel,
    ] {
        let built = ViewerShell::new(image_set(3), 0, mode, &config);
        assert!(matches!(built, Err(ViewerError::InvalidConfig(_))));
    }
    assert!(ViewerCore::new(image_set(3), 0, &config).is_err());
}

#[test]
fn test_two_viewers_share_one_page_lock() {
    let lock = CountingScrollLock::new();
    let (mut a, _, _rx_a) = modal(2, 0);
    let (mut b, _, _rx_b) = modal(2, 0);
    a.set_scroll_lock(Arc::new(lock.clone()));
    b.set_scroll_lock(Arc::new(lock.clone()));
    a.open(0);
    b.open(0);
    assert_eq!(lock.depth(), 2);
    a.close(CloseReason::Explicit);
    assert!(lock.is_locked());
    b.close(CloseReason::Escape);
    assert!(!lock.is_locked());
}

// ---------------------------------------------------------------------------
// Modal input
// ---------------------------------------------------------------------------

#[test]
fn test_input_ignored_while_closed() {
    let (mut viewer, _lock, _rx) = modal(3, 0);
    assert!(!viewer.handle_input(&InputEvent::Wheel { delta_y: -100.0 }));
    assert!(!viewer.handle_input(&InputEvent::key(Key::ArrowRight)));
    assert!(viewer.transform().is_identity());
    assert_eq!(viewer.active_index(), 0);
}

#[test]
fn test_keys_ignored_when_text_input_focused() {
    let (mut viewer, lock, _rx) = modal(3, 0);
    viewer.open(0);
    let typed = |key| InputEvent::Key {
        key,
        focus: KeyFocus::TextInput,
    };
    assert!(!viewer.handle_input(&typed(Key::ArrowRight)));
    assert!(!viewer.handle_input(&typed(Key::Escape)));
    assert_eq!(viewer.active_index(), 0);
    assert!(viewer.is_open());
    assert_eq!(lock.depth(), 1);
}

#[test]
fn test_wheel_and_drag_through_handle_input() {
    let (mut viewer, _lock, _rx) = modal(3, 0);
    viewer.open(0);
    viewer.handle_input(&InputEvent::Wheel { delta_y: -100.0 });
    viewer.handle_input(&InputEvent::Wheel { delta_y: -100.0 });
    assert_relative_eq!(viewer.transform().scale, 1.3, epsilon = 1e-6);

    assert!(viewer.handle_input(&InputEvent::PointerDown {
        pos: Point::new(10.0, 10.0)
    }));
    assert!(viewer.is_dragging());
    viewer.handle_input(&InputEvent::PointerMove {
        pos: Point::new(60.0, -5.0),
    });
    viewer.handle_input(&InputEvent::PointerUp);
    assert!(!viewer.is_dragging());
    assert_eq!(viewer.transform().translate, Point::new(50.0, -15.0));
}

#[test]
fn test_pointer_move_without_drag_is_not_consumed() {
    let (mut viewer, _lock, _rx) = modal(3, 0);
    viewer.open(0);
    assert!(!viewer.handle_input(&InputEvent::PointerDown { pos: Point::ZERO }));
    assert!(!viewer.handle_input(&InputEvent::PointerMove {
        pos: Point::new(5.0, 5.0)
    }));
}

// ---------------------------------------------------------------------------
// Observer ordering
// ---------------------------------------------------------------------------

#[test]
fn test_events_fire_after_change_and_only_on_change() {
    let (mut viewer, _lock, rx) = modal(3, 0);
    viewer.open(2);
    viewer.next();
    viewer.previous();
    viewer.handle_input(&InputEvent::key(Key::Escape));
    viewer.close(CloseReason::Explicit);

    let events: Vec<_> = rx.try_iter().collect();
    assert_eq!(
        events,
        vec![
            ViewerEvent::IndexChanged(2),
            ViewerEvent::OpenChanged(true),
            ViewerEvent::IndexChanged(1),
            ViewerEvent::OpenChanged(false),
        ]
    );
}

#[test]
fn test_observer_sees_new_state() {
    struct Probe(mpsc::Sender<usize>);
    impl vitrine_core::observer::ViewerObserver for Probe {
        fn on_index_change(&mut self, index: usize) {
            let _ = self.0.send(index);
        }
    }

    let (tx, rx) = mpsc::channel();
    let mut s = shell(4, 0, PresentationMode::Modal).with_observer(Box::new(Probe(tx)));
    s.go_to(3);
    s.go_to(3);
    assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![3]);
    assert_eq!(s.active_index(), 3);
}

// ---------------------------------------------------------------------------
// Counter and thumbnails
// ---------------------------------------------------------------------------

#[test]
fn test_counter_and_thumbnails_mirror_active_index() {
    let (mut viewer, _lock, _rx) = modal(3, 0);
    viewer.open(1);
    assert_eq!(viewer.counter_label(), "2 / 3");
    let thumbs = viewer.thumbnails();
    assert_eq!(thumbs.len(), 3);
    assert_eq!(
        thumbs.iter().filter(|t| t.active).map(|t| t.index).collect::<Vec<_>>(),
        vec![1]
    );
    assert_eq!(thumbs[2].image.uri, "img2.png");
}

#[test]
fn test_nav_buttons_disabled_at_bounds() {
    let (mut viewer, _lock, _rx) = modal(2, 0);
    viewer.open(0);
    assert!(!viewer.can_previous());
    assert!(viewer.can_next());
    viewer.next();
    assert!(viewer.can_previous());
    assert!(!viewer.can_next());
}

#[test]
fn test_placeholder_viewer_counter() {
    let s = ViewerShell::new(
        Arc::new(vitrine_core::image_set::ImageSet::new(vec![])),
        0,
        PresentationMode::Modal,
        &ViewerConfig::default(),
    )
    .unwrap();
    assert_eq!(s.counter_label(), "1 / 1");
    assert!(s.images().is_placeholder());
}

// ---------------------------------------------------------------------------
// Inline hover zoom
// ---------------------------------------------------------------------------

fn bounds() -> Rect {
    Rect::from_min_size(Point::new(100.0, 50.0), 400.0, 200.0)
}

#[test]
fn test_inline_lens_tracks_pointer_percentages() {
    let mut s = shell(2, 0, PresentationMode::Inline);
    let inline = s.as_inline_mut().unwrap();
    assert!(!inline.is_hovering());

    inline.pointer_enter(Point::new(200.0, 100.0), bounds());
    assert!(inline.is_hovering());
    assert_eq!(inline.lens_position(), LensPosition { x: 25.0, y: 25.0 });
    assert_eq!(inline.transform_origin_css(), "25% 25%");

    inline.pointer_move(Point::new(900.0, 0.0), bounds());
    assert_eq!(inline.lens_position(), LensPosition { x: 100.0, y: 0.0 });

    inline.pointer_leave();
    assert!(!inline.is_hovering());
    assert_eq!(inline.scale(), 1.0);
    assert_eq!(inline.magnified_rect(bounds()), bounds());
}

#[test]
fn test_inline_magnifies_about_lens() {
    let mut s = shell(1, 0, PresentationMode::Inline);
    let inline = s.as_inline_mut().unwrap();
    inline.pointer_enter(Point::new(100.0, 50.0), bounds());
    let r = inline.magnified_rect(bounds());
    assert_eq!(r.min, Point::new(100.0, 50.0));
    assert_relative_eq!(r.width(), 720.0, epsilon = 1e-3);
    assert_relative_eq!(r.height(), 360.0, epsilon = 1e-3);
}

#[test]
fn test_inline_move_before_enter_is_ignored() {
    let mut s = shell(1, 0, PresentationMode::Inline);
    let inline = s.as_inline_mut().unwrap();
    inline.pointer_move(Point::new(100.0, 50.0), bounds());
    assert_eq!(inline.lens_position(), LensPosition::CENTER);
}

#[test]
fn test_inline_has_no_zoom_state() {
    let mut s = shell(2, 0, PresentationMode::Inline);
    assert!(!s.handle_input(&InputEvent::Wheel { delta_y: -100.0 }));
    assert_eq!(s.transform(), Transform::IDENTITY);
    assert!(!s.is_open());
}

// ---------------------------------------------------------------------------
// Mobile carousel
// ---------------------------------------------------------------------------

#[test]
fn test_mobile_settle_and_dots() {
    let mut s = shell(4, 0, PresentationMode::MobileCarousel);
    let mobile = s.as_mobile_mut().unwrap();
    let nav = mobile.on_scroll_settle(690.0, 360.0);
    assert_eq!(nav.index, 2);
    assert_eq!(mobile.dots(), vec![false, false, true, false]);
    assert_eq!(mobile.scroll_offset(360.0), 720.0);

    mobile.go_to(0);
    assert_eq!(mobile.dots(), vec![true, false, false, false]);
    assert_eq!(mobile.scroll_offset(360.0), 0.0);
}

#[test]
fn test_mobile_settle_emits_index() {
    let (tx, rx) = mpsc::channel::<ViewerEvent>();
    let mut s = ViewerShell::new(
        image_set(3),
        0,
        PresentationMode::MobileCarousel,
        &ViewerConfig::default(),
    )
    .unwrap()
    .with_observer(Box::new(tx));
    let mobile = s.as_mobile_mut().unwrap();
    mobile.on_scroll_settle(10.0, 300.0);
    mobile.on_scroll_settle(300.0, 300.0);
    assert_eq!(
        rx.try_iter().collect::<Vec<_>>(),
        vec![ViewerEvent::IndexChanged(1)]
    );
}

#[test]
fn test_mode_accessors_match_variant() {
    let mut s = shell(2, 0, PresentationMode::Modal);
    assert_eq!(s.mode(), PresentationMode::Modal);
    assert!(s.as_inline().is_none() && s.as_mobile().is_none());

    s.as_modal_mut().unwrap().open(1);
    assert!(s.as_modal().unwrap().is_open());
    assert!(s.is_open());
    assert_eq!(s.active_index(), 1);
}
