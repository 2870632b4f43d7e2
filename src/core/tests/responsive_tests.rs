use crate::core::responsive::{
    Breakpoint, ResponsiveManager, DESKTOP_MIN_WIDTH, TABLET_MIN_WIDTH,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[test]
fn test_classification_boundaries() {
    assert_eq!(Breakpoint::from_width(0), Breakpoint::Mobile);
    assert_eq!(Breakpoint::from_width(767), Breakpoint::Mobile);
    assert_eq!(Breakpoint::from_width(768), Breakpoint::Tablet);
    assert_eq!(Breakpoint::from_width(1023), Breakpoint::Tablet);
    assert_eq!(Breakpoint::from_width(1024), Breakpoint::Desktop);
}

#[test]
fn test_classification_is_total_and_monotonic() {
    // Every width classifies, and wider never maps to a narrower breakpoint
    let widths = [0, 1, 320, 480, 767, 768, 800, 1023, 1024, 1440, 2560, 3840];

    let mut previous = Breakpoint::Mobile;
    for width in widths {
        let bp = Breakpoint::from_width(width);
        assert!(
            bp >= previous,
            "classification went backwards at width {}",
            width
        );
        previous = bp;
    }
}

#[test]
fn test_min_width_matches_thresholds() {
    assert_eq!(Breakpoint::Mobile.min_width(), 0);
    assert_eq!(Breakpoint::Tablet.min_width(), TABLET_MIN_WIDTH);
    assert_eq!(Breakpoint::Desktop.min_width(), DESKTOP_MIN_WIDTH);
}

#[test]
fn test_config_lookup_is_consistent() {
    for bp in [Breakpoint::Mobile, Breakpoint::Tablet, Breakpoint::Desktop] {
        let config = bp.config();
        assert_eq!(config.name, bp.as_str());
        assert_eq!(config.min_width, bp.min_width());
    }
}

#[test]
fn test_defaults_to_desktop() {
    let manager = ResponsiveManager::new();
    assert!(manager.is_desktop());
    assert_eq!(manager.current_breakpoint(), Breakpoint::Desktop);
}

#[test]
fn test_resize_updates_breakpoint() {
    let manager = ResponsiveManager::new();

    manager.observe_resize(600);
    assert!(manager.is_mobile());

    manager.observe_resize(900);
    assert!(manager.is_tablet());

    manager.observe_resize(1400);
    assert!(manager.is_desktop());
}

#[test]
fn test_hysteresis_ignores_small_deltas() {
    let manager = ResponsiveManager::new();
    manager.observe_resize(1000);
    assert!(manager.is_tablet());

    let fired = Rc::new(Cell::new(0));
    let fired_clone = fired.clone();
    manager.register_callback(move |_| fired_clone.set(fired_clone.get() + 1));

    // Delta 30 is below the 50 px filter: no re-check even though 1030
    // would cross into desktop
    manager.observe_resize(1030);
    assert!(manager.is_tablet(), "insignificant resize must not re-classify");
    assert_eq!(fired.get(), 0, "insignificant resize must not notify");

    // Delta 60 from the last recorded width (1000) passes the filter
    manager.observe_resize(1060);
    assert!(manager.is_desktop());
    assert_eq!(fired.get(), 1);
}

#[test]
fn test_same_breakpoint_never_notifies() {
    let manager = ResponsiveManager::new();
    manager.observe_resize(500);

    let fired = Rc::new(Cell::new(0));
    let fired_clone = fired.clone();
    manager.register_callback(move |_| fired_clone.set(fired_clone.get() + 1));

    // All mobile, all significant deltas
    manager.observe_resize(400);
    manager.observe_resize(300);
    manager.observe_resize(600);

    assert_eq!(fired.get(), 0, "repeated same-breakpoint resizes must stay silent");
}

#[test]
fn test_callback_receives_new_breakpoint() {
    let manager = ResponsiveManager::new();
    manager.observe_resize(1200);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_clone = seen.clone();
    manager.register_callback(move |bp| seen_clone.borrow_mut().push(bp));

    manager.observe_resize(800);
    manager.observe_resize(500);

    assert_eq!(
        *seen.borrow(),
        vec![Breakpoint::Tablet, Breakpoint::Mobile]
    );
}

#[test]
fn test_callbacks_fire_in_registration_order() {
    let manager = ResponsiveManager::new();
    manager.observe_resize(1200);

    let order = Rc::new(RefCell::new(Vec::new()));

    for name in ["A", "B", "C"] {
        let order_clone = order.clone();
        manager.register_callback(move |_| order_clone.borrow_mut().push(name));
    }

    manager.observe_resize(600);

    assert_eq!(*order.borrow(), vec!["A", "B", "C"]);
}

#[test]
fn test_panicking_callback_is_isolated() {
    let manager = ResponsiveManager::new();
    manager.observe_resize(1200);

    let order = Rc::new(RefCell::new(Vec::new()));

    let order_a = order.clone();
    manager.register_callback(move |_| order_a.borrow_mut().push("A"));

    manager.register_callback(|_| panic!("broken panel"));

    let order_c = order.clone();
    manager.register_callback(move |_| order_c.borrow_mut().push("C"));

    manager.observe_resize(600);

    // A ran, B panicked and was swallowed, C still ran
    assert_eq!(*order.borrow(), vec!["A", "C"]);
    // State was updated before dispatch, so the panic cannot corrupt it
    assert!(manager.is_mobile());

    // The manager keeps working after a panicked observer
    manager.observe_resize(1200);
    assert_eq!(*order.borrow(), vec!["A", "C", "A", "C"]);
}

#[test]
fn test_register_callback_keeps_duplicates() {
    let manager = ResponsiveManager::new();

    let fired = Rc::new(Cell::new(0));
    for _ in 0..3 {
        let fired_clone = fired.clone();
        manager.register_callback(move |_| fired_clone.set(fired_clone.get() + 1));
    }

    assert_eq!(manager.callback_count(), 3);

    manager.observe_resize(500);
    assert_eq!(fired.get(), 3, "no deduplication: all three fire");
}

#[test]
fn test_derived_getters_project_current_config() {
    let manager = ResponsiveManager::new();
    manager.observe_resize(500);

    let config = Breakpoint::Mobile.config();
    assert_eq!(manager.sidebar_width(), config.sidebar_width);
    assert_eq!(manager.font_scale(), config.font_scale);
    assert_eq!(manager.button_padding(), config.button_padding);
    assert_eq!(manager.card_padding(), config.card_padding);
}

#[test]
fn test_breakpoint_for_does_not_mutate() {
    let manager = ResponsiveManager::new();
    manager.observe_resize(1200);

    assert_eq!(manager.breakpoint_for(400), Breakpoint::Mobile);
    assert!(manager.is_desktop(), "pure classification must not change state");
}
