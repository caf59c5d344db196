use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn drop_runs_release_once() {
    let released = Rc::new(Cell::new(0));
    let counter = Rc::clone(&released);
    let sub = Subscription::new(move || counter.set(counter.get() + 1));
    assert_eq!(released.get(), 0);
    drop(sub);
    assert_eq!(released.get(), 1);
}

#[test]
fn moving_a_subscription_does_not_release_it() {
    let released = Rc::new(Cell::new(false));
    let flag = Rc::clone(&released);
    let sub = Subscription::new(move || flag.set(true));
    let mut slot = Some(sub);
    assert!(!released.get());
    slot.take();
    assert!(released.get());
}

#[test]
fn noop_is_safe_to_drop() {
    drop(Subscription::noop());
}

#[test]
fn debug_reports_activity() {
    assert_eq!(format!("{:?}", Subscription::noop()), "Subscription { active: false }");
    assert_eq!(format!("{:?}", Subscription::new(|| {})), "Subscription { active: true }");
}
