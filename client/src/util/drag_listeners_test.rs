use std::cell::Cell;
use std::rc::Rc;

use super::*;

fn counting_remover(counter: &Rc<Cell<u32>>) -> Remover {
    let counter = Rc::clone(counter);
    Box::new(move || counter.set(counter.get() + 1))
}

#[test]
fn new_is_disarmed() {
    assert!(!DragListeners::new().is_armed());
}

#[test]
fn disarm_runs_each_remover_once() {
    let removed = Rc::new(Cell::new(0));
    let mut listeners = DragListeners::new();
    listeners.arm(vec![counting_remover(&removed), counting_remover(&removed)]);
    assert!(listeners.is_armed());

    listeners.disarm();
    listeners.disarm();

    assert_eq!(removed.get(), 2);
    assert!(!listeners.is_armed());
}

#[test]
fn rearm_removes_previous_gesture_listeners() {
    let first = Rc::new(Cell::new(0));
    let second = Rc::new(Cell::new(0));
    let mut listeners = DragListeners::new();
    listeners.arm(vec![counting_remover(&first)]);
    listeners.arm(vec![counting_remover(&second)]);
    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 0);
}

#[test]
fn drop_disarms() {
    let removed = Rc::new(Cell::new(0));
    {
        let mut listeners = DragListeners::new();
        listeners.arm(vec![counting_remover(&removed)]);
    }
    assert_eq!(removed.get(), 1);
}
