//! Debounce: a burst of calls collapses into one call with the latest value.
//!
//! [`DebounceSlot`] holds the bookkeeping, [`Debouncer`] adds the browser timer.

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Latest pending value plus the generation that is allowed to fire it
#[derive(Debug)]
pub struct DebounceSlot<T> {
    pending: Option<T>,
    generation: u64,
}

impl<T> Default for DebounceSlot<T> {
    fn default() -> Self {
        Self {
            pending: None,
            generation: 0,
        }
    }
}

impl<T> DebounceSlot<T> {
    /// Replaces the pending value; returns the generation of the new timer
    pub fn push(&mut self, value: T) -> u64 {
        self.generation += 1;
        self.pending = Some(value);
        self.generation
    }

    /// Takes the value if `generation` is still the latest push
    pub fn fire(&mut self, generation: u64) -> Option<T> {
        if generation != self.generation {
            return None;
        }
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Timer-backed debouncer. Dropping it cancels the pending call.
pub struct Debouncer<T: 'static> {
    delay_ms: u32,
    slot: Rc<RefCell<DebounceSlot<T>>>,
    on_fire: Rc<dyn Fn(T)>,
    timer: Option<Timeout>,
}

impl<T: 'static> Debouncer<T> {
    pub fn new(delay_ms: u32, on_fire: impl Fn(T) + 'static) -> Self {
        Self {
            delay_ms,
            slot: Rc::new(RefCell::new(DebounceSlot::default())),
            on_fire: Rc::new(on_fire),
            timer: None,
        }
    }

    /// Re-arms the timer with `value`; the previous timer is dropped (cleared)
    pub fn call(&mut self, value: T) {
        let fire = self.arm(value);
        self.timer = Some(Timeout::new(self.delay_ms, fire));
    }

    /// Stores `value` and returns the timer body. The body fires only if no
    /// later push, `cancel()` or drop happened in between.
    fn arm(&mut self, value: T) -> impl FnOnce() + 'static {
        let generation = self.slot.borrow_mut().push(value);
        let slot = Rc::clone(&self.slot);
        let on_fire = Rc::clone(&self.on_fire);
        move || {
            // borrow ends before the callback runs: on_fire may call() again
            let value = slot.borrow_mut().fire(generation);
            if let Some(value) = value {
                on_fire(value);
            }
        }
    }

    pub fn cancel(&mut self) {
        // dropping a gloo Timeout clears it
        self.timer = None;
        self.slot.borrow_mut().cancel();
    }
}

impl<T: 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_push_fires() {
        let mut slot = DebounceSlot::default();
        let first = slot.push(10);
        let second = slot.push(20);
        let third = slot.push(30);

        assert_eq!(slot.fire(first), None);
        assert_eq!(slot.fire(second), None);
        assert_eq!(slot.fire(third), Some(30));
        // fires once
        assert_eq!(slot.fire(third), None);
    }

    #[test]
    fn test_cancel_drops_pending_value() {
        let mut slot = DebounceSlot::default();
        let generation = slot.push("query");
        assert!(slot.is_pending());
        slot.cancel();
        assert!(!slot.is_pending());
        assert_eq!(slot.fire(generation), None);
    }

    #[test]
    fn test_push_after_cancel_fires_again() {
        let mut slot = DebounceSlot::default();
        slot.push(1);
        slot.cancel();
        let generation = slot.push(2);
        assert_eq!(slot.fire(generation), Some(2));
    }

    fn recording() -> (Rc<RefCell<Vec<i32>>>, Debouncer<i32>) {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&fired);
        let debouncer = Debouncer::new(100, move |value| sink.borrow_mut().push(value));
        (fired, debouncer)
    }

    #[test]
    fn test_debouncer_fires_latest_value_once() {
        let (fired, mut debouncer) = recording();
        let stale = debouncer.arm(1);
        let latest = debouncer.arm(2);
        stale();
        latest();
        assert_eq!(*fired.borrow(), vec![2]);
    }

    #[test]
    fn test_debouncer_cancel_releases_pending_call() {
        let (fired, mut debouncer) = recording();
        let pending = debouncer.arm(7);
        debouncer.cancel();
        pending();
        assert!(fired.borrow().is_empty());
    }

    #[test]
    fn test_debouncer_drop_releases_pending_call() {
        let (fired, mut debouncer) = recording();
        let pending = debouncer.arm(7);
        drop(debouncer);
        pending();
        assert!(fired.borrow().is_empty());
    }
}
