//! # Ordered event fan-out to multiple subscribers.
//!
//! Provides [`SubscriberSet`] — delivers each event to every registered
//! subscriber, synchronously, in subscription order.
//!
//! ## Rules
//! - **Deterministic ordering**: subscriber A registered before subscriber B
//!   sees every event before B does.
//! - **Re-entrancy safe**: `emit()` iterates a snapshot of the registry, so a
//!   handler may register further subscribers without invalidating the
//!   in-flight fan-out (new subscribers start receiving from the next event).
//! - **No isolation**: delivery is on the caller's stack; a panicking
//!   subscriber propagates to the caller like any other callback.

use std::cell::RefCell;
use std::rc::Rc;

use crate::events::Event;
use crate::subscribers::Subscribe;

/// Ordered, synchronous fan-out set for scheduler subscribers.
#[derive(Default)]
pub struct SubscriberSet {
    subs: RefCell<Vec<Rc<dyn Subscribe>>>,
}

impl SubscriberSet {
    /// Creates a set with the given initial subscribers.
    pub fn new(subscribers: Vec<Rc<dyn Subscribe>>) -> Self {
        Self {
            subs: RefCell::new(subscribers),
        }
    }

    /// Appends a subscriber; it receives events emitted after registration.
    pub fn add(&self, subscriber: Rc<dyn Subscribe>) {
        self.subs.borrow_mut().push(subscriber);
    }

    /// Returns the number of registered subscribers.
    pub fn len(&self) -> usize {
        self.subs.borrow().len()
    }

    /// Returns `true` when no subscribers are registered.
    pub fn is_empty(&self) -> bool {
        self.subs.borrow().is_empty()
    }

    /// Delivers the event to every subscriber in subscription order.
    ///
    /// The registry is snapshotted up front: handlers that call
    /// [`SubscriberSet::add`] mid-delivery take effect from the next emit.
    pub fn emit(&self, event: &Event) {
        let snapshot: Vec<Rc<dyn Subscribe>> = self.subs.borrow().clone();
        for sub in snapshot {
            sub.on_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;

    struct Recorder {
        tag: &'static str,
        seen: Rc<RefCell<Vec<String>>>,
    }

    impl Subscribe for Recorder {
        fn on_event(&self, event: &Event) {
            self.seen
                .borrow_mut()
                .push(format!("{}:{}", self.tag, event.kind.as_label()));
        }
    }

    #[test]
    fn test_emit_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let set = SubscriberSet::new(vec![
            Rc::new(Recorder {
                tag: "first",
                seen: seen.clone(),
            }),
            Rc::new(Recorder {
                tag: "second",
                seen: seen.clone(),
            }),
        ]);

        set.emit(&Event::new(EventKind::RoundStarting));

        assert_eq!(
            *seen.borrow(),
            vec!["first:round_starting", "second:round_starting"]
        );
    }

    #[test]
    fn test_add_during_emit_applies_to_next_event() {
        struct AddsAnother {
            set: Rc<SubscriberSet>,
            seen: Rc<RefCell<Vec<String>>>,
        }

        impl Subscribe for AddsAnother {
            fn on_event(&self, _event: &Event) {
                self.set.add(Rc::new(Recorder {
                    tag: "late",
                    seen: self.seen.clone(),
                }));
            }
        }

        let seen = Rc::new(RefCell::new(Vec::new()));
        let set = Rc::new(SubscriberSet::default());
        set.add(Rc::new(AddsAnother {
            set: set.clone(),
            seen: seen.clone(),
        }));

        set.emit(&Event::new(EventKind::RoundStarting));
        assert!(seen.borrow().is_empty(), "late sub must not see its own trigger");

        set.emit(&Event::new(EventKind::RoundEnded));
        assert_eq!(*seen.borrow(), vec!["late:round_ended"]);
    }
}
