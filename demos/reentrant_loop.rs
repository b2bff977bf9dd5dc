//! # Example: reentrant_loop
//!
//! A subscriber that plays the game by itself: every `TurnStarted` handler
//! requests the next turn, and the scheduler linearizes the nested requests
//! into one clean sequence.
//!
//! Demonstrates how to:
//! - Hold a scheduler handle inside a subscriber.
//! - Re-enter `request_next_turn()` from a notification callback.
//! - Bound the run with a simple turn budget.
//!
//! ## Flow
//! ```text
//! main()
//!   ├─► build scheduler (auto_loop on), register AutoPlay subscriber
//!   ├─► insert hero(2), slime(1)
//!   └─► request_next_turn()            ← the only external request
//!         └─► TurnStarted(hero)
//!               └─► AutoPlay: request_next_turn()   (deferred, not nested)
//!         └─► TurnStarted(slime) ... rounds chain until the budget runs out
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example reentrant_loop
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use turnwheel::{
    Actor, ActorFn, Event, EventKind, SchedulerBuilder, SchedulerConfig, SchedulerError, Subscribe,
    TurnScheduler,
};

/// Requests the next turn from inside every TurnStarted, up to a budget.
struct AutoPlay {
    sched: RefCell<Option<Rc<TurnScheduler<i32>>>>,
    remaining: Cell<u32>,
}

impl Subscribe for AutoPlay {
    fn on_event(&self, event: &Event) {
        match event.kind {
            EventKind::TurnStarted => {
                if self.remaining.get() == 0 {
                    return;
                }
                self.remaining.set(self.remaining.get() - 1);
                if let Some(sched) = self.sched.borrow().as_ref() {
                    // Deferred by the re-entrancy guard; runs after this
                    // notification sequence completes.
                    sched.request_next_turn();
                }
            }
            EventKind::RoundStarting => println!("--- round {:?} ---", event.round),
            _ => {}
        }
    }

    fn name(&self) -> &'static str {
        "autoplay"
    }
}

fn main() -> Result<(), SchedulerError> {
    let autoplay = Rc::new(AutoPlay {
        sched: RefCell::new(None),
        remaining: Cell::new(6),
    });

    let sched = SchedulerBuilder::<i32>::new(SchedulerConfig::default())
        .with_subscriber(autoplay.clone())
        .build();
    *autoplay.sched.borrow_mut() = Some(sched.clone());

    sched.insert(
        ActorFn::new("hero", 2)
            .on_turn_start(|| println!("hero acts"))
            .rc(),
    )?;
    sched.insert(
        ActorFn::new("slime", 1)
            .on_turn_start(|| println!("slime acts"))
            .rc(),
    )?;

    // One external request; AutoPlay chains the rest.
    sched.request_next_turn();

    println!(
        "budget exhausted after round {}; acting: {:?}",
        sched.round_count(),
        sched.current().map(|a| a.name().to_string()),
    );
    Ok(())
}
