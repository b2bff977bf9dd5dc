//! # Example: priority_shuffle
//!
//! Re-roll every actor's initiative at each round boundary, the way a
//! roguelike might re-draw initiative per round.
//!
//! Demonstrates how to:
//! - Keep typed `ActorFn` handles next to the erased scheduler handles.
//! - Edit priorities from a `RoundEnded` handler (the round is already
//!   closed there, so edits are legal under every policy).
//!
//! ## Run
//! ```bash
//! cargo run --example priority_shuffle
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use rand::Rng;
use turnwheel::{
    Actor, ActorFn, ActorRef, Event, EventKind, SchedulerBuilder, SchedulerConfig, SchedulerError,
    Subscribe, TurnScheduler,
};

/// Re-rolls initiative for every actor when a round closes.
struct Shuffler {
    sched: RefCell<Option<Rc<TurnScheduler<i32>>>>,
    actors: Vec<Rc<ActorFn<i32>>>,
}

impl Subscribe for Shuffler {
    fn on_event(&self, event: &Event) {
        if event.kind != EventKind::RoundEnded {
            return;
        }
        let guard = self.sched.borrow();
        let Some(sched) = guard.as_ref() else { return };

        let mut rng = rand::rng();
        for actor in &self.actors {
            actor.set_priority(rng.random_range(1..=20));
            let handle: ActorRef<i32> = actor.clone();
            sched
                .update_priority(&handle)
                .expect("shuffled actor is in the order");
        }
    }

    fn name(&self) -> &'static str {
        "shuffler"
    }
}

fn main() -> Result<(), SchedulerError> {
    let cfg = SchedulerConfig {
        auto_loop: false,
        ..SchedulerConfig::default()
    };

    let actors = vec![
        Rc::new(ActorFn::new("rogue", 1)),
        Rc::new(ActorFn::new("mage", 2)),
        Rc::new(ActorFn::new("brute", 3)),
    ];

    let shuffler = Rc::new(Shuffler {
        sched: RefCell::new(None),
        actors: actors.clone(),
    });

    let sched = SchedulerBuilder::<i32>::new(cfg)
        .with_subscriber(shuffler.clone())
        .build();
    *shuffler.sched.borrow_mut() = Some(sched.clone());

    for actor in &actors {
        sched.insert(actor.clone())?;
    }

    for _ in 0..3 {
        sched.request_next_turn(); // opens the round
        print!("round {}:", sched.round_count());
        while let Some(current) = sched.current() {
            print!(" {}", current.name());
            sched.request_next_turn();
        }
        println!();
    }
    Ok(())
}
