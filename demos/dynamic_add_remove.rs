//! # Example: dynamic_add_remove
//!
//! Mutate the order while a round is running.
//!
//! Demonstrates how to:
//! - Remove the acting actor mid-turn (deferred removal: it vanishes from
//!   queries at once, the round advances by itself).
//! - Insert a newcomer mid-round and watch it slot in by priority.
//!
//! ## Flow
//! ```text
//! main()
//!   ├─► insert goblin(5), orc(3), troll(1)
//!   ├─► request_next_turn()      → goblin acts
//!   ├─► remove(goblin)           → masked immediately, orc's turn begins
//!   ├─► insert(shaman, 4)        → joins the live order, ahead of the cursor
//!   └─► run the round out        → shaman leads the next round
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example dynamic_add_remove
//! ```

use std::rc::Rc;

use turnwheel::{Actor, ActorFn, ActorRef, SchedulerBuilder, SchedulerConfig, SchedulerError, TurnScheduler};

fn names(sched: &TurnScheduler<i32>) -> Vec<String> {
    sched
        .order_snapshot()
        .iter()
        .map(|a| a.name().to_string())
        .collect()
}

fn current_name(sched: &TurnScheduler<i32>) -> String {
    sched
        .current()
        .map(|a| a.name().to_string())
        .unwrap_or_else(|| "<none>".to_string())
}

fn main() -> Result<(), SchedulerError> {
    let cfg = SchedulerConfig {
        auto_loop: false,
        ..SchedulerConfig::default()
    };
    let sched = SchedulerBuilder::<i32>::new(cfg).build();

    let goblin: ActorRef<i32> = ActorFn::new("goblin", 5).rc();
    sched.insert(goblin.clone())?;
    sched.insert(ActorFn::new("orc", 3).rc())?;
    sched.insert(ActorFn::new("troll", 1).rc())?;
    println!("order: {:?}", names(&sched));

    sched.request_next_turn();
    println!("acting: {}", current_name(&sched));

    // The goblin flees mid-turn. It disappears from every query right away,
    // and the scheduler hands the orc its turn without another request.
    sched.remove(&goblin);
    println!("goblin removed; acting: {}", current_name(&sched));
    println!("order: {:?}", names(&sched));

    // A shaman joins the fight. Priority 4 slots in ahead of the orc, but
    // the cursor is already past that position, so it waits for next round.
    sched.insert(ActorFn::new("shaman", 4).rc())?;
    println!("shaman joined; order: {:?}", names(&sched));

    while sched.current().is_some() {
        sched.request_next_turn();
        println!("acting: {}", current_name(&sched));
    }

    println!("round over; next round order: {:?}", names(&sched));
    Ok(())
}
