//! # Example: basic_cycle
//!
//! Three actors take turns in priority order; the host drives every turn.
//!
//! Demonstrates how to:
//! - Build a scheduler with [`LogWriter`] attached.
//! - Insert actors with per-actor turn hooks.
//! - Drive a full round with `request_next_turn()`.
//!
//! ## Flow
//! ```text
//! main()
//!   ├─► SchedulerBuilder::new(cfg).with_subscriber(LogWriter).build()
//!   ├─► insert knight(3), wolf(1), archer(2)
//!   └─► request_next_turn() × 4
//!         ├─► knight acts   (highest priority)
//!         ├─► archer acts
//!         ├─► wolf acts
//!         └─► round complete → current() = None (auto_loop off)
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=debug cargo run --example basic_cycle
//! ```

use std::rc::Rc;

use turnwheel::{Actor, ActorFn, LogWriter, SchedulerBuilder, SchedulerConfig, SchedulerError};

fn main() -> Result<(), SchedulerError> {
    env_logger::init();

    // 1) One round at a time: the host decides when the next one starts.
    let cfg = SchedulerConfig {
        auto_loop: false,
        ..SchedulerConfig::default()
    };
    let sched = SchedulerBuilder::<i32>::new(cfg)
        .with_subscriber(Rc::new(LogWriter))
        .build();

    // 2) Register the party. Higher priority acts first.
    sched.insert(
        ActorFn::new("knight", 3)
            .on_turn_start(|| println!("knight: charge!"))
            .rc(),
    )?;
    sched.insert(
        ActorFn::new("wolf", 1)
            .on_turn_start(|| println!("wolf: howls"))
            .rc(),
    )?;
    sched.insert(
        ActorFn::new("archer", 2)
            .on_turn_start(|| println!("archer: looses an arrow"))
            .rc(),
    )?;

    // 3) Drive the round to completion.
    while {
        sched.request_next_turn();
        sched.current().is_some()
    } {
        let current = sched.current().expect("checked above");
        println!("  current = {}", current.name());
    }

    println!(
        "round {} complete; {} actors ready for the next one",
        sched.round_count(),
        sched.len()
    );
    Ok(())
}
