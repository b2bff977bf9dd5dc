//! # turnwheel
//!
//! **Turnwheel** is a round-robin turn scheduler for turn-based games and
//! simulations.
//!
//! It orders a dynamic set of participants ("actors") by priority, cycles
//! through them one turn at a time within a round, and stays consistent while
//! the order is mutated mid-round - including from inside its own
//! notification callbacks. The crate is designed as a building block: it
//! schedules, and leaves rendering, actor lifetime, and per-turn behavior to
//! the host.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │   ActorRef   │   │   ActorRef   │   │   ActorRef   │
//!     │ (priority 3) │   │ (priority 2) │   │ (priority 1) │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼ insert/remove/update_priority       ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │  TurnScheduler (round/turn state machine)                     │
//! │  - PriorityOrder (sorted list + cursor + deferred removal)    │
//! │  - re-entrancy guard (advancing / pending flags)              │
//! │  - round bookkeeping (count, open/closed, staged inserts)     │
//! └──────┬──────────────────────────────────────────────┬─────────┘
//!        │ actor hooks                                  │ events
//!        ▼                                              ▼
//!   on_turn_start() / on_turn_end()        ┌────────────────────────┐
//!   (per actor, as the cursor              │     SubscriberSet      │
//!    enters / leaves it)                   │ (ordered, synchronous) │
//!                                          └───┬────────────────┬───┘
//!                                              ▼                ▼
//!                                          LogWriter      custom subs
//! ```
//!
//! ### Turn lifecycle
//! ```text
//! request_next_turn()
//!   ├─► outgoing actor:  on_turn_end() ─► TurnEnded
//!   ├─► no open round:   round += 1    ─► RoundStarting
//!   ├─► cursor moves     (marked node physically recycled here)
//!   ├─► incoming actor:  on_turn_start() ─► TurnStarted
//!   └─► cursor off the end: RoundEnded ─► auto_loop? next round opens
//!
//! remove(current actor)
//!   └─► actor is masked (current() = None, contains() = false),
//!       node recycled on the next advance ─► the round never stalls
//! ```
//!
//! ## Features
//! | Area              | Description                                                        | Key types / traits                        |
//! |-------------------|--------------------------------------------------------------------|-------------------------------------------|
//! | **Actors**        | Participants ranked by priority, with turn hooks.                  | [`Actor`], [`ActorRef`], [`ActorFn`]      |
//! | **Order**         | Priority-sorted sequence with cursor and deferred removal.         | [`PriorityOrder`]                         |
//! | **Scheduling**    | Turn/round state machine, re-entrancy-safe advance requests.       | [`TurnScheduler`], [`SchedulerBuilder`]   |
//! | **Subscriber API**| Observe lifecycle events (logging, UI, custom).                    | [`Subscribe`], [`SubscriberSet`]          |
//! | **Policies**      | Mid-round priority-edit behavior.                                  | [`PriorityEditPolicy`]                    |
//! | **Errors**        | Typed errors for misuse by the hosting layer.                      | [`SchedulerError`]                        |
//! | **Configuration** | Centralize round behavior (auto start/loop, frozen rounds).        | [`SchedulerConfig`]                       |
//!
//! ## Example
//! ```rust
//! use std::rc::Rc;
//! use turnwheel::{Actor, ActorFn, LogWriter, SchedulerBuilder, SchedulerConfig};
//!
//! let cfg = SchedulerConfig {
//!     auto_loop: false,
//!     ..SchedulerConfig::default()
//! };
//!
//! let sched = SchedulerBuilder::<i32>::new(cfg)
//!     .with_subscriber(Rc::new(LogWriter))
//!     .build();
//!
//! // Highest priority acts first; ties keep insertion order.
//! sched.insert(ActorFn::new("knight", 3).rc())?;
//! sched.insert(ActorFn::new("wolf", 1).rc())?;
//! sched.insert(ActorFn::new("archer", 2).rc())?;
//!
//! sched.request_next_turn();
//! assert_eq!(sched.current().unwrap().name(), "knight");
//!
//! sched.request_next_turn();
//! assert_eq!(sched.current().unwrap().name(), "archer");
//!
//! sched.request_next_turn();
//! sched.request_next_turn(); // runs off the end: round complete
//! assert!(sched.current().is_none());
//! # Ok::<(), turnwheel::SchedulerError>(())
//! ```
//!
//! ## Threading
//! The model is single-threaded cooperative re-entrancy, not parallelism:
//! handles are `Rc`, state is `Cell`/`RefCell`, and nothing is `Send`. A
//! notification handler may call back into the scheduler; a pair of guard
//! flags linearizes nested advance requests instead of a lock.

mod actors;
mod config;
mod core;
mod error;
mod events;
mod order;
mod policies;
mod subscribers;

// ---- Public re-exports ----

pub use actors::{Actor, ActorFn, ActorRef, Priority};
pub use config::SchedulerConfig;
pub use core::{SchedulerBuilder, TurnScheduler};
pub use error::SchedulerError;
pub use events::{Event, EventKind};
pub use order::PriorityOrder;
pub use policies::PriorityEditPolicy;
pub use subscribers::{LogWriter, Subscribe, SubscriberSet};
