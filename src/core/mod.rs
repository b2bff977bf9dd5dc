//! Scheduler core: the round/turn state machine.
//!
//! This module contains the driving half of the crate. The public API is
//! [`TurnScheduler`], which layers round bookkeeping, lifecycle notifications,
//! and re-entrancy protection on top of
//! [`PriorityOrder`](crate::order::PriorityOrder), plus [`SchedulerBuilder`]
//! for construction.
//!
//! Internal modules:
//! - [`scheduler`]: turn/round state machine and the re-entrancy guard;
//! - [`builder`]: assembles config + subscribers into a shared scheduler handle.

mod builder;
mod scheduler;

pub use builder::SchedulerBuilder;
pub use scheduler::TurnScheduler;
