//! Scheduling policies.
//!
//! This module groups the knobs that control **what happens to the round in
//! flight** when the hosting layer edits the order underneath it.
//!
//! ## Contents
//! - [`PriorityEditPolicy`] how a priority change interacts with the acting actor
//!   (reorder / end-turn / forbid)
//!
//! ## Quick wiring
//! ```text
//! SchedulerConfig { priority_edit: PriorityEditPolicy, .. }
//!      └─► core::scheduler::TurnScheduler::update_priority uses it to decide:
//!           - reject the edit while a round is open, or
//!           - apply it and leave the cursor alone, or
//!           - apply it and force one advance when the edited actor is acting
//! ```
//!
//! ## Defaults
//! - `PriorityEditPolicy::Reorder` (recommended default; the acting actor is
//!   never interrupted by a reorder).

mod priority_edit;

pub use priority_edit::PriorityEditPolicy;
