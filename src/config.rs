//! # Scheduler configuration.
//!
//! Provides [`SchedulerConfig`], the centralized settings for the turn
//! scheduler.
//!
//! Config is consumed once, at construction:
//! `SchedulerBuilder::new(config) ... .build()`.
//!
//! ## Field semantics
//! - `auto_start`: request the first turn from [`activate`](crate::TurnScheduler::activate)
//! - `auto_loop`: start the next round as soon as one completes
//! - `freeze_round_order`: lock a round's membership/order once it begins
//! - `priority_edit`: what `update_priority` does while a round is open

use crate::policies::PriorityEditPolicy;

/// Configuration for a [`TurnScheduler`](crate::TurnScheduler).
///
/// Defines:
/// - **Activation behavior**: whether the first round starts by itself
/// - **Round chaining**: whether rounds restart without an external trigger
/// - **Mutation windows**: how mid-round edits are treated
///
/// ## Notes
/// All fields are public; construct with struct-update syntax over
/// [`Default`] to set only what you need.
#[derive(Clone, Copy, Debug)]
pub struct SchedulerConfig {
    /// Begin the first round automatically when the host calls
    /// [`activate`](crate::TurnScheduler::activate).
    ///
    /// With `false`, `activate` is inert and the host triggers the first turn
    /// itself via [`request_next_turn`](crate::TurnScheduler::request_next_turn).
    pub auto_start: bool,

    /// Begin a new round automatically when one ends.
    ///
    /// - `true` → `RoundEnded` is immediately followed by the next round's
    ///   `RoundStarting`/`TurnStarted`, inside the same guarded advance
    /// - `false` → after `RoundEnded` the scheduler idles (`current()` is
    ///   `None`) until the next external request
    pub auto_loop: bool,

    /// Freeze a round's membership and order once it begins.
    ///
    /// - `false` → the live order drives the round: inserts take effect
    ///   immediately, possibly within the current round
    /// - `true` → inserts made while a round is open are staged and join when
    ///   the round closes; priority edits are rejected with
    ///   [`RoundInProgress`](crate::SchedulerError::RoundInProgress) while the
    ///   round is open. Removals always apply - a departed actor never acts.
    pub freeze_round_order: bool,

    /// How a priority edit interacts with an open round.
    ///
    /// See [`PriorityEditPolicy`]; ignored while no round is open (edits
    /// between rounds always just reorder).
    pub priority_edit: PriorityEditPolicy,
}

impl Default for SchedulerConfig {
    /// Default configuration:
    ///
    /// - `auto_start = false` (the host requests the first turn)
    /// - `auto_loop = true` (rounds chain seamlessly)
    /// - `freeze_round_order = false` (live order)
    /// - `priority_edit = PriorityEditPolicy::Reorder`
    fn default() -> Self {
        Self {
            auto_start: false,
            auto_loop: true,
            freeze_round_order: false,
            priority_edit: PriorityEditPolicy::default(),
        }
    }
}
