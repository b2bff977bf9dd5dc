//! # Priority-edit policies for open rounds.
//!
//! [`PriorityEditPolicy`] determines what a call to
//! [`update_priority`](crate::TurnScheduler::update_priority) does when a round
//! is in progress.
//!
//! - [`PriorityEditPolicy::Reorder`] the order re-sorts immediately; whoever is
//!   acting keeps acting (default).
//! - [`PriorityEditPolicy::EndTurn`] like `Reorder`, but when the edited actor
//!   *is* the one currently acting, its turn ends immediately so the rest of
//!   the round runs under the updated order.
//! - [`PriorityEditPolicy::Forbid`] priority edits are rejected while a round
//!   is open.
//!
//! ## Choosing the right policy
//!
//! **Initiative can shift mid-round, acting actor finishes its move**:
//! ```text
//! PriorityEditPolicy::Reorder   → edit lands, cursor is untouched
//! ```
//!
//! **A slowed/hasted actor must not keep its old slot**:
//! ```text
//! PriorityEditPolicy::EndTurn   → editing the acting actor ends its turn;
//!                                 editing anyone else behaves like Reorder
//! ```
//!
//! **Initiative is locked once a round begins**:
//! ```text
//! PriorityEditPolicy::Forbid    → update_priority → Err(RoundInProgress)
//! ```

/// Policy controlling how priority edits interact with an open round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PriorityEditPolicy {
    /// Re-sort immediately; the acting actor keeps acting (default).
    #[default]
    Reorder,
    /// Re-sort immediately; if the edited actor is the acting one, force a
    /// single advance so it does not play on under an order it no longer
    /// belongs to at that position.
    EndTurn,
    /// Reject edits while a round is open with
    /// [`SchedulerError::RoundInProgress`](crate::SchedulerError::RoundInProgress).
    Forbid,
}
