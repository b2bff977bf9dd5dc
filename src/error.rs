//! Error types used by the turn order and scheduler.
//!
//! All fallible operations return [`SchedulerError`]. Every variant represents
//! a programming error in the hosting layer (inserting a duplicate actor,
//! reordering a frozen round), not a recoverable runtime condition: the crate
//! performs no I/O and has no transient failure modes.
//!
//! The type provides helper methods (`as_label`, `as_message`) for
//! logging/metrics, mirroring how events are labelled elsewhere in the crate.

use thiserror::Error;

/// # Errors produced by turn-order mutation and traversal.
///
/// These surface collaborator bugs synchronously instead of being absorbed;
/// the order is guaranteed to be left unchanged by a failed operation.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// The actor is already part of the turn order (duplicates are forbidden).
    #[error("actor {name:?} is already in the turn order")]
    AlreadyPresent {
        /// Name of the offending actor.
        name: String,
    },

    /// The actor is not part of the turn order.
    #[error("actor {name:?} is not in the turn order")]
    NotFound {
        /// Name of the offending actor.
        name: String,
    },

    /// The actor is masked by a pending removal; it cannot be reordered until
    /// the next advance finalizes the removal.
    #[error("actor {name:?} has a removal pending and cannot be updated")]
    RemovalPending {
        /// Name of the offending actor.
        name: String,
    },

    /// Reordering was requested while a round is open and the configuration
    /// forbids mid-round priority edits.
    #[error("priority edits are not allowed while a round is in progress")]
    RoundInProgress,

    /// An advance was requested on an order with no actors.
    #[error("the turn order is empty")]
    EmptyOrder,
}

impl SchedulerError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use turnwheel::SchedulerError;
    ///
    /// let err = SchedulerError::EmptyOrder;
    /// assert_eq!(err.as_label(), "empty_order");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            SchedulerError::AlreadyPresent { .. } => "already_present",
            SchedulerError::NotFound { .. } => "not_found",
            SchedulerError::RemovalPending { .. } => "removal_pending",
            SchedulerError::RoundInProgress => "round_in_progress",
            SchedulerError::EmptyOrder => "empty_order",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            SchedulerError::AlreadyPresent { name } => format!("duplicate actor: {name}"),
            SchedulerError::NotFound { name } => format!("unknown actor: {name}"),
            SchedulerError::RemovalPending { name } => format!("removal pending: {name}"),
            SchedulerError::RoundInProgress => "round in progress".to_string(),
            SchedulerError::EmptyOrder => "empty order".to_string(),
        }
    }
}
