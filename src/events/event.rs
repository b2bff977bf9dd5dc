//! # Lifecycle events emitted by the turn scheduler.
//!
//! The [`EventKind`] enum classifies event types across two categories:
//! - **Turn events**: a single actor's turn beginning or ending
//! - **Round/order events**: round boundaries and membership changes
//!
//! The [`Event`] struct carries additional metadata such as the timestamp,
//! actor name, and round number.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Within one advance, `TurnEnded` for the outgoing actor is
//! always sequenced before `TurnStarted` for the incoming one; `RoundStarting`
//! precedes the first `TurnStarted` of its round, and `RoundEnded` precedes the
//! following round's `RoundStarting`.
//!
//! ## Example
//! ```rust
//! use turnwheel::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::TurnStarted)
//!     .with_actor("goblin")
//!     .with_round(3);
//!
//! assert_eq!(ev.kind, EventKind::TurnStarted);
//! assert_eq!(ev.actor.as_deref(), Some("goblin"));
//! assert_eq!(ev.round, Some(3));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of scheduler lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Turn events ===
    /// An actor's turn has begun.
    ///
    /// Sets:
    /// - `actor`: the acting actor's name
    /// - `round`: the round the turn belongs to
    TurnStarted,

    /// An actor's turn has ended.
    ///
    /// Sets:
    /// - `actor`: the outgoing actor's name
    /// - `round`: the round the turn belonged to
    TurnEnded,

    // === Round / order events ===
    /// A new round is starting. Fired before the round's first `TurnStarted`.
    ///
    /// Sets:
    /// - `round`: the round number (1-based, monotonically increasing)
    RoundStarting,

    /// The round has completed: the cursor ran past the last actor.
    ///
    /// Sets:
    /// - `round`: the round number that just closed
    RoundEnded,

    /// Order membership or positioning changed (insert, remove, priority edit).
    ///
    /// Sets:
    /// - `actor`: the affected actor's name, when a single actor is involved
    OrderChanged,
}

impl EventKind {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            EventKind::TurnStarted => "turn_started",
            EventKind::TurnEnded => "turn_ended",
            EventKind::RoundStarting => "round_starting",
            EventKind::RoundEnded => "round_ended",
            EventKind::OrderChanged => "order_changed",
        }
    }
}

/// A single scheduler lifecycle event with metadata.
#[derive(Debug, Clone)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,
    /// Name of the actor involved, if applicable.
    pub actor: Option<Arc<str>>,
    /// Round number the event belongs to, if applicable.
    pub round: Option<u64>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next
    /// sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            actor: None,
            round: None,
        }
    }

    /// Attaches an actor name.
    #[inline]
    pub fn with_actor(mut self, actor: impl Into<Arc<str>>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Attaches a round number.
    #[inline]
    pub fn with_round(mut self, round: u64) -> Self {
        self.round = Some(round);
        self
    }
}
