//! # Actor trait and priority bound.
//!
//! A participant exposes a stable name, a comparable priority, and two
//! zero-argument lifecycle hooks. The scheduler calls the hooks as the cursor
//! enters and leaves the actor; everything else about the participant lives in
//! the hosting layer.

use std::fmt;
use std::rc::Rc;

/// Bound for priority values: totally ordered, cheaply copyable, debuggable.
///
/// Blanket-implemented; any `Ord + Copy + Debug + 'static` type qualifies
/// (`i32`, `u8`, `std::cmp::Reverse<u32>`, tuples, ...). Higher values act
/// earlier.
pub trait Priority: Ord + Copy + fmt::Debug + 'static {}

impl<T: Ord + Copy + fmt::Debug + 'static> Priority for T {}

/// # A turn-taking participant.
///
/// An `Actor` has a stable [`name`](Actor::name), a [`priority`](Actor::priority)
/// that ranks it within the round (higher acts earlier), and two lifecycle
/// hooks with empty default bodies.
///
/// Hooks are expected to return promptly: any long-running per-turn behavior
/// belongs to the hosting layer, which defers its next
/// [`request_next_turn`](crate::TurnScheduler::request_next_turn) until it is
/// done.
///
/// # Example
/// ```
/// use turnwheel::Actor;
///
/// struct Goblin;
///
/// impl Actor<i32> for Goblin {
///     fn name(&self) -> &str { "goblin" }
///     fn priority(&self) -> i32 { 3 }
///
///     fn on_turn_start(&self) {
///         // queue up an attack...
///     }
/// }
/// ```
pub trait Actor<P: Priority> {
    /// Returns a stable, human-readable actor name (used in events and logs).
    fn name(&self) -> &str;

    /// Returns the actor's current priority.
    ///
    /// The scheduler re-reads this on insertion and on
    /// [`update_priority`](crate::TurnScheduler::update_priority); changing the
    /// underlying value without telling the scheduler leaves the order stale.
    fn priority(&self) -> P;

    /// The actor's turn is starting.
    fn on_turn_start(&self) {}

    /// The actor's turn is ending.
    fn on_turn_end(&self) {}
}

/// Shared actor handle used throughout the scheduler.
pub type ActorRef<P> = Rc<dyn Actor<P>>;
