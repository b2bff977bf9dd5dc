//! # Event subscriber trait.
//!
//! Provides [`Subscribe`], the extension point for plugging custom event
//! handlers into the scheduler.
//!
//! Handlers run synchronously on the scheduler's stack, in subscription order.
//! A handler that needs to advance the turn may call back into the scheduler;
//! the re-entrancy guard turns the nested request into a deferred one rather
//! than an interleaved notification sequence.
//!
//! ## Example
//! ```rust
//! use turnwheel::{Subscribe, Event, EventKind};
//!
//! struct Metrics;
//!
//! impl Subscribe for Metrics {
//!     fn on_event(&self, ev: &Event) {
//!         if matches!(ev.kind, EventKind::TurnStarted) {
//!             // bump a counter, etc.
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str { "metrics" }  // prefer short, descriptive names
//! }
//! ```

use crate::events::Event;

/// Event subscriber for scheduler observability.
///
/// ### Implementation requirements
/// - Return promptly; the scheduler (and the host's turn flow) is blocked
///   until `on_event` returns.
/// - Handle errors internally; there is no error channel for subscribers.
pub trait Subscribe {
    /// Processes a single event.
    ///
    /// Called synchronously from inside the scheduler operation that produced
    /// the event. Events are delivered in emission order.
    fn on_event(&self, event: &Event);

    /// Returns the subscriber name used in logs.
    ///
    /// Prefer short, descriptive names (e.g., "metrics", "audit", "ui").
    /// The default uses `type_name::<Self>()`, which can be verbose - override
    /// it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
